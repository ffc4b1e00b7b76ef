//! Profit prediction page.
//!
//! The cost fields are summed client-side; the running total is shown
//! under the form and sent to the backend as `total_cost`.

use leptos::prelude::*;

use crate::components::bullet_list::BulletList;
use crate::components::detail_row::{DetailRow, text_or_fallback};
use crate::components::error_panel::ErrorPanel;
use crate::components::form_fields::{SelectField, TextField};
use crate::components::loading::LoadingIndicator;
use crate::components::notice::{ValidationNotice, show_notice};
use crate::net::types::ProfitPrediction;
use crate::state::options::{CROPS, REGIONS};
use crate::state::profit::{COST_LABELS, ProfitForm};
use crate::state::submit::SubmitState;

#[component]
pub fn ProfitPage() -> impl IntoView {
    let form = RwSignal::new(ProfitForm::default());
    let state = RwSignal::new(SubmitState::<ProfitPrediction>::default());
    let notice = RwSignal::new(None::<String>);

    let do_submit = move || {
        let snapshot = form.get();
        let missing = snapshot.missing_fields();
        if !missing.is_empty() {
            show_notice(notice, format!("Please fill in: {}.", missing.join(", ")));
            return;
        }
        #[cfg(feature = "hydrate")]
        crate::state::submit::submit(state, crate::net::api::predict_profit(snapshot.payload()));
        #[cfg(not(feature = "hydrate"))]
        let _ = snapshot;
    };

    let on_reset = move |_| {
        form.update(ProfitForm::reset);
        state.update(SubmitState::reset);
    };

    let on_retry = Callback::new(move |()| state.update(SubmitState::reset));

    let total = move || format!("₹{:.2}", form.get().total_cost());

    view! {
        <div class="page profit-page">
            <h1>"Profit Prediction"</h1>
            <p class="page__intro">
                "Estimate revenue, costs, and profit for the coming season."
            </p>

            <ValidationNotice message=notice/>

            <form
                class="tool-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    do_submit();
                }
            >
                <SelectField
                    label="Crop"
                    placeholder="Select a crop"
                    options=CROPS
                    value=Signal::derive(move || form.get().crop)
                    on_change=Callback::new(move |v| form.update(|f| f.crop = v))
                />
                <SelectField
                    label="Region"
                    placeholder="Select a region"
                    options=REGIONS
                    value=Signal::derive(move || form.get().region)
                    on_change=Callback::new(move |v| form.update(|f| f.region = v))
                />
                <TextField
                    label="Farm size"
                    placeholder="e.g. 3 acres"
                    value=Signal::derive(move || form.get().farm_size)
                    on_input=Callback::new(move |v| form.update(|f| f.farm_size = v))
                />
                <TextField
                    label="Expected yield"
                    placeholder="e.g. 20 quintals per acre"
                    value=Signal::derive(move || form.get().expected_yield)
                    on_input=Callback::new(move |v| form.update(|f| f.expected_yield = v))
                />

                <fieldset class="tool-form__costs">
                    <legend>"Cultivation costs (₹)"</legend>
                    {COST_LABELS
                        .into_iter()
                        .enumerate()
                        .map(|(i, label)| {
                            view! {
                                <TextField
                                    label=label
                                    placeholder="0"
                                    value=Signal::derive(move || form.get().costs[i].clone())
                                    on_input=Callback::new(move |v| {
                                        form.update(|f| f.costs[i] = v);
                                    })
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                    <div class="tool-form__total">"Total cost: " {total}</div>
                </fieldset>

                <div class="tool-form__actions">
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || state.get().is_loading()
                    >
                        "Predict Profit"
                    </button>
                    <button class="btn" type="button" on:click=on_reset>
                        "Reset"
                    </button>
                </div>
            </form>

            {move || match state.get() {
                SubmitState::Idle => None,
                SubmitState::Loading => {
                    Some(view! { <LoadingIndicator label="Crunching market and cost data..."/> }.into_any())
                }
                SubmitState::Failed(message) => {
                    Some(view! { <ErrorPanel message=message on_retry=on_retry/> }.into_any())
                }
                SubmitState::Success(prediction) => {
                    Some(view! { <PredictionView prediction=prediction/> }.into_any())
                }
            }}
        </div>
    }
}

/// Renders the profit summary with every monetary field verbatim.
#[component]
fn PredictionView(prediction: ProfitPrediction) -> impl IntoView {
    let sources = prediction.sources.join(", ");

    view! {
        <div class="result profit-result">
            {prediction
                .error
                .map(|e| view! { <div class="result__warning">{e}</div> })}

            <section class="result__card">
                <h2>{format!("{} in {}", prediction.crop_name, prediction.region)}</h2>
                <DetailRow label="Estimated yield" value=prediction.estimated_yield/>
                <DetailRow label="Market price" value=prediction.market_price/>
                <DetailRow label="Total cost" value=prediction.total_cost/>
                <DetailRow label="Expected revenue" value=prediction.expected_revenue/>
                <DetailRow label="Expected profit" value=prediction.expected_profit/>
                <DetailRow label="ROI" value=prediction.roi/>
            </section>

            <section class="result__card">
                <h2>"Risk Factors"</h2>
                <BulletList items=prediction.risk_factors/>
            </section>

            <section class="result__card">
                <h2>"Recommendation"</h2>
                <p>{text_or_fallback(Some(prediction.recommendation))}</p>
                <h3>"Notes"</h3>
                <p>{text_or_fallback(Some(prediction.notes))}</p>
            </section>

            {(!sources.is_empty())
                .then(|| view! { <p class="result__sources">{format!("Sources: {sources}")}</p> })}
        </div>
    }
}
