//! Smart market analysis page.

use leptos::prelude::*;

use crate::components::bullet_list::BulletList;
use crate::components::detail_row::{DetailRow, text_or_fallback};
use crate::components::error_panel::ErrorPanel;
use crate::components::form_fields::SelectField;
use crate::components::loading::LoadingIndicator;
use crate::components::notice::{ValidationNotice, show_notice};
use crate::net::types::MarketAnalysis;
use crate::state::crop_region::CropRegionForm;
use crate::state::options::{CROPS, REGIONS};
use crate::state::submit::SubmitState;

#[component]
pub fn MarketPage() -> impl IntoView {
    let form = RwSignal::new(CropRegionForm::default());
    let state = RwSignal::new(SubmitState::<MarketAnalysis>::default());
    let notice = RwSignal::new(None::<String>);

    let do_submit = move || {
        let snapshot = form.get();
        let missing = snapshot.missing_fields();
        if !missing.is_empty() {
            show_notice(notice, format!("Please fill in: {}.", missing.join(", ")));
            return;
        }
        #[cfg(feature = "hydrate")]
        crate::state::submit::submit(
            state,
            crate::net::api::fetch_market_analysis(snapshot.payload()),
        );
        #[cfg(not(feature = "hydrate"))]
        let _ = snapshot;
    };

    let on_reset = move |_| {
        form.update(CropRegionForm::reset);
        state.update(SubmitState::reset);
    };

    let on_retry = Callback::new(move |()| state.update(SubmitState::reset));

    view! {
        <div class="page market-page">
            <h1>"Smart Market"</h1>
            <p class="page__intro">
                "Live mandi price trends with a buy, hold, or sell recommendation."
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
                    value=Signal::derive(move || form.get().crop_name)
                    on_change=Callback::new(move |v| form.update(|f| f.crop_name = v))
                />
                <SelectField
                    label="Region"
                    placeholder="Select a region"
                    options=REGIONS
                    value=Signal::derive(move || form.get().region)
                    on_change=Callback::new(move |v| form.update(|f| f.region = v))
                />
                <div class="tool-form__actions">
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || state.get().is_loading()
                    >
                        "Analyze Market"
                    </button>
                    <button class="btn" type="button" on:click=on_reset>
                        "Reset"
                    </button>
                </div>
            </form>

            {move || match state.get() {
                SubmitState::Idle => None,
                SubmitState::Loading => {
                    Some(view! { <LoadingIndicator label="Analyzing market conditions..."/> }.into_any())
                }
                SubmitState::Failed(message) => {
                    Some(view! { <ErrorPanel message=message on_retry=on_retry/> }.into_any())
                }
                SubmitState::Success(analysis) => {
                    Some(view! { <AnalysisView analysis=analysis/> }.into_any())
                }
            }}
        </div>
    }
}

/// Renders the price trend card and, when present, the advisory section.
///
/// The advisory fields are absent when only the price feed answered; the
/// trend card still renders on its own.
#[component]
fn AnalysisView(analysis: MarketAnalysis) -> impl IntoView {
    let trend = analysis.trend_info;
    let sources = analysis.sources.join(", ");
    let action_chip = analysis.recommended_action.map(|action| {
        let chip_class = match action.as_str() {
            "buy" => "chip chip--buy",
            "sell" => "chip chip--sell",
            _ => "chip chip--hold",
        };
        view! { <span class=chip_class>{action.to_uppercase()}</span> }
    });
    let confidence = analysis
        .confidence
        .map(|c| format!("{:.0}%", c * 100.0));

    view! {
        <div class="result market-result">
            <section class="result__card">
                <h2>{format!("{} in {}", analysis.crop_name, analysis.region)}</h2>
                <DetailRow label="Price range" value=trend.current_price_range/>
                <DetailRow label="Trend" value=trend.trend_direction/>
                <DetailRow label="Change (month over month)" value=trend.month_over_month_change_percent/>
                <DetailRow label="Supply" value=trend.supply_status/>
                <DetailRow label="Demand" value=trend.demand_status/>
                <DetailRow label="Market yard" value=trend.market_yard/>
                <DetailRow label="Last updated" value=trend.last_updated/>
            </section>

            <section class="result__card">
                <h2>"Recommendation" {action_chip}</h2>
                <DetailRow label="Confidence" value=confidence/>
                <h3>"Rationale"</h3>
                <p>{text_or_fallback(analysis.rationale)}</p>
                <h3>"Alternate Markets"</h3>
                <BulletList items=analysis.alternate_markets/>
                <h3>"Notes"</h3>
                <p>{text_or_fallback(analysis.notes)}</p>
            </section>

            {(!sources.is_empty())
                .then(|| view! { <p class="result__sources">{format!("Sources: {sources}")}</p> })}
        </div>
    }
}
