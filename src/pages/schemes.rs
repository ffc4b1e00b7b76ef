//! Government scheme lookup page.

use leptos::prelude::*;

use crate::components::detail_row::{DetailRow, text_or_fallback};
use crate::components::error_panel::ErrorPanel;
use crate::components::form_fields::{SelectField, TextField};
use crate::components::loading::LoadingIndicator;
use crate::components::notice::{ValidationNotice, show_notice};
use crate::net::types::{Scheme, SchemeReport};
use crate::state::options::{CROPS, REGIONS};
use crate::state::schemes::SchemeForm;
use crate::state::submit::SubmitState;

#[component]
pub fn SchemesPage() -> impl IntoView {
    let form = RwSignal::new(SchemeForm::default());
    let state = RwSignal::new(SubmitState::<SchemeReport>::default());
    let notice = RwSignal::new(None::<String>);

    let do_submit = move || {
        let snapshot = form.get();
        let missing = snapshot.missing_fields();
        if !missing.is_empty() {
            show_notice(notice, format!("Please fill in: {}.", missing.join(", ")));
            return;
        }
        #[cfg(feature = "hydrate")]
        crate::state::submit::submit(state, crate::net::api::fetch_schemes(snapshot.payload()));
        #[cfg(not(feature = "hydrate"))]
        let _ = snapshot;
    };

    let on_reset = move |_| {
        form.update(SchemeForm::reset);
        state.update(SubmitState::reset);
    };

    let on_retry = Callback::new(move |()| state.update(SubmitState::reset));

    view! {
        <div class="page schemes-page">
            <h1>"Govt Schemes"</h1>
            <p class="page__intro">
                "Tell us about your farm and we will find matching government schemes."
            </p>

            <ValidationNotice message=notice/>

            <form
                class="tool-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    do_submit();
                }
            >
                <TextField
                    label="Farmer name"
                    placeholder="Your name"
                    value=Signal::derive(move || form.get().farmer_name)
                    on_input=Callback::new(move |v| form.update(|f| f.farmer_name = v))
                />
                <SelectField
                    label="Region"
                    placeholder="Select a region"
                    options=REGIONS
                    value=Signal::derive(move || form.get().region)
                    on_change=Callback::new(move |v| form.update(|f| f.region = v))
                />
                <SelectField
                    label="Crop"
                    placeholder="Select a crop"
                    options=CROPS
                    value=Signal::derive(move || form.get().crop)
                    on_change=Callback::new(move |v| form.update(|f| f.crop = v))
                />
                <TextField
                    label="Farm size"
                    placeholder="e.g. 5 acres"
                    value=Signal::derive(move || form.get().farm_size)
                    on_input=Callback::new(move |v| form.update(|f| f.farm_size = v))
                />
                <TextField
                    label="What do you need help with?"
                    placeholder="e.g. drip irrigation subsidy, crop insurance"
                    value=Signal::derive(move || form.get().need)
                    on_input=Callback::new(move |v| form.update(|f| f.need = v))
                />
                <div class="tool-form__actions">
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || state.get().is_loading()
                    >
                        "Find Schemes"
                    </button>
                    <button class="btn" type="button" on:click=on_reset>
                        "Reset"
                    </button>
                </div>
            </form>

            {move || match state.get() {
                SubmitState::Idle => None,
                SubmitState::Loading => {
                    Some(view! { <LoadingIndicator label="Searching government schemes..."/> }.into_any())
                }
                SubmitState::Failed(message) => {
                    Some(view! { <ErrorPanel message=message on_retry=on_retry/> }.into_any())
                }
                SubmitState::Success(report) => Some(view! { <ReportView report=report/> }.into_any()),
            }}
        </div>
    }
}

/// Renders the matched schemes plus the personalized guidance sections.
#[component]
fn ReportView(report: SchemeReport) -> impl IntoView {
    let sources = report.sources.join(", ");

    view! {
        <div class="result schemes-result">
            {report
                .error
                .map(|e| view! { <div class="result__warning">{e}</div> })}

            {if report.matched_schemes.is_empty() {
                view! { <p class="result__empty">"No matching schemes were found."</p> }.into_any()
            } else {
                report
                    .matched_schemes
                    .into_iter()
                    .map(|scheme| view! { <SchemeCard scheme=scheme/> })
                    .collect::<Vec<_>>()
                    .into_any()
            }}

            <section class="result__card">
                <h2>"Our Recommendation"</h2>
                <p>{text_or_fallback(Some(report.personalized_recommendation))}</p>
                <h3>"Next Steps"</h3>
                <p>{text_or_fallback(Some(report.next_steps))}</p>
            </section>

            {(!sources.is_empty())
                .then(|| view! { <p class="result__sources">{format!("Sources: {sources}")}</p> })}
        </div>
    }
}

/// One scheme card.
#[component]
fn SchemeCard(scheme: Scheme) -> impl IntoView {
    view! {
        <section class="result__card scheme-card">
            <h2>{scheme.name}</h2>
            <p class="scheme-card__description">{scheme.description}</p>
            <DetailRow label="Eligibility" value=scheme.eligibility/>
            <DetailRow label="Benefits" value=scheme.benefits/>
            <DetailRow label="How to apply" value=scheme.application_process/>
            {match scheme.official_link {
                Some(link) => {
                    view! {
                        <a class="scheme-card__link" href=link.clone() target="_blank" rel="noopener">
                            {link.clone()}
                        </a>
                    }
                        .into_any()
                }
                None => view! { <span class="scheme-card__link--missing">"Not available"</span> }
                    .into_any(),
            }}
        </section>
    }
}
