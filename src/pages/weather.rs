//! Weather & irrigation advice page.

use leptos::prelude::*;

use crate::components::bullet_list::BulletList;
use crate::components::detail_row::{DetailRow, NOT_AVAILABLE, text_or_fallback};
use crate::components::error_panel::ErrorPanel;
use crate::components::form_fields::SelectField;
use crate::components::loading::LoadingIndicator;
use crate::components::notice::{ValidationNotice, show_notice};
use crate::net::types::WeatherAdvice;
use crate::state::crop_region::CropRegionForm;
use crate::state::options::{CROPS, REGIONS};
use crate::state::submit::SubmitState;

#[component]
pub fn WeatherPage() -> impl IntoView {
    let form = RwSignal::new(CropRegionForm::default());
    let state = RwSignal::new(SubmitState::<WeatherAdvice>::default());
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
            crate::net::api::fetch_weather_advice(snapshot.payload()),
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
        <div class="page weather-page">
            <h1>"Weather & Irrigation"</h1>
            <p class="page__intro">
                "Current conditions, a 7-day outlook, and an irrigation plan for your crop."
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
                        "Get Advice"
                    </button>
                    <button class="btn" type="button" on:click=on_reset>
                        "Reset"
                    </button>
                </div>
            </form>

            {move || match state.get() {
                SubmitState::Idle => None,
                SubmitState::Loading => {
                    Some(view! { <LoadingIndicator label="Fetching weather and irrigation advice..."/> }.into_any())
                }
                SubmitState::Failed(message) => {
                    Some(view! { <ErrorPanel message=message on_retry=on_retry/> }.into_any())
                }
                SubmitState::Success(advice) => Some(view! { <AdviceView advice=advice/> }.into_any()),
            }}
        </div>
    }
}

/// Renders the full advisory: conditions, forecast, irrigation plan,
/// alerts, and tips.
#[component]
fn AdviceView(advice: WeatherAdvice) -> impl IntoView {
    let current = advice.weather_data.current_conditions;
    let metrics = advice.weather_data.agricultural_metrics;
    let forecast = advice.weather_data.daily_forecast;
    let sources = advice.sources.join(", ");

    view! {
        <div class="result weather-result">
            {advice
                .warning
                .map(|w| view! { <div class="result__warning">{w}</div> })}

            <section class="result__card">
                <h2>"Current Conditions"</h2>
                <DetailRow label="Temperature" value=current.temperature/>
                <DetailRow label="Humidity" value=current.humidity/>
                <DetailRow label="Wind speed" value=current.wind_speed/>
                <DetailRow label="Rainfall (last 24h)" value=current.rainfall_last_24h/>
            </section>

            <section class="result__card">
                <h2>"7-Day Forecast"</h2>
                {if forecast.is_empty() {
                    view! { <p class="result__empty">{NOT_AVAILABLE}</p> }.into_any()
                } else {
                    view! {
                        <table class="result__table">
                            <thead>
                                <tr>
                                    <th>"Date"</th>
                                    <th>"Conditions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {forecast
                                    .into_iter()
                                    .map(|day| {
                                        view! {
                                            <tr>
                                                <td>{day.date}</td>
                                                <td>{day.conditions}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </section>

            <section class="result__card">
                <h2>"Irrigation Plan"</h2>
                {if advice.irrigation_schedule.is_empty() {
                    view! { <p class="result__empty">{NOT_AVAILABLE}</p> }.into_any()
                } else {
                    view! {
                        <table class="result__table">
                            <thead>
                                <tr>
                                    <th>"Day"</th>
                                    <th>"Action"</th>
                                    <th>"Water"</th>
                                    <th>"Timing"</th>
                                    <th>"Reason"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {advice
                                    .irrigation_schedule
                                    .into_iter()
                                    .map(|entry| {
                                        let water = if entry.water_liters > 0.0 {
                                            format!("{} L", entry.water_liters)
                                        } else {
                                            "As needed".to_owned()
                                        };
                                        view! {
                                            <tr>
                                                <td>{entry.day}</td>
                                                <td>{entry.action}</td>
                                                <td>{water}</td>
                                                <td>{entry.timing}</td>
                                                <td>{entry.reason}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </section>

            <section class="result__card">
                <h2>"Field Metrics"</h2>
                <DetailRow label="Soil moisture trend" value=metrics.soil_moisture_trend/>
                <DetailRow label="Evaporation rate" value=metrics.evaporation_rate/>
                <DetailRow label="Drought risk" value=metrics.drought_risk/>
                <DetailRow label="Pest risk" value=metrics.pest_risk/>
            </section>

            <section class="result__card">
                <h2>"Risk Alerts"</h2>
                <BulletList items=advice.risk_alerts/>
            </section>

            <section class="result__card">
                <h2>"Protective Measures"</h2>
                <BulletList items=advice.protective_measures/>
            </section>

            <section class="result__card">
                <h2>"Water Conservation Tips"</h2>
                <BulletList items=advice.water_conservation_tips/>
            </section>

            <section class="result__card">
                <h2>"Notes"</h2>
                <p>{text_or_fallback(Some(advice.notes))}</p>
            </section>

            {(!sources.is_empty())
                .then(|| view! { <p class="result__sources">{format!("Sources: {sources}")}</p> })}
        </div>
    }
}
