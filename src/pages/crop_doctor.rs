//! Crop doctor page: upload a photo, get a disease diagnosis.
//!
//! The chosen `web_sys::File` stays inside the DOM input (reached through a
//! `NodeRef` at submit time); only its name and MIME type are mirrored into
//! state for validation and display.

use leptos::html::Input;
use leptos::prelude::*;

use crate::components::error_panel::ErrorPanel;
use crate::components::loading::LoadingIndicator;
use crate::components::notice::{ValidationNotice, show_notice};
use crate::net::types::CropDiagnosis;
use crate::state::diagnosis::SelectedImage;
use crate::state::submit::SubmitState;

#[component]
pub fn CropDoctorPage() -> impl IntoView {
    let selection = RwSignal::new(SelectedImage::default());
    let state = RwSignal::new(SubmitState::<CropDiagnosis>::default());
    let notice = RwSignal::new(None::<String>);
    let input_ref: NodeRef<Input> = NodeRef::new();

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let file = input_ref
                .get_untracked()
                .and_then(|el| el.files())
                .and_then(|files| files.get(0));
            match file {
                Some(file) => selection.set(SelectedImage {
                    file_name: file.name(),
                    content_type: file.type_(),
                }),
                None => selection.update(SelectedImage::reset),
            }
        }
    };

    let do_submit = move || {
        if let Some(message) = selection.get().validate() {
            show_notice(notice, message.to_owned());
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let file = input_ref
                .get_untracked()
                .and_then(|el| el.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                crate::state::submit::submit(state, crate::net::api::diagnose_crop(file));
            }
        }
    };

    let on_reset = move |_| {
        selection.update(SelectedImage::reset);
        state.update(SubmitState::reset);
        #[cfg(feature = "hydrate")]
        if let Some(el) = input_ref.get_untracked() {
            el.set_value("");
        }
    };

    let on_retry = Callback::new(move |()| state.update(SubmitState::reset));

    let selected_label = move || {
        let name = selection.get().file_name;
        if name.is_empty() {
            "No photo selected".to_owned()
        } else {
            name
        }
    };

    view! {
        <div class="page crop-doctor-page">
            <h1>"Crop Doctor"</h1>
            <p class="page__intro">
                "Upload a clear photo of the affected plant (JPEG or PNG) for a diagnosis."
            </p>

            <ValidationNotice message=notice/>

            <form
                class="tool-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    do_submit();
                }
            >
                <label class="tool-form__label">
                    "Crop photo"
                    <input
                        class="tool-form__file"
                        type="file"
                        accept="image/jpeg,image/png"
                        node_ref=input_ref
                        on:change=on_file_change
                    />
                </label>
                <p class="tool-form__file-name">{selected_label}</p>
                <div class="tool-form__actions">
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || state.get().is_loading()
                    >
                        "Diagnose"
                    </button>
                    <button class="btn" type="button" on:click=on_reset>
                        "Reset"
                    </button>
                </div>
            </form>

            {move || match state.get() {
                SubmitState::Idle => None,
                SubmitState::Loading => {
                    Some(view! { <LoadingIndicator label="Analyzing your crop photo..."/> }.into_any())
                }
                SubmitState::Failed(message) => {
                    Some(view! { <ErrorPanel message=message on_retry=on_retry/> }.into_any())
                }
                SubmitState::Success(diagnosis) => {
                    Some(view! { <DiagnosisView diagnosis=diagnosis/> }.into_any())
                }
            }}
        </div>
    }
}

/// Renders the diagnosis: disease name, severity chip, and treatment.
#[component]
fn DiagnosisView(diagnosis: CropDiagnosis) -> impl IntoView {
    let severity = diagnosis.severity;
    let chip_class = {
        let lowered = severity.to_lowercase();
        if lowered.contains("high") || lowered.contains("severe") {
            "chip chip--high"
        } else if lowered.contains("moderate") || lowered.contains("medium") {
            "chip chip--medium"
        } else {
            "chip chip--low"
        }
    };

    view! {
        <div class="result diagnosis-result">
            <section class="result__card">
                <h2>{diagnosis.disease_name} " " <span class=chip_class>{severity}</span></h2>
                <h3>"Recommended Treatment"</h3>
                <p>{diagnosis.recommended_treatment}</p>
            </section>
        </div>
    }
}
