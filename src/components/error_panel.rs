//! Persistent inline panel for a failed request.

use leptos::prelude::*;

/// Shows the normalized error message with a retry affordance. "Try again"
/// only clears the error so the form is usable again; it does not resend.
#[component]
pub fn ErrorPanel(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <p class="error-panel__message">{message}</p>
            <button class="btn" on:click=move |_| on_retry.run(())>
                "Try again"
            </button>
        </div>
    }
}
