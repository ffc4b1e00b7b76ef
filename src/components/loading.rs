//! Loading indicator shown while a request is in flight.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(label: &'static str) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__label">{label}</span>
        </div>
    }
}
