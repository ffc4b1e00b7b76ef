//! Bulleted list for string-array response fields.

use leptos::prelude::*;

use super::detail_row::NOT_AVAILABLE;

/// Renders the items as a list, or the fallback literal when the backend
/// sent none.
#[component]
pub fn BulletList(items: Vec<String>) -> impl IntoView {
    if items.is_empty() {
        view! { <p class="result__empty">{NOT_AVAILABLE}</p> }.into_any()
    } else {
        view! {
            <ul class="result__list">
                {items
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    }
}
