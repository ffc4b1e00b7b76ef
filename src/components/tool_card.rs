//! Card linking to one tool page from the home page.

use leptos::prelude::*;

#[component]
pub fn ToolCard(
    title: &'static str,
    description: &'static str,
    href: &'static str,
) -> impl IntoView {
    view! {
        <a class="tool-card" href=href>
            <h2 class="tool-card__title">{title}</h2>
            <p class="tool-card__description">{description}</p>
        </a>
    }
}
