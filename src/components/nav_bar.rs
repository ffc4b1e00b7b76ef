//! Top navigation bar with tool links and the dark mode toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| ui.update(UiState::toggle);

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"AgriMitra"</a>
            <div class="nav-bar__links">
                <a href="/crop-doctor">"Crop Doctor"</a>
                <a href="/weather">"Weather & Irrigation"</a>
                <a href="/market">"Smart Market"</a>
                <a href="/schemes">"Govt Schemes"</a>
                <a href="/profit">"Profit Prediction"</a>
            </div>
            <button class="nav-bar__dark-toggle" on:click=on_toggle title="Toggle dark mode">
                {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
            </button>
        </nav>
    }
}
