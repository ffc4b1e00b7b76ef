//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    crop_doctor::CropDoctorPage, home::HomePage, market::MarketPage, profit::ProfitPage,
    schemes::SchemesPage, weather::WeatherPage,
};
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI context and sets up client-side routing. Each
/// tool page owns its form and submission state; nothing is shared between
/// pages except dark mode.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::restore());
    provide_context(ui);

    Effect::new(move || ui.get().sync_dom());

    view! {
        <Stylesheet id="leptos" href="/pkg/agrimitra.css"/>
        <Title text="AgriMitra"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("crop-doctor") view=CropDoctorPage/>
                    <Route path=StaticSegment("weather") view=WeatherPage/>
                    <Route path=StaticSegment("market") view=MarketPage/>
                    <Route path=StaticSegment("schemes") view=SchemesPage/>
                    <Route path=StaticSegment("profit") view=ProfitPage/>
                </Routes>
            </main>
        </Router>
    }
}
