//! Home page linking to the five tools.

use leptos::prelude::*;

use crate::components::tool_card::ToolCard;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"AgriMitra"</h1>
                <p>"Advisory tools for your farm, powered by live market and weather analysis."</p>
            </header>
            <div class="home-page__grid">
                <ToolCard
                    title="Crop Doctor"
                    description="Upload a photo of an affected plant and get a disease diagnosis with treatment advice."
                    href="/crop-doctor"
                />
                <ToolCard
                    title="Weather & Irrigation"
                    description="Current conditions, 7-day forecast, and an irrigation plan for your crop and region."
                    href="/weather"
                />
                <ToolCard
                    title="Smart Market"
                    description="Live mandi price trends with a buy, hold, or sell recommendation."
                    href="/market"
                />
                <ToolCard
                    title="Govt Schemes"
                    description="Find government agriculture schemes that match your profile and needs."
                    href="/schemes"
                />
                <ToolCard
                    title="Profit Prediction"
                    description="Estimate revenue, costs, and profit for the coming season."
                    href="/profit"
                />
            </div>
        </div>
    }
}
