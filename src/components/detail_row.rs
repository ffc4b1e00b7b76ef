//! Label/value row with a fallback for missing backend fields.

#[cfg(test)]
#[path = "detail_row_test.rs"]
mod detail_row_test;

use leptos::prelude::*;

/// Rendered in place of any optional field the backend left out.
pub const NOT_AVAILABLE: &str = "Not available";

/// Substitute the fallback literal for `None` or blank values.
pub fn text_or_fallback(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

/// One row of a result card: a label and the backend's value, or the
/// fallback literal when the field is absent.
#[component]
pub fn DetailRow(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div class="detail-row">
            <span class="detail-row__label">{label}</span>
            <span class="detail-row__value">{text_or_fallback(value)}</span>
        </div>
    }
}
