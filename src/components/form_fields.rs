//! Labeled form inputs bound to a form-model signal via getter/setter.

use leptos::prelude::*;

/// Dropdown over a fixed option list, with an empty placeholder entry.
#[component]
pub fn SelectField(
    label: &'static str,
    placeholder: &'static str,
    options: &'static [&'static str],
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="tool-form__label">
            {label}
            <select
                class="tool-form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {options
                    .iter()
                    .map(|opt| view! { <option value=*opt>{*opt}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

/// Single-line text input.
#[component]
pub fn TextField(
    label: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="tool-form__label">
            {label}
            <input
                class="tool-form__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}
