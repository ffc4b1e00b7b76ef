//! Transient validation notice shown when a submission is blocked.

use leptos::prelude::*;

/// How long a validation notice stays on screen.
#[cfg(feature = "hydrate")]
const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(4);

/// Show a validation notice, then auto-dismiss it.
///
/// A newer notice restarts the text but not the older timer, so a rapid
/// second notice may dismiss slightly early; harmless for a hint that only
/// says which fields to fill in.
pub fn show_notice(message: RwSignal<Option<String>>, text: String) {
    message.set(Some(text));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(DISMISS_AFTER).await;
        message.set(None);
    });
}

/// Inline notice box, visible only while a message is set.
#[component]
pub fn ValidationNotice(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="notice" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
