//! The shared async submission controller.
//!
//! Each page stores one `RwSignal<SubmitState<T>>` where `T` is that
//! endpoint's response body. Because the four phases are variants of one
//! enum, exactly one of {idle, loading, result, error} holds at any time;
//! there is no separate loading flag to forget to clear.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

/// Lifecycle of one page's most recent submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitState<T> {
    /// Nothing submitted yet, or the form was reset.
    Idle,
    /// A request is in flight.
    Loading,
    /// The most recent call succeeded with this response body.
    Success(T),
    /// The most recent call failed with this display message.
    Failed(String),
}

// Manual impl: `Idle` needs no `T`, so don't demand `T: Default`.
impl<T> Default for SubmitState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> SubmitState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The stored result, if the last call succeeded.
    pub fn result(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The stored error message, if the last call failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Fold a settled request outcome into the matching variant.
    pub fn settled(outcome: Result<T, String>) -> Self {
        match outcome {
            Ok(value) => Self::Success(value),
            Err(message) => Self::Failed(message),
        }
    }

    /// Return to `Idle`, discarding any result or error.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// Run one validated submission: flip to `Loading`, await the request,
/// store the outcome.
///
/// Validation happens before this is called; a page that finds missing
/// fields shows a notice and never reaches here. There is no retry,
/// timeout, or cancellation: a response landing after a reset overwrites
/// whatever state the reset left behind.
#[cfg(feature = "hydrate")]
pub fn submit<T, F>(state: leptos::prelude::RwSignal<SubmitState<T>>, request: F)
where
    T: Clone + Send + Sync + 'static,
    F: std::future::Future<Output = Result<T, String>> + 'static,
{
    use leptos::prelude::Set;

    state.set(SubmitState::Loading);
    leptos::task::spawn_local(async move {
        state.set(SubmitState::settled(request.await));
    });
}
