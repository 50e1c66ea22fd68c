//! Global Application State
//!
//! Reactive state shared by the whole tree: the stored session token and
//! toast notifications. Domain data (users, selection, session) is never kept
//! here; it flows down from the component that fetched it.

use leptos::*;

use crate::api;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Session token sent to the API; `None` when signed out
    pub session_token: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        session_token: create_rw_signal(api::stored_session_token()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Remember a session token and persist it
    pub fn sign_in(&self, token: &str) {
        api::store_session_token(Some(token));
        self.session_token.set(Some(token.to_string()));
    }

    /// Forget the session token
    pub fn sign_out(&self) {
        api::store_session_token(None);
        self.session_token.set(None);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}
