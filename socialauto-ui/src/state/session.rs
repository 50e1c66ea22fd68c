//! Session State
//!
//! The session is resolved once at the app root from the stored token and
//! handed to the pages that need it. Pages receive it explicitly; nothing
//! below the dashboard route looks it up on its own.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;
use crate::state::models::{Session, User};

/// Session lookup keyed on the stored token
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: RwSignal<Option<String>>,
    resource: Resource<Option<String>, Option<Session>>,
}

impl SessionContext {
    /// `None` while the lookup is in flight, `Some(None)` when signed out.
    ///
    /// A cleared token answers `Some(None)` right away instead of waiting for
    /// the resource to drop its previous value.
    pub fn get(&self) -> Option<Option<Session>> {
        if self.token.get().is_none() {
            return Some(None);
        }
        self.resource.get()
    }
}

/// Create the session resource and provide it to the tree
pub fn provide_session(state: GlobalState) {
    let token = state.session_token;
    let resource = create_local_resource(move || token.get(), api::fetch_session);

    provide_context(SessionContext { token, resource });
}

/// The signed-in user, provided inside the dashboard route
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub User);
