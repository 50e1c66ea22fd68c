//! Chat Layout Component
//!
//! Composition root for the chat page: owns the selection and wires the
//! sidebar's clicks into the window.

use leptos::*;

use crate::components::chat_sidebar::ChatSidebar;
use crate::components::chat_window::ChatWindow;
use crate::state::chat::ChatLayoutState;
use crate::state::models::User;

/// Sidebar + window, sharing one selection
#[component]
pub fn ChatLayout(
    /// The signed-in user
    current_user: User,
    /// Directory entries available to chat with
    #[prop(into)]
    users: Signal<Vec<User>>,
) -> impl IntoView {
    let state = ChatLayoutState::new(users);
    let selected = state.selected();
    let on_select = Callback::new(move |user: User| state.select(&user));

    view! {
        <div class="flex flex-col md:flex-row gap-6">
            <ChatSidebar users=users selected=selected on_select=on_select />
            <ChatWindow current_user=current_user selected=selected />
        </div>
    }
}
