//! Chat Sidebar Component
//!
//! Directory list for the chat page. Stateless: it renders the users it is
//! given, highlights the selected one and reports clicks upward.

use leptos::*;

use crate::components::avatar::{AvatarSize, UserAvatar};
use crate::state::models::User;

/// List of users to start a conversation with
#[component]
pub fn ChatSidebar(
    #[prop(into)]
    users: Signal<Vec<User>>,
    #[prop(into)]
    selected: Signal<Option<User>>,
    #[prop(into)]
    on_select: Callback<User>,
) -> impl IntoView {
    view! {
        <aside class="w-full md:w-72 shrink-0 bg-gray-800 rounded-xl border border-gray-700 overflow-hidden">
            <div class="px-4 py-3 border-b border-gray-700">
                <h2 class="font-semibold">"Contacts"</h2>
                <p class="text-xs text-gray-400">
                    {move || format!("{} people", users.get().len())}
                </p>
            </div>

            <ul class="divide-y divide-gray-700">
                <For
                    each=move || users.get()
                    key=|user| (user.id.clone(), user.name.clone(), user.image.clone())
                    children=move |user| {
                        let row_id = user.id.clone();
                        let is_selected = move || {
                            selected.with(|s| s.as_ref().map(|s| s.id == row_id).unwrap_or(false))
                        };
                        view! { <SidebarRow user=user is_selected=Signal::derive(is_selected) on_select=on_select /> }
                    }
                />
            </ul>
        </aside>
    }
}

#[component]
fn SidebarRow(
    user: User,
    is_selected: Signal<bool>,
    on_select: Callback<User>,
) -> impl IntoView {
    let label = user.label();
    let email = user.email.clone();
    let avatar_name = user.name.clone();
    let avatar_image = user.image.clone();

    view! {
        <li>
            <button
                type="button"
                on:click=move |_| on_select.call(user.clone())
                aria-pressed=move || is_selected.get().to_string()
                class=move || {
                    let base = "w-full flex items-center space-x-3 px-4 py-3 text-left transition-colors";
                    if is_selected.get() {
                        format!("{} bg-gray-700", base)
                    } else {
                        format!("{} hover:bg-gray-750", base)
                    }
                }
            >
                <UserAvatar name=avatar_name image=avatar_image size=AvatarSize::Small />
                <div class="min-w-0">
                    <div class="font-medium truncate">{label}</div>
                    {email.map(|e| view! {
                        <div class="text-xs text-gray-400 truncate">{e}</div>
                    })}
                </div>
            </button>
        </li>
    }
}
