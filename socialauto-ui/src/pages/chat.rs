//! Chat Page
//!
//! Loads the directory (minus the signed-in user) and hands it to the chat
//! layout.

use leptos::*;

use crate::api::{self, FetchError};
use crate::components::{ChatLayout, ListSkeleton};
use crate::state::models::User;
use crate::state::session::CurrentUser;

/// Where the directory load stands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectoryLoad {
    Loading,
    Failed(String),
    Ready,
}

impl DirectoryLoad {
    pub fn from_result(result: Option<&Result<Vec<User>, FetchError>>) -> Self {
        match result {
            None => DirectoryLoad::Loading,
            Some(Ok(_)) => DirectoryLoad::Ready,
            Some(Err(e)) => DirectoryLoad::Failed(e.to_string()),
        }
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let CurrentUser(current_user) = use_context::<CurrentUser>().expect("CurrentUser not found");
    let exclude = current_user.id.clone();

    let directory = create_local_resource(
        move || exclude.clone(),
        |id| async move { api::fetch_users(Some(&id)).await },
    );

    // Keeps its last value while a refresh is in flight
    let users = Signal::derive(move || match directory.get() {
        Some(Ok(users)) => users,
        _ => Vec::new(),
    });
    let load = create_memo(move |_| directory.with(|r| DirectoryLoad::from_result(r.as_ref())));

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Chat"</h1>
                    <p class="text-gray-400 mt-1">"Pick someone from your team to talk to"</p>
                </div>
                <button
                    on:click=move |_| directory.refetch()
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm transition-colors"
                >
                    "Refresh"
                </button>
            </div>

            {move || match load.get() {
                DirectoryLoad::Loading => view! { <ListSkeleton count=3 /> }.into_view(),
                DirectoryLoad::Failed(message) => {
                    web_sys::console::error_1(&format!("Failed to load users: {}", message).into());
                    view! {
                        <div class="bg-gray-800 rounded-xl p-8 text-center">
                            <p class="text-gray-400 mb-2">"No users to show right now."</p>
                            <p class="text-gray-500 text-sm mb-4">{message}</p>
                            <button
                                on:click=move |_| directory.refetch()
                                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg transition-colors"
                            >
                                "Retry"
                            </button>
                        </div>
                    }.into_view()
                }
                DirectoryLoad::Ready => view! {
                    <ChatLayout current_user=current_user.clone() users=users />
                }.into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_load_states() {
        assert_eq!(DirectoryLoad::from_result(None), DirectoryLoad::Loading);
        assert_eq!(DirectoryLoad::from_result(Some(&Ok(vec![]))), DirectoryLoad::Ready);
        assert_eq!(
            DirectoryLoad::from_result(Some(&Err(FetchError::Unavailable("offline".into())))),
            DirectoryLoad::Failed("offline".to_string())
        );
    }
}
