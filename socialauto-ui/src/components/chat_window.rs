//! Chat Window Component
//!
//! Conversation pane. Shows a prompt until a user is selected, then a view
//! scoped to the (current user, selected user) pair. Message history and
//! sending live outside this component.

use leptos::*;

use crate::components::avatar::{AvatarSize, UserAvatar};
use crate::state::models::User;

/// What the window shows for a given selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatWindowView {
    /// Nothing selected yet
    Prompt,
    /// Conversation with a peer
    Conversation { conversation_id: String, peer: User },
}

impl ChatWindowView {
    pub fn for_selection(current_user: &User, selected: Option<&User>) -> Self {
        match selected {
            None => ChatWindowView::Prompt,
            Some(peer) => ChatWindowView::Conversation {
                conversation_id: conversation_id(current_user, peer),
                peer: peer.clone(),
            },
        }
    }
}

/// Order-independent id for the conversation between two users.
///
/// Each id is length-prefixed, so ids containing the separators still map
/// distinct pairs to distinct keys.
pub fn conversation_id(a: &User, b: &User) -> String {
    let (low, high) = if a.id <= b.id { (&a.id, &b.id) } else { (&b.id, &a.id) };
    format!("{}:{}|{}:{}", low.len(), low, high.len(), high)
}

/// Conversation pane
#[component]
pub fn ChatWindow(
    current_user: User,
    #[prop(into)]
    selected: Signal<Option<User>>,
) -> impl IntoView {
    let view_state = create_memo(move |_| {
        selected.with(|s| ChatWindowView::for_selection(&current_user, s.as_ref()))
    });

    view! {
        <section class="flex-1 min-h-[28rem] bg-gray-800 rounded-xl border border-gray-700 flex flex-col">
            {move || match view_state.get() {
                ChatWindowView::Prompt => view! { <SelectPrompt /> }.into_view(),
                ChatWindowView::Conversation { conversation_id, peer } => view! {
                    <Conversation conversation_id=conversation_id peer=peer />
                }.into_view(),
            }}
        </section>
    }
}

#[component]
fn SelectPrompt() -> impl IntoView {
    view! {
        <div class="flex-1 flex flex-col items-center justify-center text-center p-8">
            <div class="text-5xl mb-4">"💬"</div>
            <h2 class="text-xl font-semibold mb-2">"Select a conversation"</h2>
            <p class="text-gray-400 text-sm">"Choose a contact from the list to start chatting."</p>
        </div>
    }
}

#[component]
fn Conversation(conversation_id: String, peer: User) -> impl IntoView {
    let label = peer.label();

    view! {
        <div class="flex-1 flex flex-col" data-conversation=conversation_id>
            <header class="flex items-center space-x-3 px-6 py-4 border-b border-gray-700">
                <UserAvatar name=peer.name.clone() image=peer.image.clone() size=AvatarSize::Medium />
                <div>
                    <h2 class="font-semibold">{label.clone()}</h2>
                    {peer.email.clone().map(|e| view! {
                        <p class="text-xs text-gray-400">{e}</p>
                    })}
                </div>
            </header>

            <div class="flex-1 flex items-center justify-center p-6">
                <p class="text-gray-400 text-sm">
                    {format!("This is the beginning of your conversation with {}.", label)}
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_iff_nothing_selected() {
        let me = User::named("1", "Jane");
        let alex = User::named("2", "Alex");

        assert_eq!(ChatWindowView::for_selection(&me, None), ChatWindowView::Prompt);
        assert_eq!(
            ChatWindowView::for_selection(&me, Some(&alex)),
            ChatWindowView::Conversation {
                conversation_id: "1:1|1:2".to_string(),
                peer: alex,
            }
        );
    }

    #[test]
    fn test_conversation_id_is_symmetric() {
        let a = User::new("7");
        let b = User::new("3");
        assert_eq!(conversation_id(&a, &b), conversation_id(&b, &a));
        assert_eq!(conversation_id(&a, &b), "1:3|1:7");
    }

    #[test]
    fn test_conversation_id_with_separator_in_ids() {
        let left = conversation_id(&User::new("1:2"), &User::new("3"));
        let right = conversation_id(&User::new("1"), &User::new("2:3"));
        assert_ne!(left, right);

        let piped = conversation_id(&User::new("a|1:b"), &User::new("c"));
        let plain = conversation_id(&User::new("a"), &User::new("b|1:c"));
        assert_ne!(piped, plain);
    }
}
