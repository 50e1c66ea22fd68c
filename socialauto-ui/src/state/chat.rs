//! Chat Selection State
//!
//! The one piece of mutable state in the chat composition: which user the
//! conversation is open with. Owned by `ChatLayout` through
//! [`ChatLayoutState`], changed only through the sidebar's selection callback
//! and directory refreshes.

use leptos::*;

use super::models::User;

/// Currently selected chat peer
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatSelection {
    selected: Option<User>,
}

impl ChatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&User> {
        self.selected.as_ref()
    }

    /// Select `user` if it belongs to `directory`. Returns whether the
    /// selection changed.
    pub fn select(&mut self, user: &User, directory: &[User]) -> bool {
        let Some(member) = directory.iter().find(|u| u.id == user.id) else {
            return false;
        };

        if self.selected.as_ref() == Some(member) {
            return false;
        }
        self.selected = Some(member.clone());
        true
    }

    /// Bring the selection in line with a refreshed directory.
    ///
    /// A selected user that is no longer listed is cleared; one that is still
    /// listed is replaced by the directory's current record. Returns whether
    /// the selection changed.
    pub fn reconcile(&mut self, directory: &[User]) -> bool {
        let Some(current) = self.selected.as_ref() else {
            return false;
        };

        match directory.iter().find(|u| u.id == current.id) {
            None => {
                self.selected = None;
                true
            }
            Some(fresh) if fresh != current => {
                self.selected = Some(fresh.clone());
                true
            }
            Some(_) => false,
        }
    }
}

/// Reactive selection bound to a directory signal
#[derive(Clone, Copy)]
pub struct ChatLayoutState {
    users: Signal<Vec<User>>,
    selection: RwSignal<ChatSelection>,
}

impl ChatLayoutState {
    /// Wire a fresh, empty selection to `users`. Every change of `users`
    /// reconciles the selection against the new list.
    pub fn new(users: Signal<Vec<User>>) -> Self {
        let selection = create_rw_signal(ChatSelection::new());

        create_effect(move |_| {
            users.with(|directory| {
                let mut next = selection.get_untracked();
                if next.reconcile(directory) {
                    selection.set(next);
                }
            });
        });

        Self { users, selection }
    }

    /// Select `user` if the current directory lists them
    pub fn select(&self, user: &User) {
        let mut next = self.selection.get_untracked();
        let changed = self.users.with_untracked(|directory| next.select(user, directory));
        if changed {
            self.selection.set(next);
        }
    }

    pub fn selected(&self) -> Signal<Option<User>> {
        let selection = self.selection;
        Signal::derive(move || selection.with(|s| s.selected().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> Vec<User> {
        vec![
            User::named("1", "Jane"),
            User::named("2", "Alex"),
            User::named("3", "Sarah"),
        ]
    }

    #[test]
    fn test_initially_empty() {
        let selection = ChatSelection::new();
        assert!(selection.selected().is_none());
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_select_member_of_directory() {
        let users = directory();
        let mut selection = ChatSelection::new();

        for user in &users {
            assert!(selection.select(user, &users));
            assert_eq!(selection.selected(), Some(user));
        }

        // Selecting the same user again is a no-op
        assert!(!selection.select(&users[2], &users));
    }

    #[test]
    fn test_select_ignores_users_outside_directory() {
        let users = directory();
        let mut selection = ChatSelection::new();

        assert!(!selection.select(&User::named("9", "Stranger"), &users));
        assert!(selection.selected().is_none());
    }

    #[test]
    fn test_removed_user_clears_selection() {
        let mut users = directory();
        let mut selection = ChatSelection::new();

        let alex = users[1].clone();
        selection.select(&alex, &users);
        assert_eq!(selection.selected(), Some(&alex));

        users.retain(|u| u.id != alex.id);
        assert!(selection.reconcile(&users));
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_reconcile_refreshes_listed_user() {
        let mut users = directory();
        let mut selection = ChatSelection::new();
        selection.select(&users[0], &users);

        // Unchanged directory leaves the selection alone
        assert!(!selection.reconcile(&users));

        users[0].image = Some("https://example.com/jane.png".to_string());
        assert!(selection.reconcile(&users));
        assert_eq!(selection.selected(), Some(&users[0]));
    }

    #[test]
    fn test_reconcile_empty_selection_is_noop() {
        let mut selection = ChatSelection::new();
        assert!(!selection.reconcile(&[]));
        assert!(selection.selected().is_none());
    }

    #[test]
    fn test_layout_state_follows_directory_signal() {
        let runtime = create_runtime();

        let users = create_rw_signal(directory());
        let state = ChatLayoutState::new(users.into());
        let selected = state.selected();
        assert_eq!(selected.get_untracked(), None);

        let alex = users.with_untracked(|list| list[1].clone());
        state.select(&alex);
        assert_eq!(selected.get_untracked(), Some(alex.clone()));

        // Strangers cannot be selected
        state.select(&User::named("9", "Stranger"));
        assert_eq!(selected.get_untracked(), Some(alex.clone()));

        users.update(|list| list.retain(|u| u.id != alex.id));
        assert_eq!(selected.get_untracked(), None);

        runtime.dispose();
    }

    #[test]
    fn test_layout_state_refreshes_changed_record() {
        let runtime = create_runtime();

        let users = create_rw_signal(directory());
        let state = ChatLayoutState::new(users.into());
        let jane = users.with_untracked(|list| list[0].clone());
        state.select(&jane);

        users.update(|list| list[0].image = Some("https://example.com/jane.png".to_string()));
        let refreshed = state.selected().get_untracked();
        assert_eq!(
            refreshed.and_then(|u| u.image).as_deref(),
            Some("https://example.com/jane.png")
        );

        runtime.dispose();
    }
}
