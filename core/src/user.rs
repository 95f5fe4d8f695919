//! User collection state and reducer.
//!
//! Users are read-mostly: the client only hydrates them for display and
//! assignee lookup, but the store accepts the same mutation set as tickets.

use crate::reducer::{Change, Reducer};
use crate::types::{User, UserId, UserPatch};

/// The authoritative user collection
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserState {
    /// Users in the order the service returned them
    pub users: Vec<User>,
}

impl UserState {
    /// Creates a state holding `users`
    #[must_use]
    pub const fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// All users
    #[must_use]
    pub fn all(&self) -> &[User] {
        &self.users
    }

    /// Looks a user up by id
    #[must_use]
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Display name of a user, if known
    #[must_use]
    pub fn name_of(&self, id: UserId) -> Option<&str> {
        self.get(id).map(|u| u.name.as_str())
    }

    /// Number of users
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether there are no users
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Mutations accepted by the user store
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    /// Replace the whole collection with a fetch result
    SetUsers(Vec<User>),
    /// Add a single fetched user
    AddUser(User),
    /// Merge fields into an existing user
    UpdateUser {
        /// User to update
        id: UserId,
        /// Fields to merge
        patch: UserPatch,
    },
    /// Remove a user
    DeleteUser {
        /// User to remove
        id: UserId,
    },
}

/// Reducer for the user store
#[derive(Clone, Copy, Debug, Default)]
pub struct UserReducer;

impl Reducer for UserReducer {
    type State = UserState;
    type Action = UserAction;

    fn reduce(&self, state: &mut UserState, action: UserAction) -> Change {
        match action {
            UserAction::SetUsers(users) => {
                state.users = users;
                Change::Committed
            }
            UserAction::AddUser(user) => {
                if let Some(existing) = state.users.iter_mut().find(|u| u.id == user.id) {
                    *existing = user;
                } else {
                    state.users.push(user);
                }
                Change::Committed
            }
            UserAction::UpdateUser { id, patch } => {
                match state.users.iter_mut().find(|u| u.id == id) {
                    Some(user) => {
                        if user.apply(&patch) {
                            Change::Committed
                        } else {
                            Change::Unchanged
                        }
                    }
                    None => Change::Unchanged,
                }
            }
            UserAction::DeleteUser { id } => {
                let before = state.users.len();
                state.users.retain(|u| u.id != id);
                if state.users.len() == before {
                    Change::Unchanged
                } else {
                    Change::Committed
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> User {
        User::new(UserId::new(1), "Alice")
    }

    #[test]
    fn set_users_replaces_and_looks_up() {
        let mut state = UserState::new(vec![User::new(UserId::new(8), "Old")]);

        UserReducer.reduce(&mut state, UserAction::SetUsers(vec![alice()]));

        assert_eq!(state.all(), &[alice()]);
        assert_eq!(state.name_of(UserId::new(1)), Some("Alice"));
        assert_eq!(state.get(UserId::new(8)), None);
    }

    #[test]
    fn add_user_keeps_ids_unique() {
        let mut state = UserState::new(vec![alice()]);

        UserReducer.reduce(
            &mut state,
            UserAction::AddUser(User::new(UserId::new(1), "Alice Smith")),
        );

        assert_eq!(state.len(), 1);
        assert_eq!(state.name_of(UserId::new(1)), Some("Alice Smith"));
    }

    #[test]
    fn update_known_user_renames_once() {
        let mut state = UserState::new(vec![alice()]);
        let rename = || UserAction::UpdateUser {
            id: UserId::new(1),
            patch: UserPatch {
                name: Some("Alice Jones".to_string()),
            },
        };

        assert_eq!(UserReducer.reduce(&mut state, rename()), Change::Committed);
        assert_eq!(UserReducer.reduce(&mut state, rename()), Change::Unchanged);
        assert_eq!(state.name_of(UserId::new(1)), Some("Alice Jones"));
    }

    #[test]
    fn update_and_delete_unknown_are_noops() {
        let mut state = UserState::new(vec![alice()]);
        let before = state.clone();

        let update = UserReducer.reduce(
            &mut state,
            UserAction::UpdateUser {
                id: UserId::new(2),
                patch: UserPatch {
                    name: Some("Bob".to_string()),
                },
            },
        );
        let delete = UserReducer.reduce(&mut state, UserAction::DeleteUser { id: UserId::new(2) });

        assert_eq!(update, Change::Unchanged);
        assert_eq!(delete, Change::Unchanged);
        assert_eq!(state, before);
    }
}
