/// User store - registered accounts keyed by id with a unique username index
use super::StoreError;
use crate::models::User;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

pub struct UserStore {
    inner: RwLock<UserTable>,
}

struct UserTable {
    users: BTreeMap<i64, User>,
    by_username: HashMap<String, i64>,
    next_id: i64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(UserTable {
                users: BTreeMap::new(),
                by_username: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Insert a user with an already-hashed credential. The uniqueness check
    /// and the insert happen under one write guard.
    pub fn insert(&self, username: &str, password_hash: String) -> Result<User, StoreError> {
        let mut table = self.inner.write();

        if table.by_username.contains_key(username) {
            return Err(StoreError::UsernameTaken);
        }

        let id = table.next_id;
        table.next_id += 1;

        let user = User {
            id,
            username: username.to_string(),
            password_hash,
        };
        table.by_username.insert(user.username.clone(), id);
        table.users.insert(id, user.clone());

        tracing::info!(user_id = id, username, "user registered");
        Ok(user)
    }

    pub fn get_by_username(&self, username: &str) -> Result<User, StoreError> {
        let table = self.inner.read();
        table
            .by_username
            .get(username)
            .and_then(|id| table.users.get(id))
            .cloned()
            .ok_or(StoreError::UserNotFound)
    }
}
