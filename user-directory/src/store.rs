//! In-memory storage for user records.
//!
//! All state lives behind a single reader/writer lock so that the record map
//! and the id cursor always change together.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;
use tracing::debug;

use crate::user::{User, UserId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("user {0} not found")]
    NotFound(UserId),
}

struct Inner {
    users: HashMap<UserId, User>,
    next_id: UserId,
}

/// Thread-safe user directory.
///
/// Reads (`list_all`, `get`) share the lock; writes (`create`, `update`) take
/// it exclusively, so a reader sees each record either before or after a
/// write, never halfway through one. Callers always receive clones.
///
/// Ids start at 1 and the cursor only moves forward, so an id is never handed
/// out twice.
pub struct UserStore {
    inner: RwLock<Inner>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Creates an empty store whose first record will get id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                users: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Returns a snapshot of every record. Order is unspecified.
    pub fn list_all(&self) -> Vec<User> {
        self.read().users.values().cloned().collect()
    }

    /// Stores `candidate` under a freshly assigned id and returns the stored
    /// record. Any id on the candidate is ignored.
    pub fn create(&self, candidate: User) -> User {
        let mut inner = self.write();
        let id = inner.next_id;
        let user = candidate.with_id(id);
        inner.users.insert(id, user.clone());
        inner.next_id += 1;
        debug!(id, "user created");
        user
    }

    /// Returns a copy of the record at `id`.
    ///
    /// While an update to the same id is in flight this sees either the
    /// complete old value or the complete new one.
    pub fn get(&self, id: UserId) -> Result<User, StoreError> {
        self.read()
            .users
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Replaces the whole record at `id` with `candidate`.
    ///
    /// The stored id is always `id`, whatever the candidate carries. Unknown
    /// ids are rejected rather than inserted.
    pub fn update(&self, id: UserId, candidate: User) -> Result<User, StoreError> {
        let mut inner = self.write();
        let slot = inner.users.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = candidate.with_id(id);
        debug!(id, "user updated");
        Ok(slot.clone())
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.read().users.len()
    }

    /// True until the first record is created.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // No write leaves `Inner` half-applied if it panics, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
