//! An in-process player table.

use std::collections::BTreeMap;

use log::debug;
use supermind_engine::PlayerStore;
use supermind_foundation::{Error, Result, UserId};
use supermind_player::PlayerRow;

/// Keeps player rows in memory, keyed by user id.
///
/// Behaves like the SQL table it stands in for: `create` refuses an existing
/// key and `save` refuses a missing one.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    rows: BTreeMap<u64, PlayerRow>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no player has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The stored row of `user`, if any.
    #[must_use]
    pub fn row(&self, user: UserId) -> Option<&PlayerRow> {
        self.rows.get(&user.0)
    }
}

impl PlayerStore for MemoryStore {
    fn load(&self, user: UserId) -> Result<Option<PlayerRow>> {
        Ok(self.rows.get(&user.0).cloned())
    }

    fn save(&mut self, row: &PlayerRow) -> Result<()> {
        match self.rows.get_mut(&row.user_id) {
            Some(stored) => {
                *stored = row.clone();
                debug!("saved player {}", row.user_id);
                Ok(())
            }
            None => Err(Error::persistence(format!("no row for user {}", row.user_id))),
        }
    }

    fn create(&mut self, row: &PlayerRow) -> Result<()> {
        if self.rows.contains_key(&row.user_id) {
            return Err(Error::persistence(format!("user {} already exists", row.user_id)));
        }
        self.rows.insert(row.user_id, row.clone());
        Ok(())
    }
}
