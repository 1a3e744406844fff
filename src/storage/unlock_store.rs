//! Persisted achievement unlock counts.
//!
//! Stored as a list of `{achievementId, timesUnlocked}` under
//! [`keys::ACHIEVEMENT_UNLOCKS`] and handed back to the progress engine as the
//! previous unlocks of the next computation.

use crate::achievements::{AchievementUnlock, UnlockMap};
use crate::storage::database::Database;
use crate::storage::error::{load_list, save_list, StoreError};
use crate::storage::schema::keys;

pub struct UnlockStore<'a> {
    db: &'a Database,
}

impl<'a> UnlockStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Unlock counts from the last saved computation.
    pub fn load(&self) -> Result<UnlockMap, StoreError> {
        let unlocks: Vec<AchievementUnlock> = load_list(self.db, keys::ACHIEVEMENT_UNLOCKS)?;
        Ok(unlocks
            .into_iter()
            .filter(|u| u.times_unlocked > 0)
            .map(|u| (u.achievement_id, u.times_unlocked))
            .collect())
    }

    /// Replace the saved unlock counts.
    pub fn save(&self, unlocks: &UnlockMap) -> Result<(), StoreError> {
        let list: Vec<AchievementUnlock> = unlocks
            .iter()
            .map(|(&achievement_id, &times_unlocked)| AchievementUnlock {
                achievement_id,
                times_unlocked,
            })
            .collect();
        save_list(self.db, keys::ACHIEVEMENT_UNLOCKS, &list)?;
        tracing::debug!(count = list.len(), "Saved achievement unlocks");
        Ok(())
    }

    /// Forget all unlocks.
    pub fn clear(&self) -> Result<bool, StoreError> {
        Ok(self.db.remove_item(keys::ACHIEVEMENT_UNLOCKS)?)
    }
}
