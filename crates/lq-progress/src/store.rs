//! The durable record store interface and an in-memory reference store.
//!
//! Progress mutations go through closures applied under a per-key
//! serialization point, so two concurrent submissions can never both read
//! stale totals and write them back (the lost-update race). The submission
//! path also credits the learner's star counter behind the same
//! serialization point; a store implementation must make the pair
//! all-or-nothing.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use lq_core::{GameType, ProgressRecord, UserId};

use crate::error::{StoreError, StoreResult};

/// Mutation applied to a progress record inside the store.
pub type ProgressMutation<'a> = &'a mut dyn FnMut(&mut ProgressRecord);

/// Keyed access to progress records and the per-user star counter.
///
/// Records are created lazily: mutating operations start from
/// [`ProgressRecord::fresh`] when no record exists for the key yet.
pub trait GameStore: Send + Sync {
    /// Load the record for `(user, game)`, if one exists.
    fn load_progress(
        &self,
        user: UserId,
        game: GameType,
    ) -> StoreResult<Option<ProgressRecord>>;

    /// Apply a mutation to the record for `(user, game)`, creating it first
    /// if needed, and return the updated record. The mutation runs under
    /// the key's serialization point.
    fn update_progress(
        &self,
        user: UserId,
        game: GameType,
        apply: ProgressMutation<'_>,
    ) -> StoreResult<ProgressRecord>;

    /// The submission path: apply a progress mutation and credit `stars`
    /// to the user's reward counter as one atomic step. Returns the updated
    /// record and the new star total. Neither write may be observed without
    /// the other.
    fn apply_session(
        &self,
        user: UserId,
        game: GameType,
        apply: ProgressMutation<'_>,
        stars: u32,
    ) -> StoreResult<(ProgressRecord, u64)>;

    /// The user's current star total (0 for a user never credited).
    fn total_stars(&self, user: UserId) -> StoreResult<u64>;
}

#[derive(Debug, Default)]
struct Shelves {
    records: HashMap<(UserId, GameType), ProgressRecord>,
    stars: HashMap<UserId, u64>,
}

/// In-memory [`GameStore`].
///
/// A single mutex guards both shelves, so every operation is atomic with
/// respect to every other, including the progress-plus-stars pair in
/// [`GameStore::apply_session`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Shelves>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Shelves>> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("record store lock poisoned".to_string()))
    }
}

impl GameStore for MemoryStore {
    fn load_progress(
        &self,
        user: UserId,
        game: GameType,
    ) -> StoreResult<Option<ProgressRecord>> {
        Ok(self.lock()?.records.get(&(user, game)).cloned())
    }

    fn update_progress(
        &self,
        user: UserId,
        game: GameType,
        apply: ProgressMutation<'_>,
    ) -> StoreResult<ProgressRecord> {
        let mut shelves = self.lock()?;
        let record = shelves
            .records
            .entry((user, game))
            .or_insert_with(|| ProgressRecord::fresh(user, game));
        apply(record);
        Ok(record.clone())
    }

    fn apply_session(
        &self,
        user: UserId,
        game: GameType,
        apply: ProgressMutation<'_>,
        stars: u32,
    ) -> StoreResult<(ProgressRecord, u64)> {
        let mut shelves = self.lock()?;
        let record = shelves
            .records
            .entry((user, game))
            .or_insert_with(|| ProgressRecord::fresh(user, game));
        apply(record);
        let record = record.clone();

        let total = shelves.stars.entry(user).or_insert(0);
        *total += u64::from(stars);
        Ok((record, *total))
    }

    fn total_stars(&self, user: UserId) -> StoreResult<u64> {
        Ok(self.lock()?.stars.get(&user).copied().unwrap_or(0))
    }
}
