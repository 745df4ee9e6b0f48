//! Data types for presence tracking.
//!
//! Defines the core data structures for storing per-user, per-date
//! presence records parsed from the CSV source.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of an employee in the presence source.
pub type UserId = u32;

/// One user's logged presence for a single date.
///
/// There is at most one record per `(user, date)` pair; later rows in the
/// source overwrite earlier ones. Nothing guarantees `start <= end`, so
/// derived intervals may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceRecord {
    /// Time the user clocked in.
    pub start: NaiveTime,

    /// Time the user clocked out.
    pub end: NaiveTime,
}

impl PresenceRecord {
    /// Creates a record from clock-in and clock-out times.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

/// A single user's records, keyed by date.
///
/// `BTreeMap` gives deterministic date order, which downstream grouping
/// and the tests rely on.
pub type DayRecords = BTreeMap<NaiveDate, PresenceRecord>;

/// The full parsed dataset: every user's date-keyed records.
///
/// Built fresh on each parse and immutable afterwards. The cache owns the
/// store; handlers receive `Arc` snapshots and only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceStore {
    users: BTreeMap<UserId, DayRecords>,
}

impl PresenceStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the record for `(user_id, date)`.
    pub fn insert(&mut self, user_id: UserId, date: NaiveDate, record: PresenceRecord) {
        self.users.entry(user_id).or_default().insert(date, record);
    }

    /// Returns a user's records, or `None` if the user is absent.
    ///
    /// Absence is the only domain condition callers need to detect; the
    /// HTTP layer maps it to 404.
    pub fn records_for(&self, user_id: UserId) -> Option<&DayRecords> {
        self.users.get(&user_id)
    }

    /// All known user ids in ascending order.
    pub fn user_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.users.keys().copied()
    }

    /// Number of users present in the store.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Total number of `(user, date)` records.
    pub fn record_count(&self) -> usize {
        self.users.values().map(BTreeMap::len).sum()
    }

    /// True when the store holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
