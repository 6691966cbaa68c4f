//! In-memory keyed record store
//!
//! A [`Collection`] stores one record type keyed by [`RecordId`] behind a
//! `parking_lot::RwLock`. Readers take the shared lock and clone out
//! snapshots; writers take the exclusive lock, so an operation never observes
//! a record mid-mutation. Index-style queries (`find`, `find_unique`) are
//! linear scans; collection sizes in this system are rosters and event
//! buffers, not datasets.

use crate::utils::error::{OpsError, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Opaque record identifier assigned at insert time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for RecordId {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| OpsError::Validation(format!("invalid record id: {}", e)))
    }
}

/// A record that can live in a [`Collection`]
pub trait Document: Clone + Send + Sync + 'static {
    /// The record's storage key
    fn id(&self) -> RecordId;
}

/// Typed in-memory collection of records
#[derive(Debug)]
pub struct Collection<T> {
    name: &'static str,
    records: RwLock<HashMap<RecordId, T>>,
}

impl<T: Document> Collection<T> {
    /// Create an empty collection
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Collection name (mirrors the reference table name)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Insert a record, failing if its id is already present
    pub fn insert(&self, doc: T) -> Result<RecordId> {
        let id = doc.id();
        let mut records = self.records.write();
        if records.contains_key(&id) {
            return Err(OpsError::AlreadyExists(format!(
                "{}: record {} already exists",
                self.name, id
            )));
        }
        records.insert(id, doc);
        Ok(id)
    }

    /// Insert a record, failing if any existing record matches `conflict`.
    ///
    /// The conflict scan and the insert happen under one write lock, so this
    /// is the uniqueness-enforcing insert (e.g. one profile per user id).
    pub fn insert_unique_by<P>(&self, doc: T, conflict: P) -> Result<RecordId>
    where
        P: Fn(&T) -> bool,
    {
        let mut records = self.records.write();
        if records.values().any(|r| conflict(r)) {
            return Err(OpsError::AlreadyExists(format!(
                "{}: conflicting record already exists",
                self.name
            )));
        }
        let id = doc.id();
        records.insert(id, doc);
        Ok(id)
    }

    /// Fetch a record by id
    pub fn get(&self, id: RecordId) -> Option<T> {
        self.records.read().get(&id).cloned()
    }

    /// Apply a mutation to a record in place, returning the updated record
    pub fn patch<F>(&self, id: RecordId, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut T),
    {
        let mut records = self.records.write();
        match records.get_mut(&id) {
            Some(record) => {
                mutate(record);
                Ok(record.clone())
            }
            None => Err(OpsError::NotFound(format!(
                "{}: record {} not found",
                self.name, id
            ))),
        }
    }

    /// Delete a record by id
    pub fn delete(&self, id: RecordId) -> Result<()> {
        let mut records = self.records.write();
        records.remove(&id).map(|_| ()).ok_or_else(|| {
            OpsError::NotFound(format!("{}: record {} not found", self.name, id))
        })
    }

    /// Snapshot of every record, order unspecified
    pub fn all(&self) -> Vec<T> {
        self.records.read().values().cloned().collect()
    }

    /// Records matching a predicate (index-scan equivalent)
    pub fn find<P>(&self, pred: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records
            .read()
            .values()
            .filter(|r| pred(r))
            .cloned()
            .collect()
    }

    /// The single record matching a predicate, if any.
    ///
    /// Assumes the predicate corresponds to a uniqueness-indexed lookup; with
    /// duplicates present (an invariant violation upstream) an arbitrary
    /// match is returned.
    pub fn find_unique<P>(&self, pred: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.records.read().values().find(|r| pred(r)).cloned()
    }

    /// Count records matching a predicate
    pub fn count<P>(&self, pred: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        self.records.read().values().filter(|r| pred(r)).count()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Replace the entire contents with `docs` under one write lock.
    ///
    /// Readers observe either the previous or the new state, never a partial
    /// mix. Not crash-atomic, as there is no durability layer to recover from.
    pub fn replace_all(&self, docs: Vec<T>) {
        let mut records = self.records.write();
        records.clear();
        for doc in docs {
            records.insert(doc.id(), doc);
        }
    }

    /// Run a closure with exclusive access to the record map.
    ///
    /// For compound check-then-act sections that must not interleave with
    /// other writers (e.g. the first-admin bootstrap decision).
    pub(crate) fn with_exclusive<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&mut HashMap<RecordId, T>) -> R,
    {
        let mut records = self.records.write();
        f(&mut records)
    }
}
