//! Event Store - canonical in-memory event collection
//!
//! All state sits behind a single `RwLock`. Writers hold the write lock for
//! their whole validate/merge/commit sequence, so `create`, `update` and
//! `delete` never interleave. Readers get cloned snapshots.

mod crud;
pub mod seed;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::error::DashboardResult;
use crate::types::{EventPatch, InsightEvent, NewEvent};

/// Collection plus the id counter that feeds it
#[derive(Debug)]
pub(crate) struct EventTable {
    pub(crate) events: Vec<InsightEvent>,
    /// Next id to hand out; never decremented, so ids are not reused after delete
    pub(crate) next_id: u64,
}

impl Default for EventTable {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
        }
    }
}

/// Thread-safe, insertion-ordered event repository
#[derive(Debug, Default)]
pub struct EventStore {
    pub(crate) table: RwLock<EventTable>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo dataset, ages measured from `now`
    pub fn with_seed_data(now: DateTime<Utc>) -> DashboardResult<Self> {
        let store = Self::new();
        seed::load_demo_events(&store, now)?;
        Ok(store)
    }

    /// Point-in-time copy of every event, in insertion order
    pub fn all(&self) -> Vec<InsightEvent> {
        self.table.read().events.clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<InsightEvent> {
        self.table.read().events.iter().find(|e| e.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.table.read().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().events.is_empty()
    }
}

// CRUD operations (from crud.rs)
impl EventStore {
    /// Append a new event stamped with the current time
    pub fn create(
        &self,
        fields: NewEvent,
        created_by: Option<String>,
    ) -> DashboardResult<InsightEvent> {
        crud::create(self, fields, created_by, Utc::now())
    }

    /// Append a new event with an explicit creation time
    pub fn create_at(
        &self,
        fields: NewEvent,
        created_by: Option<String>,
        created_at: DateTime<Utc>,
    ) -> DashboardResult<InsightEvent> {
        crud::create(self, fields, created_by, created_at)
    }

    /// Merge `patch` into the event with `id`
    pub fn update(&self, id: &str, patch: EventPatch) -> DashboardResult<InsightEvent> {
        crud::update(self, id, patch, Utc::now())
    }

    /// Remove the event with `id`; `false` when nothing matched
    pub fn delete(&self, id: &str) -> bool {
        crud::delete(self, id)
    }
}
