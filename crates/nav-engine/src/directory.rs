//! Patient directory collaborator contract.
//!
//! Admissions data lives outside this engine (a database behind some CRUD
//! service); routing only needs a lookup by patient id.  The trait keeps the
//! engine testable with an in-memory table and lets the application crate
//! plug in whatever store it actually runs.

use rustc_hash::FxHashMap;
use serde::Serialize;

use nav_core::Label;

/// One admitted patient, as the navigation engine sees them.
#[derive(Clone, Debug, Serialize)]
pub struct PatientRecord {
    pub id: String,
    pub name: Label,
    /// Ward display name.
    pub ward: Label,
    /// Room code, resolvable through the graph's room index.
    pub room: String,
    pub floor: i16,
    pub bed: String,
    /// Department name used for provider-destination matching, e.g. `"ICU"`.
    pub department: String,
    pub doctor: Label,
    pub condition: Label,
}

/// Lookup interface the engine consumes.
pub trait PatientDirectory: Send + Sync {
    fn patient(&self, id: &str) -> Option<&PatientRecord>;
}

/// In-memory directory for demos and tests.
#[derive(Default)]
pub struct StaticDirectory {
    patients: FxHashMap<String, PatientRecord>,
}

impl StaticDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its id.  Replaces any previous entry.
    pub fn insert(&mut self, record: PatientRecord) {
        self.patients.insert(record.id.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

impl PatientDirectory for StaticDirectory {
    fn patient(&self, id: &str) -> Option<&PatientRecord> {
        self.patients.get(id)
    }
}
