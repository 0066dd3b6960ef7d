//! # Run Records
//!
//! Container for completed simulation runs so shells can keep a session
//! history and persist it as JSON. The engine itself stays stateless;
//! records are created by callers from an input and its result.
//!
//! ## Structure
//!
//! ```text
//! RunHistory
//! └── runs: HashMap<Uuid, RunRecord> (input + result + timestamp)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use sim_core::beam::{BeamGeometry, BeamType, LoadCase, LoadType};
//! use sim_core::record::RunHistory;
//! use sim_core::simulation::{simulate, SimulationInput};
//!
//! let input = SimulationInput::new(
//!     BeamGeometry::new(5.0, 0.2, 0.3),
//!     LoadCase::new(BeamType::SimplySupported, LoadType::Point, 10.0),
//!     200.0,
//!     "Structural Steel",
//! );
//! let result = simulate(&input).unwrap();
//!
//! let mut history = RunHistory::new();
//! let id = history.add("B-1", input, result);
//! assert!(history.get(&id).is_some());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::simulation::{SimulationInput, SimulationResult};

/// One completed simulation run with its inputs and timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Stable identifier for cross-references
    pub id: Uuid,

    /// User label (e.g., "B-1", "Roof beam at grid C")
    pub label: String,

    /// When the run was recorded
    pub created: DateTime<Utc>,

    /// The inputs that produced this result
    pub input: SimulationInput,

    /// The complete simulation outcome
    pub result: SimulationResult,
}

/// UUID-keyed collection of runs.
///
/// A flat map gives O(1) lookup and stable references when the UI
/// reorders its listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunHistory {
    pub runs: HashMap<Uuid, RunRecord>,
}

impl RunHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        RunHistory::default()
    }

    /// Record a completed run. Returns the UUID assigned to it.
    pub fn add(
        &mut self,
        label: impl Into<String>,
        input: SimulationInput,
        result: SimulationResult,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.runs.insert(
            id,
            RunRecord {
                id,
                label: label.into(),
                created: Utc::now(),
                input,
                result,
            },
        );
        id
    }

    /// Look up a run by id.
    pub fn get(&self, id: &Uuid) -> Option<&RunRecord> {
        self.runs.get(id)
    }

    /// Remove a run, returning it if present.
    pub fn remove(&mut self, id: &Uuid) -> Option<RunRecord> {
        self.runs.remove(id)
    }

    /// Number of recorded runs.
    pub fn len(&self) -> usize {
        self.runs.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Labels of all runs, most recent first.
    pub fn labels(&self) -> Vec<&str> {
        let mut records: Vec<&RunRecord> = self.runs.values().collect();
        records.sort_by(|a, b| b.created.cmp(&a.created));
        records.iter().map(|r| r.label.as_str()).collect()
    }
}
