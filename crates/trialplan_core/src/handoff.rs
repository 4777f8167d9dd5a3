//! Planning-to-generation handoff
//!
//! [`PlanningScenarioStore`] carries at most one [`PlanningScenario`] from the
//! planning workflow to the generation workflow:
//!
//! ```text
//! EMPTY --set--> FILLED --consume--> EMPTY
//! ```
//!
//! `set` replaces unconditionally. `consume_if_present` reads and clears, so
//! each `set` results in at most one automatic application. The store is an
//! ordinary value: the owner passes it by reference to whichever screen needs
//! it.

use crate::model::{GenerationForm, GenerationPatch, PlanningScenario};

/// Observable state of the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffState {
    Empty,
    Filled,
}

#[derive(Debug, Default)]
pub struct PlanningScenarioStore {
    pending: Option<PlanningScenario>,
}

impl PlanningScenarioStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HandoffState {
        if self.pending.is_some() {
            HandoffState::Filled
        } else {
            HandoffState::Empty
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }

    /// Queue a scenario, returning the one it replaced (last writer wins)
    pub fn set(&mut self, scenario: PlanningScenario) -> Option<PlanningScenario> {
        self.pending.replace(scenario)
    }

    /// Take the queued scenario, leaving the store empty.
    ///
    /// Returns `None` when nothing is queued.
    pub fn consume_if_present(&mut self) -> Option<PlanningScenario> {
        self.pending.take()
    }

    /// Look at the queued scenario without consuming it
    pub fn peek(&self) -> Option<&PlanningScenario> {
        self.pending.as_ref()
    }

    /// Discard the queued scenario without applying it
    pub fn clear(&mut self) {
        self.pending = None;
    }
}

/// Result of consuming the store into a generation form
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedHandoff {
    pub scenario: PlanningScenario,
    pub patch: GenerationPatch,
    pub fields_applied: usize,
}

/// Consume the store (if filled) and merge the scenario into `form`.
///
/// Only fields present on the scenario overwrite the form.
pub fn apply_pending(
    store: &mut PlanningScenarioStore,
    form: &mut GenerationForm,
) -> Option<AppliedHandoff> {
    let scenario = store.consume_if_present()?;
    let patch = GenerationPatch::from_scenario(&scenario);
    let fields_applied = patch.apply_to(form);
    Some(AppliedHandoff {
        scenario,
        patch,
        fields_applied,
    })
}
