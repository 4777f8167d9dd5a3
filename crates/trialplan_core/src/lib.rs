//! Clinical trial planning core library
//!
//! This crate holds the pure, synchronous parts of the trial planning
//! workflow:
//! - Trial budget estimation with a category breakdown and sensitivity band
//! - The planning-to-generation handoff store (exactly-once consumption)
//! - Validation of generated datasets against the originating plan
//! - Regulatory-phase templates that seed the planning parameters
//!
//! Power calculations, data generation and persistence are performed by
//! external services; this crate only defines the values passed around them.
//!
//! # Example
//!
//! ```ignore
//! use trialplan_core::cost::estimate;
//! use trialplan_core::model::CostParameters;
//!
//! let estimate = estimate(&CostParameters::default(), None)?;
//! assert_eq!(estimate.total_patients, 200);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod cost;
pub mod error;
pub mod handoff;
pub mod templates;
pub mod thresholds;
pub mod validation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use cost::{estimate, estimate_for_scenario};
pub use error::{CostError, TemplateError};
pub use handoff::{AppliedHandoff, HandoffState, PlanningScenarioStore, apply_pending};
pub use templates::{PlanningInputs, RegulatoryPhase, TemplateSpec, load_template};
pub use validation::{ValidationReport, validate};
