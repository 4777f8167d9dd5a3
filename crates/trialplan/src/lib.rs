//! Trial planning workflow
//!
//! Screens and session state that carry a feasibility assessment through to
//! synthetic data generation, cost estimation and quality checks:
//! - Planning: templates, feasibility assessment, scenario save/load
//! - Data Generation: consumes the queued planning scenario exactly once
//! - Quality: plan-vs-data sample size, power and effect size checks
//! - Cost: local budget estimate, sized from the active scenario
//!
//! Numeric work lives in `trialplan_core`; everything remote goes through the
//! traits in [`services`].

// ============================================================================
// Application modules
// ============================================================================

pub mod data;
pub mod screens;
pub mod services;
pub mod state;
pub mod util;

#[cfg(feature = "native")]
mod logging;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

#[cfg(feature = "native")]
pub use logging::init_logging;
pub use services::{HttpServices, ServiceError};
pub use state::{AppError, AppState, ScreenId};
