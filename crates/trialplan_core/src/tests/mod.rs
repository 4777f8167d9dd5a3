//! Integration tests for the trial planning core
//!
//! Tests are organized by topic:
//! - `cost_model` - Budget estimation, breakdown and sensitivity band
//! - `handoff` - Exactly-once planning-to-generation handoff
//! - `validation` - Checks of generated data against the plan
//! - `templates` - Regulatory-phase template loading


use jiff::Timestamp;

use crate::model::{FeasibilityGrade, FeasibilityParameters, FeasibilityResult, PlanningScenario};

/// Scenario built from default feasibility inputs with the given required n
pub(crate) fn scenario_with_n(required_n: u32) -> PlanningScenario {
    let params = FeasibilityParameters::default();
    let result = FeasibilityResult {
        required_n_per_arm: required_n,
        total_n: required_n * 2,
        effect_size_cohens_d: 0.5,
        feasibility: FeasibilityGrade::Feasible,
        interpretation: "Adequately powered".to_string(),
        assumptions: vec!["Normal distribution".to_string()],
        recommendation: "Proceed".to_string(),
    };
    PlanningScenario::from_feasibility("test scenario", &params, &result, Timestamp::UNIX_EPOCH)
}
