//! Cost screen: trial budget from locally held parameters.

use trialplan_core::cost::estimate_for_scenario;
use trialplan_core::model::{CostEstimate, CostParameters, NPerArmSource, PlanningScenario};

use crate::state::{AppError, StatusMessage};
use crate::util::format::format_currency_short;

#[derive(Debug, Default)]
pub struct CostScreen {
    pub params: CostParameters,
    pub estimate: Option<CostEstimate>,
    pub message: Option<StatusMessage>,
}

impl CostScreen {
    pub fn new(params: CostParameters) -> Self {
        Self {
            params,
            estimate: None,
            message: None,
        }
    }

    /// Recompute the estimate. With an active scenario its `required_n`
    /// overrides the entered per-arm count for this computation only.
    ///
    /// On invalid parameters the previous estimate is discarded rather than
    /// left on screen next to the error.
    pub fn calculate(&mut self, active: Option<&PlanningScenario>) {
        match estimate_for_scenario(&self.params, active) {
            Ok(estimate) => {
                tracing::debug!(total = estimate.total_cost, n_per_arm = estimate.n_per_arm, "cost estimate");
                let text = match estimate.n_source {
                    NPerArmSource::PlanningScenario => format!(
                        "Total {} using {} per arm from the planning scenario",
                        format_currency_short(estimate.total_cost),
                        estimate.n_per_arm
                    ),
                    NPerArmSource::Manual => {
                        format!("Total {}", format_currency_short(estimate.total_cost))
                    }
                };
                self.message = Some(StatusMessage::info(text));
                self.estimate = Some(estimate);
            }
            Err(e) => {
                let err = AppError::from(e);
                tracing::warn!("{err}");
                self.message = Some(StatusMessage::from(&err));
                self.estimate = None;
            }
        }
    }
}
