//! Generation screen: consumes the handoff and requests synthetic data.

use trialplan_core::handoff::{PlanningScenarioStore, apply_pending};
use trialplan_core::model::{GeneratedStudy, GenerationForm, PlanningScenario};

use crate::services::{GenerationService, ServiceResult};
use crate::state::{AppError, RequestGate, RequestTicket, StatusMessage};

const GENERATE_OPERATION: &str = "Data generation";

#[derive(Debug, Default)]
pub struct GenerationScreen {
    pub form: GenerationForm,
    /// Scenario applied on entry. Kept for display after the store is cleared.
    pub applied_scenario: Option<PlanningScenario>,
    pub dataset: Option<GeneratedStudy>,
    pub message: Option<StatusMessage>,
    gate: RequestGate,
}

impl GenerationScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// Screen initialization. The only place the handoff store is consumed,
    /// so auto-fill always precedes any generation request of this visit.
    ///
    /// Returns `true` if a scenario was applied.
    pub fn on_enter(&mut self, store: &mut PlanningScenarioStore) -> bool {
        let Some(applied) = apply_pending(store, &mut self.form) else {
            return false;
        };
        tracing::info!(
            scenario = %applied.scenario.id(),
            fields = applied.fields_applied,
            "applied planning scenario to generation form"
        );
        self.message = Some(StatusMessage::info(format!(
            "Pre-filled from '{}' ({} per arm)",
            applied.scenario.name(),
            self.form.n_per_arm
        )));
        self.applied_scenario = Some(applied.scenario);
        true
    }

    pub fn leave(&mut self) {
        self.gate.invalidate();
    }

    pub fn begin_generation(&mut self) -> Option<RequestTicket> {
        let ticket = self.gate.begin();
        if ticket.is_none() {
            tracing::debug!("generation already in flight");
        }
        ticket
    }

    /// Apply a generation response. Returns `false` if it was stale.
    pub fn finish_generation(
        &mut self,
        ticket: RequestTicket,
        response: ServiceResult<GeneratedStudy>,
    ) -> bool {
        if !self.gate.finish(ticket) {
            tracing::info!(epoch = ticket.epoch(), "discarding stale generation response");
            return false;
        }
        self.message = Some(match response {
            Ok(study) => {
                let text = format!(
                    "Generated {} vitals, {} demographics, {} labs, {} adverse events",
                    study.vitals.len(),
                    study.demographics.len(),
                    study.labs.len(),
                    study.adverse_events.len()
                );
                tracing::info!(records = study.record_count(), "generation complete");
                self.dataset = Some(study);
                StatusMessage::info(text)
            }
            Err(e) => {
                let err = AppError::external(GENERATE_OPERATION, e);
                tracing::warn!("{err}");
                StatusMessage::from(&err)
            }
        });
        true
    }

    pub async fn generate<S: GenerationService>(&mut self, service: &S) {
        let Some(ticket) = self.begin_generation() else {
            return;
        };
        let response = service.generate_comprehensive_study(&self.form).await;
        self.finish_generation(ticket, response);
    }
}
