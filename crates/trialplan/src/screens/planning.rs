//! Planning screen: feasibility assessment and scenario packaging.

use jiff::Timestamp;
use trialplan_core::handoff::PlanningScenarioStore;
use trialplan_core::model::{FeasibilityResult, PlanningScenario, ScenarioId};
use trialplan_core::templates::{PlanningInputs, TemplateSpec, load_template};

use crate::services::{FeasibilityService, ScenarioListing, ScenarioMetadata, ScenarioPersistence};
use crate::state::{AppError, AppResult, RequestGate, RequestTicket, StatusMessage};

const ASSESS_OPERATION: &str = "Feasibility assessment";
const SAVE_OPERATION: &str = "Saving scenarios";
const LIST_OPERATION: &str = "Listing saved scenarios";
const LOAD_OPERATION: &str = "Loading saved scenarios";

#[derive(Debug, Default)]
pub struct PlanningScreen {
    pub inputs: PlanningInputs,
    pub scenario_name: String,
    pub result: Option<FeasibilityResult>,
    pub saved_scenarios: Vec<ScenarioListing>,
    pub message: Option<StatusMessage>,
    /// Last scenario packaged from the current result. A save and a handoff
    /// of unchanged inputs reuse it, so both carry the same id.
    prepared: Option<PlanningScenario>,
    gate: RequestGate,
}

impl PlanningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.gate.is_busy()
    }

    /// The user navigated away; responses still in flight will be dropped
    pub fn leave(&mut self) {
        self.gate.invalidate();
    }

    fn report(&mut self, outcome: AppResult<String>) {
        self.message = Some(match outcome {
            Ok(text) => StatusMessage::info(text),
            Err(err) => {
                tracing::warn!("planning action failed: {err}");
                StatusMessage::from(&err)
            }
        });
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// Overwrite all planning inputs from a template, or none of them
    pub fn apply_template(&mut self, template: &TemplateSpec) -> AppResult<()> {
        let name = template.name.as_deref().unwrap_or("template");
        match load_template(template, &mut self.inputs) {
            Ok(()) => {
                tracing::info!(template = name, "applied template");
                self.message = Some(StatusMessage::info(format!("Loaded {name}")));
                Ok(())
            }
            Err(e) => {
                let err = AppError::from(e);
                tracing::warn!(template = name, "template rejected: {err}");
                self.message = Some(StatusMessage::from(&err));
                Err(err)
            }
        }
    }

    // =========================================================================
    // Feasibility assessment
    // =========================================================================

    pub fn begin_assessment(&mut self) -> Option<RequestTicket> {
        let ticket = self.gate.begin();
        if ticket.is_none() {
            tracing::debug!("feasibility assessment already in flight");
        }
        ticket
    }

    /// Apply an assessment response. Returns `false` if it was stale.
    pub fn finish_assessment(
        &mut self,
        ticket: RequestTicket,
        response: Result<FeasibilityResult, crate::services::ServiceError>,
    ) -> bool {
        if !self.gate.finish(ticket) {
            tracing::info!(epoch = ticket.epoch(), "discarding stale feasibility response");
            return false;
        }
        let outcome = response
            .map(|result| {
                let text = format!(
                    "{} per arm required ({})",
                    result.required_n_per_arm,
                    result.feasibility.label()
                );
                self.result = Some(result);
                text
            })
            .map_err(|e| AppError::external(ASSESS_OPERATION, e));
        self.report(outcome);
        true
    }

    pub async fn assess<S: FeasibilityService>(&mut self, service: &S) {
        let Some(ticket) = self.begin_assessment() else {
            return;
        };
        let response = service.assess_feasibility(&self.inputs.feasibility).await;
        self.finish_assessment(ticket, response);
    }

    // =========================================================================
    // Handoff
    // =========================================================================

    /// Package the current result as a scenario, reusing the last one built
    /// while name, inputs and result are unchanged
    pub fn build_scenario(&mut self) -> AppResult<PlanningScenario> {
        let result = self
            .result
            .as_ref()
            .ok_or(AppError::MissingPrecondition(
                "Run a feasibility assessment before using it for generation",
            ))?;
        let name = if self.scenario_name.trim().is_empty() {
            format!("Feasibility {}", result.required_n_per_arm)
        } else {
            self.scenario_name.trim().to_string()
        };

        if let Some(prepared) = &self.prepared
            && prepared_matches(prepared, &name, &self.inputs, result)
        {
            return Ok(prepared.clone());
        }

        let scenario =
            PlanningScenario::from_feasibility(name, &self.inputs.feasibility, result, Timestamp::now())
                .with_enrollment_scenarios(self.inputs.enrollment_scenarios.clone())
                .with_patient_mix_scenarios(self.inputs.patient_mix_scenarios.clone());
        tracing::debug!(scenario = %scenario.id(), "packaged planning scenario");
        self.prepared = Some(scenario.clone());
        Ok(scenario)
    }

    /// Queue the current result for the generation screen
    pub fn use_for_generation(&mut self, store: &mut PlanningScenarioStore) -> AppResult<ScenarioId> {
        let scenario = match self.build_scenario() {
            Ok(scenario) => scenario,
            Err(err) => {
                self.message = Some(StatusMessage::from(&err));
                return Err(err);
            }
        };
        let id = scenario.id();
        tracing::info!(scenario = %id, n_per_arm = ?scenario.n_per_arm(), "queued scenario for generation");
        if store.set(scenario).is_some() {
            tracing::debug!("replaced an unconsumed scenario");
        }
        self.message = Some(StatusMessage::info("Scenario sent to data generation"));
        Ok(id)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    pub async fn save_scenario<P: ScenarioPersistence>(&mut self, persistence: &P) {
        if self.scenario_name.trim().is_empty() {
            self.report(Err(AppError::MissingPrecondition("Enter a scenario name first")));
            return;
        }
        let scenario = match self.build_scenario() {
            Ok(scenario) => scenario,
            Err(err) => {
                self.report(Err(err));
                return;
            }
        };
        let Some(ticket) = self.gate.begin() else {
            return;
        };

        let metadata = ScenarioMetadata::for_scenario(&scenario);
        let response = persistence
            .save_planning_scenario(scenario.name(), &scenario, &metadata)
            .await;
        if !self.gate.finish(ticket) {
            tracing::info!(epoch = ticket.epoch(), "discarding stale persistence response");
            return;
        }
        let outcome = response
            .map(|saved| format!("Saved '{}' ({})", scenario.name(), saved.id))
            .map_err(|e| AppError::external(SAVE_OPERATION, e));
        self.report(outcome);
    }

    pub async fn refresh_saved<P: ScenarioPersistence>(&mut self, persistence: &P) {
        let Some(ticket) = self.gate.begin() else {
            return;
        };
        let response = persistence.list_planning_scenarios().await;
        if !self.gate.finish(ticket) {
            tracing::info!(epoch = ticket.epoch(), "discarding stale persistence response");
            return;
        }
        let outcome = response
            .map(|listing| {
                let text = format!("{} saved scenarios", listing.len());
                self.saved_scenarios = listing;
                text
            })
            .map_err(|e| AppError::external(LIST_OPERATION, e));
        self.report(outcome);
    }

    /// Restore inputs and result from a saved scenario
    pub async fn load_saved<P: ScenarioPersistence>(&mut self, persistence: &P, id: &str) {
        let Some(ticket) = self.gate.begin() else {
            return;
        };
        let response = persistence.load_planning_scenario_by_id(id).await;
        if !self.gate.finish(ticket) {
            tracing::info!(epoch = ticket.epoch(), "discarding stale persistence response");
            return;
        }
        let outcome = response
            .map(|stored| {
                let scenario = stored.data;
                self.inputs.feasibility = scenario.feasibility_parameters(&self.inputs.feasibility);
                if !scenario.enrollment_scenarios().is_empty() {
                    self.inputs.enrollment_scenarios = scenario.enrollment_scenarios().to_vec();
                }
                if !scenario.patient_mix_scenarios().is_empty() {
                    self.inputs.patient_mix_scenarios = scenario.patient_mix_scenarios().to_vec();
                }
                self.result = scenario.feasibility_result();
                self.scenario_name = stored.dataset_name.clone();
                format!("Loaded '{}' from {}", stored.dataset_name, stored.created_at)
            })
            .map_err(|e| AppError::external(LOAD_OPERATION, e));
        self.report(outcome);
    }
}

fn prepared_matches(
    prepared: &PlanningScenario,
    name: &str,
    inputs: &PlanningInputs,
    result: &FeasibilityResult,
) -> bool {
    prepared.name() == name
        && prepared.feasibility_parameters(&inputs.feasibility) == inputs.feasibility
        && prepared.enrollment_scenarios() == inputs.enrollment_scenarios.as_slice()
        && prepared.patient_mix_scenarios() == inputs.patient_mix_scenarios.as_slice()
        && prepared.required_n() == Some(result.required_n_per_arm)
        && prepared.cohens_d() == result.effect_size_cohens_d
        && prepared.feasibility_grade() == result.feasibility
}
