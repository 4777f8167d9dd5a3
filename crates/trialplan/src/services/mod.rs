//! External service contracts.
//!
//! Power calculation, data generation and scenario persistence all happen in
//! backend services. Each concern is a trait so screens can be driven by the
//! HTTP client in [`http`] or by in-memory fakes in tests.
//!
//! The traits use `async fn` without `Send` bounds: requests are awaited on a
//! single-threaded runtime and never spawned.

#![allow(async_fn_in_trait)]

pub mod http;

use serde::{Deserialize, Serialize};
use trialplan_core::model::{
    FeasibilityParameters, FeasibilityResult, GeneratedStudy, GenerationForm, PlanningScenario,
};

pub use http::HttpServices;

/// Failure reported by (or while reaching) an external service
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("could not reach service: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// HTTP status, when the service answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The endpoint does not exist (yet) on the backend
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Metadata stored alongside a saved planning scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMetadata {
    pub source: String,
    pub feasibility: String,
    pub n_per_arm: Option<u32>,
    pub scenario_id: String,
}

impl ScenarioMetadata {
    pub fn for_scenario(scenario: &PlanningScenario) -> Self {
        Self {
            source: "feasibility".to_string(),
            feasibility: scenario.feasibility_grade().label().to_string(),
            n_per_arm: scenario.n_per_arm(),
            scenario_id: scenario.id().to_string(),
        }
    }
}

/// One row of the saved-scenario listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioListing {
    pub id: String,
    pub dataset_name: String,
    pub created_at: String,
    #[serde(default)]
    pub record_count: u64,
}

/// A saved scenario as returned by the persistence service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredScenario {
    pub data: PlanningScenario,
    pub dataset_name: String,
    pub created_at: String,
}

/// Acknowledgement of a save
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedScenario {
    pub id: String,
}

pub trait FeasibilityService {
    async fn assess_feasibility(
        &self,
        params: &FeasibilityParameters,
    ) -> ServiceResult<FeasibilityResult>;
}

pub trait GenerationService {
    async fn generate_comprehensive_study(
        &self,
        params: &GenerationForm,
    ) -> ServiceResult<GeneratedStudy>;
}

pub trait ScenarioPersistence {
    async fn save_planning_scenario(
        &self,
        name: &str,
        payload: &PlanningScenario,
        metadata: &ScenarioMetadata,
    ) -> ServiceResult<SavedScenario>;

    async fn list_planning_scenarios(&self) -> ServiceResult<Vec<ScenarioListing>>;

    async fn load_planning_scenario_by_id(&self, id: &str) -> ServiceResult<StoredScenario>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use trialplan_core::model::FeasibilityGrade;

    #[test]
    fn test_decode_feasibility_response() {
        let body = r#"{
            "required_n_per_arm": 64,
            "total_n": 142,
            "effect_size_cohens_d": 0.5,
            "feasibility": "Highly Feasible",
            "interpretation": "Medium effect",
            "assumptions": ["Normal distribution"],
            "recommendation": "Proceed"
        }"#;
        let result: FeasibilityResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.required_n_per_arm, 64);
        assert_eq!(result.feasibility, FeasibilityGrade::HighlyFeasible);
    }

    #[test]
    fn test_decode_generated_study_ignores_extra_columns() {
        let body = r#"{
            "vitals": [
                {"SubjectID": "RA001-001", "TreatmentArm": "Active", "VisitName": "Week 4", "SystolicBP": 138.0, "Temperature": 36.6}
            ],
            "demographics": [{"SubjectID": "RA001-001", "Age": 54}],
            "ae": "not a domain we read"
        }"#;
        let study: GeneratedStudy = serde_json::from_str(body).unwrap();
        assert_eq!(study.vitals.len(), 1);
        assert_eq!(study.vitals[0].arm, "Active");
        assert_eq!(study.record_count(), 2);
    }

    #[test]
    fn test_listing_without_record_count() {
        let body = r#"[{"id": "abc", "dataset_name": "Pilot", "created_at": "2026-01-01T00:00:00Z"}]"#;
        let listing: Vec<ScenarioListing> = serde_json::from_str(body).unwrap();
        assert_eq!(listing[0].record_count, 0);
    }
}
