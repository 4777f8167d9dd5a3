//! PlanningScenario: a feasibility outcome queued for the generation workflow
//!
//! A scenario is immutable once created. Fields are private and exposed through
//! accessors; the builder-style `with_*` methods consume the value and are
//! only usable before it is shared.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::feasibility::{FeasibilityGrade, FeasibilityParameters, FeasibilityResult, TestType};
use super::ids::ScenarioId;

/// Where a scenario came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioSource {
    #[default]
    Feasibility,
}

/// Snapshot of one feasibility outcome.
///
/// Serialized with camelCase keys so payloads round-trip with the scenario
/// persistence service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanningScenario {
    id: ScenarioId,
    name: String,
    timestamp: Timestamp,

    // === Inputs ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    baseline_mean: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    n_per_arm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_effect: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    power: Option<f64>,
    alpha: f64,
    std_dev: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dropout_rate: Option<f64>,
    allocation_ratio: f64,
    #[serde(default)]
    test_type: TestType,

    // === Outputs ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    required_n: Option<u32>,
    cohens_d: f64,
    feasibility_grade: FeasibilityGrade,
    #[serde(default)]
    source: ScenarioSource,

    // === Optional context ===
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    enrollment_scenarios: Vec<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    patient_mix_scenarios: Vec<f64>,
}

impl PlanningScenario {
    /// Package a feasibility result together with the inputs that produced it.
    ///
    /// `n_per_arm` and `required_n` both take the service's required per-arm
    /// count.
    #[must_use]
    pub fn from_feasibility(
        name: impl Into<String>,
        params: &FeasibilityParameters,
        result: &FeasibilityResult,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: ScenarioId::generate(),
            name: name.into(),
            timestamp,
            baseline_mean: Some(params.baseline_mean),
            n_per_arm: Some(result.required_n_per_arm),
            target_effect: Some(params.target_effect),
            power: Some(params.power),
            alpha: params.alpha,
            std_dev: params.std_dev,
            dropout_rate: Some(params.dropout_rate),
            allocation_ratio: params.allocation_ratio,
            test_type: params.test_type,
            required_n: Some(result.required_n_per_arm),
            cohens_d: result.effect_size_cohens_d,
            feasibility_grade: result.feasibility,
            source: ScenarioSource::Feasibility,
            enrollment_scenarios: Vec::new(),
            patient_mix_scenarios: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_enrollment_scenarios(mut self, sizes: Vec<u32>) -> Self {
        self.enrollment_scenarios = sizes;
        self
    }

    #[must_use]
    pub fn with_patient_mix_scenarios(mut self, severities: Vec<f64>) -> Self {
        self.patient_mix_scenarios = severities;
        self
    }

    /// Drop the planned dropout rate (scenarios saved before dropout was tracked)
    #[must_use]
    pub fn without_dropout_rate(mut self) -> Self {
        self.dropout_rate = None;
        self
    }

    /// Drop the planned power
    #[must_use]
    pub fn without_power(mut self) -> Self {
        self.power = None;
        self
    }

    // === Accessors ===

    pub fn id(&self) -> ScenarioId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn baseline_mean(&self) -> Option<f64> {
        self.baseline_mean
    }

    pub fn n_per_arm(&self) -> Option<u32> {
        self.n_per_arm
    }

    pub fn target_effect(&self) -> Option<f64> {
        self.target_effect
    }

    pub fn power(&self) -> Option<f64> {
        self.power
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn dropout_rate(&self) -> Option<f64> {
        self.dropout_rate
    }

    pub fn allocation_ratio(&self) -> f64 {
        self.allocation_ratio
    }

    pub fn test_type(&self) -> TestType {
        self.test_type
    }

    pub fn required_n(&self) -> Option<u32> {
        self.required_n
    }

    pub fn cohens_d(&self) -> f64 {
        self.cohens_d
    }

    pub fn feasibility_grade(&self) -> FeasibilityGrade {
        self.feasibility_grade
    }

    pub fn source(&self) -> ScenarioSource {
        self.source
    }

    pub fn enrollment_scenarios(&self) -> &[u32] {
        &self.enrollment_scenarios
    }

    pub fn patient_mix_scenarios(&self) -> &[f64] {
        &self.patient_mix_scenarios
    }

    /// Planned per-arm count: `n_per_arm`, else `required_n`, else 0
    pub fn planned_n(&self) -> u32 {
        self.n_per_arm.or(self.required_n).unwrap_or(0)
    }

    /// Rebuild the feasibility inputs this scenario was created from.
    ///
    /// Optional inputs missing from the scenario (older payloads) keep their
    /// value from `current`.
    pub fn feasibility_parameters(&self, current: &FeasibilityParameters) -> FeasibilityParameters {
        FeasibilityParameters {
            baseline_mean: self.baseline_mean.unwrap_or(current.baseline_mean),
            target_effect: self.target_effect.unwrap_or(current.target_effect),
            std_dev: self.std_dev,
            alpha: self.alpha,
            power: self.power.unwrap_or(current.power),
            dropout_rate: self.dropout_rate.unwrap_or(current.dropout_rate),
            allocation_ratio: self.allocation_ratio,
            test_type: self.test_type,
        }
    }

    /// Rebuild the feasibility verdict carried by this scenario, if it has a
    /// required sample size.
    pub fn feasibility_result(&self) -> Option<FeasibilityResult> {
        let required = self.required_n.or(self.n_per_arm)?;
        Some(FeasibilityResult {
            required_n_per_arm: required,
            total_n: required.saturating_mul(2),
            effect_size_cohens_d: self.cohens_d,
            feasibility: self.feasibility_grade,
            interpretation: String::new(),
            assumptions: Vec::new(),
            recommendation: String::new(),
        })
    }
}
