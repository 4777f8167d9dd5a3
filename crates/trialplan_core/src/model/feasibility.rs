//! Feasibility assessment request and response types
//!
//! The power calculation itself happens server-side; these types only carry
//! parameters to the assessment service and its verdict back.

use serde::{Deserialize, Serialize};

/// Hypothesis test sidedness. Only two-sided tests are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TestType {
    #[default]
    TwoSided,
}

impl TestType {
    pub fn label(&self) -> &'static str {
        match self {
            TestType::TwoSided => "two-sided",
        }
    }
}

/// Categorical verdict returned by the feasibility service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeasibilityGrade {
    #[serde(rename = "Highly Feasible")]
    HighlyFeasible,
    #[serde(rename = "Feasible")]
    Feasible,
    #[serde(rename = "Challenging")]
    Challenging,
    #[serde(rename = "Not Feasible")]
    NotFeasible,
    /// Any label outside the known set
    #[default]
    #[serde(other)]
    Unknown,
}

impl FeasibilityGrade {
    pub fn label(&self) -> &'static str {
        match self {
            FeasibilityGrade::HighlyFeasible => "Highly Feasible",
            FeasibilityGrade::Feasible => "Feasible",
            FeasibilityGrade::Challenging => "Challenging",
            FeasibilityGrade::NotFeasible => "Not Feasible",
            FeasibilityGrade::Unknown => "Unknown",
        }
    }
}

/// Inputs to the feasibility assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityParameters {
    /// Baseline systolic blood pressure (mmHg)
    pub baseline_mean: f64,
    /// Expected treatment difference (mmHg, negative = reduction)
    pub target_effect: f64,
    pub std_dev: f64,
    pub alpha: f64,
    pub power: f64,
    pub dropout_rate: f64,
    /// Treatment:control allocation (1.0 = 1:1)
    pub allocation_ratio: f64,
    #[serde(default)]
    pub test_type: TestType,
}

impl Default for FeasibilityParameters {
    fn default() -> Self {
        Self {
            baseline_mean: 140.0,
            target_effect: -5.0,
            std_dev: 10.0,
            alpha: 0.05,
            power: 0.8,
            dropout_rate: 0.1,
            allocation_ratio: 1.0,
            test_type: TestType::TwoSided,
        }
    }
}

/// Verdict of the feasibility service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityResult {
    pub required_n_per_arm: u32,
    pub total_n: u32,
    pub effect_size_cohens_d: f64,
    pub feasibility: FeasibilityGrade,
    #[serde(default)]
    pub interpretation: String,
    #[serde(default)]
    pub assumptions: Vec<String>,
    #[serde(default)]
    pub recommendation: String,
}
