//! Regulatory-phase templates for the planning workflow
//!
//! A template seeds three independent parameter groups at once: feasibility
//! parameters, the enrollment-scenario list and the patient-mix list.
//! Templates may come from user files, so every field is optional at the
//! type level and checked by [`load_template`] before anything is assigned.

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;
use crate::model::{FeasibilityParameters, TestType};

/// Parameter groups owned by the planning screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningInputs {
    pub feasibility: FeasibilityParameters,
    pub enrollment_scenarios: Vec<u32>,
    pub patient_mix_scenarios: Vec<f64>,
}

impl Default for PlanningInputs {
    fn default() -> Self {
        Self {
            feasibility: FeasibilityParameters::default(),
            enrollment_scenarios: vec![50, 100, 150, 200],
            patient_mix_scenarios: vec![140.0, 150.0, 160.0],
        }
    }
}

/// Feasibility section of a template, as written in a template file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeasibilitySpec {
    #[serde(default)]
    pub baseline_mean: Option<f64>,
    #[serde(default)]
    pub target_effect: Option<f64>,
    #[serde(default)]
    pub std_dev: Option<f64>,
    #[serde(default)]
    pub alpha: Option<f64>,
    #[serde(default)]
    pub power: Option<f64>,
    #[serde(default)]
    pub dropout_rate: Option<f64>,
    #[serde(default)]
    pub allocation_ratio: Option<f64>,
}

/// A template as written in a file or built in
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TemplateSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub feasibility: Option<FeasibilitySpec>,
    #[serde(default)]
    pub enrollment_scenarios: Option<Vec<u32>>,
    #[serde(default)]
    pub patient_mix_scenarios: Option<Vec<f64>>,
}

impl TemplateSpec {
    /// Check every field and produce the complete parameter groups
    pub fn validate(&self) -> Result<PlanningInputs, TemplateError> {
        let spec = self
            .feasibility
            .as_ref()
            .ok_or(TemplateError::MissingField("feasibility"))?;

        let feasibility = FeasibilityParameters {
            baseline_mean: check(spec.baseline_mean, "baseline_mean", "> 0", |v| v > 0.0)?,
            target_effect: check(spec.target_effect, "target_effect", "non-zero", |v| v != 0.0)?,
            std_dev: check(spec.std_dev, "std_dev", "> 0", |v| v > 0.0)?,
            alpha: check(spec.alpha, "alpha", "in (0, 1)", |v| v > 0.0 && v < 1.0)?,
            power: check(spec.power, "power", "in (0, 1]", |v| v > 0.0 && v <= 1.0)?,
            dropout_rate: check(spec.dropout_rate, "dropout_rate", "in [0, 1)", |v| {
                (0.0..1.0).contains(&v)
            })?,
            allocation_ratio: check(spec.allocation_ratio, "allocation_ratio", "> 0", |v| v > 0.0)?,
            test_type: TestType::TwoSided,
        };

        let enrollment_scenarios = self
            .enrollment_scenarios
            .clone()
            .ok_or(TemplateError::MissingField("enrollment_scenarios"))?;
        if enrollment_scenarios.is_empty() {
            return Err(TemplateError::EmptyList("enrollment_scenarios"));
        }
        if enrollment_scenarios.contains(&0) {
            return Err(TemplateError::OutOfRange {
                field: "enrollment_scenarios",
                value: 0.0,
                expected: "> 0",
            });
        }

        let patient_mix_scenarios = self
            .patient_mix_scenarios
            .clone()
            .ok_or(TemplateError::MissingField("patient_mix_scenarios"))?;
        if patient_mix_scenarios.is_empty() {
            return Err(TemplateError::EmptyList("patient_mix_scenarios"));
        }
        for &severity in &patient_mix_scenarios {
            if !severity.is_finite() || severity <= 0.0 {
                return Err(TemplateError::OutOfRange {
                    field: "patient_mix_scenarios",
                    value: severity,
                    expected: "> 0",
                });
            }
        }

        Ok(PlanningInputs {
            feasibility,
            enrollment_scenarios,
            patient_mix_scenarios,
        })
    }
}

fn check(
    value: Option<f64>,
    field: &'static str,
    expected: &'static str,
    in_range: impl Fn(f64) -> bool,
) -> Result<f64, TemplateError> {
    let value = value.ok_or(TemplateError::MissingField(field))?;
    if value.is_finite() && in_range(value) {
        Ok(value)
    } else {
        Err(TemplateError::OutOfRange {
            field,
            value,
            expected,
        })
    }
}

/// Overwrite all three parameter groups of `target` from `template`.
///
/// The template is validated completely first; on error `target` is left
/// exactly as it was.
pub fn load_template(template: &TemplateSpec, target: &mut PlanningInputs) -> Result<(), TemplateError> {
    let validated = template.validate()?;
    *target = validated;
    Ok(())
}

// ============================================================================
// Built-in templates
// ============================================================================

/// Built-in templates keyed by regulatory phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegulatoryPhase {
    Phase1,
    Phase2,
    Phase3,
}

impl RegulatoryPhase {
    pub const ALL: [RegulatoryPhase; 3] = [
        RegulatoryPhase::Phase1,
        RegulatoryPhase::Phase2,
        RegulatoryPhase::Phase3,
    ];

    /// Short name used to select the template
    pub fn key(&self) -> &'static str {
        match self {
            RegulatoryPhase::Phase1 => "phase1",
            RegulatoryPhase::Phase2 => "phase2",
            RegulatoryPhase::Phase3 => "phase3",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|phase| phase.key().eq_ignore_ascii_case(key.trim()))
    }

    pub fn template(&self) -> TemplateSpec {
        let (name, description, feasibility, enrollment, mix) = match self {
            RegulatoryPhase::Phase1 => (
                "Phase 1 Safety",
                "Small safety/tolerability study with a modest pressure change",
                (135.0, -3.0, 8.0, 0.05, 0.8, 0.05),
                vec![20, 30, 40],
                vec![130.0, 140.0],
            ),
            RegulatoryPhase::Phase2 => (
                "Phase 2 Dose Finding",
                "Proof-of-concept hypertension study",
                (140.0, -5.0, 10.0, 0.05, 0.8, 0.10),
                vec![50, 100, 150, 200],
                vec![140.0, 150.0, 160.0],
            ),
            RegulatoryPhase::Phase3 => (
                "Phase 3 Pivotal",
                "Confirmatory efficacy study",
                (145.0, -8.0, 12.0, 0.05, 0.9, 0.15),
                vec![200, 300, 400, 500],
                vec![140.0, 155.0, 170.0],
            ),
        };
        let (baseline_mean, target_effect, std_dev, alpha, power, dropout_rate) = feasibility;

        TemplateSpec {
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            feasibility: Some(FeasibilitySpec {
                baseline_mean: Some(baseline_mean),
                target_effect: Some(target_effect),
                std_dev: Some(std_dev),
                alpha: Some(alpha),
                power: Some(power),
                dropout_rate: Some(dropout_rate),
                allocation_ratio: Some(1.0),
            }),
            enrollment_scenarios: Some(enrollment),
            patient_mix_scenarios: Some(mix),
        }
    }
}

/// Apply a built-in template by key (`phase1`, `phase2`, `phase3`)
pub fn load_builtin(key: &str, target: &mut PlanningInputs) -> Result<(), TemplateError> {
    let phase =
        RegulatoryPhase::from_key(key).ok_or_else(|| TemplateError::UnknownTemplate(key.to_string()))?;
    load_template(&phase.template(), target)
}
