//! Validation of generated data against the originating plan
//!
//! All checks are informational. Nothing here blocks another operation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{GeneratedStudy, PlanningScenario, VitalsRecord};
use crate::thresholds::{
    ACTIVE_ARM_LABEL, CLINICALLY_MEANINGFUL_EFFECT_MMHG, MIN_ADEQUATE_POWER,
    SAMPLE_SIZE_TOLERANCE_PERCENT,
};

/// Outcome of the power floor check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PowerCheck {
    /// Scenario carries no power
    NotEvaluated,
    Adequate(f64),
    Inadequate(f64),
}

impl PowerCheck {
    pub fn is_adequate(&self) -> Option<bool> {
        match self {
            PowerCheck::NotEvaluated => None,
            PowerCheck::Adequate(_) => Some(true),
            PowerCheck::Inadequate(_) => Some(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectSizeClass {
    ClinicallyMeaningful,
    SmallEffect,
}

impl EffectSizeClass {
    pub fn label(&self) -> &'static str {
        match self {
            EffectSizeClass::ClinicallyMeaningful => "clinically meaningful",
            EffectSizeClass::SmallEffect => "small effect",
        }
    }
}

/// All checks for one scenario/dataset pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub planned_n: u32,
    pub actual_n: usize,
    pub distinct_active_subjects: usize,
    pub sample_size_match: bool,
    pub power_check: PowerCheck,
    pub effect_size: Option<EffectSizeClass>,
}

impl ValidationReport {
    /// True when no evaluated check failed
    pub fn all_passed(&self) -> bool {
        self.sample_size_match && self.power_check.is_adequate() != Some(false)
    }
}

/// Count vitals rows on the active arm
pub fn count_active(records: &[VitalsRecord]) -> usize {
    records.iter().filter(|r| r.arm == ACTIVE_ARM_LABEL).count()
}

/// Count distinct subjects on the active arm
pub fn distinct_active_subjects(records: &[VitalsRecord]) -> usize {
    records
        .iter()
        .filter(|r| r.arm == ACTIVE_ARM_LABEL)
        .map(|r| r.subject_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// `actual_n >= 0.95 * planned_n`, compared in integer arithmetic
pub fn sample_size_match(actual_n: usize, planned_n: u32) -> bool {
    (actual_n as u128) * 100 >= u128::from(planned_n) * u128::from(SAMPLE_SIZE_TOLERANCE_PERCENT)
}

pub fn power_check(power: Option<f64>) -> PowerCheck {
    match power {
        None => PowerCheck::NotEvaluated,
        Some(p) if p >= MIN_ADEQUATE_POWER => PowerCheck::Adequate(p),
        Some(p) => PowerCheck::Inadequate(p),
    }
}

pub fn classify_effect_size(target_effect: f64) -> EffectSizeClass {
    if target_effect.abs() >= CLINICALLY_MEANINGFUL_EFFECT_MMHG {
        EffectSizeClass::ClinicallyMeaningful
    } else {
        EffectSizeClass::SmallEffect
    }
}

/// Run every check of `scenario` against `study`
pub fn validate(scenario: &PlanningScenario, study: &GeneratedStudy) -> ValidationReport {
    let planned_n = scenario.planned_n();
    let actual_n = count_active(&study.vitals);

    ValidationReport {
        planned_n,
        actual_n,
        distinct_active_subjects: distinct_active_subjects(&study.vitals),
        sample_size_match: sample_size_match(actual_n, planned_n),
        power_check: power_check(scenario.power()),
        effect_size: scenario.target_effect().map(classify_effect_size),
    }
}
