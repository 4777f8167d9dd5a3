//! Generated study records
//!
//! The generation service returns far richer rows than the validation engine
//! needs. Only the subject identifier (and, for vitals, the treatment arm) is
//! typed here; unknown columns are ignored on deserialization.

use serde::{Deserialize, Serialize};

/// One subject-visit row of vital signs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsRecord {
    #[serde(rename = "SubjectID", alias = "subject_id")]
    pub subject_id: String,
    #[serde(rename = "TreatmentArm", alias = "arm")]
    pub arm: String,
    #[serde(rename = "VisitName", alias = "visit", default, skip_serializing_if = "Option::is_none")]
    pub visit: Option<String>,
    #[serde(rename = "SystolicBP", alias = "systolic_bp", default, skip_serializing_if = "Option::is_none")]
    pub systolic_bp: Option<f64>,
    #[serde(rename = "DiastolicBP", alias = "diastolic_bp", default, skip_serializing_if = "Option::is_none")]
    pub diastolic_bp: Option<f64>,
}

impl VitalsRecord {
    pub fn new(subject_id: impl Into<String>, arm: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            arm: arm.into(),
            visit: None,
            systolic_bp: None,
            diastolic_bp: None,
        }
    }
}

/// Any other per-subject row (demographics, labs, adverse events)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    #[serde(rename = "SubjectID", alias = "subject_id", alias = "USUBJID")]
    pub subject_id: String,
}

/// Output of the comprehensive-study generator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneratedStudy {
    #[serde(default)]
    pub vitals: Vec<VitalsRecord>,
    #[serde(default)]
    pub demographics: Vec<SubjectRecord>,
    #[serde(default)]
    pub labs: Vec<SubjectRecord>,
    #[serde(default)]
    pub adverse_events: Vec<SubjectRecord>,
}

impl GeneratedStudy {
    /// Total number of rows across all domains
    pub fn record_count(&self) -> usize {
        self.vitals.len() + self.demographics.len() + self.labs.len() + self.adverse_events.len()
    }
}
