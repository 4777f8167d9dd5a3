//! Cost model types: user-editable parameters and the derived estimate

use serde::{Deserialize, Serialize};

/// Budget inputs edited by the user.
///
/// Counts are integers; money amounts are in the trial's reporting currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostParameters {
    pub n_per_arm: u32,
    pub duration_months: u32,
    pub cost_per_patient: f64,
    pub cost_per_visit: f64,
    pub visits_per_patient: u32,
    pub num_sites: u32,
    pub cost_per_site: f64,
    pub overhead_monthly: f64,
    pub monitoring_cost: f64,
    pub regulatory_cost: f64,
}

impl Default for CostParameters {
    fn default() -> Self {
        Self {
            n_per_arm: 100,
            duration_months: 24,
            cost_per_patient: 10_000.0,
            cost_per_visit: 500.0,
            visits_per_patient: 10,
            num_sites: 10,
            cost_per_site: 50_000.0,
            overhead_monthly: 25_000.0,
            monitoring_cost: 100_000.0,
            regulatory_cost: 150_000.0,
        }
    }
}

/// The six fixed budget categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostCategory {
    PatientEnrollment,
    VisitCosts,
    SiteCosts,
    OverheadCosts,
    MonitoringCosts,
    RegulatoryCosts,
}

impl CostCategory {
    pub const ALL: [CostCategory; 6] = [
        CostCategory::PatientEnrollment,
        CostCategory::VisitCosts,
        CostCategory::SiteCosts,
        CostCategory::OverheadCosts,
        CostCategory::MonitoringCosts,
        CostCategory::RegulatoryCosts,
    ];

    /// Stable key used in serialized breakdowns
    pub fn key(&self) -> &'static str {
        match self {
            CostCategory::PatientEnrollment => "patientEnrollment",
            CostCategory::VisitCosts => "visitCosts",
            CostCategory::SiteCosts => "siteCosts",
            CostCategory::OverheadCosts => "overheadCosts",
            CostCategory::MonitoringCosts => "monitoringCosts",
            CostCategory::RegulatoryCosts => "regulatoryCosts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::PatientEnrollment => "Patient enrollment",
            CostCategory::VisitCosts => "Visits",
            CostCategory::SiteCosts => "Sites",
            CostCategory::OverheadCosts => "Overhead",
            CostCategory::MonitoringCosts => "Monitoring",
            CostCategory::RegulatoryCosts => "Regulatory",
        }
    }
}

/// Amount per budget category
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub patient_enrollment: f64,
    pub visit_costs: f64,
    pub site_costs: f64,
    pub overhead_costs: f64,
    pub monitoring_costs: f64,
    pub regulatory_costs: f64,
}

impl CostBreakdown {
    pub fn amount(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::PatientEnrollment => self.patient_enrollment,
            CostCategory::VisitCosts => self.visit_costs,
            CostCategory::SiteCosts => self.site_costs,
            CostCategory::OverheadCosts => self.overhead_costs,
            CostCategory::MonitoringCosts => self.monitoring_costs,
            CostCategory::RegulatoryCosts => self.regulatory_costs,
        }
    }

    /// Categories and amounts in fixed display order
    pub fn categories(&self) -> impl Iterator<Item = (CostCategory, f64)> + '_ {
        CostCategory::ALL.into_iter().map(|c| (c, self.amount(c)))
    }

    pub fn total(&self) -> f64 {
        self.patient_enrollment
            + self.visit_costs
            + self.site_costs
            + self.overhead_costs
            + self.monitoring_costs
            + self.regulatory_costs
    }
}

/// ±20% band around the base estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sensitivity {
    pub low: f64,
    pub base: f64,
    pub high: f64,
}

/// Where the per-arm count used by an estimate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NPerArmSource {
    /// The user-entered `n_per_arm` field
    Manual,
    /// `required_n` of the active PlanningScenario
    PlanningScenario,
}

/// Derived budget. Always recomputed as a whole; never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostEstimate {
    pub total_cost: f64,
    pub cost_per_patient: f64,
    pub cost_per_arm: f64,
    pub monthly_burn_rate: f64,
    pub total_patients: u64,
    pub breakdown: CostBreakdown,
    pub sensitivity: Sensitivity,
    pub n_per_arm: u32,
    pub n_source: NPerArmSource,
}
