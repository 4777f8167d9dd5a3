//! Quality screen: plan-vs-data checks.

use trialplan_core::model::{GeneratedStudy, PlanningScenario};
use trialplan_core::validation::{PowerCheck, ValidationReport, validate};

use crate::util::format::format_percentage;

#[derive(Debug, Default)]
pub struct QualityScreen {
    pub report: Option<ValidationReport>,
    /// Name of the scenario checked on the last refresh
    pub scenario_name: Option<String>,
}

impl QualityScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-run the checks against the displayed scenario snapshot. Without
    /// either a scenario or a dataset there is nothing to check.
    pub fn refresh(&mut self, scenario: Option<&PlanningScenario>, study: Option<&GeneratedStudy>) {
        self.scenario_name = scenario.map(|s| s.name().to_string());
        self.report = match (scenario, study) {
            (Some(scenario), Some(study)) => {
                let report = validate(scenario, study);
                tracing::debug!(?report, "validation refreshed");
                Some(report)
            }
            _ => None,
        };
    }

    /// Badge lines for the current report
    pub fn summary_lines(&self) -> Vec<String> {
        let Some(report) = &self.report else {
            let line = match &self.scenario_name {
                Some(name) => format!("No generated data to check against '{name}' yet"),
                None => "No planning scenario to validate against".to_string(),
            };
            return vec![line];
        };

        let mut lines = Vec::with_capacity(3);
        lines.push(format!(
            "Sample size: {} active records vs {} planned per arm ({})",
            report.actual_n,
            report.planned_n,
            if report.sample_size_match { "match" } else { "below 95% of plan" }
        ));
        lines.push(match report.power_check {
            PowerCheck::NotEvaluated => "Power: not evaluated".to_string(),
            PowerCheck::Adequate(p) => format!("Power: {} (adequate)", format_percentage(p)),
            PowerCheck::Inadequate(p) => format!("Power: {} (below 80%)", format_percentage(p)),
        });
        if let Some(effect) = report.effect_size {
            lines.push(format!("Effect size: {}", effect.label()));
        }
        lines
    }
}
