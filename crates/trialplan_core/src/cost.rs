//! Trial budget estimation
//!
//! A pure function from [`CostParameters`] to a [`CostEstimate`]: six fixed
//! categories, per-unit figures and a ±20% sensitivity band. Inputs are
//! validated up front so that a bad parameter never turns into `NaN` or
//! `Infinity` in the output.

use crate::error::{CostError, CostResult};
use crate::model::{
    CostBreakdown, CostEstimate, CostParameters, NPerArmSource, PlanningScenario, Sensitivity,
};
use crate::thresholds::{ARMS, SENSITIVITY_HIGH_FACTOR, SENSITIVITY_LOW_FACTOR};

/// Estimate the trial budget.
///
/// `override_n_per_arm` replaces `params.n_per_arm` for this computation only;
/// the stored parameter is not touched.
pub fn estimate(params: &CostParameters, override_n_per_arm: Option<u32>) -> CostResult<CostEstimate> {
    validate(params)?;

    let (n, n_source) = match override_n_per_arm {
        Some(n) => (n, NPerArmSource::PlanningScenario),
        None => (params.n_per_arm, NPerArmSource::Manual),
    };
    if n == 0 {
        return Err(CostError::invalid("n_per_arm", 0.0, "must be at least 1"));
    }

    let total_patients = u64::from(n) * u64::from(ARMS);
    let patients = total_patients as f64;

    let breakdown = CostBreakdown {
        patient_enrollment: patients * params.cost_per_patient,
        visit_costs: patients * f64::from(params.visits_per_patient) * params.cost_per_visit,
        site_costs: f64::from(params.num_sites) * params.cost_per_site,
        overhead_costs: f64::from(params.duration_months) * params.overhead_monthly,
        monitoring_costs: params.monitoring_cost,
        regulatory_costs: params.regulatory_cost,
    };
    let total_cost = breakdown.total();

    Ok(CostEstimate {
        total_cost,
        cost_per_patient: total_cost / patients,
        cost_per_arm: total_cost / f64::from(ARMS),
        monthly_burn_rate: total_cost / f64::from(params.duration_months),
        total_patients,
        breakdown,
        sensitivity: Sensitivity {
            low: total_cost * SENSITIVITY_LOW_FACTOR,
            base: total_cost,
            high: total_cost * SENSITIVITY_HIGH_FACTOR,
        },
        n_per_arm: n,
        n_source,
    })
}

/// Estimate with the per-arm count sourced from an active planning scenario.
///
/// Uses the scenario's `required_n`; without one (or without a scenario) the
/// user-entered `n_per_arm` applies.
pub fn estimate_for_scenario(
    params: &CostParameters,
    scenario: Option<&PlanningScenario>,
) -> CostResult<CostEstimate> {
    estimate(params, scenario.and_then(PlanningScenario::required_n))
}

fn validate(params: &CostParameters) -> CostResult<()> {
    if params.duration_months == 0 {
        return Err(CostError::invalid(
            "duration_months",
            0.0,
            "must be at least 1 (burn rate is undefined for a zero-length trial)",
        ));
    }

    let amounts = [
        ("cost_per_patient", params.cost_per_patient),
        ("cost_per_visit", params.cost_per_visit),
        ("cost_per_site", params.cost_per_site),
        ("overhead_monthly", params.overhead_monthly),
        ("monitoring_cost", params.monitoring_cost),
        ("regulatory_cost", params.regulatory_cost),
    ];
    for (field, value) in amounts {
        if !value.is_finite() {
            return Err(CostError::invalid(field, value, "must be a finite number"));
        }
        if value < 0.0 {
            return Err(CostError::invalid(field, value, "must not be negative"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_nan() {
        let params = CostParameters {
            cost_per_visit: f64::NAN,
            ..Default::default()
        };
        let err = estimate(&params, None).unwrap_err();
        assert_eq!(err.field(), "cost_per_visit");
    }

    #[test]
    fn test_validate_checks_duration_first() {
        let params = CostParameters {
            duration_months: 0,
            regulatory_cost: -1.0,
            ..Default::default()
        };
        assert_eq!(estimate(&params, None).unwrap_err().field(), "duration_months");
    }
}
