//! Fixed thresholds used by the cost model and the validation engine.
//!
//! These are regulatory/practice conventions rather than tunables, so they are
//! plain constants instead of configuration.

/// Number of arms in the trial design (treatment vs. control)
pub const ARMS: u32 = 2;

/// Arm label carried by generated records for the treatment arm
pub const ACTIVE_ARM_LABEL: &str = "Active";

/// Fraction of the planned per-arm count that generated data must reach
pub const SAMPLE_SIZE_TOLERANCE: f64 = 0.95;

/// `SAMPLE_SIZE_TOLERANCE` as an integer percentage, for exact comparisons
pub const SAMPLE_SIZE_TOLERANCE_PERCENT: u64 = 95;

/// Minimum power considered adequate for Phase 2/3 designs
pub const MIN_ADEQUATE_POWER: f64 = 0.80;

/// Absolute effect (mmHg) at or above which an effect is clinically meaningful
pub const CLINICALLY_MEANINGFUL_EFFECT_MMHG: f64 = 5.0;

/// Lower bound of the cost sensitivity band (-20%)
pub const SENSITIVITY_LOW_FACTOR: f64 = 0.8;

/// Upper bound of the cost sensitivity band (+20%)
pub const SENSITIVITY_HIGH_FACTOR: f64 = 1.2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_percent_matches_fraction() {
        assert!((SAMPLE_SIZE_TOLERANCE_PERCENT as f64 / 100.0 - SAMPLE_SIZE_TOLERANCE).abs() < 1e-12);
    }

    #[test]
    fn test_sensitivity_band_is_symmetric() {
        assert!(((1.0 - SENSITIVITY_LOW_FACTOR) - (SENSITIVITY_HIGH_FACTOR - 1.0)).abs() < 1e-12);
    }
}
