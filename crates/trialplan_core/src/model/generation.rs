//! Generation form state and the partial update applied from a planning scenario

use serde::{Deserialize, Serialize};

use super::scenario::PlanningScenario;

/// Synthetic data generation method offered by the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMethod {
    /// Multivariate normal
    #[default]
    Mvn,
    Bootstrap,
    Rules,
}

impl GenerationMethod {
    pub const ALL: [GenerationMethod; 3] = [
        GenerationMethod::Mvn,
        GenerationMethod::Bootstrap,
        GenerationMethod::Rules,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GenerationMethod::Mvn => "mvn",
            GenerationMethod::Bootstrap => "bootstrap",
            GenerationMethod::Rules => "rules",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

/// Local parameters of the generation screen, sent as the generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationForm {
    pub n_per_arm: u32,
    pub target_effect: f64,
    pub dropout_rate: f64,
    pub method: GenerationMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GenerationForm {
    fn default() -> Self {
        Self {
            n_per_arm: 50,
            target_effect: -5.0,
            dropout_rate: 0.1,
            method: GenerationMethod::Mvn,
            seed: None,
        }
    }
}

/// Partial update of a [`GenerationForm`].
///
/// `None` means "leave the form field alone"; `Some` always overwrites,
/// including `Some(0.0)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GenerationPatch {
    pub n_per_arm: Option<u32>,
    pub target_effect: Option<f64>,
    pub dropout_rate: Option<f64>,
}

impl GenerationPatch {
    /// Fields of the scenario that are present. A zero per-arm count is
    /// treated as absent since it can never be a valid request.
    pub fn from_scenario(scenario: &PlanningScenario) -> Self {
        Self {
            n_per_arm: scenario.n_per_arm().filter(|&n| n > 0),
            target_effect: scenario.target_effect(),
            dropout_rate: scenario.dropout_rate(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.n_per_arm.is_none() && self.target_effect.is_none() && self.dropout_rate.is_none()
    }

    /// Merge into the form. Returns the number of fields overwritten.
    pub fn apply_to(&self, form: &mut GenerationForm) -> usize {
        let mut applied = 0;
        if let Some(n) = self.n_per_arm {
            form.n_per_arm = n;
            applied += 1;
        }
        if let Some(effect) = self.target_effect {
            form.target_effect = effect;
            applied += 1;
        }
        if let Some(dropout) = self.dropout_rate {
            form.dropout_rate = dropout;
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_name() {
        assert_eq!(GenerationMethod::from_name("Bootstrap"), Some(GenerationMethod::Bootstrap));
        assert_eq!(GenerationMethod::from_name("mvn"), Some(GenerationMethod::Mvn));
        assert_eq!(GenerationMethod::from_name("gan"), None);
    }

    #[test]
    fn test_empty_patch_leaves_form_alone() {
        let mut form = GenerationForm::default();
        let patch = GenerationPatch::default();
        assert!(patch.is_empty());
        assert_eq!(patch.apply_to(&mut form), 0);
        assert_eq!(form, GenerationForm::default());
    }
}
