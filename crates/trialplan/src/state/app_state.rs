use trialplan_core::handoff::PlanningScenarioStore;
use trialplan_core::model::{CostParameters, PlanningScenario};

use crate::screens::{CostScreen, GenerationScreen, PlanningScreen, QualityScreen};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Planning,
    Generation,
    Quality,
    Cost,
}

impl ScreenId {
    pub const ALL: [ScreenId; 4] = [
        ScreenId::Planning,
        ScreenId::Generation,
        ScreenId::Quality,
        ScreenId::Cost,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScreenId::Planning => "Planning",
            ScreenId::Generation => "Data Generation",
            ScreenId::Quality => "Quality",
            ScreenId::Cost => "Cost",
        }
    }
}

/// Session state shared by all screens.
///
/// The handoff store lives here, not in any screen, so the planning screen
/// can fill it and the generation screen can drain it.
#[derive(Debug, Default)]
pub struct AppState {
    pub current: ScreenId,
    pub store: PlanningScenarioStore,
    pub planning: PlanningScreen,
    pub generation: GenerationScreen,
    pub quality: QualityScreen,
    pub cost: CostScreen,
}

impl AppState {
    pub fn new(cost_params: CostParameters) -> Self {
        Self {
            cost: CostScreen::new(cost_params),
            ..Self::default()
        }
    }

    /// Switch screens. Requests in flight on the screen being left are
    /// invalidated, and entering a screen runs its initialization.
    pub fn navigate(&mut self, to: ScreenId) {
        if to == self.current {
            return;
        }
        match self.current {
            ScreenId::Planning => self.planning.leave(),
            ScreenId::Generation => self.generation.leave(),
            ScreenId::Quality | ScreenId::Cost => {}
        }
        tracing::debug!(from = self.current.name(), to = to.name(), "navigate");
        self.current = to;

        match to {
            ScreenId::Generation => {
                self.generation.on_enter(&mut self.store);
            }
            ScreenId::Quality => self.refresh_quality(),
            ScreenId::Planning | ScreenId::Cost => {}
        }
    }

    /// The scenario currently driving downstream screens
    pub fn active_scenario(&self) -> Option<&PlanningScenario> {
        active_scenario(&self.generation, &self.store)
    }

    pub fn refresh_quality(&mut self) {
        let scenario = active_scenario(&self.generation, &self.store);
        self.quality.refresh(scenario, self.generation.dataset.as_ref());
    }

    pub fn calculate_cost(&mut self) {
        let scenario = active_scenario(&self.generation, &self.store);
        self.cost.calculate(scenario);
    }
}

/// The scenario applied to the generation form, or else one still waiting in
/// the handoff store. Peeking never consumes.
fn active_scenario<'a>(
    generation: &'a GenerationScreen,
    store: &'a PlanningScenarioStore,
) -> Option<&'a PlanningScenario> {
    generation.applied_scenario.as_ref().or_else(|| store.peek())
}
