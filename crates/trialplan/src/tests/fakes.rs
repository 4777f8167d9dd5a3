use std::cell::{Cell, RefCell};

use trialplan_core::model::{
    FeasibilityGrade, FeasibilityParameters, FeasibilityResult, GeneratedStudy, GenerationForm,
    PlanningScenario, VitalsRecord,
};
use trialplan_core::thresholds::ACTIVE_ARM_LABEL;

use crate::services::{
    FeasibilityService, GenerationService, SavedScenario, ScenarioListing, ScenarioMetadata,
    ScenarioPersistence, ServiceError, ServiceResult, StoredScenario,
};

pub(crate) fn feasibility_result(required_n: u32) -> FeasibilityResult {
    FeasibilityResult {
        required_n_per_arm: required_n,
        total_n: required_n * 2,
        effect_size_cohens_d: 0.5,
        feasibility: FeasibilityGrade::Feasible,
        interpretation: "Adequately powered".to_string(),
        assumptions: vec!["Normal distribution".to_string()],
        recommendation: "Proceed".to_string(),
    }
}

/// One vitals row per subject on each arm
pub(crate) fn study_with_active(n: usize) -> GeneratedStudy {
    let mut vitals = Vec::with_capacity(n * 2);
    for i in 0..n {
        vitals.push(VitalsRecord::new(format!("A{i:04}"), ACTIVE_ARM_LABEL));
        vitals.push(VitalsRecord::new(format!("P{i:04}"), "Placebo"));
    }
    GeneratedStudy {
        vitals,
        ..GeneratedStudy::default()
    }
}

/// In-memory stand-in for every backend service.
///
/// `fail_with` makes the next and all later calls answer with that HTTP status.
pub(crate) struct FakeServices {
    pub required_n: u32,
    pub active_generated: usize,
    pub fail_with: Cell<Option<u16>>,
    pub feasibility_calls: Cell<usize>,
    pub generation_requests: RefCell<Vec<GenerationForm>>,
    pub saved: RefCell<Vec<(String, StoredScenario, ScenarioMetadata)>>,
}

impl FakeServices {
    pub fn new(required_n: u32, active_generated: usize) -> Self {
        Self {
            required_n,
            active_generated,
            fail_with: Cell::new(None),
            feasibility_calls: Cell::new(0),
            generation_requests: RefCell::new(Vec::new()),
            saved: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        let services = Self::new(0, 0);
        services.fail_with.set(Some(status));
        services
    }

    fn check(&self) -> ServiceResult<()> {
        match self.fail_with.get() {
            Some(status) => Err(ServiceError::Http {
                status,
                body: "fake failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl FeasibilityService for FakeServices {
    async fn assess_feasibility(
        &self,
        _params: &FeasibilityParameters,
    ) -> ServiceResult<FeasibilityResult> {
        self.feasibility_calls.set(self.feasibility_calls.get() + 1);
        self.check()?;
        Ok(feasibility_result(self.required_n))
    }
}

impl GenerationService for FakeServices {
    async fn generate_comprehensive_study(
        &self,
        params: &GenerationForm,
    ) -> ServiceResult<GeneratedStudy> {
        self.generation_requests.borrow_mut().push(params.clone());
        self.check()?;
        Ok(study_with_active(self.active_generated))
    }
}

impl ScenarioPersistence for FakeServices {
    async fn save_planning_scenario(
        &self,
        name: &str,
        payload: &PlanningScenario,
        metadata: &ScenarioMetadata,
    ) -> ServiceResult<SavedScenario> {
        self.check()?;
        let mut saved = self.saved.borrow_mut();
        let id = format!("scn-{}", saved.len() + 1);
        let stored = StoredScenario {
            data: payload.clone(),
            dataset_name: name.to_string(),
            created_at: "2026-01-01T00:00:00Z".to_string(),
        };
        saved.push((id.clone(), stored, metadata.clone()));
        Ok(SavedScenario { id })
    }

    async fn list_planning_scenarios(&self) -> ServiceResult<Vec<ScenarioListing>> {
        self.check()?;
        Ok(self
            .saved
            .borrow()
            .iter()
            .map(|(id, stored, _)| ScenarioListing {
                id: id.clone(),
                dataset_name: stored.dataset_name.clone(),
                created_at: stored.created_at.clone(),
                record_count: 0,
            })
            .collect())
    }

    async fn load_planning_scenario_by_id(&self, id: &str) -> ServiceResult<StoredScenario> {
        self.check()?;
        self.saved
            .borrow()
            .iter()
            .find(|(saved_id, _, _)| saved_id == id)
            .map(|(_, stored, _)| stored.clone())
            .ok_or(ServiceError::Http {
                status: 404,
                body: "Scenario not found".to_string(),
            })
    }
}
