mod cost;
mod feasibility;
mod generation;
mod ids;
mod records;
mod scenario;

pub use cost::{CostBreakdown, CostCategory, CostEstimate, CostParameters, NPerArmSource, Sensitivity};
pub use feasibility::{FeasibilityGrade, FeasibilityParameters, FeasibilityResult, TestType};
pub use generation::{GenerationForm, GenerationMethod, GenerationPatch};
pub use ids::ScenarioId;
pub use records::{GeneratedStudy, SubjectRecord, VitalsRecord};
pub use scenario::{PlanningScenario, ScenarioSource};
