//! Screen state and actions.
//!
//! Each screen owns its local form state, a request gate and a status
//! message. Rendering is left to the front end.

pub mod cost;
pub mod generation;
pub mod planning;
pub mod quality;

pub use cost::CostScreen;
pub use generation::GenerationScreen;
pub use planning::PlanningScreen;
pub use quality::QualityScreen;
