use trialplan_core::handoff::HandoffState;
use trialplan_core::model::GenerationForm;

use super::fakes::FakeServices;
use crate::state::{AppState, ScreenId};

/// Assess and queue a scenario from the planning screen
async fn queue_scenario(state: &mut AppState, services: &FakeServices) {
    state.planning.assess(services).await;
    state
        .planning
        .use_for_generation(&mut state.store)
        .unwrap();
}

#[tokio::test]
async fn test_handoff_applies_once_and_clears_store() {
    let services = FakeServices::new(64, 64);
    let mut state = AppState::default();

    queue_scenario(&mut state, &services).await;
    assert_eq!(state.store.state(), HandoffState::Filled);

    state.navigate(ScreenId::Generation);
    assert_eq!(state.store.state(), HandoffState::Empty);
    assert_eq!(state.generation.form.n_per_arm, 64);
    assert!(state.generation.applied_scenario.is_some());

    // Edit the form, leave, come back: the edit survives
    state.generation.form.n_per_arm = 70;
    state.navigate(ScreenId::Planning);
    state.navigate(ScreenId::Generation);
    assert_eq!(state.generation.form.n_per_arm, 70);
}

#[tokio::test]
async fn test_second_queue_replaces_unconsumed_scenario() {
    let mut state = AppState::default();

    queue_scenario(&mut state, &FakeServices::new(40, 0)).await;
    queue_scenario(&mut state, &FakeServices::new(90, 0)).await;

    state.navigate(ScreenId::Generation);
    assert_eq!(state.generation.form.n_per_arm, 90);
}

#[tokio::test]
async fn test_merge_overwrites_only_present_fields() {
    let services = FakeServices::new(64, 0);
    let mut state = AppState::default();
    state.generation.form.method = trialplan_core::model::GenerationMethod::Rules;
    state.generation.form.seed = Some(7);
    state.generation.form.dropout_rate = 0.3;

    state.planning.inputs.feasibility.target_effect = -8.0;
    state.planning.inputs.feasibility.dropout_rate = 0.0;
    queue_scenario(&mut state, &services).await;
    state.navigate(ScreenId::Generation);

    let form = &state.generation.form;
    assert_eq!(form.n_per_arm, 64);
    assert_eq!(form.target_effect, -8.0);
    // A zero dropout rate is a value, not a missing field
    assert_eq!(form.dropout_rate, 0.0);
    assert_eq!(form.method, trialplan_core::model::GenerationMethod::Rules);
    assert_eq!(form.seed, Some(7));
}

#[tokio::test]
async fn test_entering_without_scenario_keeps_defaults() {
    let mut state = AppState::default();
    state.navigate(ScreenId::Generation);

    assert_eq!(state.generation.form, GenerationForm::default());
    assert!(state.generation.applied_scenario.is_none());
    assert!(state.generation.message.is_none());
}

#[tokio::test]
async fn test_generation_uses_applied_values() {
    let services = FakeServices::new(64, 64);
    let mut state = AppState::default();

    queue_scenario(&mut state, &services).await;
    state.navigate(ScreenId::Generation);
    state.generation.generate(&services).await;

    let requests = services.generation_requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].n_per_arm, 64);
    assert!(state.generation.dataset.is_some());
}

#[tokio::test]
async fn test_renavigating_to_same_screen_is_noop() {
    let services = FakeServices::new(64, 0);
    let mut state = AppState::default();

    state.navigate(ScreenId::Generation);
    queue_scenario(&mut state, &services).await;
    // Already on the generation screen: no re-entry, so nothing is consumed
    state.navigate(ScreenId::Generation);
    assert_eq!(state.store.state(), HandoffState::Filled);
}

#[tokio::test]
async fn test_saved_and_handed_off_scenario_share_id() {
    let services = FakeServices::new(64, 64);
    let mut state = AppState::default();
    state.planning.assess(&services).await;
    state.planning.scenario_name = "Pilot".to_string();

    state.planning.save_scenario(&services).await;
    let queued = state
        .planning
        .use_for_generation(&mut state.store)
        .unwrap();
    state.navigate(ScreenId::Generation);

    let saved = services.saved.borrow();
    let (_, stored, metadata) = &saved[0];
    let applied = state.generation.applied_scenario.as_ref().unwrap();
    assert_eq!(applied.id(), queued);
    assert_eq!(stored.data.id(), applied.id());
    assert_eq!(metadata.scenario_id, applied.id().to_string());
}

#[tokio::test]
async fn test_changed_inputs_package_a_new_scenario() {
    let services = FakeServices::new(64, 0);
    let mut state = AppState::default();
    state.planning.assess(&services).await;

    let first = state
        .planning
        .use_for_generation(&mut state.store)
        .unwrap();
    let again = state
        .planning
        .use_for_generation(&mut state.store)
        .unwrap();
    assert_eq!(first, again);

    state.planning.inputs.feasibility.dropout_rate = 0.2;
    let changed = state
        .planning
        .use_for_generation(&mut state.store)
        .unwrap();
    assert_ne!(first, changed);
    assert_eq!(state.store.peek().unwrap().dropout_rate(), Some(0.2));
}
