use super::fakes::{FakeServices, feasibility_result, study_with_active};
use crate::services::ServiceError;
use crate::state::{AppState, ScreenId};

#[test]
fn test_busy_screen_rejects_second_request() {
    let mut state = AppState::default();
    let first = state.planning.begin_assessment();
    assert!(first.is_some());
    assert!(state.planning.is_busy());
    assert!(state.planning.begin_assessment().is_none());

    assert!(state.planning.finish_assessment(first.unwrap(), Ok(feasibility_result(50))));
    assert!(!state.planning.is_busy());
    assert!(state.planning.begin_assessment().is_some());
}

#[test]
fn test_response_after_leaving_is_discarded() {
    let mut state = AppState::default();
    let ticket = state.planning.begin_assessment().unwrap();

    state.navigate(ScreenId::Cost);
    assert!(!state.planning.is_busy());

    assert!(!state.planning.finish_assessment(ticket, Ok(feasibility_result(50))));
    assert!(state.planning.result.is_none());
    assert!(state.planning.message.is_none());
}

#[test]
fn test_stale_response_does_not_clobber_newer_request() {
    let mut state = AppState::default();
    state.navigate(ScreenId::Generation);
    let stale = state.generation.begin_generation().unwrap();

    state.navigate(ScreenId::Planning);
    state.navigate(ScreenId::Generation);
    let fresh = state.generation.begin_generation().unwrap();

    assert!(!state.generation.finish_generation(stale, Ok(study_with_active(1))));
    assert!(state.generation.is_busy());
    assert!(state.generation.finish_generation(fresh, Ok(study_with_active(3))));
    assert_eq!(state.generation.dataset.as_ref().unwrap().vitals.len(), 6);
}

#[tokio::test]
async fn test_not_found_reads_as_coming_soon() {
    let services = FakeServices::failing(404);
    let mut state = AppState::default();

    state.planning.refresh_saved(&services).await;

    let message = state.planning.message.as_ref().unwrap();
    assert!(message.is_error);
    assert_eq!(
        message.text,
        "Listing saved scenarios is coming soon. This feature is not available on the server yet."
    );
    assert!(!state.planning.is_busy());
}

#[tokio::test]
async fn test_server_error_keeps_previous_result() {
    let mut state = AppState::default();
    state.planning.assess(&FakeServices::new(50, 0)).await;
    assert!(state.planning.result.is_some());

    state.planning.assess(&FakeServices::failing(500)).await;
    let message = state.planning.message.as_ref().unwrap();
    assert!(message.is_error);
    assert!(message.text.starts_with("Feasibility assessment failed"));
    assert_eq!(state.planning.result.as_ref().unwrap().required_n_per_arm, 50);
    assert!(!state.planning.is_busy());
}

#[tokio::test]
async fn test_generation_failure_is_reported() {
    let mut state = AppState::default();
    state.navigate(ScreenId::Generation);
    state.generation.generate(&FakeServices::failing(503)).await;

    let message = state.generation.message.as_ref().unwrap();
    assert!(message.is_error);
    assert!(message.text.contains("503"));
    assert!(state.generation.dataset.is_none());
}

#[test]
fn test_transport_error_is_not_coming_soon() {
    let err = ServiceError::Transport("connection refused".to_string());
    assert!(!err.is_not_found());
    assert_eq!(err.status(), None);
}
