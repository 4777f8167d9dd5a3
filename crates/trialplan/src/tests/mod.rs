//! Workflow tests for the trial planning screens
//!
//! Tests are organized by topic:
//! - `handoff_flow` - Planning to generation handoff across navigation
//! - `requests` - Busy gating, stale responses and service failures
//! - `planning` - Templates, preconditions and scenario persistence
//! - `downstream` - Quality report and cost estimate from the active scenario
//!
//! Screens are driven against the in-memory services in `fakes`.

mod fakes;
mod handoff_flow;
mod requests;
