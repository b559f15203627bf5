// src/form/reducer.rs
//! Pure state transitions for the profile form

use tracing::debug;
use uuid::Uuid;

use super::state::{FormState, UiState};
use crate::error::SUBMIT_FAILURE_MESSAGE;
use crate::types::RecommendationResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    ToggleSkill(String),
    ToggleInterest(String),
    SetEducation(String),
    SetExperience(String),
    SetLocation(String),
    SetSalary(u32),
    SubmitStarted {
        submission: Uuid,
    },
    SubmitSucceeded {
        submission: Uuid,
        response: RecommendationResponse,
    },
    SubmitFailed {
        submission: Uuid,
    },
    /// The submission ended without a resolution being applied.
    SubmitAbandoned {
        submission: Uuid,
    },
    DismissError,
}

pub fn reduce(mut state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::ToggleSkill(id) => state.profile.toggle_skill(&id),
        FormEvent::ToggleInterest(id) => state.profile.toggle_interest(&id),
        FormEvent::SetEducation(value) => state.profile.education = value,
        FormEvent::SetExperience(value) => state.profile.experience = value,
        FormEvent::SetLocation(value) => state.profile.preferred_location = value,
        FormEvent::SetSalary(value) => state.profile.salary_expectation = value,
        FormEvent::SubmitStarted { submission } => {
            if state.ui.is_loading() {
                debug!(%submission, "Submit ignored while a request is in flight");
            } else {
                state.ui = UiState::Loading { submission };
            }
        }
        FormEvent::SubmitSucceeded {
            submission,
            response,
        } => {
            if settles(&state, submission) {
                state.ui = UiState::Success { response };
            }
        }
        FormEvent::SubmitFailed { submission } => {
            if settles(&state, submission) {
                state.ui = UiState::Error {
                    message: SUBMIT_FAILURE_MESSAGE.to_string(),
                };
            }
        }
        FormEvent::SubmitAbandoned { submission } => {
            if settles(&state, submission) {
                state.ui = UiState::Idle;
            }
        }
        FormEvent::DismissError => {
            if matches!(state.ui, UiState::Error { .. }) {
                state.ui = UiState::Idle;
            }
        }
    }
    state
}

fn settles(state: &FormState, submission: Uuid) -> bool {
    let current = state.ui.in_flight();
    if current != Some(submission) {
        debug!(%submission, ?current, "Ignoring stale submission result");
        return false;
    }
    true
}
