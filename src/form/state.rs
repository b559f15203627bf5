// src/form/state.rs
use uuid::Uuid;

use crate::types::{ProfileInput, RecommendationResponse};

/// Display mode of the form. Exactly one is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading {
        submission: Uuid,
    },
    Error {
        message: String,
    },
    Success {
        response: RecommendationResponse,
    },
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading { .. })
    }

    pub fn in_flight(&self) -> Option<Uuid> {
        match self {
            UiState::Loading { submission } => Some(*submission),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            UiState::Error { message } => Some(message),
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&RecommendationResponse> {
        match self {
            UiState::Success { response } => Some(response),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub profile: ProfileInput,
    pub ui: UiState,
}

impl FormState {
    pub fn new(profile: ProfileInput) -> Self {
        Self {
            profile,
            ui: UiState::Idle,
        }
    }

    /// Submit is disabled while a request is in flight.
    pub fn can_submit(&self) -> bool {
        !self.ui.is_loading()
    }
}
