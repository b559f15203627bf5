//! Job recommendation profile form: collects a candidate profile, sends it
//! to the recommendation service and maps the answer to a display state.

pub mod catalog;
pub mod cli;
pub mod console;
pub mod core;
pub mod error;
pub mod form;
pub mod render;
pub mod types;
pub mod utils;

pub use crate::core::{ConfigManager, RecommendationClient, RecommendationTransport};
pub use error::{SubmitError, SUBMIT_FAILURE_MESSAGE};
pub use form::{FormEvent, FormState, ProfileFormController, SubmitOutcome, UiState};
pub use render::{render, View};
pub use types::{JobRecommendation, ProfileInput, RecommendationRequest, RecommendationResponse};
