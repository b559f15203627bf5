// src/render.rs
//! Maps form state to what the presentation layer shows. Pure; no IO.

use serde::Serialize;

use crate::form::state::{FormState, UiState};
use crate::types::JobRecommendation;
use crate::utils::format_thousands;

pub const FORM_TITLE: &str = "Software Engineering Job Recommendation";
pub const FORM_DESCRIPTION: &str = "Fill out this form to get personalized job recommendations based on your skills and preferences";
pub const SUBMIT_LABEL: &str = "Get Job Recommendations";
pub const PROGRESS_LABEL: &str = "Finding recommendations...";
pub const ALERT_TITLE: &str = "Error";
pub const RESULTS_HEADING: &str = "Job Recommendations";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum SubmitAffordance {
    Button(String),
    /// Replaces the button while a request is in flight.
    Progress(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub company: String,
    pub salary_line: Option<String>,
    pub badge: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsView {
    pub heading: String,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct View {
    pub salary_label: String,
    pub submit: SubmitAffordance,
    pub alert: Option<Alert>,
    pub results: Option<ResultsView>,
    /// The service's own `message`, shown as-is when present.
    pub note: Option<String>,
}

impl View {
    pub fn cards(&self) -> &[Card] {
        self.results
            .as_ref()
            .map(|r| r.cards.as_slice())
            .unwrap_or_default()
    }
}

pub fn render(state: &FormState) -> View {
    let submit = if state.ui.is_loading() {
        SubmitAffordance::Progress(PROGRESS_LABEL.to_string())
    } else {
        SubmitAffordance::Button(SUBMIT_LABEL.to_string())
    };

    let mut view = View {
        salary_label: format!(
            "Salary Expectation: ${}",
            format_thousands(i64::from(state.profile.salary_expectation))
        ),
        submit,
        alert: None,
        results: None,
        note: None,
    };

    match &state.ui {
        UiState::Idle | UiState::Loading { .. } => {}
        UiState::Error { message } => {
            view.alert = Some(Alert {
                title: ALERT_TITLE.to_string(),
                message: message.clone(),
            });
        }
        UiState::Success { response } => {
            if response.has_recommendations() {
                view.results = Some(ResultsView {
                    heading: RESULTS_HEADING.to_string(),
                    cards: response.recommendations().iter().map(card).collect(),
                });
            }
            view.note = response.message.clone();
        }
    }

    view
}

pub fn card(job: &JobRecommendation) -> Card {
    Card {
        title: job.title.clone(),
        company: job.company.clone(),
        // a zero salary is treated as absent
        salary_line: job
            .salary
            .filter(|salary| *salary != 0)
            .map(|salary| format!("Salary: ${}", format_thousands(salary))),
        badge: format!("{}% match", job.match_score),
    }
}
