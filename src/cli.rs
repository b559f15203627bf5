// src/cli.rs
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn};

use crate::catalog;
use crate::console::ConsoleReporter;
use crate::core::{ConfigManager, RecommendationClient, RecommendationTransport};
use crate::form::{FormEvent, FormState, ProfileFormController, SubmitOutcome};
use crate::render::render;
use crate::types::ProfileFile;

#[derive(Parser, Debug)]
#[command(name = "job-recommender")]
#[command(about = "Fill out a profile and get job recommendations from the recommendation service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (defaults to ./recommender.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit the profile and show the recommendations
    Recommend {
        #[command(flatten)]
        form: FormArgs,

        /// Override the recommendation service base URL
        #[arg(long)]
        api_url: Option<String>,

        /// Print the rendered view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the profile text that would be sent, without sending it
    Preview {
        #[command(flatten)]
        form: FormArgs,
    },
    /// List the selectable skills, interests, education levels and experience brackets
    Options,
}

/// Form fields. `--skill` and `--interest` toggle: naming an id twice
/// deselects it.
#[derive(Args, Debug, Default, Clone)]
pub struct FormArgs {
    /// Load the profile from a TOML file; flags are applied on top
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,

    #[arg(long = "skill", value_name = "ID")]
    pub skills: Vec<String>,

    #[arg(long = "interest", value_name = "ID")]
    pub interests: Vec<String>,

    #[arg(long)]
    pub education: Option<String>,

    /// Experience bracket: 0-1, 1-3, 3-5, 5-10 or 10+
    #[arg(long)]
    pub experience: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub salary: Option<u32>,
}

impl FormArgs {
    /// Events that build the form from the profile file, then the flags
    pub fn events(&self) -> Result<Vec<FormEvent>> {
        let mut events = Vec::new();

        if let Some(path) = &self.profile {
            let file = ProfileFile::load(path)?;
            events.extend(file_events(file));
        }

        events.extend(self.skills.iter().cloned().map(FormEvent::ToggleSkill));
        events.extend(
            self.interests
                .iter()
                .cloned()
                .map(FormEvent::ToggleInterest),
        );
        if let Some(education) = &self.education {
            events.push(FormEvent::SetEducation(education.clone()));
        }
        if let Some(experience) = &self.experience {
            events.push(FormEvent::SetExperience(experience.clone()));
        }
        if let Some(location) = &self.location {
            events.push(FormEvent::SetLocation(location.clone()));
        }
        if let Some(salary) = self.salary {
            events.push(FormEvent::SetSalary(salary));
        }

        Ok(events)
    }

    pub fn build_state(&self) -> Result<FormState> {
        Ok(self
            .events()?
            .into_iter()
            .fold(FormState::default(), crate::form::reduce))
    }
}

/// File lists describe membership, so repeats are selected once.
fn file_events(file: ProfileFile) -> Vec<FormEvent> {
    let mut events = Vec::new();
    let mut seen_skills: Vec<String> = Vec::new();
    for skill in file.skills {
        if !seen_skills.contains(&skill) {
            seen_skills.push(skill.clone());
            events.push(FormEvent::ToggleSkill(skill));
        }
    }
    let mut seen_interests: Vec<String> = Vec::new();
    for interest in file.interests {
        if !seen_interests.contains(&interest) {
            seen_interests.push(interest.clone());
            events.push(FormEvent::ToggleInterest(interest));
        }
    }
    if let Some(education) = file.education {
        events.push(FormEvent::SetEducation(education));
    }
    if let Some(experience) = file.experience {
        events.push(FormEvent::SetExperience(experience));
    }
    if let Some(location) = file.preferred_location {
        events.push(FormEvent::SetLocation(location));
    }
    if let Some(salary) = file.salary_expectation {
        events.push(FormEvent::SetSalary(salary));
    }
    events
}

pub async fn handle_command(cli: Cli, config: ConfigManager) -> Result<ExitCode> {
    match cli.command {
        Command::Recommend {
            form,
            api_url,
            json,
        } => recommend(form, api_url, json, config).await,
        Command::Preview { form } => {
            let state = form.build_state()?;
            ConsoleReporter::print_advisories(&state.profile.advisories());
            println!("{}", state.profile.to_profile_text());
            Ok(ExitCode::SUCCESS)
        }
        Command::Options => {
            ConsoleReporter::print_options("Technical skills", catalog::SKILLS);
            ConsoleReporter::print_options("Education", catalog::EDUCATION_LEVELS);
            ConsoleReporter::print_options(
                "Years of experience",
                catalog::EXPERIENCE_BRACKETS,
            );
            ConsoleReporter::print_options("Areas of interest", catalog::INTERESTS);
            ConsoleReporter::print_salary_range();
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn recommend(
    form: FormArgs,
    api_url: Option<String>,
    json: bool,
    config: ConfigManager,
) -> Result<ExitCode> {
    let state = form.build_state()?;
    let api_url = api_url.unwrap_or(config.service.api_url);
    let client = RecommendationClient::new(
        &api_url,
        &config.service.endpoint,
        config.service.timeout_seconds,
    )?;

    let advisories = state.profile.advisories();
    for advisory in &advisories {
        warn!("Profile advisory: {}", advisory);
    }

    if !json {
        ConsoleReporter::print_banner();
        ConsoleReporter::print_advisories(&advisories);
        ConsoleReporter::print_profile(&state.profile.to_profile_text());
    }

    let mut controller = ProfileFormController::with_state(client, state);
    let outcome = submit_with_progress(&mut controller, !json).await;
    info!(?outcome, "Submission settled");

    let view = controller.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        ConsoleReporter::print_view(&view);
    }

    Ok(match outcome {
        SubmitOutcome::Succeeded => ExitCode::SUCCESS,
        SubmitOutcome::Failed | SubmitOutcome::Discarded | SubmitOutcome::Rejected => {
            ExitCode::FAILURE
        }
    })
}

/// Submit, printing the Loading view as soon as the form enters it.
async fn submit_with_progress<T: RecommendationTransport>(
    controller: &mut ProfileFormController<T>,
    show_progress: bool,
) -> SubmitOutcome {
    let mut observed = controller.subscribe();
    let submit = controller.submit();
    tokio::pin!(submit);

    loop {
        tokio::select! {
            outcome = &mut submit => return outcome,
            Ok(()) = observed.changed() => {
                let state = observed.borrow_and_update().clone();
                if show_progress && state.ui.is_loading() {
                    ConsoleReporter::print_view(&render(&state));
                }
            }
        }
    }
}
