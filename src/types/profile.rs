// src/types/profile.rs
//! Profile form input and its wire serialization

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::catalog::{self, DEFAULT_SALARY, SALARY_RANGE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub skills: Vec<String>,
    pub education: String,
    pub interests: Vec<String>,
    pub preferred_location: String,
    pub salary_expectation: u32,
    pub experience: String,
}

impl Default for ProfileInput {
    fn default() -> Self {
        Self {
            skills: Vec::new(),
            education: String::new(),
            interests: Vec::new(),
            preferred_location: String::new(),
            salary_expectation: DEFAULT_SALARY,
            experience: String::new(),
        }
    }
}

/// Flip membership of `id`: remove it when present, append it otherwise.
pub fn toggle(items: &[String], id: &str) -> Vec<String> {
    if items.iter().any(|item| item == id) {
        items.iter().filter(|item| *item != id).cloned().collect()
    } else {
        let mut next = items.to_vec();
        next.push(id.to_string());
        next
    }
}

impl ProfileInput {
    pub fn toggle_skill(&mut self, id: &str) {
        self.skills = toggle(&self.skills, id);
    }

    pub fn toggle_interest(&mut self, id: &str) {
        self.interests = toggle(&self.interests, id);
    }

    /// Six-line free-text profile sent to the recommendation service.
    /// Values are written verbatim, without escaping.
    pub fn to_profile_text(&self) -> String {
        format!(
            "Skills: {}\nEducation: {}\nInterests: {}\nPreferred location: {}\nExperience: {}\nSalary expectation: ${}",
            self.skills.join(", "),
            self.education,
            self.interests.join(", "),
            self.preferred_location,
            self.experience,
            self.salary_expectation,
        )
    }

    pub fn to_request(&self) -> RecommendationRequest {
        RecommendationRequest {
            student_profile: self.to_profile_text(),
        }
    }

    /// Things a reviewer may want to know about before submitting. None of
    /// them block submission.
    pub fn advisories(&self) -> Vec<ProfileAdvisory> {
        let mut advisories = Vec::new();

        if !SALARY_RANGE.is_reachable(self.salary_expectation) {
            advisories.push(ProfileAdvisory::SalaryOutsideSlider(
                self.salary_expectation,
            ));
        }

        for skill in &self.skills {
            if !catalog::is_known(catalog::SKILLS, skill) {
                advisories.push(ProfileAdvisory::UnknownOption {
                    field: "skills",
                    value: skill.clone(),
                });
            }
        }
        for interest in &self.interests {
            if !catalog::is_known(catalog::INTERESTS, interest) {
                advisories.push(ProfileAdvisory::UnknownOption {
                    field: "interests",
                    value: interest.clone(),
                });
            }
        }
        if !self.education.is_empty()
            && !catalog::is_known(catalog::EDUCATION_LEVELS, &self.education)
        {
            advisories.push(ProfileAdvisory::UnknownOption {
                field: "education",
                value: self.education.clone(),
            });
        }
        if !self.experience.is_empty()
            && !catalog::is_known(catalog::EXPERIENCE_BRACKETS, &self.experience)
        {
            advisories.push(ProfileAdvisory::UnknownOption {
                field: "experience",
                value: self.experience.clone(),
            });
        }

        let free_text = [
            ("preferred_location", &self.preferred_location),
            ("education", &self.education),
            ("experience", &self.experience),
        ];
        for (field, value) in free_text {
            if value.contains(['\n', '\r']) {
                advisories.push(ProfileAdvisory::LineBreak { field });
            }
        }
        if self
            .skills
            .iter()
            .chain(self.interests.iter())
            .any(|v| v.contains(['\n', '\r']))
        {
            advisories.push(ProfileAdvisory::LineBreak {
                field: "skills/interests",
            });
        }

        advisories
    }
}

/// JSON body of the outbound request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub student_profile: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileAdvisory {
    SalaryOutsideSlider(u32),
    UnknownOption { field: &'static str, value: String },
    /// The profile text will no longer be exactly six lines.
    LineBreak { field: &'static str },
}

impl fmt::Display for ProfileAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SalaryOutsideSlider(value) => write!(
                f,
                "salary {} is not a slider value ({}-{} in steps of {})",
                value, SALARY_RANGE.min, SALARY_RANGE.max, SALARY_RANGE.step
            ),
            Self::UnknownOption { field, value } => {
                write!(f, "'{}' is not a listed {} option", value, field)
            }
            Self::LineBreak { field } => write!(
                f,
                "{} contains a line break; the profile will be sent as-is",
                field
            ),
        }
    }
}

/// Profile as stored on disk. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileFile {
    pub skills: Vec<String>,
    pub education: Option<String>,
    pub interests: Vec<String>,
    pub preferred_location: Option<String>,
    pub salary_expectation: Option<u32>,
    pub experience: Option<String>,
}

impl ProfileFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse profile file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid profile TOML")
    }
}
