// src/catalog.rs
//! Static option lists offered by the profile form

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub id: &'static str,
    pub label: &'static str,
}

const fn opt(id: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { id, label }
}

pub const SKILLS: &[ChoiceOption] = &[
    opt("Python", "Python"),
    opt("JavaScript", "JavaScript"),
    opt("TypeScript", "TypeScript"),
    opt("React", "React"),
    opt("Angular", "Angular"),
    opt("Vue", "Vue.js"),
    opt("Node.js", "Node.js"),
    opt("Express", "Express"),
    opt("Django", "Django"),
    opt("Flask", "Flask"),
    opt("AWS", "AWS"),
    opt("Azure", "Azure"),
    opt("GCP", "Google Cloud"),
    opt("Docker", "Docker"),
    opt("Kubernetes", "Kubernetes"),
    opt("SQL", "SQL"),
    opt("NoSQL", "NoSQL"),
    opt("MongoDB", "MongoDB"),
    opt("GraphQL", "GraphQL"),
    opt("REST", "REST API"),
    opt("Java", "Java"),
    opt("C#", "C#"),
    opt("C++", "C++"),
    opt("Go", "Go"),
    opt("Rust", "Rust"),
    opt("Swift", "Swift"),
    opt("Kotlin", "Kotlin"),
];

pub const INTERESTS: &[ChoiceOption] = &[
    opt("Web development", "Web Development"),
    opt("Mobile development", "Mobile Development"),
    opt("Cloud computing", "Cloud Computing"),
    opt("DevOps", "DevOps"),
    opt("Artificial intelligence", "Artificial Intelligence"),
    opt("Machine learning", "Machine Learning"),
    opt("Data science", "Data Science"),
    opt("Data engineering", "Data Engineering"),
    opt("Cybersecurity", "Cybersecurity"),
    opt("Blockchain", "Blockchain"),
    opt("AR/VR", "AR/VR"),
    opt("Game development", "Game Development"),
    opt("IoT", "Internet of Things"),
    opt("Embedded systems", "Embedded Systems"),
    opt("Fintech", "Financial Technology"),
    opt("Healthtech", "Healthcare Technology"),
    opt("Edtech", "Educational Technology"),
];

pub const EDUCATION_LEVELS: &[ChoiceOption] = &[
    opt("High School", "High School"),
    opt(
        "Associate's in Computer Science",
        "Associate's in Computer Science",
    ),
    opt(
        "Bachelor's in Computer Science",
        "Bachelor's in Computer Science",
    ),
    opt(
        "Bachelor's in Information Technology",
        "Bachelor's in Information Technology",
    ),
    opt(
        "Bachelor's in Software Engineering",
        "Bachelor's in Software Engineering",
    ),
    opt("Master's in Computer Science", "Master's in Computer Science"),
    opt(
        "Master's in Information Technology",
        "Master's in Information Technology",
    ),
    opt("PhD in Computer Science", "PhD in Computer Science"),
    opt("Self-taught", "Self-taught"),
    opt("Bootcamp", "Bootcamp Graduate"),
];

pub const EXPERIENCE_BRACKETS: &[ChoiceOption] = &[
    opt("0-1", "0-1 years"),
    opt("1-3", "1-3 years"),
    opt("3-5", "3-5 years"),
    opt("5-10", "5-10 years"),
    opt("10+", "10+ years"),
];

/// Bounds of the salary slider. Values outside it can still be set
/// programmatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

pub const SALARY_RANGE: SalaryRange = SalaryRange {
    min: 30_000,
    max: 200_000,
    step: 5_000,
};

pub const DEFAULT_SALARY: u32 = 60_000;

impl SalaryRange {
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// True when the value is one the slider can actually produce.
    pub fn is_reachable(&self, value: u32) -> bool {
        self.contains(value) && (value - self.min) % self.step == 0
    }
}

/// Look up an option by its identifier
pub fn find(options: &[ChoiceOption], id: &str) -> Option<ChoiceOption> {
    options.iter().copied().find(|o| o.id == id)
}

pub fn is_known(options: &[ChoiceOption], id: &str) -> bool {
    find(options, id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(SKILLS.len(), 27);
        assert_eq!(INTERESTS.len(), 17);
        assert_eq!(EDUCATION_LEVELS.len(), 10);
        assert_eq!(EXPERIENCE_BRACKETS.len(), 5);
    }

    #[test]
    fn test_ids_are_unique() {
        for options in [SKILLS, INTERESTS, EDUCATION_LEVELS, EXPERIENCE_BRACKETS] {
            let mut ids: Vec<_> = options.iter().map(|o| o.id).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), options.len());
        }
    }

    #[test]
    fn test_find_uses_id_not_label() {
        assert_eq!(find(SKILLS, "GCP").map(|o| o.label), Some("Google Cloud"));
        assert!(find(SKILLS, "Google Cloud").is_none());
        assert_eq!(
            find(EDUCATION_LEVELS, "Bootcamp").map(|o| o.label),
            Some("Bootcamp Graduate")
        );
    }

    #[test]
    fn test_salary_range() {
        assert!(SALARY_RANGE.is_reachable(DEFAULT_SALARY));
        assert!(SALARY_RANGE.is_reachable(30_000));
        assert!(SALARY_RANGE.is_reachable(200_000));
        assert!(!SALARY_RANGE.is_reachable(62_500));
        assert!(!SALARY_RANGE.contains(250_000));
        assert!(!SALARY_RANGE.is_reachable(10_000));
    }
}
