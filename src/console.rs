// src/console.rs
use colored::Colorize;

use crate::catalog::{ChoiceOption, SALARY_RANGE};
use crate::render::{SubmitAffordance, View, FORM_DESCRIPTION, FORM_TITLE};
use crate::types::ProfileAdvisory;
use crate::utils::format_thousands;

pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn print_banner() {
        println!("{}", FORM_TITLE.bold().cyan());
        println!("{}", FORM_DESCRIPTION.dimmed());
    }

    pub fn print_profile(profile_text: &str) {
        println!();
        for line in profile_text.lines() {
            match line.split_once(": ") {
                Some((label, value)) => println!("  {}: {}", label.bold(), value),
                None => println!("  {}", line),
            }
        }
    }

    pub fn print_advisories(advisories: &[ProfileAdvisory]) {
        for advisory in advisories {
            println!("{} {}", "⚠".yellow(), advisory.to_string().yellow());
        }
    }

    pub fn print_view(view: &View) {
        println!();
        println!("{}", view.salary_label);

        match &view.submit {
            SubmitAffordance::Button(label) => println!("[ {} ]", label),
            SubmitAffordance::Progress(label) => println!("⏳ {}", label.italic()),
        }

        if let Some(alert) = &view.alert {
            println!();
            println!("{}: {}", alert.title.red().bold(), alert.message.red());
        }

        if let Some(results) = &view.results {
            println!();
            println!("{}", results.heading.bold());
            for (idx, card) in results.cards.iter().enumerate() {
                println!(
                    "\n{}. {} [{}]",
                    idx + 1,
                    card.title.bold(),
                    card.badge.green()
                );
                println!("   🏢 {}", card.company);
                if let Some(salary) = &card.salary_line {
                    println!("   {}", salary);
                }
            }
        }

        if let Some(note) = &view.note {
            println!();
            println!("{}", note.dimmed());
        }
    }

    pub fn print_options(heading: &str, options: &[ChoiceOption]) {
        println!("\n{}", heading.bold().cyan());
        for option in options {
            if option.id == option.label {
                println!("  {}", option.id);
            } else {
                println!("  {:<40} {}", option.id, option.label.dimmed());
            }
        }
    }

    pub fn print_salary_range() {
        println!("\n{}", "Salary expectation".bold().cyan());
        println!(
            "  ${} - ${} in steps of ${}",
            format_thousands(SALARY_RANGE.min.into()),
            format_thousands(SALARY_RANGE.max.into()),
            format_thousands(SALARY_RANGE.step.into())
        );
    }
}
