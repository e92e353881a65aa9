//! Portfolio content: the data every section renders.
//!
//! Content is plain data deserialized from TOML. A built-in portfolio is
//! used when no content file is configured.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Deserialize;
use std::path::PathBuf;

/// Everything shown on screen.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    /// Hero banner and introduction.
    pub profile: Profile,

    /// Social links shown under the introduction.
    #[serde(default)]
    pub socials: Vec<SocialLink>,

    /// Career history, one tab per entry.
    #[serde(default)]
    pub experience: Vec<Experience>,

    /// Skills grid, one column per group.
    #[serde(default)]
    pub skills: Vec<SkillGroup>,

    /// Carousel slides. Must not be empty.
    #[serde(default)]
    pub projects: Vec<Project>,

    /// Daily contribution counts for the calendar.
    #[serde(default)]
    pub contributions: Vec<ContributionDay>,

    /// Cat gallery images.
    #[serde(default)]
    pub cats: Vec<CatImage>,

    /// Resume file offered for export.
    #[serde(default)]
    pub resume: Option<PathBuf>,

    /// Background music file.
    #[serde(default)]
    pub music: Option<PathBuf>,
}

/// Hero banner and introduction.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// One-line role, e.g. "Software Engineer".
    pub title: String,
    /// Short line under the title.
    #[serde(default)]
    pub tagline: String,
    /// Introduction, rendered as markdown.
    #[serde(default)]
    pub about: String,
}

/// A labelled external link.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Short label ("GitHub").
    pub label: String,
    /// Link target.
    pub url: String,
}

/// One position in the career history.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    /// Employer; used as the tab title.
    pub company: String,
    /// Job title.
    pub role: String,
    /// Free-form period, e.g. "2021 - present".
    pub period: String,
    /// Bullet points.
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// A named group of skills.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SkillGroup {
    /// Group heading.
    pub category: String,
    /// Skills in display order.
    pub skills: Vec<String>,
}

/// One carousel slide.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// Description, rendered as markdown.
    #[serde(default)]
    pub summary: String,
    /// Technology tags.
    #[serde(default)]
    pub tech: Vec<String>,
    /// Repository or demo link.
    #[serde(default)]
    pub url: Option<String>,
}

/// Contribution count for one calendar day.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContributionDay {
    /// Calendar day.
    pub date: NaiveDate,
    /// Number of contributions that day.
    pub count: u32,
}

/// One gallery image.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatImage {
    /// Caption shown under the image.
    pub caption: String,
    /// Image file, relative paths resolve against the content file.
    pub path: PathBuf,
}

impl Portfolio {
    /// The portfolio shown when no content file is configured.
    ///
    /// Contribution data is synthesized for the year ending at `today`.
    pub fn builtin(today: NaiveDate) -> Self {
        Self {
            profile: Profile {
                name: "Jordan Lee".to_string(),
                title: "Software Engineer".to_string(),
                tagline: "Building fast, friendly tools.".to_string(),
                about: "Hi! I build **developer tools** and *interactive* interfaces.\n\n\
                        I like small binaries, clear state machines, and cats."
                    .to_string(),
            },
            socials: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/example".to_string(),
                },
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://www.linkedin.com/in/example".to_string(),
                },
                SocialLink {
                    label: "Email".to_string(),
                    url: "mailto:hello@example.com".to_string(),
                },
            ],
            experience: vec![
                Experience {
                    company: "Acme Corp".to_string(),
                    role: "Senior Engineer".to_string(),
                    period: "2022 - present".to_string(),
                    highlights: vec![
                        "Led the rewrite of the billing pipeline".to_string(),
                        "Mentored four engineers".to_string(),
                    ],
                },
                Experience {
                    company: "Globex".to_string(),
                    role: "Engineer".to_string(),
                    period: "2019 - 2022".to_string(),
                    highlights: vec!["Shipped the mobile onboarding flow".to_string()],
                },
                Experience {
                    company: "Initech".to_string(),
                    role: "Intern".to_string(),
                    period: "2018".to_string(),
                    highlights: vec!["Automated weekly TPS reports".to_string()],
                },
            ],
            skills: vec![
                SkillGroup {
                    category: "Languages".to_string(),
                    skills: vec!["Rust".into(), "TypeScript".into(), "Python".into()],
                },
                SkillGroup {
                    category: "Frameworks".to_string(),
                    skills: vec!["React".into(), "ratatui".into(), "Axum".into()],
                },
                SkillGroup {
                    category: "Tools".to_string(),
                    skills: vec!["Git".into(), "Docker".into(), "PostgreSQL".into()],
                },
            ],
            projects: vec![
                Project {
                    name: "folio".to_string(),
                    summary: "This portfolio, in your **terminal**.".to_string(),
                    tech: vec!["Rust".into(), "ratatui".into()],
                    url: Some("https://github.com/example/folio".to_string()),
                },
                Project {
                    name: "Tidewatch".to_string(),
                    summary: "Tide predictions with offline caching.".to_string(),
                    tech: vec!["TypeScript".into(), "React".into()],
                    url: None,
                },
                Project {
                    name: "Ledgerline".to_string(),
                    summary: "Double-entry bookkeeping for side projects.".to_string(),
                    tech: vec!["Rust".into(), "SQLite".into()],
                    url: Some("https://github.com/example/ledgerline".to_string()),
                },
                Project {
                    name: "Purrfect".to_string(),
                    summary: "Cat feeding scheduler with *very* strict opinions.".to_string(),
                    tech: vec!["Python".into()],
                    url: None,
                },
            ],
            contributions: synthesize_contributions(today),
            cats: vec![
                CatImage {
                    caption: "Mochi, supervising".to_string(),
                    path: PathBuf::from("cats/mochi.jpg"),
                },
                CatImage {
                    caption: "Biscuit, mid-loaf".to_string(),
                    path: PathBuf::from("cats/biscuit.jpg"),
                },
            ],
            resume: None,
            music: None,
        }
    }

    /// Number of carousel slides.
    pub fn project_count(&self) -> usize {
        self.projects.len()
    }
}

/// Deterministic contribution pattern for the year ending at `today`.
fn synthesize_contributions(today: NaiveDate) -> Vec<ContributionDay> {
    (0..365)
        .rev()
        .map(|days_ago| {
            let date = today - Duration::days(days_ago);
            let seed = date.ordinal() * 7 + date.weekday().num_days_from_sunday() * 3;
            ContributionDay {
                date,
                count: (seed % 11).saturating_sub(3),
            }
        })
        .collect()
}
