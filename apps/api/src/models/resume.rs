//! Resume record: the full user-authored data structure that flows through
//! the refinement pipeline.
//!
//! Items in the three reconcilable collections (positions, projects,
//! activities) carry a caller-assigned `id` and an AI-owned
//! `refined_bullets` field. Everything else is user-authored and must survive
//! refinement untouched.

use serde::{Deserialize, Serialize};

/// Which precondition set applies to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Has prior work experience: positions or skills are required.
    Experienced,
    /// Student / entry level: education or skills are required.
    EntryLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetJob {
    pub title: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub id: String,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub is_current: bool,
    /// What the user typed about the role.
    #[serde(default)]
    pub raw_description: String,
    #[serde(default)]
    pub refined_bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub raw_description: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub refined_bullets: Vec<String>,
}

/// Extracurricular activity, volunteering, student organisation and the like.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub refined_bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// The caller's full input to the refinement pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default)]
    pub category: Option<Category>,
    pub target_job: TargetJob,
    pub profile: Profile,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// AI-generated professional summary. Empty until produced.
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

impl ResumeRecord {
    /// Snapshot title used when persisting a generated resume.
    pub fn snapshot_title(&self) -> String {
        let title = self.target_job.title.trim();
        let company = self.target_job.company.trim();
        match (title.is_empty(), company.is_empty()) {
            (false, false) => format!("{title} at {company}"),
            (false, true) => title.to_string(),
            (true, false) => format!("Resume for {company}"),
            (true, true) => "Untitled resume".to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reconcilable items
// ────────────────────────────────────────────────────────────────────────────

/// An item whose `refined_bullets` may be replaced by the refinement pipeline.
///
/// Implementors must only ever change `refined_bullets` in
/// [`Refinable::with_refined_bullets`]; every other field is user-authored.
pub trait Refinable: Clone {
    fn id(&self) -> &str;
    fn with_refined_bullets(&self, bullets: Vec<String>) -> Self;
}

macro_rules! impl_refinable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Refinable for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn with_refined_bullets(&self, bullets: Vec<String>) -> Self {
                    Self {
                        refined_bullets: bullets,
                        ..self.clone()
                    }
                }
            }
        )+
    };
}

impl_refinable!(Position, Project, Activity);
