//! User profile: the structured input every pipeline run is a function of.
//!
//! Supplied by the caller per request and never mutated by the core. The wire
//! format is camelCase because the consuming frontend is JavaScript.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub grade: String,
    pub career_interest: String,
    pub academic_interests: Vec<String>,
    pub academic_strengths: Vec<String>,
    pub preferred_environment: String,
    pub task_preference: String,
    pub skills: Vec<String>,
    pub tech_confidence: String,
    pub work_life_balance: String,
    pub career_motivation: String,
    pub study_goal: String,
}

impl UserProfile {
    /// A profile is actionable when at least one of grade / career interest is
    /// set. Anything less produces a low-value fallback, so the caller gets a
    /// validation error instead.
    pub fn is_actionable(&self) -> bool {
        !self.grade.trim().is_empty() || !self.career_interest.trim().is_empty()
    }

    pub fn tech_confidence_level(&self) -> TechConfidence {
        TechConfidence::parse(&self.tech_confidence)
    }
}

/// Self-reported technology confidence, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TechConfidence {
    Beginner,
    Intermediate,
    Expert,
}

impl TechConfidence {
    /// Lenient parse; profiles arrive as free-form strings from the UI.
    /// Unrecognized values rank lowest.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim().to_lowercase();
        if raw.contains("expert") || raw.contains("advanced") {
            TechConfidence::Expert
        } else if raw.contains("intermediate") || raw.contains("moderate") {
            TechConfidence::Intermediate
        } else {
            TechConfidence::Beginner
        }
    }
}
