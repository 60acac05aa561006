//! Career suggestion records: the careers variant of the pipeline output.

use serde::{Deserialize, Serialize};

/// Placeholder for string fields the raw reply did not supply.
pub const NOT_SPECIFIED: &str = "Not specified";

/// A normalized career recommendation.
///
/// Every list field defaults to empty, never null, so downstream rendering
/// never branches on missing collections. Title is the identity key within a
/// result set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionItem {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub growth_outlook: String,
    #[serde(default)]
    pub education_requirement: String,
    #[serde(default)]
    pub degrees: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub extracurriculars: Vec<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub job_titles: Vec<String>,
    #[serde(default)]
    pub universities: Vec<String>,
    #[serde(default)]
    pub financial_advice: FinancialAdvice,
}

/// Nested financial guidance attached to each career suggestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAdvice {
    #[serde(default)]
    pub budgeting_tips: Vec<String>,
    #[serde(default)]
    pub saving_tips: Vec<String>,
    #[serde(default)]
    pub education_costs: String,
    #[serde(default)]
    pub scholarships: Vec<String>,
    #[serde(default)]
    pub earning_while_studying: Vec<String>,
}

/// A suggestion item paired with its computed fit score.
///
/// The score is recomputed on every request; raw scores from an LLM reply
/// are never trusted or surfaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSuggestion {
    #[serde(flatten)]
    pub item: SuggestionItem,
    pub fit_score: u32,
}

/// Marks whether a result set came from the AI path or the deterministic
/// fallback. Degraded quality is signaled here, never via an error status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Ai,
    Fallback,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Ai => "ai",
            Provenance::Fallback => "fallback",
        }
    }
}

/// Discriminator for the two pipeline variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    #[default]
    Careers,
    Schedule,
}

impl SuggestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Careers => "careers",
            SuggestionKind::Schedule => "schedule",
        }
    }
}
