//! Field normalizer: coerces loosely-typed raw items into canonical shapes.
//!
//! Output is never partially normalized: every canonical field is present,
//! at worst as an empty collection or a "Not specified" placeholder. The only
//! error is a fundamentally wrong shape (the raw item is not an object /
//! carries no usable slot identity), in which case that one item is dropped
//! by the orchestrator; never the whole batch.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::schedule::{Day, ScheduleSlot};
use crate::models::suggestion::{FinancialAdvice, SuggestionItem, NOT_SPECIFIED};
use crate::suggestion::defaults::{color_for_activity, universities_for_title, TIME_LABELS};

#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("raw item is not a JSON object")]
    NotAnObject,

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("unrecognized day name: {0}")]
    InvalidDay(String),

    #[error("unrecognized time label: {0}")]
    InvalidTimeLabel(String),
}

/// Normalizes one raw career item.
///
/// String fields accept a non-empty string under the camelCase key or its
/// snake_case alias; LLM replies drift between the two. An empty or missing
/// university list is derived from the title via the shared keyword table.
/// Raw fit scores are ignored: scoring is always recomputed downstream.
pub fn normalize_career(raw: &Value) -> Result<SuggestionItem, NormalizationError> {
    let obj = raw.as_object().ok_or(NormalizationError::NotAnObject)?;

    let title = string_field(obj, &["title"]).unwrap_or_else(|| NOT_SPECIFIED.to_string());
    let description =
        string_field(obj, &["description"]).unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let mut universities = list_field(obj, &["universities", "recommendedUniversities"]);
    if universities.is_empty() {
        universities = universities_for_title(&title);
    }

    Ok(SuggestionItem {
        salary_range: string_field(obj, &["salaryRange", "salary_range", "salary"])
            .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        growth_outlook: string_field(obj, &["growthOutlook", "growth_outlook", "outlook"])
            .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        education_requirement: string_field(
            obj,
            &["educationRequirement", "education_requirement", "education"],
        )
        .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        degrees: list_field(obj, &["degrees", "recommendedDegrees", "recommended_degrees"]),
        skills: list_field(obj, &["skills", "requiredSkills", "required_skills"]),
        extracurriculars: list_field(
            obj,
            &["extracurriculars", "extracurricularActivities", "extracurricular_activities"],
        ),
        certifications: list_field(obj, &["certifications"]),
        job_titles: list_field(obj, &["jobTitles", "job_titles", "roles"]),
        financial_advice: financial_advice_field(obj),
        title,
        description,
        universities,
    })
}

/// Normalizes one raw schedule slot. Day and time label must resolve against
/// the fixed enumerations; the activity string is kept verbatim and its
/// display color derived from the shared table.
pub fn normalize_schedule_slot(raw: &Value) -> Result<ScheduleSlot, NormalizationError> {
    let obj = raw.as_object().ok_or(NormalizationError::NotAnObject)?;

    let day_raw = string_field(obj, &["day"]).ok_or(NormalizationError::MissingField("day"))?;
    let day = Day::parse(&day_raw).ok_or(NormalizationError::InvalidDay(day_raw))?;

    let time_raw = string_field(obj, &["timeLabel", "time_label", "time"])
        .ok_or(NormalizationError::MissingField("timeLabel"))?;
    let time_label = canonical_time_label(&time_raw)
        .ok_or(NormalizationError::InvalidTimeLabel(time_raw))?;

    let activity =
        string_field(obj, &["activity"]).ok_or(NormalizationError::MissingField("activity"))?;
    let color = color_for_activity(&activity).to_string();

    Ok(ScheduleSlot {
        day,
        time_label: time_label.to_string(),
        activity,
        color,
    })
}

/// Resolves a raw time string to its canonical label, case-insensitively.
fn canonical_time_label(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    TIME_LABELS
        .iter()
        .copied()
        .find(|label| label.eq_ignore_ascii_case(raw))
}

/// First non-empty string found under any of the aliased keys.
fn string_field(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// String elements of the first array found under any of the aliased keys.
/// Non-string elements are skipped; a non-array value yields the empty list.
fn list_field(obj: &Map<String, Value>, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .filter_map(Value::as_array)
        .next()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn financial_advice_field(obj: &Map<String, Value>) -> FinancialAdvice {
    let nested = obj
        .get("financialAdvice")
        .or_else(|| obj.get("financial_advice"))
        .and_then(Value::as_object);

    match nested {
        Some(advice) => FinancialAdvice {
            budgeting_tips: list_field(advice, &["budgetingTips", "budgeting_tips"]),
            saving_tips: list_field(advice, &["savingTips", "saving_tips"]),
            education_costs: string_field(advice, &["educationCosts", "education_costs"])
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            scholarships: list_field(advice, &["scholarships", "scholarshipSuggestions"]),
            earning_while_studying: list_field(
                advice,
                &["earningWhileStudying", "earning_while_studying"],
            ),
        },
        None => FinancialAdvice {
            education_costs: NOT_SPECIFIED.to_string(),
            ..FinancialAdvice::default()
        },
    }
}
