// All LLM prompt constants for the suggestion module.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::NO_SCORES_INSTRUCTION;
use crate::models::profile::UserProfile;
use crate::models::schedule::{Day, ScheduleSlot};
use crate::suggestion::defaults::TIME_LABELS;

/// System prompt for career suggestions; enforces array-only JSON output.
pub const CAREER_SYSTEM: &str =
    "You are an experienced career counselor advising students on career paths. \
    You MUST respond with a valid JSON array only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Career suggestion prompt template.
/// Replace: {count}, {profile_json}, {no_scores_instruction}
const CAREER_PROMPT_TEMPLATE: &str = r#"Suggest {count} career paths for the student profile below.

STUDENT PROFILE:
{profile_json}

Return a JSON ARRAY where every element has this EXACT schema (no extra fields):
[
  {
    "title": "Data Analyst",
    "description": "Collects, cleans, and interprets data to guide decisions.",
    "salaryRange": "$60,000 - $95,000",
    "growthOutlook": "Much faster than average",
    "educationRequirement": "Bachelor's degree",
    "degrees": ["Statistics", "Computer Science"],
    "skills": ["SQL", "Critical thinking"],
    "extracurriculars": ["Math club", "Hackathons"],
    "certifications": ["Google Data Analytics Certificate"],
    "jobTitles": ["Junior Data Analyst", "Business Intelligence Analyst"],
    "universities": ["Carnegie Mellon University"],
    "financialAdvice": {
      "budgetingTips": ["Track monthly spending"],
      "savingTips": ["Open a savings account early"],
      "educationCosts": "Expect $10,000 - $40,000 per year depending on institution",
      "scholarships": ["STEM merit scholarships"],
      "earningWhileStudying": ["Campus tutoring", "Internships"]
    }
  }
]

Rules:
1. Ground every suggestion in the profile's interests, strengths, and preferences.
2. Every element must have a non-empty title and description.
3. {no_scores_instruction}"#;

/// Renders the career prompt for a profile and requested item count.
pub fn render_career_prompt(profile: &UserProfile, count: usize) -> String {
    CAREER_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{profile_json}", &profile_json(profile))
        .replace("{no_scores_instruction}", NO_SCORES_INSTRUCTION)
}

/// System prompt for schedule generation; enforces array-only JSON output.
pub const SCHEDULE_SYSTEM: &str =
    "You are a study coach building weekly schedules for students. \
    You MUST respond with a valid JSON array only. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Schedule prompt template.
/// Replace: {profile_json}, {current_schedule_json}, {days}, {time_labels},
///          {no_scores_instruction}
const SCHEDULE_PROMPT_TEMPLATE: &str = r#"Build a weekly study schedule for the student profile below.

STUDENT PROFILE:
{profile_json}

CURRENT SCHEDULE (may be empty; improve on it, do not simply repeat it):
{current_schedule_json}

Return a JSON ARRAY of slots with this EXACT schema (no extra fields):
[
  {"day": "Monday", "timeLabel": "8:00 AM", "activity": "Study Session"}
]

Rules:
1. "day" must be one of: {days}.
2. "timeLabel" must be one of: {time_labels}.
3. At most one activity per day and time label pair.
4. A full week need not fill every slot; prefer a sustainable load.
5. {no_scores_instruction}"#;

/// Renders the schedule prompt for a profile and the student's current week.
pub fn render_schedule_prompt(profile: &UserProfile, current: &[ScheduleSlot]) -> String {
    let current_json = if current.is_empty() {
        "[]".to_string()
    } else {
        serde_json::to_string_pretty(current).unwrap_or_else(|_| "[]".to_string())
    };

    let days = Day::ALL
        .iter()
        .map(|d| d.name())
        .collect::<Vec<_>>()
        .join(", ");

    SCHEDULE_PROMPT_TEMPLATE
        .replace("{profile_json}", &profile_json(profile))
        .replace("{current_schedule_json}", &current_json)
        .replace("{days}", &days)
        .replace("{time_labels}", &TIME_LABELS.join(", "))
        .replace("{no_scores_instruction}", NO_SCORES_INSTRUCTION)
}

fn profile_json(profile: &UserProfile) -> String {
    serde_json::to_string_pretty(profile).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            grade: "Grade 11".to_string(),
            career_interest: "Computer Science & IT".to_string(),
            skills: vec!["Technical skills".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_career_prompt_embeds_profile_and_count() {
        let prompt = render_career_prompt(&sample_profile(), 3);
        assert!(prompt.contains("Suggest 3 career paths"));
        assert!(prompt.contains("Computer Science & IT"));
        assert!(!prompt.contains("{count}"));
        assert!(!prompt.contains("{profile_json}"));
        assert!(!prompt.contains("{no_scores_instruction}"));
    }

    #[test]
    fn test_schedule_prompt_lists_valid_vocabulary() {
        let prompt = render_schedule_prompt(&sample_profile(), &[]);
        assert!(prompt.contains("Monday, Tuesday"));
        assert!(prompt.contains("8:00 AM"));
        assert!(prompt.contains("6:30 PM"));
        assert!(!prompt.contains("{days}"));
        assert!(!prompt.contains("{time_labels}"));
    }

    #[test]
    fn test_schedule_prompt_includes_current_slots() {
        let current = vec![ScheduleSlot {
            day: Day::Monday,
            time_label: "8:00 AM".to_string(),
            activity: "Reading".to_string(),
            color: "#10b981".to_string(),
        }];
        let prompt = render_schedule_prompt(&sample_profile(), &current);
        assert!(prompt.contains("\"Reading\""));
    }

    #[test]
    fn test_prompts_are_deterministic_for_same_profile() {
        let profile = sample_profile();
        assert_eq!(
            render_career_prompt(&profile, 2),
            render_career_prompt(&profile, 2)
        );
    }
}
