//! Fallback synthesizer: deterministic, external-service-independent results.
//!
//! Pure functions of the profile: no randomness, no I/O, no clock. The
//! fallback guarantees availability, not quality; the careers variant is
//! intentionally a single generic item.

use std::collections::BTreeMap;

use crate::models::profile::UserProfile;
use crate::models::schedule::ScheduleSlot;
use crate::models::suggestion::{FinancialAdvice, SuggestionItem};
use crate::suggestion::defaults::{
    color_for_activity, DEFAULT_UNIVERSITIES, MATH_KEYWORDS, TECH_KEYWORDS, TIME_LABELS,
    WEEKLY_TEMPLATE,
};

/// Synthesizes the careers fallback: exactly one generic, complete item.
/// The title is fixed and generic; only the description references the
/// profile, so a fallback item never wins the title-match score bonus.
pub fn synthesize_career_fallback(profile: &UserProfile) -> Vec<SuggestionItem> {
    let interest = profile.career_interest.trim();
    let description = if interest.is_empty() {
        "A flexible starting path while you explore professional options across industries. \
         Build transferable skills and narrow your direction through coursework and hands-on experience."
            .to_string()
    } else {
        format!(
            "A flexible starting path while you explore options related to {interest}. \
             Build transferable skills and narrow your direction through coursework and hands-on experience."
        )
    };

    vec![SuggestionItem {
        title: "Career Explorer".to_string(),
        description,
        salary_range: "$40,000 - $65,000".to_string(),
        growth_outlook: "Stable across industries".to_string(),
        education_requirement: "High school diploma; bachelor's degree recommended".to_string(),
        degrees: vec![
            "General Studies".to_string(),
            "Liberal Arts".to_string(),
            "Business Administration".to_string(),
        ],
        skills: vec![
            "Communication".to_string(),
            "Problem solving".to_string(),
            "Time management".to_string(),
            "Adaptability".to_string(),
        ],
        extracurriculars: vec![
            "Volunteering".to_string(),
            "Student clubs".to_string(),
            "Part-time work".to_string(),
        ],
        certifications: vec!["Career readiness certificate".to_string()],
        job_titles: vec![
            "Administrative Assistant".to_string(),
            "Customer Support Specialist".to_string(),
            "Junior Analyst".to_string(),
        ],
        universities: DEFAULT_UNIVERSITIES.iter().map(|u| u.to_string()).collect(),
        financial_advice: FinancialAdvice {
            budgeting_tips: vec![
                "Track monthly spending in three categories: needs, wants, savings".to_string(),
                "Set a fixed weekly allowance for discretionary spending".to_string(),
            ],
            saving_tips: vec![
                "Open a high-yield savings account early".to_string(),
                "Save a fixed share of any part-time income".to_string(),
            ],
            education_costs: "Compare in-state tuition and community college transfer paths \
                              before committing to a four-year program"
                .to_string(),
            scholarships: vec![
                "Local community foundation scholarships".to_string(),
                "Merit awards at your state universities".to_string(),
            ],
            earning_while_studying: vec![
                "Campus work-study positions".to_string(),
                "Tutoring younger students".to_string(),
            ],
        },
    }]
}

/// Synthesizes a full-week schedule from the fixed per-day template, with
/// profile-driven substitutions. Time labels are assigned by walking the
/// fixed label list in order, wrapping around if a day outgrows it; a wrapped
/// label overwrites the earlier slot in that day (later write wins).
pub fn synthesize_schedule_fallback(profile: &UserProfile) -> Vec<ScheduleSlot> {
    let technical = has_technical_bent(profile);
    let mathematical = mentions_mathematics(profile);

    let mut week = Vec::new();
    for (day, activities) in WEEKLY_TEMPLATE {
        // Keyed by label index so a wraparound insert replaces the earlier
        // occupant of the same (day, time) pair.
        let mut slots: BTreeMap<usize, ScheduleSlot> = BTreeMap::new();
        for (position, activity) in activities.iter().enumerate() {
            let activity = substitute_activity(*activity, technical, mathematical);
            let label_index = position % TIME_LABELS.len();
            slots.insert(
                label_index,
                ScheduleSlot {
                    day: *day,
                    time_label: TIME_LABELS[label_index].to_string(),
                    activity: activity.to_string(),
                    color: color_for_activity(activity).to_string(),
                },
            );
        }
        week.extend(slots.into_values());
    }
    week
}

fn substitute_activity(activity: &'static str, technical: bool, mathematical: bool) -> &'static str {
    if technical && activity == "Reading" {
        "Coding Practice"
    } else if mathematical && activity == "Practice Problems" {
        "Math Problems"
    } else {
        activity
    }
}

/// True when the career interest or any skill carries a technical keyword.
pub fn has_technical_bent(profile: &UserProfile) -> bool {
    std::iter::once(&profile.career_interest)
        .chain(profile.skills.iter())
        .map(|s| s.to_lowercase())
        .any(|s| TECH_KEYWORDS.iter().any(|kw| s.contains(kw)))
}

/// True when any academic strength mentions mathematics.
pub fn mentions_mathematics(profile: &UserProfile) -> bool {
    profile
        .academic_strengths
        .iter()
        .map(|s| s.to_lowercase())
        .any(|s| MATH_KEYWORDS.iter().any(|kw| s.contains(kw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::Day;
    use crate::suggestion::defaults::NEUTRAL_COLOR;

    fn profile_with(interest: &str, skills: &[&str], strengths: &[&str]) -> UserProfile {
        UserProfile {
            grade: "Grade 11".to_string(),
            career_interest: interest.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            academic_strengths: strengths.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_career_fallback_is_exactly_one_complete_item() {
        let items = synthesize_career_fallback(&profile_with("Nursing", &[], &[]));
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert!(!item.title.is_empty());
        assert!(!item.description.is_empty());
        assert!(!item.degrees.is_empty());
        assert!(!item.skills.is_empty());
        assert!(!item.universities.is_empty());
        assert!(!item.financial_advice.budgeting_tips.is_empty());
        assert!(!item.financial_advice.education_costs.is_empty());
    }

    #[test]
    fn test_career_fallback_title_never_echoes_interest() {
        let items = synthesize_career_fallback(&profile_with("Computer Science & IT", &[], &[]));
        assert!(!items[0]
            .title
            .to_lowercase()
            .contains("computer science & it"));
    }

    #[test]
    fn test_career_fallback_is_deterministic() {
        let profile = profile_with("Marketing", &["Creativity"], &[]);
        let first = serde_json::to_value(synthesize_career_fallback(&profile)).unwrap();
        let second = serde_json::to_value(synthesize_career_fallback(&profile)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_schedule_fallback_covers_all_seven_days() {
        let week = synthesize_schedule_fallback(&profile_with("", &[], &[]));
        for day in Day::ALL {
            assert!(
                week.iter().any(|slot| slot.day == day),
                "{} missing from fallback week",
                day.name()
            );
        }
    }

    #[test]
    fn test_schedule_fallback_no_duplicate_day_time_pairs() {
        let week = synthesize_schedule_fallback(&profile_with("Computer Science", &[], &["Mathematics"]));
        let mut seen = std::collections::HashSet::new();
        for slot in &week {
            assert!(
                seen.insert((slot.day, slot.time_label.clone())),
                "duplicate slot {} {}",
                slot.day.name(),
                slot.time_label
            );
        }
    }

    #[test]
    fn test_technical_profile_gets_coding_practice() {
        let week = synthesize_schedule_fallback(&profile_with("Computer Science & IT", &[], &[]));
        assert!(week.iter().any(|slot| slot.activity == "Coding Practice"));
        assert!(!week.iter().any(|slot| slot.activity == "Reading"));
    }

    #[test]
    fn test_technical_bent_detected_from_skills_alone() {
        let week = synthesize_schedule_fallback(&profile_with("", &["Technical skills"], &[]));
        assert!(week.iter().any(|slot| slot.activity == "Coding Practice"));
    }

    #[test]
    fn test_non_technical_profile_keeps_reading() {
        let week = synthesize_schedule_fallback(&profile_with("Culinary Arts", &[], &[]));
        assert!(week.iter().any(|slot| slot.activity == "Reading"));
        assert!(!week.iter().any(|slot| slot.activity == "Coding Practice"));
    }

    #[test]
    fn test_math_strength_gets_math_problems_somewhere() {
        let week = synthesize_schedule_fallback(&profile_with("", &[], &["Mathematics"]));
        assert!(week.iter().any(|slot| slot.activity == "Math Problems"));
    }

    #[test]
    fn test_schedule_fallback_is_deterministic() {
        let profile = profile_with("Engineering", &["Technical skills"], &["Mathematics"]);
        let first = serde_json::to_value(synthesize_schedule_fallback(&profile)).unwrap();
        let second = serde_json::to_value(synthesize_schedule_fallback(&profile)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_time_labels_assigned_in_fixed_order() {
        let week = synthesize_schedule_fallback(&profile_with("", &[], &[]));
        let monday: Vec<&ScheduleSlot> = week.iter().filter(|s| s.day == Day::Monday).collect();
        assert_eq!(monday[0].time_label, TIME_LABELS[0]);
        assert_eq!(monday[1].time_label, TIME_LABELS[1]);
        assert_eq!(monday[2].time_label, TIME_LABELS[2]);
    }

    #[test]
    fn test_every_fallback_slot_has_a_known_color() {
        let week = synthesize_schedule_fallback(&profile_with("Software", &[], &["Math"]));
        for slot in &week {
            assert_ne!(slot.color, NEUTRAL_COLOR, "{} unmapped", slot.activity);
        }
    }
}
