//! Shared lookup tables for the suggestion pipeline.
//!
//! Every fixed default lives in this one module so the same table backs every
//! call site; the normalizer, the fallback synthesizer, and the scorer must
//! never disagree about a default.

use crate::models::schedule::Day;

// ────────────────────────────────────────────────────────────────────────────
// Universities
// ────────────────────────────────────────────────────────────────────────────

/// Generic university list used when no domain keyword matches a title.
pub const DEFAULT_UNIVERSITIES: &[&str] = &[
    "Arizona State University",
    "Pennsylvania State University",
    "University of Florida",
];

/// Domain keyword → university list, checked in this exact order.
/// "software" precedes "engineering" so "Software Engineer" keys the
/// software list, not the engineering one.
pub const UNIVERSITY_TABLE: &[(&str, &[&str])] = &[
    (
        "software",
        &[
            "Massachusetts Institute of Technology",
            "Stanford University",
            "Carnegie Mellon University",
            "University of California, Berkeley",
        ],
    ),
    (
        "data",
        &[
            "Carnegie Mellon University",
            "University of Washington",
            "Georgia Institute of Technology",
        ],
    ),
    (
        "medicine",
        &[
            "Harvard University",
            "Johns Hopkins University",
            "Duke University",
        ],
    ),
    (
        "business",
        &[
            "University of Pennsylvania",
            "New York University",
            "University of Michigan",
        ],
    ),
    (
        "marketing",
        &[
            "Northwestern University",
            "New York University",
            "Indiana University Bloomington",
        ],
    ),
    (
        "nursing",
        &[
            "University of Pennsylvania",
            "Johns Hopkins University",
            "Emory University",
        ],
    ),
    (
        "journalism",
        &[
            "Northwestern University",
            "Columbia University",
            "University of Missouri",
        ],
    ),
    (
        "engineering",
        &[
            "Massachusetts Institute of Technology",
            "Georgia Institute of Technology",
            "Purdue University",
            "University of Illinois Urbana-Champaign",
        ],
    ),
];

/// Derives a university list from a suggestion title.
/// First matching keyword (case-insensitive substring) wins; the check order
/// is the fixed table order, so the same title always yields the same list.
pub fn universities_for_title(title: &str) -> Vec<String> {
    let title = title.to_lowercase();
    for (keyword, universities) in UNIVERSITY_TABLE {
        if title.contains(keyword) {
            return universities.iter().map(|u| u.to_string()).collect();
        }
    }
    DEFAULT_UNIVERSITIES.iter().map(|u| u.to_string()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Schedule vocabulary
// ────────────────────────────────────────────────────────────────────────────

/// The eight daily time labels, in display order.
pub const TIME_LABELS: [&str; 8] = [
    "8:00 AM", "9:30 AM", "11:00 AM", "12:30 PM", "2:00 PM", "3:30 PM", "5:00 PM", "6:30 PM",
];

/// Display color for an unrecognized activity.
pub const NEUTRAL_COLOR: &str = "#94a3b8";

/// Activity → display color.
pub const ACTIVITY_COLORS: &[(&str, &str)] = &[
    ("Study Session", "#3b82f6"),
    ("Reading", "#10b981"),
    ("Coding Practice", "#8b5cf6"),
    ("Practice Problems", "#f97316"),
    ("Math Problems", "#f59e0b"),
    ("Homework", "#06b6d4"),
    ("Project Work", "#6366f1"),
    ("Review Notes", "#14b8a6"),
    ("Exercise", "#ef4444"),
    ("Break", "#64748b"),
    ("Free Time", "#a3e635"),
];

/// Deterministic color lookup, case-insensitive on the activity name.
pub fn color_for_activity(activity: &str) -> &'static str {
    ACTIVITY_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(activity.trim()))
        .map(|(_, color)| *color)
        .unwrap_or(NEUTRAL_COLOR)
}

/// Fixed per-day activity template for the schedule fallback.
/// "Reading" slots are the substitution point for technically-inclined
/// profiles; "Practice Problems" for mathematically strong ones.
pub const WEEKLY_TEMPLATE: &[(Day, &[&str])] = &[
    (Day::Monday, &["Study Session", "Reading", "Exercise"]),
    (Day::Tuesday, &["Homework", "Practice Problems", "Break"]),
    (Day::Wednesday, &["Study Session", "Reading", "Project Work"]),
    (Day::Thursday, &["Homework", "Practice Problems", "Exercise"]),
    (Day::Friday, &["Review Notes", "Reading", "Break"]),
    (Day::Saturday, &["Project Work", "Exercise", "Free Time"]),
    (Day::Sunday, &["Review Notes", "Break", "Free Time"]),
];

// ────────────────────────────────────────────────────────────────────────────
// Profile keyword sets
// ────────────────────────────────────────────────────────────────────────────

/// Keywords marking a technical bent in a career interest or skill.
pub const TECH_KEYWORDS: &[&str] = &[
    "computer",
    "software",
    "tech",
    "coding",
    "programming",
    "engineering",
    "data",
];

/// Keywords marking mathematical strength in academic strengths.
pub const MATH_KEYWORDS: &[&str] = &["math"];

/// Study-goal keywords that earn the advanced-degree scoring bonus.
pub const ADVANCED_DEGREE_KEYWORDS: &[&str] = &["bachelor", "masters", "phd"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_engineer_keys_software_list() {
        // "Software Engineer" contains both "software" and "engineering";
        // table order makes software win.
        let universities = universities_for_title("Software Engineer");
        assert_eq!(universities[0], "Massachusetts Institute of Technology");
        assert_eq!(universities[1], "Stanford University");
        assert_eq!(universities.len(), 4);
    }

    #[test]
    fn test_data_analyst_keys_data_list() {
        let universities = universities_for_title("Data Analyst");
        assert_eq!(universities[0], "Carnegie Mellon University");
        assert_eq!(universities.len(), 3);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert_eq!(
            universities_for_title("REGISTERED NURSING ASSISTANT"),
            universities_for_title("Registered Nursing Assistant"),
        );
    }

    #[test]
    fn test_unmatched_title_gets_generic_list() {
        let universities = universities_for_title("Pastry Chef");
        assert_eq!(universities.len(), DEFAULT_UNIVERSITIES.len());
        assert_eq!(universities[0], DEFAULT_UNIVERSITIES[0]);
    }

    #[test]
    fn test_same_title_always_yields_same_universities() {
        assert_eq!(
            universities_for_title("Marketing Manager"),
            universities_for_title("Marketing Manager"),
        );
    }

    #[test]
    fn test_every_table_entry_has_three_or_four_universities() {
        for (keyword, universities) in UNIVERSITY_TABLE {
            assert!(
                (3..=4).contains(&universities.len()),
                "{keyword} has {} universities",
                universities.len()
            );
        }
    }

    #[test]
    fn test_known_activity_color() {
        assert_eq!(color_for_activity("Coding Practice"), "#8b5cf6");
        assert_eq!(color_for_activity("coding practice"), "#8b5cf6");
    }

    #[test]
    fn test_unknown_activity_gets_neutral_color() {
        assert_eq!(color_for_activity("Interpretive Dance"), NEUTRAL_COLOR);
        assert_eq!(color_for_activity(""), NEUTRAL_COLOR);
    }

    #[test]
    fn test_weekly_template_covers_all_seven_days() {
        let days: Vec<Day> = WEEKLY_TEMPLATE.iter().map(|(day, _)| *day).collect();
        assert_eq!(days, Day::ALL.to_vec());
    }

    #[test]
    fn test_template_activities_fit_within_time_labels() {
        for (day, activities) in WEEKLY_TEMPLATE {
            assert!(
                activities.len() <= TIME_LABELS.len(),
                "{} template exceeds available time labels",
                day.name()
            );
        }
    }

    #[test]
    fn test_template_activities_all_have_colors() {
        for (_, activities) in WEEKLY_TEMPLATE {
            for activity in *activities {
                assert_ne!(
                    color_for_activity(activity),
                    NEUTRAL_COLOR,
                    "{activity} is missing from the color table"
                );
            }
        }
    }
}
