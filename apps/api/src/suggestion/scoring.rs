//! Fit scoring: pure rule-based compatibility between a suggestion and a
//! profile. Deterministic, idempotent, order-independent across items: the
//! score of one item never depends on another item in the set.

use std::collections::HashSet;

use crate::models::profile::{TechConfidence, UserProfile};
use crate::models::suggestion::SuggestionItem;
use crate::suggestion::defaults::ADVANCED_DEGREE_KEYWORDS;

const BASE_SCORE: i32 = 50;
const TITLE_MATCH_BONUS: i32 = 15;
const SKILL_OVERLAP_BONUS: i32 = 6;
const SKILL_OVERLAP_CAP: i32 = 20;
const TECH_EXPERT_BONUS: i32 = 7;
const TECH_INTERMEDIATE_BONUS: i32 = 3;
const DEGREE_GOAL_BONUS: i32 = 5;

/// Computes the 0–100 fit score between a suggestion item and a profile.
pub fn compute_fit_score(item: &SuggestionItem, profile: &UserProfile) -> u32 {
    let mut score = BASE_SCORE;

    let interest = profile.career_interest.trim().to_lowercase();
    if !interest.is_empty() && item.title.to_lowercase().contains(&interest) {
        score += TITLE_MATCH_BONUS;
    }

    let overlap = skill_overlap(&item.skills, &profile.skills) as i32;
    score += (overlap * SKILL_OVERLAP_BONUS).min(SKILL_OVERLAP_CAP);

    score += match profile.tech_confidence_level() {
        TechConfidence::Expert => TECH_EXPERT_BONUS,
        TechConfidence::Intermediate => TECH_INTERMEDIATE_BONUS,
        TechConfidence::Beginner => 0,
    };

    let goal = profile.study_goal.to_lowercase();
    if ADVANCED_DEGREE_KEYWORDS.iter().any(|kw| goal.contains(kw)) {
        score += DEGREE_GOAL_BONUS;
    }

    score.clamp(0, 100) as u32
}

/// Distinct case-insensitive exact matches between the two skill lists.
fn skill_overlap(item_skills: &[String], profile_skills: &[String]) -> usize {
    let normalize = |s: &String| s.trim().to_lowercase();
    let profile: HashSet<String> = profile_skills
        .iter()
        .map(normalize)
        .filter(|s| !s.is_empty())
        .collect();
    item_skills
        .iter()
        .map(normalize)
        .filter(|s| !s.is_empty())
        .collect::<HashSet<String>>()
        .intersection(&profile)
        .count()
}
