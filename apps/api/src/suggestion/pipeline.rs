//! Pipeline orchestrator: one LLM attempt, extract, normalize, score, with
//! every degraded branch converging on the deterministic fallback.
//!
//! Terminal state is always `PipelineOutcome { source, items }` with a
//! non-empty item list: callers never receive an error from a well-formed
//! profile, only a degraded-but-valid result tagged with its provenance.

use std::collections::HashSet;

use serde_json::Value;
use tracing::{info, warn};

use crate::llm_client::CompletionClient;
use crate::models::profile::UserProfile;
use crate::models::schedule::ScheduleSlot;
use crate::models::suggestion::{Provenance, ScoredSuggestion};
use crate::suggestion::extractor::extract_structured;
use crate::suggestion::fallback::{synthesize_career_fallback, synthesize_schedule_fallback};
use crate::suggestion::normalizer::{normalize_career, normalize_schedule_slot};
use crate::suggestion::prompts::{
    render_career_prompt, render_schedule_prompt, CAREER_SYSTEM, SCHEDULE_SYSTEM,
};
use crate::suggestion::scoring::compute_fit_score;

/// Result of a pipeline run. `source` distinguishes AI-derived from
/// fallback-derived items; it is never an error signal.
#[derive(Debug, Clone)]
pub struct PipelineOutcome<T> {
    pub source: Provenance,
    pub items: Vec<T>,
}

/// Runs the careers pipeline. `requested` is the caller's desired item count
/// and doubles as the minimum viable size of an AI reply; replies below it
/// trigger the fallback. Always returns at least one scored item.
pub async fn generate_career_suggestions(
    llm: &dyn CompletionClient,
    profile: &UserProfile,
    requested: usize,
) -> PipelineOutcome<ScoredSuggestion> {
    let minimum = requested.max(1);
    let prompt = render_career_prompt(profile, minimum);

    let (source, items) = match fetch_raw_items(llm, &prompt, CAREER_SYSTEM).await {
        Some(raw) if raw.len() >= minimum => {
            let survivors: Vec<_> = raw
                .iter()
                .filter_map(|value| match normalize_career(value) {
                    Ok(item) => Some(item),
                    Err(e) => {
                        warn!("dropping unusable suggestion item: {e}");
                        None
                    }
                })
                .collect();

            if survivors.is_empty() {
                warn!("no suggestion items survived normalization, synthesizing fallback");
                (Provenance::Fallback, synthesize_career_fallback(profile))
            } else {
                (Provenance::Ai, survivors)
            }
        }
        Some(raw) => {
            warn!(
                "reply carried {} items, below the requested {minimum}, synthesizing fallback",
                raw.len()
            );
            (Provenance::Fallback, synthesize_career_fallback(profile))
        }
        None => (Provenance::Fallback, synthesize_career_fallback(profile)),
    };

    let items: Vec<ScoredSuggestion> = items
        .into_iter()
        .map(|item| {
            let fit_score = compute_fit_score(&item, profile);
            ScoredSuggestion { item, fit_score }
        })
        .collect();

    info!(
        "careers pipeline done: source={} items={}",
        source.as_str(),
        items.len()
    );
    PipelineOutcome { source, items }
}

/// Runs the schedule pipeline. The current week, when supplied, only shapes
/// the prompt; the reply replaces it wholesale.
pub async fn generate_schedule(
    llm: &dyn CompletionClient,
    profile: &UserProfile,
    current: &[ScheduleSlot],
) -> PipelineOutcome<ScheduleSlot> {
    let prompt = render_schedule_prompt(profile, current);

    let (source, items) = match fetch_raw_items(llm, &prompt, SCHEDULE_SYSTEM).await {
        Some(raw) if !raw.is_empty() => {
            let survivors = normalize_schedule_batch(&raw);
            if survivors.is_empty() {
                warn!("no schedule slots survived normalization, synthesizing fallback");
                (Provenance::Fallback, synthesize_schedule_fallback(profile))
            } else {
                (Provenance::Ai, survivors)
            }
        }
        _ => (Provenance::Fallback, synthesize_schedule_fallback(profile)),
    };

    info!(
        "schedule pipeline done: source={} slots={}",
        source.as_str(),
        items.len()
    );
    PipelineOutcome { source, items }
}

/// One collaborator attempt, then extraction. Both failure modes collapse to
/// `None`; the caller's fallback path treats them identically.
async fn fetch_raw_items(
    llm: &dyn CompletionClient,
    prompt: &str,
    system: &str,
) -> Option<Vec<Value>> {
    let text = match llm.complete(prompt, system).await {
        Ok(text) => text,
        Err(e) => {
            warn!("completion collaborator unavailable: {e}");
            return None;
        }
    };

    match extract_structured(&text) {
        Some(items) => Some(items),
        None => {
            warn!("no structured data found in completion reply");
            None
        }
    }
}

/// Normalizes a raw slot batch, dropping unusable slots and deduplicating on
/// the (day, time) identity; the first occurrence wins.
fn normalize_schedule_batch(raw: &[Value]) -> Vec<ScheduleSlot> {
    let mut seen = HashSet::new();
    let mut slots = Vec::new();
    for value in raw {
        match normalize_schedule_slot(value) {
            Ok(slot) => {
                if seen.insert((slot.day, slot.time_label.clone())) {
                    slots.push(slot);
                } else {
                    warn!(
                        "dropping duplicate slot for {} {}",
                        slot.day.name(),
                        slot.time_label
                    );
                }
            }
            Err(e) => warn!("dropping unusable schedule slot: {e}"),
        }
    }
    slots
}
