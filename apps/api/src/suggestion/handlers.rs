//! Axum route handlers for the Suggestion API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::models::record::SuggestionRecordRow;
use crate::models::schedule::ScheduleSlot;
use crate::models::suggestion::{Provenance, ScoredSuggestion, SuggestionKind};
use crate::persistence;
use crate::state::AppState;
use crate::suggestion::pipeline::{generate_career_suggestions, generate_schedule};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(default)]
    pub kind: SuggestionKind,
    /// Desired item count for careers; also the minimum viable AI reply size.
    pub count: Option<usize>,
    /// When present, the result set is persisted for this user (best-effort).
    pub user_id: Option<Uuid>,
    /// Existing week for the schedule variant; shapes the prompt only.
    #[serde(default)]
    pub current_schedule: Vec<ScheduleSlot>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SuggestionItems {
    Careers(Vec<ScoredSuggestion>),
    Schedule(Vec<ScheduleSlot>),
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub items: SuggestionItems,
    pub source: Provenance,
}

#[derive(Debug, Deserialize)]
pub struct RecordQuery {
    pub kind: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/suggestions
///
/// Runs the suggestion pipeline for the supplied profile. Always answers 200
/// with a non-empty item list for a valid profile; degraded quality is
/// signaled via `source`, never via an error status.
pub async fn handle_suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, AppError> {
    if !request.profile.is_actionable() {
        return Err(AppError::Validation(
            "profile must include at least a grade or a career interest".to_string(),
        ));
    }

    let response = match request.kind {
        SuggestionKind::Careers => {
            let outcome = generate_career_suggestions(
                state.llm.as_ref(),
                &request.profile,
                request.count.unwrap_or(1),
            )
            .await;

            maybe_persist(&state, request.user_id, request.kind, outcome.source, &outcome.items);

            SuggestResponse {
                items: SuggestionItems::Careers(outcome.items),
                source: outcome.source,
            }
        }
        SuggestionKind::Schedule => {
            let outcome = generate_schedule(
                state.llm.as_ref(),
                &request.profile,
                &request.current_schedule,
            )
            .await;

            maybe_persist(&state, request.user_id, request.kind, outcome.source, &outcome.items);

            SuggestResponse {
                items: SuggestionItems::Schedule(outcome.items),
                source: outcome.source,
            }
        }
    };

    Ok(Json(response))
}

/// GET /api/v1/suggestions/:user_id
///
/// Returns the most recent persisted record for the user, optionally
/// filtered with `?kind=careers|schedule`.
pub async fn handle_get_record(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<RecordQuery>,
) -> Result<Json<SuggestionRecordRow>, AppError> {
    let record = persistence::load_latest(&state.db, user_id, query.kind.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No saved suggestions for user {user_id}")))?;

    Ok(Json(record))
}

/// Persists the result set when a user id was supplied. Failures never reach
/// the caller; the pipeline result is already final.
fn maybe_persist<T: Serialize>(
    state: &AppState,
    user_id: Option<Uuid>,
    kind: SuggestionKind,
    source: Provenance,
    items: &[T],
) {
    let Some(user_id) = user_id else { return };
    match serde_json::to_value(items) {
        Ok(items) => persistence::spawn_save(state.db.clone(), user_id, kind, source, items),
        Err(e) => warn!("could not serialize {} items for persistence: {e}", kind.as_str()),
    }
}
