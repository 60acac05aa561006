use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted suggestion set. Saving is best-effort; this row is a snapshot
/// of what was returned, not an authoritative recomputation source.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SuggestionRecordRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub kind: String,
    pub source: String,
    pub items: Value,
    pub created_at: DateTime<Utc>,
}
