//! Best-effort persistence of generated suggestion sets.
//!
//! Saving is fire-and-forget from the pipeline's point of view: a failed
//! write is logged at warn level and never fails the request that produced
//! the items.

use serde_json::Value;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::models::record::SuggestionRecordRow;
use crate::models::suggestion::{Provenance, SuggestionKind};

/// Inserts one suggestion record.
pub async fn save_record(
    pool: &PgPool,
    user_id: Uuid,
    kind: SuggestionKind,
    source: Provenance,
    items: &Value,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO suggestion_records (id, user_id, kind, source, items)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(kind.as_str())
    .bind(source.as_str())
    .bind(items)
    .execute(pool)
    .await?;
    Ok(())
}

/// Spawns a detached save. At-most-once-attempted: no retry, no propagation.
pub fn spawn_save(
    pool: PgPool,
    user_id: Uuid,
    kind: SuggestionKind,
    source: Provenance,
    items: Value,
) {
    tokio::spawn(async move {
        if let Err(e) = save_record(&pool, user_id, kind, source, &items).await {
            warn!("failed to persist {} record for user {user_id}: {e}", kind.as_str());
        }
    });
}

/// Loads the most recent record for a user, optionally filtered by kind.
pub async fn load_latest(
    pool: &PgPool,
    user_id: Uuid,
    kind: Option<&str>,
) -> Result<Option<SuggestionRecordRow>, sqlx::Error> {
    match kind {
        Some(kind) => {
            sqlx::query_as::<_, SuggestionRecordRow>(
                r#"
                SELECT * FROM suggestion_records
                WHERE user_id = $1 AND kind = $2
                ORDER BY created_at DESC
                LIMIT 1
                "#,
            )
            .bind(user_id)
            .bind(kind)
            .fetch_optional(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, SuggestionRecordRow>(
                r#"
                SELECT * FROM suggestion_records
                WHERE user_id = $1
                ORDER BY created_at DESC
                LIMIT 1
                "#,
            )
            .bind(user_id)
            .fetch_optional(pool)
            .await
        }
    }
}
