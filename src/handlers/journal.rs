use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{Duration, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::journal_entry::{JournalEntry, JournalQuery, UpsertJournalRequest};
use crate::AppState;

pub async fn upsert_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpsertJournalRequest>,
) -> AppResult<Json<JournalEntry>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let content = body.content.trim();
    if content.is_empty() {
        return Err(AppError::Validation("Content must not be empty".into()));
    }

    let today = Utc::now().date_naive();
    let entry_date = body.entry_date.unwrap_or(today);
    if entry_date > today {
        return Err(AppError::Validation(
            "entry_date cannot be in the future".into(),
        ));
    }

    let entry = sqlx::query_as::<_, JournalEntry>(
        r#"
        INSERT INTO journal_entries (id, user_id, entry_date, content)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id, entry_date) DO UPDATE SET
            content = $4,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(entry_date)
    .bind(content)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(entry))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<JournalQuery>,
) -> AppResult<Json<Vec<JournalEntry>>> {
    let start = query
        .start_date
        .unwrap_or_else(|| Utc::now().date_naive() - Duration::days(30));
    let end = query.end_date.unwrap_or_else(|| Utc::now().date_naive());

    let entries = sqlx::query_as::<_, JournalEntry>(
        r#"
        SELECT * FROM journal_entries
        WHERE user_id = $1 AND entry_date BETWEEN $2 AND $3
        ORDER BY entry_date DESC
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(entries))
}

pub async fn today_entry(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Option<JournalEntry>>> {
    let today = Utc::now().date_naive();

    let entry = sqlx::query_as::<_, JournalEntry>(
        "SELECT * FROM journal_entries WHERE user_id = $1 AND entry_date = $2",
    )
    .bind(auth_user.id)
    .bind(today)
    .fetch_optional(&state.db)
    .await?;

    Ok(Json(entry))
}
