use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{Duration, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use crate::analytics::streak::current_streak;
use crate::analytics::trend::{mood_stats, MoodStats};
use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::mood_entry::{default_emoji, MoodEntry, MoodRangeQuery, UpsertMoodRequest};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct StreakResponse {
    pub length: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<&'static str>,
}

pub async fn upsert_mood(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpsertMoodRequest>,
) -> AppResult<Json<MoodEntry>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let today = Utc::now().date_naive();
    let entry_date = body.entry_date.unwrap_or(today);
    if entry_date > today {
        return Err(AppError::Validation(
            "entry_date cannot be in the future".into(),
        ));
    }

    let emoji = body
        .emoji
        .as_deref()
        .unwrap_or_else(|| default_emoji(body.mood_score));

    // One entry per user per day: a second log for the same date replaces
    // the score instead of inserting a new row.
    let entry = sqlx::query_as::<_, MoodEntry>(
        r#"
        INSERT INTO mood_entries (id, user_id, entry_date, mood_score, emoji)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_id, entry_date) DO UPDATE SET
            mood_score = $4,
            emoji = $5,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(entry_date)
    .bind(body.mood_score)
    .bind(emoji)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(entry))
}

pub async fn list_moods(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<MoodRangeQuery>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let start = Utc::now().date_naive() - Duration::days(query.range_days());

    let entries = sqlx::query_as::<_, MoodEntry>(
        r#"
        SELECT * FROM mood_entries
        WHERE user_id = $1 AND entry_date >= $2
        ORDER BY entry_date ASC
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(entries))
}

pub async fn today_mood(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Option<MoodEntry>>> {
    let today = Utc::now().date_naive();

    let entry = sqlx::query_as::<_, MoodEntry>(
        "SELECT * FROM mood_entries WHERE user_id = $1 AND entry_date = $2",
    )
    .bind(auth_user.id)
    .bind(today)
    .fetch_optional(&state.db)
    .await?;

    Ok(Json(entry))
}

/// Average, trend and count over the requested trailing window. The scores
/// are fetched oldest-first; the classification itself lives in
/// `analytics::trend`.
pub async fn get_mood_stats(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<MoodRangeQuery>,
) -> AppResult<Json<MoodStats>> {
    let start = Utc::now().date_naive() - Duration::days(query.range_days());

    let scores = sqlx::query_scalar::<_, i32>(
        r#"
        SELECT mood_score FROM mood_entries
        WHERE user_id = $1 AND entry_date >= $2
        ORDER BY entry_date ASC
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(mood_stats(&scores)))
}

pub async fn get_streak(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<StreakResponse>> {
    let dates = sqlx::query_scalar::<_, chrono::NaiveDate>(
        r#"
        SELECT DISTINCT entry_date FROM mood_entries
        WHERE user_id = $1
        ORDER BY entry_date DESC
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    let today = Utc::now().date_naive();
    let length = current_streak(&dates, today);

    Ok(Json(StreakResponse {
        length,
        milestone: milestone_for(length),
    }))
}

/// Presentational milestone text; thresholds are display-only and play no
/// part in the streak computation.
fn milestone_for(length: u32) -> Option<&'static str> {
    match length {
        0..=2 => None,
        3..=6 => Some("💪 Building the habit!"),
        7..=13 => Some("🎉 One week milestone!"),
        14..=29 => Some("⭐ Two weeks strong!"),
        _ => Some("🏆 Amazing! 30+ days!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestone_thresholds() {
        assert_eq!(milestone_for(0), None);
        assert_eq!(milestone_for(2), None);
        assert_eq!(milestone_for(3), Some("💪 Building the habit!"));
        assert_eq!(milestone_for(7), Some("🎉 One week milestone!"));
        assert_eq!(milestone_for(14), Some("⭐ Two weeks strong!"));
        assert_eq!(milestone_for(30), Some("🏆 Amazing! 30+ days!"));
        assert_eq!(milestone_for(365), Some("🏆 Amazing! 30+ days!"));
    }
}
