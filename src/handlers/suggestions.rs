use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::services::suggestions::{suggestions_for, MoodLevel, Suggestion};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub level: MoodLevel,
    pub suggestions: &'static [Suggestion],
}

/// Wellness tips matched to the mean of the user's three most recent mood
/// scores.
pub async fn get_suggestions(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<SuggestionsResponse>> {
    let recent_scores = sqlx::query_scalar::<_, i32>(
        r#"
        SELECT mood_score FROM mood_entries
        WHERE user_id = $1
        ORDER BY entry_date DESC
        LIMIT 3
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    let level = MoodLevel::from_recent_scores(&recent_scores);

    Ok(Json(SuggestionsResponse {
        level,
        suggestions: suggestions_for(level),
    }))
}
