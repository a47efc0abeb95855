use axum::{extract::State, Json};
use chrono::{Datelike, Utc};
use rand::Rng;

use crate::error::{AppError, AppResult};
use crate::models::quote::MotivationalQuote;
use crate::AppState;

async fn all_quotes(state: &AppState) -> AppResult<Vec<MotivationalQuote>> {
    let quotes = sqlx::query_as::<_, MotivationalQuote>(
        "SELECT * FROM motivational_quotes ORDER BY created_at ASC, id ASC",
    )
    .fetch_all(&state.db)
    .await?;

    if quotes.is_empty() {
        return Err(AppError::NotFound("No quotes available".into()));
    }
    Ok(quotes)
}

/// The same quote for everyone on a given day: indexed by day-of-month
/// modulo the table size.
pub async fn daily_quote(State(state): State<AppState>) -> AppResult<Json<MotivationalQuote>> {
    let quotes = all_quotes(&state).await?;
    let index = Utc::now().day() as usize % quotes.len();
    Ok(Json(quotes[index].clone()))
}

pub async fn random_quote(State(state): State<AppState>) -> AppResult<Json<MotivationalQuote>> {
    let quotes = all_quotes(&state).await?;
    let index = rand::thread_rng().gen_range(0..quotes.len());
    Ok(Json(quotes[index].clone()))
}
