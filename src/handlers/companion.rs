use axum::{extract::State, Extension, Json};
use uuid::Uuid;
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::chat_message::{ChatExchange, ChatMessage, SendMessageRequest};
use crate::services::companion;
use crate::AppState;

pub async fn list_messages(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Vec<ChatMessage>>> {
    let messages = sqlx::query_as::<_, ChatMessage>(
        r#"
        SELECT * FROM chat_messages
        WHERE user_id = $1
        ORDER BY created_at ASC
        LIMIT 50
        "#,
    )
    .bind(auth_user.id)
    .fetch_all(&state.db)
    .await?;

    if !messages.is_empty() {
        return Ok(Json(messages));
    }

    // First visit: seed the history with the welcome message so the
    // companion opens the conversation.
    let welcome = sqlx::query_as::<_, ChatMessage>(
        r#"
        INSERT INTO chat_messages (id, user_id, message, is_user)
        VALUES ($1, $2, $3, false)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(companion::WELCOME_MESSAGE)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(vec![welcome]))
}

pub async fn send_message(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<SendMessageRequest>,
) -> AppResult<Json<ChatExchange>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let text = body.message.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Message must not be empty".into()));
    }

    let user_message = sqlx::query_as::<_, ChatMessage>(
        r#"
        INSERT INTO chat_messages (id, user_id, message, is_user)
        VALUES ($1, $2, $3, true)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(text)
    .fetch_one(&state.db)
    .await?;

    let category = companion::categorize(text);
    let reply = companion::pick_reply(category);

    tracing::debug!(user_id = %auth_user.id, category = ?category, "Companion reply selected");

    let companion_message = sqlx::query_as::<_, ChatMessage>(
        r#"
        INSERT INTO chat_messages (id, user_id, message, is_user)
        VALUES ($1, $2, $3, false)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(auth_user.id)
    .bind(reply)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(ChatExchange {
        user_message,
        companion_message,
    }))
}
