use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MotivationalQuote {
    pub id: Uuid,
    pub quote: String,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
}
