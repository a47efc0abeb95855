use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// One mood log per user per calendar day. A later log for the same day
/// replaces the score rather than adding a row (upsert on user + date).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MoodEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub entry_date: NaiveDate,
    pub mood_score: i32,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertMoodRequest {
    /// Defaults to today (UTC) when omitted.
    pub entry_date: Option<NaiveDate>,

    #[validate(range(min = 1, max = 10, message = "Mood score must be between 1 and 10"))]
    pub mood_score: i32,

    /// Defaults to the emoji for the score when omitted.
    #[validate(length(min = 1, max = 16, message = "Emoji must be 1-16 characters"))]
    pub emoji: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MoodRangeQuery {
    /// "week" (default) or "month".
    pub range: Option<String>,
}

impl MoodRangeQuery {
    pub fn range_days(&self) -> i64 {
        match self.range.as_deref() {
            Some("month") => 30,
            _ => 7,
        }
    }
}

/// Display emoji for a score, mirroring the mood picker scale.
pub fn default_emoji(score: i32) -> &'static str {
    match score {
        1 => "😢",
        2 => "😟",
        3 => "😕",
        4 => "😐",
        5 => "😶",
        6 => "🙂",
        7 => "😊",
        8 => "😄",
        9 => "😁",
        _ => "🤩",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_query_defaults_to_week() {
        let q = MoodRangeQuery { range: None };
        assert_eq!(q.range_days(), 7);
        let q = MoodRangeQuery {
            range: Some("bogus".into()),
        };
        assert_eq!(q.range_days(), 7);
    }

    #[test]
    fn test_range_query_month() {
        let q = MoodRangeQuery {
            range: Some("month".into()),
        };
        assert_eq!(q.range_days(), 30);
    }
}
