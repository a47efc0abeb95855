//! Wellness suggestions bucketed by recent mood.
//!
//! The level comes from the mean of the user's three most recent scores;
//! each level maps to a fixed set of tips.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize)]
pub struct Suggestion {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

const LOW_SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        title: "Take a Short Walk",
        description: "A 10-minute walk can boost your mood and energy levels.",
        icon: "🚶",
    },
    Suggestion {
        title: "Practice Deep Breathing",
        description: "Try 4-7-8 breathing: inhale for 4, hold for 7, exhale for 8.",
        icon: "🧘",
    },
    Suggestion {
        title: "Connect with Someone",
        description: "Reach out to a friend or loved one for a quick chat.",
        icon: "💬",
    },
    Suggestion {
        title: "Listen to Uplifting Music",
        description: "Put on your favorite feel-good playlist.",
        icon: "🎵",
    },
];

const MEDIUM_SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        title: "Practice Gratitude",
        description: "List three things you're grateful for today.",
        icon: "🙏",
    },
    Suggestion {
        title: "Take a Break",
        description: "Step away from your tasks for a refreshing 5-minute break.",
        icon: "☕",
    },
    Suggestion {
        title: "Stretch Your Body",
        description: "Do some simple stretches to release tension.",
        icon: "🤸",
    },
    Suggestion {
        title: "Drink Water",
        description: "Stay hydrated - it affects your mood more than you think.",
        icon: "💧",
    },
];

const HIGH_SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        title: "Share Your Joy",
        description: "Tell someone about what made you happy today.",
        icon: "🌟",
    },
    Suggestion {
        title: "Do Something Creative",
        description: "Channel your positive energy into a creative activity.",
        icon: "🎨",
    },
    Suggestion {
        title: "Help Someone",
        description: "Your good mood can brighten someone else's day too.",
        icon: "🤝",
    },
    Suggestion {
        title: "Document This Moment",
        description: "Take a photo or write about what's making you feel great.",
        icon: "📸",
    },
];

impl MoodLevel {
    /// Bucket the mean of the most recent scores. A user with no entries
    /// lands on Medium.
    pub fn from_recent_scores(scores: &[i32]) -> Self {
        if scores.is_empty() {
            return Self::Medium;
        }

        let avg = scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64;
        if avg <= 4.0 {
            Self::Low
        } else if avg <= 7.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

pub fn suggestions_for(level: MoodLevel) -> &'static [Suggestion] {
    match level {
        MoodLevel::Low => LOW_SUGGESTIONS,
        MoodLevel::Medium => MEDIUM_SUGGESTIONS,
        MoodLevel::High => HIGH_SUGGESTIONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_scores_defaults_to_medium() {
        assert_eq!(MoodLevel::from_recent_scores(&[]), MoodLevel::Medium);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(MoodLevel::from_recent_scores(&[4, 4, 4]), MoodLevel::Low);
        assert_eq!(MoodLevel::from_recent_scores(&[5, 4, 4]), MoodLevel::Medium);
        assert_eq!(MoodLevel::from_recent_scores(&[7, 7, 7]), MoodLevel::Medium);
        assert_eq!(MoodLevel::from_recent_scores(&[8, 7, 7]), MoodLevel::High);
    }

    #[test]
    fn test_each_level_has_suggestions() {
        for level in [MoodLevel::Low, MoodLevel::Medium, MoodLevel::High] {
            assert!(!suggestions_for(level).is_empty());
        }
    }
}
