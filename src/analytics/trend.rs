use serde::Serialize;

/// Margin around zero difference between window-half means below which the
/// trend is reported as stable, so day-to-day noise never flags a trend.
pub const TREND_DEADBAND: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodStats {
    pub average: f64,
    pub trend: Trend,
    pub count: usize,
}

/// Summarize a window of mood scores ordered oldest to newest.
///
/// The average covers the whole window. The trend compares the mean of the
/// first half against the mean of the second half; with an odd count the
/// middle score falls into the second half. Fewer than two scores is always
/// `Stable`.
pub fn mood_stats(scores: &[i32]) -> MoodStats {
    if scores.is_empty() {
        return MoodStats {
            average: 0.0,
            trend: Trend::Stable,
            count: 0,
        };
    }

    let average = mean(scores);

    let trend = if scores.len() < 2 {
        Trend::Stable
    } else {
        let mid = scores.len() / 2;
        let first = mean(&scores[..mid]);
        let second = mean(&scores[mid..]);

        if second > first + TREND_DEADBAND {
            Trend::Up
        } else if second < first - TREND_DEADBAND {
            Trend::Down
        } else {
            Trend::Stable
        }
    };

    MoodStats {
        average,
        trend,
        count: scores.len(),
    }
}

fn mean(scores: &[i32]) -> f64 {
    scores.iter().map(|s| f64::from(*s)).sum::<f64>() / scores.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window() {
        let stats = mood_stats(&[]);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.trend, Trend::Stable);
        assert_eq!(stats.count, 0);
    }

    #[test]
    fn test_single_score_is_stable() {
        let stats = mood_stats(&[5]);
        assert_eq!(stats.average, 5.0);
        assert_eq!(stats.trend, Trend::Stable);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn test_clear_upward_trend() {
        // First half mean 2, second half mean 8.
        let stats = mood_stats(&[2, 2, 2, 8, 8, 8]);
        assert_eq!(stats.trend, Trend::Up);
        assert_eq!(stats.average, 5.0);
        assert_eq!(stats.count, 6);
    }

    #[test]
    fn test_clear_downward_trend() {
        let stats = mood_stats(&[8, 8, 8, 2, 2, 2]);
        assert_eq!(stats.trend, Trend::Down);
    }

    #[test]
    fn test_delta_inside_deadband_is_stable() {
        // Second half mean (5+5+6)/3 ≈ 5.33, first half mean 5; delta 0.33.
        let stats = mood_stats(&[5, 5, 5, 5, 5, 6]);
        assert_eq!(stats.trend, Trend::Stable);
    }

    #[test]
    fn test_odd_count_middle_score_joins_second_half() {
        // Halves are [2] and [8, 2]: means 2 and 5 → up. If the middle
        // score belonged to the first half instead, the halves would be
        // [2, 8] and [2] and the trend would flip to down.
        let stats = mood_stats(&[2, 8, 2]);
        assert_eq!(stats.trend, Trend::Up);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn test_average_independent_of_half_split() {
        let scores = [1, 10, 2, 9, 3];
        let stats = mood_stats(&scores);
        let expected: f64 = scores.iter().map(|s| f64::from(*s)).sum::<f64>() / 5.0;
        assert!((stats.average - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn test_delta_exactly_at_deadband_is_stable() {
        // Halves [4, 4] and [5, 4]: means 4 and 4.5. A delta of exactly
        // 0.5 does not cross the strict comparison.
        let stats = mood_stats(&[4, 4, 5, 4]);
        assert_eq!(stats.trend, Trend::Stable);
    }

    #[test]
    fn test_two_scores_past_deadband() {
        let stats = mood_stats(&[4, 5]);
        assert_eq!(stats.trend, Trend::Up);
        let stats = mood_stats(&[5, 4]);
        assert_eq!(stats.trend, Trend::Down);
    }
}
