use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

/// Count consecutive logged days ending at `today` or yesterday.
///
/// A streak survives overnight: if the user logged yesterday but not yet
/// today, the chain counts from yesterday. Anything older is stale and the
/// streak is 0. Input order does not matter and duplicates are ignored —
/// entry dates are treated as a set of calendar days.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let logged: HashSet<NaiveDate> = dates.iter().copied().collect();

    let Some(most_recent) = logged.iter().max().copied() else {
        return 0;
    };

    let yesterday = today - Duration::days(1);
    if most_recent != today && most_recent != yesterday {
        return 0;
    }

    let mut check_date = if most_recent == today { today } else { yesterday };
    let mut streak = 0u32;

    while logged.contains(&check_date) {
        streak += 1;
        check_date -= Duration::days(1);
    }

    streak
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_no_entries_is_zero() {
        assert_eq!(current_streak(&[], day(2026, 8, 6)), 0);
    }

    #[test]
    fn test_single_entry_today() {
        let today = day(2026, 8, 6);
        assert_eq!(current_streak(&[today], today), 1);
    }

    #[test]
    fn test_three_consecutive_days_ending_today() {
        let today = day(2026, 8, 6);
        let dates = [today, day(2026, 8, 5), day(2026, 8, 4)];
        assert_eq!(current_streak(&dates, today), 3);
    }

    #[test]
    fn test_stale_most_recent_entry_breaks_streak() {
        let today = day(2026, 8, 6);
        assert_eq!(current_streak(&[day(2026, 8, 4)], today), 0);
    }

    #[test]
    fn test_streak_survives_when_today_not_yet_logged() {
        let today = day(2026, 8, 6);
        let dates = [day(2026, 8, 5), day(2026, 8, 4), day(2026, 8, 3)];
        assert_eq!(current_streak(&dates, today), 3);
    }

    #[test]
    fn test_gap_stops_the_walk() {
        let today = day(2026, 8, 6);
        // Logged today and the day before yesterday; the missing day ends
        // the chain at 1.
        let dates = [today, day(2026, 8, 4), day(2026, 8, 3)];
        assert_eq!(current_streak(&dates, today), 1);
    }

    #[test]
    fn test_duplicates_and_order_do_not_matter() {
        let today = day(2026, 8, 6);
        let shuffled = [day(2026, 8, 4), today, day(2026, 8, 5), today, day(2026, 8, 4)];
        let sorted = [day(2026, 8, 4), day(2026, 8, 5), today];
        assert_eq!(
            current_streak(&shuffled, today),
            current_streak(&sorted, today)
        );
        assert_eq!(current_streak(&shuffled, today), 3);
    }

    #[test]
    fn test_streak_across_month_boundary() {
        let today = day(2026, 3, 1);
        let dates = [today, day(2026, 2, 28), day(2026, 2, 27)];
        assert_eq!(current_streak(&dates, today), 3);
    }
}
