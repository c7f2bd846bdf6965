//! Review counter cooldown rule.

use chrono::{DateTime, Duration, Local};

/// Minimum gap between counted reviews.
///
/// Re-saving a word inside this window does not bump the counter unless the
/// save is forced. Prevents rapid repeat lookups from inflating the count.
pub const COOLDOWN: Duration = Duration::minutes(5);

/// Outcome of applying the cooldown rule to a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    /// The counter was incremented.
    Counted { new_count: i64 },
    /// The save landed inside the cooldown window; counter unchanged.
    CoolingDown { count: i64 },
}

impl ReviewDecision {
    /// Returns the review count after the decision.
    pub fn count(&self) -> i64 {
        match *self {
            ReviewDecision::Counted { new_count } => new_count,
            ReviewDecision::CoolingDown { count } => count,
        }
    }
}

/// Decides the new review count for an existing word.
///
/// Inside the cooldown window the count is unchanged unless `force` is set;
/// otherwise it increments by one. `last_reviewed` is always advanced to the
/// save instant by the caller, whatever the decision.
pub fn decide_review(
    last_reviewed: DateTime<Local>,
    current_count: i64,
    force: bool,
    now: DateTime<Local>,
) -> ReviewDecision {
    if now - last_reviewed < COOLDOWN && !force {
        ReviewDecision::CoolingDown {
            count: current_count,
        }
    } else {
        ReviewDecision::Counted {
            new_count: current_count + 1,
        }
    }
}

/// Parses a stored `last_reviewed` timestamp.
///
/// Fallback: an unparsable value is treated as 24 hours before `now`, which
/// makes the word immediately eligible for a counted review. This is a
/// defensive recovery for corrupt rows, not scheduling policy.
pub fn parse_last_reviewed(stored: &str, now: DateTime<Local>) -> DateTime<Local> {
    DateTime::parse_from_rfc3339(stored)
        .map(|dt| dt.with_timezone(&Local))
        .unwrap_or_else(|_| now - Duration::hours(24))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 14, h, m, s).unwrap()
    }

    #[test]
    fn increments_after_cooldown() {
        let decision = decide_review(at(10, 0, 0), 3, false, at(10, 5, 0));
        assert_eq!(decision, ReviewDecision::Counted { new_count: 4 });
    }

    #[test]
    fn unchanged_inside_cooldown() {
        let decision = decide_review(at(10, 0, 0), 3, false, at(10, 4, 59));
        assert_eq!(decision, ReviewDecision::CoolingDown { count: 3 });
    }

    #[test]
    fn force_overrides_cooldown() {
        let decision = decide_review(at(10, 0, 0), 3, true, at(10, 0, 30));
        assert_eq!(decision, ReviewDecision::Counted { new_count: 4 });
    }

    #[test]
    fn boundary_at_exactly_five_minutes_counts() {
        // The window is strict: now - last < 5min suppresses the increment,
        // so an exact 5-minute gap counts.
        let decision = decide_review(at(10, 0, 0), 1, false, at(10, 5, 0));
        assert_eq!(decision, ReviewDecision::Counted { new_count: 2 });
    }

    #[test]
    fn count_accessor_matches_decision() {
        assert_eq!(ReviewDecision::Counted { new_count: 7 }.count(), 7);
        assert_eq!(ReviewDecision::CoolingDown { count: 2 }.count(), 2);
    }

    #[test]
    fn parse_valid_timestamp() {
        let now = at(12, 0, 0);
        let parsed = parse_last_reviewed(&at(11, 30, 0).to_rfc3339(), now);
        assert_eq!(parsed, at(11, 30, 0));
    }

    #[test]
    fn parse_garbage_falls_back_to_day_ago() {
        let now = at(12, 0, 0);
        let parsed = parse_last_reviewed("not-a-timestamp", now);
        assert_eq!(parsed, now - Duration::hours(24));
    }

    #[test]
    fn garbage_timestamp_is_always_eligible() {
        let now = at(12, 0, 0);
        let last = parse_last_reviewed("", now);
        let decision = decide_review(last, 5, false, now);
        assert_eq!(decision, ReviewDecision::Counted { new_count: 6 });
    }
}
