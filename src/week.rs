use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::ApiError;
use crate::model::Match;

pub const FIRST_WEEK: u8 = 1;
pub const LAST_WEEK: u8 = 38;

const SEASON_START_MONTH: u32 = 8;
const SEASON_START_DAY: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekSource {
    /// Taken from the navigable location (`?week=N` / `--week N`).
    Location,
    /// Parsed from the round label of the backend's current-week matches.
    ServerHint,
    /// Derived from today's date.
    CalendarFallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWeek {
    pub week: u8,
    pub source: WeekSource,
}

// ASCII digits only.
static WEEK_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)matchweek\s+([0-9]+)").ok());

/// First `Matchweek <digits>` in a round label, case-insensitive. A digit run
/// too long for `u32` saturates, which no season week can equal.
pub fn extract_week_number(round: &str) -> Option<u32> {
    let digits = WEEK_PATTERN.as_ref()?.captures(round)?.get(1)?.as_str();
    Some(digits.parse().unwrap_or(u32::MAX))
}

/// Week implied by the calendar: whole weeks since 1 August of `today`'s year,
/// plus one, clamped to the season.
pub fn compute_fallback_week(today: NaiveDate) -> u8 {
    let Some(season_start) =
        NaiveDate::from_ymd_opt(today.year(), SEASON_START_MONTH, SEASON_START_DAY)
    else {
        return FIRST_WEEK;
    };
    let days = (today - season_start).num_days();
    let week = days.div_euclid(7) + 1;
    week.clamp(FIRST_WEEK as i64, LAST_WEEK as i64) as u8
}

pub fn is_valid_week(week: u32) -> bool {
    (FIRST_WEEK as u32..=LAST_WEEK as u32).contains(&week)
}

/// Week hinted by the first current-week match, if it names one inside the season.
pub fn week_from_hint(matches: &[Match]) -> Option<u8> {
    let first = matches.first()?;
    let week = extract_week_number(&first.round)?;
    is_valid_week(week).then_some(week as u8)
}

pub fn fallback_stage(today: NaiveDate) -> ResolvedWeek {
    ResolvedWeek {
        week: compute_fallback_week(today),
        source: WeekSource::CalendarFallback,
    }
}

/// Resolve the landing week from the backend's current-week answer.
///
/// Any failure of the hint request, an empty answer, or a round label without a
/// usable week all go to the calendar stage.
pub fn resolve_current_week(hint: &Result<Vec<Match>, ApiError>, today: NaiveDate) -> ResolvedWeek {
    let hinted = hint.as_ref().ok().and_then(|matches| week_from_hint(matches));
    match hinted {
        Some(week) => ResolvedWeek {
            week,
            source: WeekSource::ServerHint,
        },
        None => fallback_stage(today),
    }
}

pub fn parse_week_param(raw: &str) -> Option<u8> {
    let week: u32 = raw.trim().parse().ok()?;
    is_valid_week(week).then_some(week as u8)
}

pub fn previous_week(week: u8) -> Option<u8> {
    (week > FIRST_WEEK).then(|| week - 1)
}

pub fn next_week(week: u8) -> Option<u8> {
    (week < LAST_WEEK).then(|| week + 1)
}

pub fn matches_location(week: Option<u8>) -> String {
    match week {
        Some(week) => format!("/matches?week={week}"),
        None => "/matches".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn season_start_is_week_one() {
        assert_eq!(compute_fallback_week(day(2025, 8, 1)), 1);
        assert_eq!(compute_fallback_week(day(2025, 8, 7)), 1);
        assert_eq!(compute_fallback_week(day(2025, 8, 8)), 2);
    }

    #[test]
    fn before_august_clamps_to_first_week() {
        assert_eq!(compute_fallback_week(day(2026, 1, 15)), 1);
        assert_eq!(compute_fallback_week(day(2026, 7, 31)), 1);
    }

    #[test]
    fn new_year_eve_is_week_twenty_two() {
        // Counting restarts every 1 August, so the last week is never reached by the calendar alone.
        assert_eq!(compute_fallback_week(day(2025, 12, 31)), 22);
    }

    #[test]
    fn fallback_never_decreases_within_a_year() {
        let mut today = day(2025, 1, 1);
        let mut last = compute_fallback_week(today);
        while today.year() == 2025 {
            let week = compute_fallback_week(today);
            assert!(week >= last);
            assert!(is_valid_week(week as u32));
            last = week;
            today += chrono::Duration::days(7);
        }
    }

    #[test]
    fn extractor_accepts_unicode_whitespace() {
        assert_eq!(extract_week_number("Matchweek\u{a0}7"), Some(7));
        assert_eq!(extract_week_number("MATCHWEEK \u{2003} 21"), Some(21));
    }

    #[test]
    fn oversized_week_saturates_and_falls_back() {
        assert_eq!(extract_week_number("Matchweek 99999999999"), Some(u32::MAX));
        let hint = Ok(vec![
            serde_json::from_value::<Match>(serde_json::json!({"match_id": 1, "round": "Matchweek 99999999999"}))
                .unwrap(),
        ]);
        assert_eq!(
            resolve_current_week(&hint, day(2025, 8, 20)).source,
            WeekSource::CalendarFallback
        );
    }

    #[test]
    fn extractor_needs_whitespace_and_digits() {
        assert_eq!(extract_week_number("Matchweek 7"), Some(7));
        assert_eq!(extract_week_number("matchweek\t12"), Some(12));
        assert_eq!(extract_week_number("Matchweek7"), None);
        assert_eq!(extract_week_number("Matchweek "), None);
        assert_eq!(extract_week_number("Matchweek x Matchweek 3"), Some(3));
    }
}
