use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::model::Match;

/// Group key for a match day. Dated groups order by calendar day; rows whose
/// date could not be read collect in one trailing group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateKey {
    Day(NaiveDate),
    Undated,
}

impl DateKey {
    pub fn of(m: &Match) -> Self {
        m.date.map(DateKey::Day).unwrap_or(DateKey::Undated)
    }

    pub fn heading(self) -> String {
        match self {
            DateKey::Day(date) => date_heading(date),
            DateKey::Undated => "Date TBC".to_string(),
        }
    }
}

/// Bucket matches by day in one pass. Within a day the input order is kept;
/// iterating the map yields days in ascending calendar order.
pub fn group_by_date(matches: &[Match]) -> BTreeMap<DateKey, Vec<&Match>> {
    let mut groups: BTreeMap<DateKey, Vec<&Match>> = BTreeMap::new();
    for m in matches {
        groups.entry(DateKey::of(m)).or_default().push(m);
    }
    groups
}

pub fn flatten_groups<'a>(groups: &BTreeMap<DateKey, Vec<&'a Match>>) -> Vec<&'a Match> {
    groups.values().flat_map(|day| day.iter().copied()).collect()
}

/// "Saturday, August 16, 2025"
pub fn date_heading(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
