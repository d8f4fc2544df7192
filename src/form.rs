use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::Match;
use crate::outcome::{Outcome, classify_match};

pub const FORM_LENGTH: usize = 5;

/// One slot of a form strip. Padding slots carry no opponent.
#[derive(Debug, Clone, PartialEq)]
pub enum FormBadge {
    Played {
        match_id: u64,
        opponent: String,
        outcome: Outcome,
    },
    NoData,
}

impl FormBadge {
    pub fn label(&self) -> &'static str {
        match self {
            FormBadge::Played { outcome, .. } => outcome.label(),
            FormBadge::NoData => "-",
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            FormBadge::Played { outcome, .. } => Some(*outcome),
            FormBadge::NoData => None,
        }
    }
}

/// The newest `n` played matches, newest first. Unplayed fixtures never qualify.
pub fn last_n_results(matches: &[Match], n: usize) -> Vec<&Match> {
    let mut played: Vec<&Match> = matches.iter().filter(|m| m.is_played()).collect();
    played.sort_by(|a, b| match (a.date, b.date) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    played.truncate(n);
    played
}

/// Form strip of exactly `n` badges, padded with `NoData`.
pub fn form_badges(matches: &[Match], n: usize) -> Vec<FormBadge> {
    let mut badges: Vec<FormBadge> = last_n_results(matches, n)
        .into_iter()
        .map(|m| FormBadge::Played {
            match_id: m.match_id,
            opponent: m.opponent.clone(),
            outcome: classify_match(m),
        })
        .collect();
    badges.resize(n, FormBadge::NoData);
    badges
}

/// Form strips for every owning team in a flat match list, keyed by display name.
pub fn form_by_team(matches: &[Match], n: usize) -> HashMap<String, Vec<FormBadge>> {
    let mut by_team: HashMap<&str, Vec<Match>> = HashMap::new();
    for m in matches {
        by_team.entry(m.team_name.as_str()).or_default().push(m.clone());
    }
    by_team
        .into_iter()
        .map(|(team, rows)| (team.to_string(), form_badges(&rows, n)))
        .collect()
}

pub fn form_string(badges: &[FormBadge]) -> String {
    badges.iter().map(FormBadge::label).collect::<Vec<_>>().join("")
}
