use std::cmp::Ordering;

use crate::identity::is_individual_player;
use crate::model::{Match, Player, Team};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSortField {
    Name,
    Goals,
    Assists,
    GoalsAndAssists,
    MatchesPlayed,
    GoalsPer90,
    AssistsPer90,
}

impl PlayerSortField {
    pub const ALL: [PlayerSortField; 7] = [
        PlayerSortField::Name,
        PlayerSortField::Goals,
        PlayerSortField::Assists,
        PlayerSortField::GoalsAndAssists,
        PlayerSortField::MatchesPlayed,
        PlayerSortField::GoalsPer90,
        PlayerSortField::AssistsPer90,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlayerSortField::Name => "Name",
            PlayerSortField::Goals => "Goals",
            PlayerSortField::Assists => "Assists",
            PlayerSortField::GoalsAndAssists => "G+A",
            PlayerSortField::MatchesPlayed => "MP",
            PlayerSortField::GoalsPer90 => "G/90",
            PlayerSortField::AssistsPer90 => "A/90",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn metric(self, p: &Player) -> f64 {
        match self {
            PlayerSortField::Name => 0.0,
            PlayerSortField::Goals => p.goals as f64,
            PlayerSortField::Assists => p.assists as f64,
            PlayerSortField::GoalsAndAssists => p.goals_and_assists,
            PlayerSortField::MatchesPlayed => p.matches_played as f64,
            PlayerSortField::GoalsPer90 => p.goals_per90,
            PlayerSortField::AssistsPer90 => p.assists_per90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSort {
    pub field: PlayerSortField,
    pub direction: SortDirection,
}

impl Default for PlayerSort {
    fn default() -> Self {
        Self {
            field: PlayerSortField::Goals,
            direction: SortDirection::Desc,
        }
    }
}

impl PlayerSort {
    /// Clicking the active column flips it; a new column starts descending.
    pub fn toggle(self, field: PlayerSortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Desc,
            }
        }
    }
}

/// Order by day, then kickoff. Undated rows go last; a missing kickoff counts as 00:00.
pub fn sort_matches(matches: &mut [Match]) {
    matches.sort_by(compare_chronological);
}

pub fn compare_chronological(a: &Match, b: &Match) -> Ordering {
    compare_dates(a, b).then_with(|| a.kickoff_minutes().cmp(&b.kickoff_minutes()))
}

fn compare_dates(a: &Match, b: &Match) -> Ordering {
    match (a.date, b.date) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn sort_players(players: &mut [Player], sort: PlayerSort) {
    players.sort_by(|a, b| sort.direction.apply(compare_players(a, b, sort.field)));
}

fn compare_players(a: &Player, b: &Player, field: PlayerSortField) -> Ordering {
    match field {
        PlayerSortField::Name => compare_names(&a.name, &b.name),
        numeric => numeric
            .metric(a)
            .partial_cmp(&numeric.metric(b))
            .unwrap_or(Ordering::Equal),
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

pub fn sort_teams_by_rank(teams: &mut [Team]) {
    teams.sort_by_key(|t| t.rank);
}

/// Leaders for one stat: individual players with a positive value, best first.
pub fn top_players(players: &[Player], field: PlayerSortField, limit: usize) -> Vec<Player> {
    let mut leaders: Vec<Player> = players
        .iter()
        .filter(|p| is_individual_player(p) && field.metric(p) > 0.0)
        .cloned()
        .collect();
    sort_players(
        &mut leaders,
        PlayerSort {
            field,
            direction: SortDirection::Desc,
        },
    );
    leaders.truncate(limit);
    leaders
}

/// Filters of the player statistics table. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerQuery {
    pub search: String,
    pub team: Option<String>,
    pub position: Option<String>,
    pub sort: PlayerSort,
}

impl PlayerQuery {
    pub fn matches(&self, p: &Player) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty()
            && !p.name.to_lowercase().contains(&needle)
            && !p.team_name.to_lowercase().contains(&needle)
        {
            return false;
        }
        if let Some(team) = &self.team
            && p.team_name != *team
        {
            return false;
        }
        if let Some(position) = &self.position
            && p.position != *position
        {
            return false;
        }
        true
    }
}

/// Rows of the player table: individual players passing the filters, in sort order.
pub fn player_table(players: &[Player], query: &PlayerQuery) -> Vec<Player> {
    let mut rows: Vec<Player> = players
        .iter()
        .filter(|p| is_individual_player(p) && query.matches(p))
        .cloned()
        .collect();
    sort_players(&mut rows, query.sort);
    rows
}

pub fn team_options(players: &[Player]) -> Vec<String> {
    unique_sorted(players.iter().map(|p| p.team_name.as_str()))
}

pub fn position_options(players: &[Player]) -> Vec<String> {
    unique_sorted(players.iter().map(|p| p.position.as_str()))
}

fn unique_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
        .collect();
    out.sort();
    out.dedup();
    out
}
