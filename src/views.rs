use std::collections::HashMap;

use crate::api::{ApiError, LeagueSnapshot};
use crate::form::{FORM_LENGTH, FormBadge, form_badges, form_by_team};
use crate::identity::is_individual_player;
use crate::model::{Match, Player, Team};
use crate::sorting::{PlayerSortField, sort_matches, sort_teams_by_rank, top_players};

const TABLE_LEADERS: usize = 10;
const TEAM_LEADERS: usize = 5;

/// League table page: ranked teams, their form strips and the league leaders.
#[derive(Debug, Clone, Default)]
pub struct Standings {
    pub teams: Vec<Team>,
    pub form: HashMap<String, Vec<FormBadge>>,
    pub top_scorers: Vec<Player>,
    pub top_assisters: Vec<Player>,
}

impl Standings {
    pub fn form_for(&self, team_name: &str) -> Vec<FormBadge> {
        self.form
            .get(team_name)
            .cloned()
            .unwrap_or_else(|| vec![FormBadge::NoData; FORM_LENGTH])
    }
}

pub fn build_standings(snapshot: &LeagueSnapshot) -> Standings {
    let mut teams = snapshot.teams.clone();
    sort_teams_by_rank(&mut teams);
    Standings {
        teams,
        form: form_by_team(&snapshot.matches, FORM_LENGTH),
        top_scorers: top_players(&snapshot.players, PlayerSortField::Goals, TABLE_LEADERS),
        top_assisters: top_players(&snapshot.players, PlayerSortField::Assists, TABLE_LEADERS),
    }
}

#[derive(Debug, Clone)]
pub struct TeamDetail {
    pub team: Team,
    /// Dated matches, oldest first.
    pub matches: Vec<Match>,
    pub players: Vec<Player>,
    pub top_scorers: Vec<Player>,
    pub top_assisters: Vec<Player>,
    pub form: Vec<FormBadge>,
}

/// Assemble one team's page. The key matches team names case-insensitively.
pub fn build_team_detail(key: &str, snapshot: &LeagueSnapshot) -> Result<TeamDetail, ApiError> {
    let lookup = key.trim().to_lowercase();
    let team = snapshot
        .teams
        .iter()
        .find(|t| t.name.to_lowercase() == lookup)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("Team not found".to_string()))?;

    let mut matches: Vec<Match> = snapshot
        .matches
        .iter()
        .filter(|m| m.is_team(&lookup) && m.date.is_some())
        .cloned()
        .collect();
    sort_matches(&mut matches);

    let players: Vec<Player> = snapshot
        .players
        .iter()
        .filter(|p| p.is_on_team(&lookup) && is_individual_player(p))
        .cloned()
        .collect();

    Ok(TeamDetail {
        form: form_badges(&matches, FORM_LENGTH),
        top_scorers: top_players(&players, PlayerSortField::Goals, TEAM_LEADERS),
        top_assisters: top_players(&players, PlayerSortField::Assists, TEAM_LEADERS),
        team,
        matches,
        players,
    })
}
