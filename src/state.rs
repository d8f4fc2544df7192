use std::collections::{BTreeMap, VecDeque};

use crate::grouping::{DateKey, flatten_groups, group_by_date};
use crate::identity::individual_players;
use crate::model::{Match, Player, PredictionRequest, PredictionResult, Team};
use crate::sorting::{PlayerQuery, player_table, position_options, sort_matches, team_options};
use crate::views::{Standings, TeamDetail};
use crate::week::{
    ResolvedWeek, WeekSource, matches_location, next_week, parse_week_param, previous_week,
};

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Matches,
    MatchDetail { match_id: u64 },
    Standings,
    TeamDetail { team: String },
    Players,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub screen: Screen,
    pub selected: usize,
    pub help_overlay: bool,
    pub logs: VecDeque<String>,

    pub current_week: Option<u8>,
    pub week_source: Option<WeekSource>,
    pub resolving_week: bool,
    pub week_matches: Vec<Match>,
    pub week_loading: bool,
    pub week_error: Option<String>,

    pub standings: Option<Standings>,
    pub standings_loading: bool,
    pub standings_error: Option<String>,

    pub players: Vec<Player>,
    pub players_loading: bool,
    pub players_error: Option<String>,
    pub player_query: PlayerQuery,
    pub search_active: bool,

    pub team_key: Option<String>,
    pub team_detail: Option<TeamDetail>,
    pub team_loading: bool,
    pub team_error: Option<String>,

    pub match_id: Option<u64>,
    pub match_detail: Option<Match>,
    pub match_loading: bool,
    pub match_error: Option<String>,
    pub prediction: Option<PredictionResult>,
    pub prediction_loading: bool,
    pub prediction_error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            screen: Screen::Matches,
            selected: 0,
            help_overlay: false,
            logs: VecDeque::with_capacity(MAX_LOGS),
            current_week: None,
            week_source: None,
            resolving_week: false,
            week_matches: Vec::with_capacity(20),
            week_loading: false,
            week_error: None,
            standings: None,
            standings_loading: false,
            standings_error: None,
            players: Vec::new(),
            players_loading: false,
            players_error: None,
            player_query: PlayerQuery::default(),
            search_active: false,
            team_key: None,
            team_detail: None,
            team_loading: false,
            team_error: None,
            match_id: None,
            match_detail: None,
            match_loading: false,
            match_error: None,
            prediction: None,
            prediction_loading: false,
            prediction_error: None,
        }
    }

    /// Landing on the matches page. A valid `week` parameter is honored as-is;
    /// anything else asks the backend which week is current.
    pub fn open_matches(&mut self, week_param: Option<&str>) -> ProviderCommand {
        self.screen = Screen::Matches;
        self.selected = 0;
        match week_param.and_then(parse_week_param) {
            Some(week) => self.go_to_week(week, WeekSource::Location),
            None => {
                if let Some(raw) = week_param {
                    self.push_log(format!("[WARN] Ignoring invalid week parameter {raw:?}"));
                }
                self.resolving_week = true;
                self.week_loading = true;
                self.week_error = None;
                ProviderCommand::ResolveCurrentWeek
            }
        }
    }

    pub fn go_to_week(&mut self, week: u8, source: WeekSource) -> ProviderCommand {
        self.current_week = Some(week);
        self.week_source = Some(source);
        self.resolving_week = false;
        self.week_loading = true;
        self.week_error = None;
        self.selected = 0;
        ProviderCommand::FetchWeek { week }
    }

    pub fn go_to_previous_week(&mut self) -> Option<ProviderCommand> {
        let week = previous_week(self.current_week?)?;
        Some(self.go_to_week(week, WeekSource::Location))
    }

    pub fn go_to_next_week(&mut self) -> Option<ProviderCommand> {
        let week = next_week(self.current_week?)?;
        Some(self.go_to_week(week, WeekSource::Location))
    }

    pub fn open_standings(&mut self) -> ProviderCommand {
        self.screen = Screen::Standings;
        self.selected = 0;
        self.standings_loading = true;
        self.standings_error = None;
        ProviderCommand::FetchStandings
    }

    pub fn open_players(&mut self) -> ProviderCommand {
        self.screen = Screen::Players;
        self.selected = 0;
        self.players_loading = true;
        self.players_error = None;
        ProviderCommand::FetchPlayers
    }

    pub fn open_team(&mut self, team: &str) -> ProviderCommand {
        let key = team.trim().to_lowercase();
        self.screen = Screen::TeamDetail {
            team: team.trim().to_string(),
        };
        self.selected = 0;
        self.team_key = Some(key.clone());
        self.team_detail = None;
        self.team_loading = true;
        self.team_error = None;
        ProviderCommand::FetchTeamDetail { key }
    }

    pub fn open_match(&mut self, match_id: u64) -> ProviderCommand {
        self.screen = Screen::MatchDetail { match_id };
        self.match_id = Some(match_id);
        self.match_detail = None;
        self.match_loading = true;
        self.match_error = None;
        self.prediction = None;
        self.prediction_loading = false;
        self.prediction_error = None;
        ProviderCommand::FetchMatch { match_id }
    }

    /// Predict the match on screen. `None` until its detail has loaded.
    pub fn request_prediction(&mut self) -> Option<ProviderCommand> {
        let detail = self.match_detail.as_ref()?;
        let request = PredictionRequest::from_match(detail);
        let match_id = detail.match_id;
        self.prediction_loading = true;
        self.prediction_error = None;
        Some(ProviderCommand::Predict { match_id, request })
    }

    /// Where the current view lives, as the web dashboard would put it in the address bar.
    pub fn location(&self) -> String {
        match &self.screen {
            Screen::Matches => matches_location(self.current_week),
            Screen::MatchDetail { match_id } => match self.current_week {
                Some(week) => format!("/matches/{match_id}?week={week}"),
                None => format!("/matches/{match_id}"),
            },
            Screen::Standings => "/teams".to_string(),
            Screen::TeamDetail { team } => format!("/teams/{team}"),
            Screen::Players => "/playerStats".to_string(),
        }
    }

    pub fn back_location(&self) -> String {
        match &self.screen {
            Screen::MatchDetail { .. } => matches_location(self.current_week),
            Screen::TeamDetail { .. } => "/teams".to_string(),
            _ => self.location(),
        }
    }

    pub fn grouped_week(&self) -> BTreeMap<DateKey, Vec<&Match>> {
        group_by_date(&self.week_matches)
    }

    /// Week matches in display order: day groups ascending, input order within a day.
    pub fn week_rows(&self) -> Vec<&Match> {
        flatten_groups(&self.grouped_week())
    }

    pub fn player_rows(&self) -> Vec<Player> {
        player_table(&self.players, &self.player_query)
    }

    pub fn selected_match_id(&self) -> Option<u64> {
        match &self.screen {
            Screen::Matches => self.week_rows().get(self.selected).map(|m| m.match_id),
            Screen::MatchDetail { match_id } => Some(*match_id),
            _ => None,
        }
    }

    pub fn selected_team(&self) -> Option<&Team> {
        match &self.screen {
            Screen::Standings => self.standings.as_ref()?.teams.get(self.selected),
            _ => None,
        }
    }

    pub fn cycle_sort_field(&mut self) {
        let next = self.player_query.sort.field.next();
        self.player_query.sort = self.player_query.sort.toggle(next);
        self.selected = 0;
    }

    pub fn toggle_sort_direction(&mut self) {
        self.player_query.sort = self.player_query.sort.toggle(self.player_query.sort.field);
        self.selected = 0;
    }

    pub fn cycle_team_filter(&mut self) {
        let options = team_options(&self.players);
        self.player_query.team = cycle_option(self.player_query.team.as_deref(), &options);
        self.selected = 0;
    }

    pub fn cycle_position_filter(&mut self) {
        let options = position_options(&self.players);
        self.player_query.position =
            cycle_option(self.player_query.position.as_deref(), &options);
        self.selected = 0;
    }

    pub fn list_len(&self) -> usize {
        match &self.screen {
            Screen::Matches => self.week_matches.len(),
            Screen::Standings => self.standings.as_ref().map(|s| s.teams.len()).unwrap_or(0),
            Screen::Players => self.player_rows().len(),
            Screen::TeamDetail { .. } => {
                self.team_detail.as_ref().map(|t| t.matches.len()).unwrap_or(0)
            }
            Screen::MatchDetail { .. } => 0,
        }
    }

    pub fn select_next(&mut self) {
        let total = self.list_len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        self.selected = (self.selected + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.list_len();
        if total == 0 {
            self.selected = 0;
            return;
        }
        if self.selected == 0 {
            self.selected = total - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn clamp_selection(&mut self) {
        let total = self.list_len();
        if total == 0 {
            self.selected = 0;
        } else if self.selected >= total {
            self.selected = total - 1;
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    fn is_current_team(&self, key: &str) -> bool {
        self.team_key.as_deref() == Some(key)
    }
}

// None -> first -> ... -> last -> None
fn cycle_option(current: Option<&str>, options: &[String]) -> Option<String> {
    match current {
        None => options.first().cloned(),
        Some(value) => {
            let pos = options.iter().position(|o| o == value)?;
            options.get(pos + 1).cloned()
        }
    }
}

/// Work for the provider thread. Every response comes back tagged with the
/// key it was asked for.
#[derive(Debug, Clone)]
pub enum ProviderCommand {
    ResolveCurrentWeek,
    FetchWeek {
        week: u8,
    },
    FetchStandings,
    FetchPlayers,
    FetchTeamDetail {
        key: String,
    },
    FetchMatch {
        match_id: u64,
    },
    Predict {
        match_id: u64,
        request: PredictionRequest,
    },
}

#[derive(Debug, Clone)]
pub enum Delta {
    WeekResolved(ResolvedWeek),
    SetWeekMatches {
        week: u8,
        matches: Vec<Match>,
    },
    WeekFailed {
        week: u8,
        message: String,
    },
    SetStandings(Standings),
    StandingsFailed(String),
    SetPlayers(Vec<Player>),
    PlayersFailed(String),
    SetTeamDetail {
        key: String,
        detail: TeamDetail,
    },
    TeamDetailFailed {
        key: String,
        message: String,
    },
    SetMatchDetail {
        match_id: u64,
        detail: Match,
    },
    MatchDetailFailed {
        match_id: u64,
        message: String,
    },
    SetPrediction {
        match_id: u64,
        prediction: PredictionResult,
    },
    PredictionFailed {
        match_id: u64,
        message: String,
    },
    Log(String),
}

pub fn apply_delta(state: &mut DashboardState, delta: Delta) {
    match delta {
        Delta::WeekResolved(resolved) => {
            if !state.resolving_week {
                state.push_log(format!(
                    "[INFO] Ignored current-week answer (week {}); already navigated",
                    resolved.week
                ));
                return;
            }
            state.resolving_week = false;
            state.current_week = Some(resolved.week);
            state.week_source = Some(resolved.source);
            state.push_log(format!(
                "[INFO] Matchweek {} ({})",
                resolved.week,
                week_source_label(resolved.source)
            ));
        }
        Delta::SetWeekMatches { week, mut matches } => {
            if state.current_week != Some(week) {
                state.push_log(format!("[INFO] Dropped stale matchweek {week} response"));
                return;
            }
            sort_matches(&mut matches);
            state.week_matches = matches;
            state.week_loading = false;
            state.week_error = None;
            state.clamp_selection();
        }
        Delta::WeekFailed { week, message } => {
            if state.current_week != Some(week) {
                state.push_log(format!("[INFO] Dropped stale matchweek {week} failure"));
                return;
            }
            state.week_matches.clear();
            state.week_loading = false;
            state.week_error = Some(message);
            state.clamp_selection();
        }
        Delta::SetStandings(standings) => {
            state.standings = Some(standings);
            state.standings_loading = false;
            state.standings_error = None;
            state.clamp_selection();
        }
        Delta::StandingsFailed(message) => {
            state.standings = None;
            state.standings_loading = false;
            state.standings_error = Some(message);
            state.clamp_selection();
        }
        Delta::SetPlayers(players) => {
            let total = players.len();
            state.players = individual_players(&players);
            let dropped = total - state.players.len();
            if dropped > 0 {
                state.push_log(format!("[INFO] Skipped {dropped} aggregate player rows"));
            }
            state.players_loading = false;
            state.players_error = None;
            state.clamp_selection();
        }
        Delta::PlayersFailed(message) => {
            state.players.clear();
            state.players_loading = false;
            state.players_error = Some(message);
            state.clamp_selection();
        }
        Delta::SetTeamDetail { key, detail } => {
            if !state.is_current_team(&key) {
                state.push_log(format!("[INFO] Dropped stale team response for {key}"));
                return;
            }
            state.team_detail = Some(detail);
            state.team_loading = false;
            state.team_error = None;
            state.clamp_selection();
        }
        Delta::TeamDetailFailed { key, message } => {
            if !state.is_current_team(&key) {
                state.push_log(format!("[INFO] Dropped stale team failure for {key}"));
                return;
            }
            state.team_detail = None;
            state.team_loading = false;
            state.team_error = Some(message);
            state.clamp_selection();
        }
        Delta::SetMatchDetail { match_id, detail } => {
            if state.match_id != Some(match_id) {
                state.push_log(format!("[INFO] Dropped stale match {match_id} response"));
                return;
            }
            state.match_detail = Some(detail);
            state.match_loading = false;
            state.match_error = None;
        }
        Delta::MatchDetailFailed { match_id, message } => {
            if state.match_id != Some(match_id) {
                state.push_log(format!("[INFO] Dropped stale match {match_id} failure"));
                return;
            }
            state.match_detail = None;
            state.match_loading = false;
            state.match_error = Some(message);
        }
        Delta::SetPrediction {
            match_id,
            prediction,
        } => {
            if state.match_id != Some(match_id) {
                state.push_log(format!("[INFO] Dropped prediction for match {match_id}"));
                return;
            }
            state.push_log(format!(
                "[INFO] Prediction {} vs {}: {}",
                prediction.home_team, prediction.away_team, prediction.prediction
            ));
            state.prediction = Some(prediction);
            state.prediction_loading = false;
            state.prediction_error = None;
        }
        Delta::PredictionFailed { match_id, message } => {
            if state.match_id != Some(match_id) {
                state.push_log(format!("[INFO] Dropped prediction failure for match {match_id}"));
                return;
            }
            state.push_log(format!("[WARN] Prediction failed: {message}"));
            state.prediction = None;
            state.prediction_loading = false;
            state.prediction_error = Some(message);
        }
        Delta::Log(msg) => state.push_log(msg),
    }
}

pub fn week_source_label(source: WeekSource) -> &'static str {
    match source {
        WeekSource::Location => "from location",
        WeekSource::ServerHint => "server current week",
        WeekSource::CalendarFallback => "calendar fallback",
    }
}
