use serde_json::json;

use pl_dashboard::model::{Match, Player, PredictionResult};
use pl_dashboard::state::{DashboardState, Delta, ProviderCommand, Screen, apply_delta};
use pl_dashboard::views::Standings;
use pl_dashboard::week::{ResolvedWeek, WeekSource};

fn game(id: u64, date: Option<&str>, time: &str) -> Match {
    serde_json::from_value(json!({
        "match_id": id,
        "date": date,
        "time": time,
        "round": "Matchweek 4",
        "result": "nan",
        "opponent": "Chelsea",
        "team_name": "Arsenal",
    }))
    .expect("match json")
}

fn player(name: &str) -> Player {
    serde_json::from_value(json!({"name": name, "team_name": "Arsenal", "goals": 1}))
        .expect("player json")
}

fn prediction() -> PredictionResult {
    serde_json::from_value(json!({
        "home_team": "Arsenal",
        "away_team": "Chelsea",
        "home_win_prob": 0.5,
        "draw_prob": 0.3,
        "away_win_prob": 0.2,
        "prediction": "Arsenal",
    }))
    .expect("prediction json")
}

#[test]
fn valid_week_param_skips_resolution() {
    let mut state = DashboardState::new();
    let cmd = state.open_matches(Some("12"));
    assert!(matches!(cmd, ProviderCommand::FetchWeek { week: 12 }));
    assert_eq!(state.current_week, Some(12));
    assert_eq!(state.week_source, Some(WeekSource::Location));
    assert_eq!(state.location(), "/matches?week=12");
}

#[test]
fn invalid_week_param_resolves_current_week() {
    let mut state = DashboardState::new();
    let cmd = state.open_matches(Some("99"));
    assert!(matches!(cmd, ProviderCommand::ResolveCurrentWeek));
    assert!(state.resolving_week);
    assert_eq!(state.current_week, None);
    assert_eq!(state.location(), "/matches");
    assert!(state.logs.iter().any(|l| l.starts_with("[WARN]")));
}

#[test]
fn resolved_week_becomes_current() {
    let mut state = DashboardState::new();
    state.open_matches(None);
    apply_delta(
        &mut state,
        Delta::WeekResolved(ResolvedWeek {
            week: 7,
            source: WeekSource::CalendarFallback,
        }),
    );
    assert_eq!(state.current_week, Some(7));
    assert_eq!(state.week_source, Some(WeekSource::CalendarFallback));
    assert!(!state.resolving_week);
    assert!(state.logs.back().is_some_and(|l| l.contains("calendar fallback")));
}

#[test]
fn late_resolution_does_not_override_navigation() {
    let mut state = DashboardState::new();
    state.open_matches(None);
    state.go_to_week(3, WeekSource::Location);
    apply_delta(
        &mut state,
        Delta::WeekResolved(ResolvedWeek {
            week: 7,
            source: WeekSource::ServerHint,
        }),
    );
    assert_eq!(state.current_week, Some(3));
    assert_eq!(state.week_source, Some(WeekSource::Location));
}

#[test]
fn week_matches_replace_and_sort() {
    let mut state = DashboardState::new();
    state.open_matches(Some("4"));
    apply_delta(
        &mut state,
        Delta::SetWeekMatches {
            week: 4,
            matches: vec![
                game(1, Some("2025-09-14"), "16:30"),
                game(2, Some("2025-09-13"), "17:30"),
                game(3, Some("2025-09-13"), "12:30"),
            ],
        },
    );
    let ids: Vec<u64> = state.week_matches.iter().map(|m| m.match_id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
    assert!(!state.week_loading);

    apply_delta(
        &mut state,
        Delta::SetWeekMatches {
            week: 4,
            matches: vec![game(9, None, "")],
        },
    );
    assert_eq!(state.week_matches.len(), 1);
    assert_eq!(state.week_matches[0].match_id, 9);
}

#[test]
fn stale_week_response_is_discarded() {
    let mut state = DashboardState::new();
    state.open_matches(Some("4"));
    state.go_to_next_week();
    state.go_to_next_week();
    assert_eq!(state.current_week, Some(6));

    apply_delta(
        &mut state,
        Delta::SetWeekMatches {
            week: 6,
            matches: vec![game(60, Some("2025-09-27"), "15:00")],
        },
    );
    apply_delta(
        &mut state,
        Delta::SetWeekMatches {
            week: 5,
            matches: vec![game(50, Some("2025-09-20"), "15:00")],
        },
    );
    apply_delta(
        &mut state,
        Delta::WeekFailed {
            week: 4,
            message: "Unable to reach the stats server".to_string(),
        },
    );

    assert_eq!(state.week_matches.len(), 1);
    assert_eq!(state.week_matches[0].match_id, 60);
    assert_eq!(state.week_error, None);
    assert!(state.logs.iter().any(|l| l.contains("stale matchweek 5")));
}

#[test]
fn week_failure_clears_old_rows() {
    let mut state = DashboardState::new();
    state.open_matches(Some("4"));
    apply_delta(
        &mut state,
        Delta::SetWeekMatches {
            week: 4,
            matches: vec![game(1, Some("2025-09-14"), "16:30")],
        },
    );
    apply_delta(
        &mut state,
        Delta::WeekFailed {
            week: 4,
            message: "http 500: boom".to_string(),
        },
    );
    assert!(state.week_matches.is_empty());
    assert_eq!(state.week_error.as_deref(), Some("http 500: boom"));
}

#[test]
fn week_navigation_stops_at_season_edges() {
    let mut state = DashboardState::new();
    state.open_matches(Some("1"));
    assert!(state.go_to_previous_week().is_none());
    assert_eq!(state.current_week, Some(1));

    state.open_matches(Some("38"));
    assert!(state.go_to_next_week().is_none());
    let cmd = state.go_to_previous_week();
    assert!(matches!(cmd, Some(ProviderCommand::FetchWeek { week: 37 })));
}

#[test]
fn players_delta_drops_aggregate_rows() {
    let mut state = DashboardState::new();
    state.open_players();
    apply_delta(
        &mut state,
        Delta::SetPlayers(vec![player("Bukayo Saka"), player("Squad Total")]),
    );
    assert_eq!(state.players.len(), 1);
    assert_eq!(state.player_rows().len(), 1);
    assert!(!state.players_loading);
}

#[test]
fn team_filter_cycles_back_to_all() {
    let mut state = DashboardState::new();
    state.open_players();
    apply_delta(&mut state, Delta::SetPlayers(vec![player("Bukayo Saka")]));
    state.cycle_team_filter();
    assert_eq!(state.player_query.team.as_deref(), Some("Arsenal"));
    state.cycle_team_filter();
    assert_eq!(state.player_query.team, None);
}

#[test]
fn standings_failure_surfaces_error() {
    let mut state = DashboardState::new();
    state.open_standings();
    apply_delta(&mut state, Delta::SetStandings(Standings::default()));
    assert!(state.standings.is_some());
    apply_delta(
        &mut state,
        Delta::StandingsFailed("Unable to reach the stats server".to_string()),
    );
    assert!(state.standings.is_none());
    assert_eq!(
        state.standings_error.as_deref(),
        Some("Unable to reach the stats server")
    );
}

#[test]
fn stale_team_failure_is_ignored() {
    let mut state = DashboardState::new();
    state.open_team("Arsenal");
    state.open_team("Liverpool");
    assert_eq!(state.location(), "/teams/Liverpool");
    apply_delta(
        &mut state,
        Delta::TeamDetailFailed {
            key: "arsenal".to_string(),
            message: "Team not found".to_string(),
        },
    );
    assert!(state.team_error.is_none());
    assert!(state.team_loading);
}

#[test]
fn match_not_found_message() {
    let mut state = DashboardState::new();
    state.open_matches(Some("4"));
    state.open_match(501);
    assert_eq!(state.location(), "/matches/501?week=4");
    assert_eq!(state.back_location(), "/matches?week=4");
    apply_delta(
        &mut state,
        Delta::MatchDetailFailed {
            match_id: 501,
            message: "Match not found".to_string(),
        },
    );
    assert_eq!(state.match_error.as_deref(), Some("Match not found"));
    assert!(state.request_prediction().is_none());
}

#[test]
fn prediction_requires_loaded_match() {
    let mut state = DashboardState::new();
    state.open_match(501);
    assert!(state.request_prediction().is_none());
    apply_delta(
        &mut state,
        Delta::SetMatchDetail {
            match_id: 501,
            detail: game(501, Some("2025-09-14"), "16:30"),
        },
    );
    match state.request_prediction() {
        Some(ProviderCommand::Predict { match_id, request }) => {
            assert_eq!(match_id, 501);
            assert_eq!(request.result, "nan");
            assert_eq!(request.team_name, "Arsenal");
        }
        other => panic!("expected predict command, got {other:?}"),
    }
    assert!(state.prediction_loading);
}

#[test]
fn failed_prediction_clears_previous_result() {
    let mut state = DashboardState::new();
    state.open_match(501);
    apply_delta(
        &mut state,
        Delta::SetMatchDetail {
            match_id: 501,
            detail: game(501, Some("2025-09-14"), "16:30"),
        },
    );
    apply_delta(
        &mut state,
        Delta::SetPrediction {
            match_id: 501,
            prediction: prediction(),
        },
    );
    assert!(state.prediction.is_some());

    state.request_prediction();
    apply_delta(
        &mut state,
        Delta::PredictionFailed {
            match_id: 501,
            message: "http 422: invalid body".to_string(),
        },
    );
    assert!(state.prediction.is_none());
    assert!(!state.prediction_loading);
    assert_eq!(state.prediction_error.as_deref(), Some("http 422: invalid body"));
    assert!(state.match_detail.is_some());
}

#[test]
fn prediction_for_previous_match_is_dropped() {
    let mut state = DashboardState::new();
    state.open_match(501);
    state.open_match(502);
    apply_delta(
        &mut state,
        Delta::SetPrediction {
            match_id: 501,
            prediction: prediction(),
        },
    );
    assert!(state.prediction.is_none());
    assert_eq!(state.screen, Screen::MatchDetail { match_id: 502 });
}

#[test]
fn logs_are_capped() {
    let mut state = DashboardState::new();
    for i in 0..250 {
        apply_delta(&mut state, Delta::Log(format!("[INFO] line {i}")));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.front().map(String::as_str), Some("[INFO] line 50"));
}

#[test]
fn selection_wraps_over_week_rows() {
    let mut state = DashboardState::new();
    state.open_matches(Some("4"));
    apply_delta(
        &mut state,
        Delta::SetWeekMatches {
            week: 4,
            matches: vec![
                game(1, Some("2025-09-14"), "16:30"),
                game(2, Some("2025-09-13"), "17:30"),
            ],
        },
    );
    assert_eq!(state.selected_match_id(), Some(2));
    state.select_next();
    assert_eq!(state.selected_match_id(), Some(1));
    state.select_next();
    assert_eq!(state.selected_match_id(), Some(2));
    state.select_prev();
    assert_eq!(state.selected_match_id(), Some(1));
}
