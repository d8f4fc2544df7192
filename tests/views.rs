use std::fs;
use std::path::PathBuf;

use pl_dashboard::api::{
    ApiError, LeagueSnapshot, parse_matches_json, parse_players_json, parse_teams_json,
};
use pl_dashboard::form::{FORM_LENGTH, FormBadge, form_string};
use pl_dashboard::views::{build_standings, build_team_detail};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn snapshot() -> LeagueSnapshot {
    LeagueSnapshot {
        teams: parse_teams_json(&read_fixture("teams.json")).expect("teams fixture"),
        matches: parse_matches_json(&read_fixture("matches_all.json")).expect("matches fixture"),
        players: parse_players_json(&read_fixture("players.json")).expect("players fixture"),
    }
}

#[test]
fn standings_are_ranked() {
    let standings = build_standings(&snapshot());
    let names: Vec<&str> = standings.teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Arsenal", "Liverpool", "Burnley"]);
}

#[test]
fn standings_form_uses_latest_played_matches() {
    let standings = build_standings(&snapshot());
    assert_eq!(form_string(&standings.form_for("Arsenal")), "WDWLW");
    assert_eq!(form_string(&standings.form_for("Liverpool")), "WWW--");
    let burnley = standings.form_for("Burnley");
    assert_eq!(burnley, vec![FormBadge::NoData; FORM_LENGTH]);
}

#[test]
fn standings_leaders_exclude_aggregates() {
    let standings = build_standings(&snapshot());
    let scorers: Vec<&str> = standings
        .top_scorers
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(
        scorers,
        vec![
            "Viktor Gyokeres",
            "Mohamed Salah",
            "Bukayo Saka",
            "Declan Rice",
            "Dominik Szoboszlai",
            "Lyle Foster"
        ]
    );
    assert!(standings.top_assisters.iter().all(|p| p.assists > 0));
    assert_eq!(standings.top_assisters[0].name, "Bukayo Saka");
}

#[test]
fn team_detail_lookup_ignores_case() {
    let detail = build_team_detail("  arsenal ", &snapshot()).expect("team exists");
    assert_eq!(detail.team.name, "Arsenal");
    assert_eq!(detail.team.rank, 1);
}

#[test]
fn team_detail_keeps_dated_matches_in_order() {
    let detail = build_team_detail("Arsenal", &snapshot()).expect("team exists");
    let ids: Vec<u64> = detail.matches.iter().map(|m| m.match_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(form_string(&detail.form), "WDWLW");
}

#[test]
fn team_detail_players_are_individuals_of_that_team() {
    let detail = build_team_detail("Arsenal", &snapshot()).expect("team exists");
    assert_eq!(detail.players.len(), 4);
    assert!(detail.players.iter().all(|p| p.team_name == "Arsenal"));
    let scorers: Vec<&str> = detail.top_scorers.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(scorers, vec!["Viktor Gyokeres", "Bukayo Saka", "Declan Rice"]);
    let assisters: Vec<&str> = detail
        .top_assisters
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(assisters, vec!["Bukayo Saka", "Declan Rice", "Viktor Gyokeres"]);
}

#[test]
fn unknown_team_is_not_found() {
    let err = build_team_detail("Sunderland", &snapshot()).expect_err("team is missing");
    assert!(matches!(err, ApiError::NotFound(_)));
    assert_eq!(err.user_message(), "Team not found");
}
