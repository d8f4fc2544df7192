use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use pl_dashboard::api::{LeagueSnapshot, parse_matches_json, parse_players_json};
use pl_dashboard::form::{FORM_LENGTH, form_by_team};
use pl_dashboard::grouping::group_by_date;
use pl_dashboard::model::{Match, Player, Team};
use pl_dashboard::sorting::{PlayerQuery, PlayerSortField, player_table, sort_matches, top_players};
use pl_dashboard::views::{build_standings, build_team_detail};

const TEAMS: [&str; 20] = [
    "Arsenal",
    "Aston Villa",
    "Bournemouth",
    "Brentford",
    "Brighton",
    "Burnley",
    "Chelsea",
    "Crystal Palace",
    "Everton",
    "Fulham",
    "Leeds United",
    "Liverpool",
    "Manchester City",
    "Manchester Utd",
    "Newcastle Utd",
    "Nott'ham Forest",
    "Sunderland",
    "Tottenham",
    "West Ham",
    "Wolves",
];

// One row per team per match, as the backend serves a full season.
fn season_json() -> String {
    let mut rows = Vec::new();
    let mut id = 0u64;
    for week in 1..=38u32 {
        for (i, team) in TEAMS.iter().enumerate() {
            id += 1;
            let opponent = TEAMS[(i + week as usize) % TEAMS.len()];
            let day = 1 + (week * 7) % 28;
            let month = 8 + (week * 7) / 28;
            let (year, month) = if month > 12 { (2026, month - 12) } else { (2025, month) };
            let result = match (i as u32 + week) % 4 {
                0 => "W",
                1 => "D",
                2 => "L",
                _ => "nan",
            };
            rows.push(format!(
                r#"{{"match_id": {id}, "date": "{year}-{month:02}-{day:02}", "time": "{}:30", "round": "Matchweek {week}", "venue": "Home", "result": "{result}", "gf": {}.0, "ga": "{}", "opponent": "{opponent}", "team_name": "{team}", "poss": "nan"}}"#,
                12 + (i % 8),
                i % 4,
                week % 3
            ));
        }
    }
    format!("[{}]", rows.join(","))
}

fn squads_json() -> String {
    let mut rows = Vec::new();
    let mut id = 0u64;
    for team in TEAMS {
        for n in 0..25u32 {
            id += 1;
            rows.push(format!(
                r#"{{"id": {id}, "name": "Player {id}", "position": "{}", "matchesPlayed": {}, "goals": {}, "assists": {}, "goalsAndAssists": {}, "goalsPer90": 0.{}, "team_name": "{team}"}}"#,
                ["GK", "DF", "MF", "FW"][(n % 4) as usize],
                n % 20,
                n % 7,
                n % 5,
                n % 7 + n % 5,
                n % 9
            ));
        }
        rows.push(format!(r#"{{"name": "Squad Total", "goals": 60, "team_name": "{team}"}}"#));
        rows.push(format!(r#"{{"name": "Opponent Total", "goals": 40, "team_name": "{team}"}}"#));
    }
    format!("[{}]", rows.join(","))
}

fn teams() -> Vec<Team> {
    TEAMS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            serde_json::from_value(serde_json::json!({"name": name, "rank": 20 - i}))
                .expect("team json")
        })
        .collect()
}

fn bench_parse_matches(c: &mut Criterion) {
    let raw = season_json();
    c.bench_function("parse_season_matches", |b| {
        b.iter(|| {
            let rows = parse_matches_json(black_box(&raw)).unwrap();
            black_box(rows.len());
        })
    });
}

fn bench_group_and_sort(c: &mut Criterion) {
    let matches: Vec<Match> = parse_matches_json(&season_json()).unwrap();
    c.bench_function("sort_and_group_season", |b| {
        b.iter(|| {
            let mut rows = matches.clone();
            sort_matches(&mut rows);
            let groups = group_by_date(black_box(&rows));
            black_box(groups.len());
        })
    });
}

fn bench_form(c: &mut Criterion) {
    let matches: Vec<Match> = parse_matches_json(&season_json()).unwrap();
    c.bench_function("form_by_team_season", |b| {
        b.iter(|| {
            let form = form_by_team(black_box(&matches), FORM_LENGTH);
            black_box(form.len());
        })
    });
}

fn bench_player_table(c: &mut Criterion) {
    let players: Vec<Player> = parse_players_json(&squads_json()).unwrap();
    let query = PlayerQuery {
        search: "player 1".to_string(),
        ..PlayerQuery::default()
    };
    c.bench_function("player_table_filtered", |b| {
        b.iter(|| {
            let rows = player_table(black_box(&players), &query);
            black_box(rows.len());
        })
    });
    c.bench_function("top_scorers", |b| {
        b.iter(|| {
            let top = top_players(black_box(&players), PlayerSortField::Goals, 10);
            black_box(top.len());
        })
    });
}

fn bench_views(c: &mut Criterion) {
    let snapshot = LeagueSnapshot {
        teams: teams(),
        matches: parse_matches_json(&season_json()).unwrap(),
        players: parse_players_json(&squads_json()).unwrap(),
    };
    c.bench_function("build_standings", |b| {
        b.iter(|| {
            let standings = build_standings(black_box(&snapshot));
            black_box(standings.teams.len());
        })
    });
    c.bench_function("build_team_detail", |b| {
        b.iter(|| {
            let detail = build_team_detail(black_box("liverpool"), &snapshot).unwrap();
            black_box(detail.matches.len());
        })
    });
}

criterion_group!(
    perf,
    bench_parse_matches,
    bench_group_and_sort,
    bench_form,
    bench_player_table,
    bench_views
);
criterion_main!(perf);
