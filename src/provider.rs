use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use chrono::{Local, NaiveDate};

use crate::api::ApiClient;
use crate::state::{Delta, ProviderCommand};
use crate::views::{build_standings, build_team_detail};
use crate::week::{ResolvedWeek, resolve_current_week};

/// Serve UI commands until the command channel closes. Each command runs on
/// its own thread so a slow request never blocks a newer one.
pub fn spawn_provider(
    api: ApiClient,
    tx: Sender<Delta>,
    cmd_rx: Receiver<ProviderCommand>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let _ = tx.send(Delta::Log(format!(
            "[INFO] Stats server {}",
            api.base_url()
        )));
        for cmd in cmd_rx {
            let api = api.clone();
            let tx = tx.clone();
            thread::spawn(move || run_command(&api, cmd, &tx));
        }
    })
}

pub fn run_command(api: &ApiClient, cmd: ProviderCommand, tx: &Sender<Delta>) {
    match cmd {
        ProviderCommand::ResolveCurrentWeek => {
            let resolved = resolve_week(api, Local::now().date_naive(), tx);
            let _ = tx.send(Delta::WeekResolved(resolved));
            fetch_week(api, resolved.week, tx);
        }
        ProviderCommand::FetchWeek { week } => fetch_week(api, week, tx),
        ProviderCommand::FetchStandings => match api.fetch_league_snapshot() {
            Ok(snapshot) => {
                let _ = tx.send(Delta::SetStandings(build_standings(&snapshot)));
            }
            Err(err) => {
                let _ = tx.send(Delta::Log(format!("[WARN] Standings fetch error: {err}")));
                let _ = tx.send(Delta::StandingsFailed(err.user_message()));
            }
        },
        ProviderCommand::FetchPlayers => match api.fetch_players() {
            Ok(players) => {
                let _ = tx.send(Delta::SetPlayers(players));
            }
            Err(err) => {
                let _ = tx.send(Delta::Log(format!("[WARN] Players fetch error: {err}")));
                let _ = tx.send(Delta::PlayersFailed(err.user_message()));
            }
        },
        ProviderCommand::FetchTeamDetail { key } => {
            let detail = api
                .fetch_league_snapshot()
                .and_then(|snapshot| build_team_detail(&key, &snapshot));
            match detail {
                Ok(detail) => {
                    let _ = tx.send(Delta::SetTeamDetail { key, detail });
                }
                Err(err) => {
                    let _ = tx.send(Delta::Log(format!("[WARN] Team fetch error: {err}")));
                    let _ = tx.send(Delta::TeamDetailFailed {
                        key,
                        message: err.user_message(),
                    });
                }
            }
        }
        ProviderCommand::FetchMatch { match_id } => match api.fetch_match(match_id) {
            Ok(detail) => {
                let _ = tx.send(Delta::SetMatchDetail { match_id, detail });
            }
            Err(err) => {
                let _ = tx.send(Delta::Log(format!("[WARN] Match fetch error: {err}")));
                let _ = tx.send(Delta::MatchDetailFailed {
                    match_id,
                    message: err.user_message(),
                });
            }
        },
        ProviderCommand::Predict { match_id, request } => match api.predict(&request) {
            Ok(prediction) => {
                let _ = tx.send(Delta::SetPrediction {
                    match_id,
                    prediction,
                });
            }
            Err(err) => {
                let _ = tx.send(Delta::PredictionFailed {
                    match_id,
                    message: err.user_message(),
                });
            }
        },
    }
}

/// Ask the server for the current week; any failure or unusable answer
/// falls back to the calendar estimate for `today`.
pub fn resolve_week(api: &ApiClient, today: NaiveDate, tx: &Sender<Delta>) -> ResolvedWeek {
    let hint = api.fetch_current_week();
    if let Err(err) = &hint {
        let _ = tx.send(Delta::Log(format!("[WARN] Current week error: {err}")));
    }
    resolve_current_week(&hint, today)
}

fn fetch_week(api: &ApiClient, week: u8, tx: &Sender<Delta>) {
    match api.fetch_week(week) {
        Ok(matches) => {
            let _ = tx.send(Delta::SetWeekMatches { week, matches });
        }
        Err(err) => {
            let _ = tx.send(Delta::Log(format!("[WARN] Matchweek {week} fetch error: {err}")));
            let _ = tx.send(Delta::WeekFailed {
                week,
                message: err.user_message(),
            });
        }
    }
}
