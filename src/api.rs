use anyhow::Result as AnyResult;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::http_client::http_client;
use crate::model::{Match, Player, PredictionRequest, PredictionResult, Team};

const CLIENT_AGENT: &str = "pl_dashboard/0.1";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{0}")]
    NotFound(String),
    /// Non-2xx status (`status` set) or a 2xx body of the wrong shape (`status` unset).
    #[error("bad response from {url}: {message}")]
    BadResponse {
        url: String,
        status: Option<u16>,
        message: String,
    },
}

impl ApiError {
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network { .. } => "Unable to reach the stats server".to_string(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::BadResponse { message, .. } => message.clone(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Network { .. } => None,
            ApiError::NotFound(_) => Some(StatusCode::NOT_FOUND.as_u16()),
            ApiError::BadResponse { status, .. } => *status,
        }
    }
}

/// Teams, matches and players fetched together for the combined views.
#[derive(Debug, Clone, Default)]
pub struct LeagueSnapshot {
    pub teams: Vec<Team>,
    pub matches: Vec<Match>,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> AnyResult<Self> {
        let client = http_client(config.timeout)?.clone();
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn fetch_match(&self, match_id: u64) -> Result<Match, ApiError> {
        let (url, body) = self
            .get(&format!("/matches/{match_id}"))
            .map_err(|err| match err {
                ApiError::NotFound(_) => ApiError::NotFound("Match not found".to_string()),
                other => other,
            })?;
        parse_match_json(&body)
            .map_err(|err| bad_payload(&url, err))?
            .ok_or_else(|| ApiError::NotFound("Match not found".to_string()))
    }

    pub fn fetch_week(&self, week: u8) -> Result<Vec<Match>, ApiError> {
        self.get_rows(&format!("/matches/Matchweek/{week}"))
    }

    pub fn fetch_current_week(&self) -> Result<Vec<Match>, ApiError> {
        self.get_rows("/matches/current-week")
    }

    pub fn fetch_matches(&self) -> Result<Vec<Match>, ApiError> {
        self.get_rows("/matches/")
    }

    pub fn fetch_teams(&self) -> Result<Vec<Team>, ApiError> {
        self.get_rows("/teams/")
    }

    pub fn fetch_players(&self) -> Result<Vec<Player>, ApiError> {
        self.get_rows("/players/")
    }

    /// All three league tables in parallel. Any failed leg fails the snapshot.
    pub fn fetch_league_snapshot(&self) -> Result<LeagueSnapshot, ApiError> {
        let (teams, (matches, players)) = rayon::join(
            || self.fetch_teams(),
            || rayon::join(|| self.fetch_matches(), || self.fetch_players()),
        );
        Ok(LeagueSnapshot {
            teams: teams?,
            matches: matches?,
            players: players?,
        })
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult, ApiError> {
        let url = self.url("/predict/");
        let body = send(&url, self.client.post(&url).json(request))?;
        parse_prediction_json(&body)
            .map_err(|err| bad_payload(&url, err))?
            .ok_or_else(|| ApiError::BadResponse {
                url,
                status: None,
                message: "empty prediction response".to_string(),
            })
    }

    fn get_rows<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ApiError> {
        let (url, body) = self.get(path)?;
        parse_rows(&body).map_err(|err| bad_payload(&url, err))
    }

    fn get(&self, path: &str) -> Result<(String, String), ApiError> {
        let url = self.url(path);
        let body = send(&url, self.client.get(&url))?;
        Ok((url, body))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn send(url: &str, req: RequestBuilder) -> Result<String, ApiError> {
    let resp = req
        .header(USER_AGENT, CLIENT_AGENT)
        .send()
        .map_err(|source| ApiError::Network {
            url: url.to_string(),
            source,
        })?;
    let status = resp.status();
    let body = resp.text().map_err(|source| ApiError::Network {
        url: url.to_string(),
        source,
    })?;
    if status == StatusCode::NOT_FOUND {
        let message = detail_message(&body).unwrap_or_else(|| format!("{url} not found"));
        return Err(ApiError::NotFound(message));
    }
    if !status.is_success() {
        let detail = detail_message(&body).unwrap_or_else(|| body.trim().to_string());
        return Err(ApiError::BadResponse {
            url: url.to_string(),
            status: Some(status.as_u16()),
            message: format!("http {}: {}", status.as_u16(), detail),
        });
    }
    Ok(body)
}

// FastAPI errors arrive as {"detail": "..."} or {"detail": [validation errors]}.
fn detail_message(body: &str) -> Option<String> {
    let root: Value = serde_json::from_str(body.trim()).ok()?;
    match root.get("detail")? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn bad_payload(url: &str, err: serde_json::Error) -> ApiError {
    ApiError::BadResponse {
        url: url.to_string(),
        status: None,
        message: format!("invalid payload: {err}"),
    }
}

fn is_blank_body(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed == "null"
}

/// Decode a JSON array of records. A blank or `null` body is an empty list and
/// non-object elements are skipped.
pub fn parse_rows<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>, serde_json::Error> {
    if is_blank_body(raw) {
        return Ok(Vec::new());
    }
    let items: Vec<Value> = serde_json::from_str(raw.trim())?;
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

pub fn parse_matches_json(raw: &str) -> Result<Vec<Match>, serde_json::Error> {
    parse_rows(raw)
}

pub fn parse_teams_json(raw: &str) -> Result<Vec<Team>, serde_json::Error> {
    parse_rows(raw)
}

pub fn parse_players_json(raw: &str) -> Result<Vec<Player>, serde_json::Error> {
    parse_rows(raw)
}

pub fn parse_match_json(raw: &str) -> Result<Option<Match>, serde_json::Error> {
    parse_single(raw)
}

pub fn parse_prediction_json(raw: &str) -> Result<Option<PredictionResult>, serde_json::Error> {
    parse_single(raw)
}

fn parse_single<T: DeserializeOwned>(raw: &str) -> Result<Option<T>, serde_json::Error> {
    if is_blank_body(raw) {
        return Ok(None);
    }
    serde_json::from_str(raw.trim()).map(Some)
}
