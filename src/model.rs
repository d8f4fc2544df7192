use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// One team's view of a fixture, as served by `/matches/*`.
///
/// Upstream rows come from scraped CSVs, so every field is decoded leniently:
/// `null`, floats for integer columns and the pandas `"nan"` string all land
/// on a typed default instead of failing the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default, deserialize_with = "lenient::u64")]
    pub match_id: u64,
    #[serde(
        default,
        deserialize_with = "lenient::date",
        serialize_with = "serialize_date"
    )]
    pub date: Option<NaiveDate>,
    #[serde(rename = "time", default, deserialize_with = "lenient::opt_string")]
    pub kickoff: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub round: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub day: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub venue: String,
    #[serde(default, deserialize_with = "lenient::result_code")]
    pub result: Option<String>,
    #[serde(rename = "gf", default, deserialize_with = "lenient::u32")]
    pub goals_for: u32,
    #[serde(rename = "ga", default, deserialize_with = "lenient::u32")]
    pub goals_against: u32,
    #[serde(default, deserialize_with = "lenient::string")]
    pub opponent: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub team_name: String,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub xg: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub xga: f64,
    #[serde(rename = "poss", default, deserialize_with = "lenient::f64")]
    pub possession: f64,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub attendance: u32,
    #[serde(default, deserialize_with = "lenient::string")]
    pub captain: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub formation: String,
    #[serde(rename = "oppFormation", default, deserialize_with = "lenient::string")]
    pub opp_formation: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub referee: String,
}

impl Match {
    /// A match with a result code has been played; sentinels were stripped at decode time.
    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    /// Kickoff as minutes after midnight. Missing or unreadable times sort first.
    pub fn kickoff_minutes(&self) -> u32 {
        self.kickoff.as_deref().and_then(parse_kickoff).unwrap_or(0)
    }

    pub fn is_team(&self, key: &str) -> bool {
        !self.team_name.is_empty() && self.team_name.to_lowercase() == key.to_lowercase()
    }
}

// FBref style times look like "20:00 (21:00)"; the bracket is the viewer's local time.
fn parse_kickoff(raw: &str) -> Option<u32> {
    let head = raw.split('(').next()?.trim();
    let (hours, minutes) = head.split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().get(..2).unwrap_or(minutes).parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub rank: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub matches_played: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub wins: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub draws: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub losses: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub goals_for: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub goals_against: u32,
    #[serde(default, deserialize_with = "lenient::i32")]
    pub goal_difference: i32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub points: u32,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub points_per_game: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub expected_goals: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub expected_goals_allowed: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub expected_goals_difference: f64,
    #[serde(
        default,
        alias = "expectedGoalsPerGame",
        deserialize_with = "lenient::f64"
    )]
    pub expected_goals_difference_per90: f64,
    #[serde(rename = "last5Wins", default, deserialize_with = "lenient::string")]
    pub last5: String,
    #[serde(default, alias = "attendence", deserialize_with = "lenient::u32")]
    pub attendance: u32,
    #[serde(
        rename = "topTeamScorer",
        alias = "topScorer",
        default,
        deserialize_with = "lenient::string"
    )]
    pub top_scorer: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub goalkeeper: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default, deserialize_with = "lenient::u64")]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub nation: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub position: String,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub age: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub matches_played: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub starts: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub minutes: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub goals: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub assists: u32,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub goals_and_assists: f64,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub penalty_goals: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub yellow_cards: u32,
    #[serde(default, deserialize_with = "lenient::u32")]
    pub red_cards: u32,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub expected_goals: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub expected_assists: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub goals_per90: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub assists_per90: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub goals_and_assists_per90: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub expected_goals_per90: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub expected_assists_per90: f64,
    #[serde(rename = "team_name", default, deserialize_with = "lenient::string")]
    pub team_name: String,
}

impl Player {
    pub fn is_on_team(&self, key: &str) -> bool {
        !self.team_name.is_empty() && self.team_name.to_lowercase() == key.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default, deserialize_with = "lenient::string")]
    pub home_team: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub away_team: String,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub home_win_prob: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub draw_prob: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub away_win_prob: f64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub predicted_score: String,
    #[serde(
        default,
        alias = "predicted_winner",
        deserialize_with = "lenient::string"
    )]
    pub prediction: String,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub confidence: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub accuracy: f64,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub precision: f64,
}

impl PredictionResult {
    pub fn probability_sum(&self) -> f64 {
        self.home_win_prob + self.draw_prob + self.away_win_prob
    }

    pub fn is_normalized(&self, tolerance: f64) -> bool {
        let probs = [self.home_win_prob, self.draw_prob, self.away_win_prob];
        probs.iter().all(|p| (0.0..=1.0).contains(p))
            && (self.probability_sum() - 1.0).abs() <= tolerance
    }
}

/// Body of `POST /predict/`: a full match row with every gap filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub date: String,
    pub time: String,
    pub round: String,
    pub day: String,
    pub venue: String,
    pub result: String,
    pub gf: u32,
    pub ga: u32,
    pub opponent: String,
    pub xg: f64,
    pub xga: f64,
    pub poss: f64,
    pub attendance: u32,
    pub captain: String,
    pub formation: String,
    #[serde(rename = "oppFormation")]
    pub opp_formation: String,
    pub referee: String,
    pub team_name: String,
}

impl PredictionRequest {
    pub fn from_match(m: &Match) -> Self {
        Self {
            date: m.date.map(format_date).unwrap_or_default(),
            time: m.kickoff.clone().unwrap_or_default(),
            round: m.round.clone(),
            day: m.day.clone(),
            venue: m.venue.clone(),
            result: m.result.clone().unwrap_or_else(|| "nan".to_string()),
            gf: m.goals_for,
            ga: m.goals_against,
            opponent: m.opponent.clone(),
            xg: m.xg,
            xga: m.xga,
            poss: m.possession,
            attendance: m.attendance,
            captain: m.captain.clone(),
            formation: m.formation.clone(),
            opp_formation: m.opp_formation.clone(),
            referee: m.referee.clone(),
            team_name: m.team_name.clone(),
        }
    }
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Calendar day from an ISO date or a timestamp that starts with one.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    let head = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(head, DATE_FORMAT).ok()
}

fn serialize_date<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(d) => s.serialize_str(&format_date(*d)),
        None => s.serialize_str(""),
    }
}

pub fn is_result_sentinel(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan")
}

/// Decoders that never fail on a present-but-odd value.
mod lenient {
    use super::*;

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(value_to_string(Value::deserialize(d)?).unwrap_or_default())
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(value_to_string(Value::deserialize(d)?).filter(|s| !s.is_empty()))
    }

    pub fn result_code<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(value_to_string(Value::deserialize(d)?).filter(|s| !is_result_sentinel(s)))
    }

    pub fn date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        Ok(value_to_string(Value::deserialize(d)?).and_then(|s| parse_date(&s)))
    }

    pub fn f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(value_to_f64(&Value::deserialize(d)?).unwrap_or(0.0))
    }

    pub fn u32<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        Ok(value_to_f64(&Value::deserialize(d)?)
            .filter(|v| *v >= 0.0)
            .map(|v| v.round().min(u32::MAX as f64) as u32)
            .unwrap_or(0))
    }

    pub fn i32<'de, D: Deserializer<'de>>(d: D) -> Result<i32, D::Error> {
        Ok(value_to_f64(&Value::deserialize(d)?)
            .map(|v| v.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32)
            .unwrap_or(0))
    }

    pub fn u64<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        let value = Value::deserialize(d)?;
        if let Some(n) = value.as_u64() {
            return Ok(n);
        }
        Ok(value_to_f64(&value)
            .filter(|v| *v >= 0.0)
            .map(|v| v.round() as u64)
            .unwrap_or(0))
    }

    fn value_to_string(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn value_to_f64(value: &Value) -> Option<f64> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok(),
            _ => None,
        }?;
        parsed.is_finite().then_some(parsed)
    }
}
