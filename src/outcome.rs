use crate::model::{Match, is_result_sentinel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
    Unknown,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Win => "W",
            Outcome::Draw => "D",
            Outcome::Loss => "L",
            Outcome::Unknown => "N/A",
        }
    }

    pub fn is_known(self) -> bool {
        self != Outcome::Unknown
    }
}

/// Map an upstream result code to an outcome.
///
/// Markers are the upper-case letters the scraper emits and may sit inside a
/// longer string; the first of W, L, D found wins.
pub fn classify(result: Option<&str>) -> Outcome {
    let Some(code) = result else {
        return Outcome::Unknown;
    };
    if is_result_sentinel(code) {
        return Outcome::Unknown;
    }
    if code.contains('W') {
        Outcome::Win
    } else if code.contains('L') {
        Outcome::Loss
    } else if code.contains('D') {
        Outcome::Draw
    } else {
        Outcome::Unknown
    }
}

pub fn classify_match(m: &Match) -> Outcome {
    classify(m.result.as_deref())
}
