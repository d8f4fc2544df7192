use crate::model::Player;

// FBref squad tables append these summary rows after the individual players.
const AGGREGATE_PATTERNS: [&str; 5] = [
    "squad total",
    "opponent total",
    "team total",
    "squad",
    "opponent",
];

pub fn is_individual_player(player: &Player) -> bool {
    is_individual_name(&player.name)
}

pub fn is_individual_name(name: &str) -> bool {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return false;
    }
    !AGGREGATE_PATTERNS.iter().copied().any(|pattern| {
        name == pattern
            || name
                .strip_prefix(pattern)
                .is_some_and(|rest| rest.starts_with(' '))
            || name
                .strip_suffix(pattern)
                .is_some_and(|rest| rest.ends_with(' '))
    })
}

pub fn individual_players(players: &[Player]) -> Vec<Player> {
    players
        .iter()
        .filter(|p| is_individual_player(p))
        .cloned()
        .collect()
}
