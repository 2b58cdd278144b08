//! Per-game metadata carried alongside the snapshot stream.

use crate::notation::movetext::player_names;

/// Player names shown on every rendered diagram of a game. Either name
/// falls back to `"?"` when its tag pair (or a quote of it) is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameContext {
    pub white_name: String,
    pub black_name: String,
}

impl GameContext {
    /// Reads the names out of one game record's text.
    pub fn from_pgn(text: &str) -> Self {
        let (white_name, black_name) = player_names(text);
        GameContext {
            white_name,
            black_name,
        }
    }
}

impl Default for GameContext {
    fn default() -> Self {
        GameContext {
            white_name: "?".to_string(),
            black_name: "?".to_string(),
        }
    }
}
