//! Multi-game PGN splitting.
//!
//! Cuts a collection at each `[Event` marker and names the pieces by their
//! `[Result` tag, so wins, losses and draws are visible in a directory
//! listing. Records keep their position in the source file as a zero-based
//! index; range selection in the splitter binary preserves those indices.

use crate::notation::movetext::{find_next_game, result_outcome, GameOutcome, GAME_START_MARKER};

/// One game's slice of a larger PGN file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRecord<'a> {
    /// Zero-based position of the game in the source file.
    pub index: usize,
    /// The record's text, from its `[Event` marker up to the next one.
    pub text: &'a str,
}

/// Splits a PGN collection into its game records. Text before the first
/// `[Event` marker belongs to no game and is dropped.
pub fn split_games(text: &str) -> Vec<GameRecord<'_>> {
    let mut records = Vec::new();
    let mut at = match find_next_game(text, 0) {
        Some(at) => at,
        None => return records,
    };
    loop {
        let next = find_next_game(text, at + GAME_START_MARKER.len());
        let end = next.unwrap_or(text.len());
        records.push(GameRecord {
            index: records.len(),
            text: &text[at..end],
        });
        match next {
            Some(next) => at = next,
            None => break,
        }
    }
    records
}

impl<'a> GameRecord<'a> {
    /// Value of this record's `[Result` tag. The quotes must sit before the
    /// tag's closing `]`; anything else yields `None`.
    pub fn result(&self) -> Option<&'a str> {
        let tag = self.text.find("[Result")?;
        let after = &self.text[tag + "[Result".len()..];
        let close = after.find(']')?;
        let window = &after[..close];
        let open = window.find('"')?;
        let quoted = &window[open + 1..];
        let end = quoted.find('"')?;
        Some(&quoted[..end])
    }

    /// Output file name for this record, suffixed by result: `-ww` for a
    /// white win, `-bw` for a black win, `-00` for a draw, nothing when the
    /// result is absent, unfinished or unrecognized.
    pub fn file_name(&self) -> String {
        match self.result().and_then(result_outcome) {
            Some(GameOutcome::WhiteWins) => format!("game-{}-ww.pgn", self.index),
            Some(GameOutcome::BlackWins) => format!("game-{}-bw.pgn", self.index),
            Some(GameOutcome::Draw) => format!("game-{}-00.pgn", self.index),
            _ => format!("game-{}.pgn", self.index),
        }
    }
}
