//! PGN text scanning for replay interchange.
//!
//! Locates game boundaries, reads tag-pair values, finds where movetext
//! begins, and turns movetext into the token stream the game driver walks.
//! The scanners are deliberately substring-based rather than a tag grammar:
//! real-world PGN files are messy, and a missing tag or quote degrades to a
//! default instead of failing the whole file.

/// Marker that opens every game record in a PGN collection.
pub const GAME_START_MARKER: &str = "[Event";

/// Terminal result of a replayed game, taken from the result token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    WhiteWins,
    BlackWins,
    Draw,
    Unfinished,
}

/// Byte offset of the next `[Event` marker at or after `from`.
pub fn find_next_game(text: &str, from: usize) -> Option<usize> {
    if from > text.len() {
        return None;
    }
    text[from..].find(GAME_START_MARKER).map(|at| from + at)
}

/// Value of the first `[<name> "…"]` tag pair found in `text`.
///
/// `name` includes the opening bracket, e.g. `"[White"`. The scan takes
/// whatever sits between the next two double quotes; `None` when the tag or
/// either quote is missing.
pub fn tag_value<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    let tag = text.find(name)?;
    let after = &text[tag + name.len()..];
    let open = after.find('"')?;
    let rest = &after[open + 1..];
    let close = rest.find('"')?;
    Some(&rest[..close])
}

/// White and black player names of a game record, `"?"` when absent.
pub fn player_names(text: &str) -> (String, String) {
    let white = tag_value(text, "[White").unwrap_or("?").to_string();
    let black = tag_value(text, "[Black").unwrap_or("?").to_string();
    (white, black)
}

/// Byte offset where a game record's movetext begins: the first digit
/// outside any `[…]` tag pair.
pub fn movetext_start(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut at = 0;
    while at < bytes.len() {
        if bytes[at] == b'[' {
            while at < bytes.len() && bytes[at] != b']' {
                at += 1;
            }
            if at < bytes.len() {
                at += 1;
            }
            continue;
        }
        if bytes[at].is_ascii_digit() {
            return at;
        }
        at += 1;
    }
    text.len()
}

/// Removes `{…}` comments and `(…)` variations, keeping only top-level
/// movetext.
pub fn strip_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' => paren_depth = paren_depth.saturating_add(1),
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

/// Splits movetext into tokens on whitespace and dots, so `1.` and `1.e4`
/// and `5...` all yield their bare pieces.
pub fn tokens(movetext: &str) -> impl Iterator<Item = &str> {
    movetext
        .split(|c: char| c.is_whitespace() || c == '.')
        .filter(|token| !token.is_empty())
}

/// Full-move number carried by a token, `None` when the token is not a
/// plain number. The driver halts the walk on `None` or zero.
pub fn parse_move_number(token: &str) -> Option<u32> {
    token.parse().ok()
}

/// Outcome named by a result token, `None` for anything else.
pub fn result_outcome(token: &str) -> Option<GameOutcome> {
    match token {
        "1-0" => Some(GameOutcome::WhiteWins),
        "0-1" => Some(GameOutcome::BlackWins),
        "1/2-1/2" => Some(GameOutcome::Draw),
        "*" => Some(GameOutcome::Unfinished),
        _ => None,
    }
}
