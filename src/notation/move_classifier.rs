//! Movetext token classification.
//!
//! Turns one raw SAN token into a structured `MoveDescriptor` without
//! consulting the board: which class moves, whether it captures, what hint
//! the notation gives about the origin, the destination square, the
//! castling request, the promotion target and the check suffix. Annotation
//! noise (`!`, `?`, `$n`, inline `(` or `{` openers) is stripped, not
//! interpreted; comment bodies are expected to be gone before tokens reach
//! this point, so that stripping only matters for glued fragments.

use crate::board::piece_types::{PieceClass, Square};
use crate::notation::algebraic::{file_index, rank_index, square_from_text};
use crate::replay_errors::ReplayError;

/// Which castling a token requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

/// Check suffix carried by a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveTag {
    Continuation,
    Check,
    Checkmate,
}

/// Origin hint embedded in a token, like the `b` of `Nbd7` or the `g5` of
/// `Ng5xf7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginHint {
    None,
    File(u8),
    Rank(u8),
    Square(Square),
}

/// Structured form of one SAN token, fed to the resolver and applicator.
///
/// `destination` is `None` exactly when `castling` is set; castling tokens
/// name no square and are applied by fixed offsets instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescriptor {
    pub piece: PieceClass,
    pub promotion: Option<PieceClass>,
    pub tag: MoveTag,
    pub castling: Option<CastlingSide>,
    pub capture: bool,
    pub hint: OriginHint,
    pub destination: Option<Square>,
}

/// Classifies one movetext token.
///
/// The board is never consulted here; a descriptor can still fail later in
/// resolution. Errors quote the whole token as it appeared in the source.
pub fn classify(token: &str) -> Result<MoveDescriptor, ReplayError> {
    if !token.is_ascii() {
        return Err(ReplayError::UnknownPieceToken(token.to_string()));
    }
    let first = match token.chars().next() {
        Some(c) => c,
        None => return Err(ReplayError::UnknownPieceToken(token.to_string())),
    };
    let piece = match first {
        'a'..='h' => PieceClass::Pawn,
        'R' => PieceClass::Rook,
        'N' => PieceClass::Knight,
        'B' => PieceClass::Bishop,
        'Q' => PieceClass::Queen,
        'K' | 'O' | '0' => PieceClass::King,
        _ => return Err(ReplayError::UnknownPieceToken(token.to_string())),
    };

    let mut body = token;
    let mut tag = MoveTag::Continuation;
    if let Some(at) = body.find('+') {
        tag = MoveTag::Check;
        body = &body[..at];
    }
    if let Some(at) = body.find('#') {
        tag = MoveTag::Checkmate;
        body = &body[..at];
    }
    let mut promotion = None;
    if let Some(at) = body.find('=') {
        promotion = Some(match body[at + 1..].chars().next() {
            Some('Q') => PieceClass::Queen,
            Some('R') => PieceClass::Rook,
            Some('B') => PieceClass::Bishop,
            Some('N') => PieceClass::Knight,
            _ => return Err(ReplayError::UnknownPromotionTarget(token.to_string())),
        });
        body = &body[..at];
    }
    for glyph in ['!', '?', '$', '(', '{'] {
        if let Some(at) = body.find(glyph) {
            body = &body[..at];
        }
    }
    if body.is_empty() {
        return Err(ReplayError::UnknownPieceToken(token.to_string()));
    }

    if matches!(first, 'O' | '0') {
        // Only the full three-piece spelling is queenside; every shorter
        // or mangled form with this leading character reads as kingside.
        let castling = match body {
            "O-O-O" | "0-0-0" => CastlingSide::Queenside,
            _ => CastlingSide::Kingside,
        };
        return Ok(MoveDescriptor {
            piece,
            promotion: None,
            tag,
            castling: Some(castling),
            capture: false,
            hint: OriginHint::None,
            destination: None,
        });
    }

    // Pawn tokens carry no leading class letter; their first character is
    // already origin information.
    let fields = if piece == PieceClass::Pawn {
        body
    } else {
        &body[1..]
    };
    let (capture, hint_text, destination_text) = match fields.find('x') {
        Some(at) => (true, &fields[..at], &fields[at + 1..]),
        None => {
            if fields.len() < 2 {
                return Err(ReplayError::InvalidSquareToken(token.to_string()));
            }
            let split = fields.len() - 2;
            (false, &fields[..split], &fields[split..])
        }
    };
    let destination = match square_from_text(destination_text) {
        Some(square) => square,
        None => return Err(ReplayError::InvalidSquareToken(token.to_string())),
    };
    let hint = parse_hint(hint_text).ok_or_else(|| {
        ReplayError::InvalidSquareToken(token.to_string())
    })?;

    Ok(MoveDescriptor {
        piece,
        promotion,
        tag,
        castling: None,
        capture,
        hint,
        destination: Some(destination),
    })
}

fn parse_hint(text: &str) -> Option<OriginHint> {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (None, _, _) => Some(OriginHint::None),
        (Some(only), None, _) => {
            if let Some(file) = file_index(only) {
                Some(OriginHint::File(file))
            } else {
                rank_index(only).map(OriginHint::Rank)
            }
        }
        (Some(_), Some(_), None) => square_from_text(text).map(OriginHint::Square),
        _ => None,
    }
}
