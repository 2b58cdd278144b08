//! Origin slot disambiguation.
//!
//! SAN names the destination and usually not the origin, so the resolver
//! searches the mover's roster for the slot performing the move. The
//! legality validator filters candidates and the token's file/rank/square
//! hint narrows them. Slots are scanned in ascending index order, which
//! means lowest-file pawn first and queenside piece before its kingside
//! twin; under the default policy the first qualifying slot wins even when
//! the notation was genuinely ambiguous.

use crate::board::piece_types::{file_of, rank_of, Side, Square, KING_SLOT, ROSTER_SIZE};
use crate::board::roster::Roster;
use crate::notation::move_classifier::{MoveDescriptor, OriginHint};
use crate::replay_errors::ReplayError;
use crate::resolution::legality::can_reach;

/// How to treat notation that more than one slot could satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisambiguationPolicy {
    /// Take the first qualifying slot in roster order without checking
    /// whether the notation admitted others. Reproduces the historical
    /// tie-break.
    #[default]
    FirstMatch,
    /// Scan the whole roster and fail with `AmbiguousOrUnresolvedMove`
    /// when more than one slot qualifies.
    RequireUnique,
}

/// Finds the roster slot that performs `descriptor`.
///
/// Kings are addressed positionally: slot 15 is validated once and there is
/// no wider scan, because a side never has a second king. Every other class
/// scans slots `0..16` in order.
pub fn resolve_origin(
    mover: &Roster,
    other: &Roster,
    side: Side,
    descriptor: &MoveDescriptor,
    policy: DisambiguationPolicy,
    token: &str,
) -> Result<usize, ReplayError> {
    let destination = match descriptor.destination {
        Some(square) => square,
        None => return Err(ReplayError::AmbiguousOrUnresolvedMove(token.to_string())),
    };

    if descriptor.piece.is_king() {
        if slot_qualifies(mover, other, side, KING_SLOT, descriptor, destination) {
            return Ok(KING_SLOT);
        }
        return Err(ReplayError::AmbiguousOrUnresolvedMove(token.to_string()));
    }

    let mut found = None;
    for slot in 0..ROSTER_SIZE {
        if !slot_qualifies(mover, other, side, slot, descriptor, destination) {
            continue;
        }
        match policy {
            DisambiguationPolicy::FirstMatch => return Ok(slot),
            DisambiguationPolicy::RequireUnique => {
                if found.is_some() {
                    return Err(ReplayError::AmbiguousOrUnresolvedMove(token.to_string()));
                }
                found = Some(slot);
            }
        }
    }
    found.ok_or_else(|| ReplayError::AmbiguousOrUnresolvedMove(token.to_string()))
}

fn slot_qualifies(
    mover: &Roster,
    other: &Roster,
    side: Side,
    slot: usize,
    descriptor: &MoveDescriptor,
    destination: Square,
) -> bool {
    let piece = mover.slots[slot];
    let class_matches = if descriptor.piece.is_king() {
        piece.class.is_king()
    } else {
        piece.class == descriptor.piece
    };
    if !class_matches {
        return false;
    }
    let hint_allows = match descriptor.hint {
        OriginHint::None => true,
        OriginHint::File(file) => file_of(piece.square) == file,
        OriginHint::Rank(rank) => rank_of(piece.square) == rank,
        OriginHint::Square(square) => piece.square == square,
    };
    hint_allows && can_reach(mover, other, slot, destination, descriptor.capture, side)
}
