//! Board mutation for resolved moves.
//!
//! By the time a move reaches the applicator its origin slot is known and
//! reachability has been checked, so what remains is bookkeeping: the
//! relocation itself, capture tombstoning (including the en passant victim
//! square), promotion reclassing, the king-moved tag, and the castling
//! compound with its eligibility gate. Each entry point either completes
//! fully or returns with the board untouched, so a failed half-move never
//! leaves a partial edit behind.

use crate::board::board_state::BoardState;
use crate::board::piece_types::{PieceClass, Side, Square, KINGSIDE_ROOK, KING_SLOT, QUEENSIDE_ROOK};
use crate::notation::move_classifier::{CastlingSide, MoveDescriptor};
use crate::replay_errors::ReplayError;

/// Applies a resolved non-castling move: capture first, then relocation,
/// then the king-moved tag and any promotion.
pub fn apply_move(
    board: &mut BoardState,
    side: Side,
    slot: usize,
    descriptor: &MoveDescriptor,
    token: &str,
) -> Result<(), ReplayError> {
    let destination = match descriptor.destination {
        Some(square) => square,
        None => return Err(ReplayError::AmbiguousOrUnresolvedMove(token.to_string())),
    };
    if descriptor.capture {
        capture_victim(board, side, destination, descriptor.piece, token)?;
    }
    board.relocate(side, slot, destination);
    if board.roster(side).slots[slot].class.is_king() {
        board.mark_king_moved(side);
    }
    if let Some(target) = descriptor.promotion {
        board.promote(side, slot, target);
    }
    Ok(())
}

/// Tombstones the captured piece. A plain capture takes whatever live slot
/// stands on the destination; when the destination is empty only a pawn
/// may continue, taking the opposing pawn one rank behind it en passant.
fn capture_victim(
    board: &mut BoardState,
    side: Side,
    destination: Square,
    moving_class: PieceClass,
    token: &str,
) -> Result<(), ReplayError> {
    let enemy = side.opposite();
    if let Some(victim) = board.roster(enemy).slot_at(destination) {
        board.capture(enemy, victim);
        return Ok(());
    }
    if moving_class == PieceClass::Pawn {
        let behind = match side {
            Side::White => destination.checked_sub(8),
            Side::Black => destination.checked_add(8).filter(|square| *square < 64),
        };
        if let Some(square) = behind {
            if let Some(victim) = board.roster(enemy).slot_at(square) {
                if board.roster(enemy).slots[victim].class == PieceClass::Pawn {
                    board.capture(enemy, victim);
                    return Ok(());
                }
            }
        }
    }
    Err(ReplayError::AmbiguousOrUnresolvedMove(token.to_string()))
}

/// Applies a castling request by fixed offsets: kingside shifts the king
/// two files toward h and the rook two toward a, queenside shifts the king
/// two files toward a and the rook three toward h.
///
/// Eligibility is tracked through classes alone: the king must still be
/// `King` (never moved) and the named rook's slot must still be `Rook`.
pub fn apply_castling(
    board: &mut BoardState,
    side: Side,
    castling: CastlingSide,
    token: &str,
) -> Result<(), ReplayError> {
    let roster = board.roster(side);
    if roster.slots[KING_SLOT].class != PieceClass::King {
        return Err(ReplayError::CastlingUnavailable(token.to_string()));
    }
    let (rook_slot, king_step, rook_step) = match castling {
        CastlingSide::Kingside => (KINGSIDE_ROOK, 2i8, -2i8),
        CastlingSide::Queenside => (QUEENSIDE_ROOK, -2i8, 3i8),
    };
    if roster.slots[rook_slot].class != PieceClass::Rook {
        return Err(ReplayError::CastlingUnavailable(token.to_string()));
    }
    let king_target = shifted(roster.slots[KING_SLOT].square, king_step);
    let rook_target = shifted(roster.slots[rook_slot].square, rook_step);
    let (king_target, rook_target) = match (king_target, rook_target) {
        (Some(king_target), Some(rook_target)) => (king_target, rook_target),
        _ => return Err(ReplayError::CastlingUnavailable(token.to_string())),
    };
    board.relocate(side, KING_SLOT, king_target);
    board.relocate(side, rook_slot, rook_target);
    board.mark_king_moved(side);
    Ok(())
}

fn shifted(square: Square, step: i8) -> Option<Square> {
    let target = square as i16 + step as i16;
    if (0..64).contains(&target) {
        Some(target as Square)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece_types::{square_at, KINGSIDE_BISHOP, KINGSIDE_KNIGHT, QUEEN_SLOT};
    use crate::notation::algebraic::square_from_text;
    use crate::notation::move_classifier::classify;

    fn square(text: &str) -> Square {
        square_from_text(text).unwrap()
    }

    fn apply(board: &mut BoardState, side: Side, slot: usize, token: &str) -> Result<(), ReplayError> {
        let descriptor = classify(token).unwrap();
        apply_move(board, side, slot, &descriptor, token)
    }

    #[test]
    fn quiet_relocation_moves_one_slot() {
        let mut board = BoardState::new_game();
        apply(&mut board, Side::White, 4, "e4").unwrap();
        assert_eq!(board.white.slots[4].square, square("e4"));
        assert_eq!(board.white.slots[4].class, PieceClass::Pawn);
    }

    #[test]
    fn capture_tombstones_the_victim() {
        let mut board = BoardState::new_game();
        board.white.slots[QUEEN_SLOT].square = square("d3");
        board.black.slots[7].square = square("h3");
        apply(&mut board, Side::White, QUEEN_SLOT, "Qxh3").unwrap();
        assert_eq!(board.white.slots[QUEEN_SLOT].square, square("h3"));
        assert_eq!(board.black.slots[7].class, PieceClass::Captured);
    }

    #[test]
    fn capture_without_a_victim_fails_and_leaves_the_board_alone() {
        let mut board = BoardState::new_game();
        let before = board.clone();
        let result = apply(&mut board, Side::White, KINGSIDE_KNIGHT, "Nxe4");
        assert!(matches!(
            result,
            Err(ReplayError::AmbiguousOrUnresolvedMove(_))
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn en_passant_takes_the_pawn_behind_the_destination() {
        let mut board = BoardState::new_game();
        board.white.slots[4].square = square("e5");
        board.black.slots[3].square = square("d5");
        apply(&mut board, Side::White, 4, "exd6").unwrap();
        assert_eq!(board.white.slots[4].square, square("d6"));
        assert_eq!(board.black.slots[3].class, PieceClass::Captured);
    }

    #[test]
    fn en_passant_for_black_looks_one_rank_up() {
        let mut board = BoardState::new_game();
        board.black.slots[3].square = square("d4");
        board.white.slots[4].square = square("e4");
        apply(&mut board, Side::Black, 3, "dxe3").unwrap();
        assert_eq!(board.black.slots[3].square, square("e3"));
        assert_eq!(board.white.slots[4].class, PieceClass::Captured);
    }

    #[test]
    fn en_passant_requires_a_pawn_victim() {
        let mut board = BoardState::new_game();
        board.white.slots[4].square = square("e5");
        board.black.slots[KINGSIDE_KNIGHT].square = square("d5");
        let result = apply(&mut board, Side::White, 4, "exd6");
        assert!(matches!(
            result,
            Err(ReplayError::AmbiguousOrUnresolvedMove(_))
        ));
        assert_eq!(board.black.slots[KINGSIDE_KNIGHT].class, PieceClass::Knight);
    }

    #[test]
    fn promotion_reclasses_the_pawn_slot() {
        let mut board = BoardState::new_game();
        board.white.slots[0].square = square("a7");
        board.black.slots[QUEENSIDE_ROOK].class = PieceClass::Captured;
        apply(&mut board, Side::White, 0, "a8=Q").unwrap();
        assert_eq!(board.white.slots[0].class, PieceClass::Queen);
        assert_eq!(board.white.slots[0].square, square("a8"));
    }

    #[test]
    fn king_moves_always_drop_the_castling_tag() {
        let mut board = BoardState::new_game();
        board.white.slots[4].class = PieceClass::Captured;
        apply(&mut board, Side::White, KING_SLOT, "Ke2").unwrap();
        assert_eq!(board.white.slots[KING_SLOT].class, PieceClass::KingMoved);
        assert_eq!(board.white.slots[KING_SLOT].square, square("e2"));
    }

    #[test]
    fn kingside_castling_moves_both_pieces() {
        let mut board = BoardState::new_game();
        board.white.slots[KINGSIDE_KNIGHT].class = PieceClass::Captured;
        board.white.slots[KINGSIDE_BISHOP].class = PieceClass::Captured;
        apply_castling(&mut board, Side::White, CastlingSide::Kingside, "O-O").unwrap();
        assert_eq!(board.white.slots[KING_SLOT].square, square("g1"));
        assert_eq!(board.white.slots[KING_SLOT].class, PieceClass::KingMoved);
        assert_eq!(board.white.slots[KINGSIDE_ROOK].square, square("f1"));
        assert_eq!(board.white.slots[KINGSIDE_ROOK].class, PieceClass::Rook);
    }

    #[test]
    fn queenside_castling_for_black() {
        let mut board = BoardState::new_game();
        apply_castling(&mut board, Side::Black, CastlingSide::Queenside, "O-O-O").unwrap();
        assert_eq!(board.black.slots[KING_SLOT].square, square("c8"));
        assert_eq!(board.black.slots[QUEENSIDE_ROOK].square, square("d8"));
    }

    #[test]
    fn castling_needs_an_unmoved_king() {
        let mut board = BoardState::new_game();
        board.mark_king_moved(Side::White);
        let result = apply_castling(&mut board, Side::White, CastlingSide::Kingside, "O-O");
        assert!(matches!(result, Err(ReplayError::CastlingUnavailable(_))));
        assert_eq!(board.white.slots[KING_SLOT].square, square_at(0, 4));
    }

    #[test]
    fn castling_needs_the_named_rook_alive() {
        let mut board = BoardState::new_game();
        board.capture(Side::White, KINGSIDE_ROOK);
        let result = apply_castling(&mut board, Side::White, CastlingSide::Kingside, "O-O");
        assert!(matches!(result, Err(ReplayError::CastlingUnavailable(_))));
        assert_eq!(board.white.slots[KING_SLOT].class, PieceClass::King);
        // The other wing is still available.
        apply_castling(&mut board, Side::White, CastlingSide::Queenside, "O-O-O").unwrap();
        assert_eq!(board.white.slots[KING_SLOT].square, square("c1"));
        assert_eq!(board.white.slots[QUEENSIDE_ROOK].square, square("d1"));
    }
}
