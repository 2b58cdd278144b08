//! Geometric reachability rules.
//!
//! `can_reach` answers whether the piece in a roster slot could perform the
//! requested relocation: movement pattern plus path blocking for the sliding
//! classes. It is a pure predicate over the two rosters. Full chess
//! legality (pins, discovered checks, castling safety) is out of scope;
//! recorded games already encode that in the notation, so the filter only
//! has to separate the candidates notation leaves open.

use crate::board::piece_types::{file_of, rank_of, square_at, PieceClass, Side, Square};
use crate::board::roster::Roster;

/// Whether the piece in `slot` of `mover` could move to `destination`.
///
/// `capturing` switches pawns between their push and diagonal patterns; the
/// other classes move the same way either way.
pub fn can_reach(
    mover: &Roster,
    other: &Roster,
    slot: usize,
    destination: Square,
    capturing: bool,
    side: Side,
) -> bool {
    let piece = mover.slots[slot];
    let d_rank = rank_of(destination) as i8 - rank_of(piece.square) as i8;
    let d_file = file_of(destination) as i8 - file_of(piece.square) as i8;

    match piece.class {
        PieceClass::Pawn => pawn_can_reach(mover, other, piece.square, d_rank, d_file, capturing, side),
        PieceClass::Rook => {
            (d_rank == 0) != (d_file == 0) && path_is_clear(mover, other, piece.square, destination)
        }
        PieceClass::Knight => {
            let (a, b) = (d_rank.abs(), d_file.abs());
            (a == 2 && b == 1) || (a == 1 && b == 2)
        }
        PieceClass::Bishop => {
            d_rank.abs() == d_file.abs() && path_is_clear(mover, other, piece.square, destination)
        }
        PieceClass::Queen => {
            ((d_rank == 0) != (d_file == 0) || d_rank.abs() == d_file.abs())
                && path_is_clear(mover, other, piece.square, destination)
        }
        PieceClass::King | PieceClass::KingMoved => {
            d_rank.abs() <= 1 && d_file.abs() <= 1 && (d_rank != 0 || d_file != 0)
        }
        PieceClass::Captured => false,
    }
}

fn pawn_can_reach(
    mover: &Roster,
    other: &Roster,
    from: Square,
    d_rank: i8,
    d_file: i8,
    capturing: bool,
    side: Side,
) -> bool {
    let forward: i8 = match side {
        Side::White => 1,
        Side::Black => -1,
    };
    if d_rank == forward {
        return if capturing { d_file.abs() == 1 } else { d_file == 0 };
    }
    if d_rank == 2 * forward && d_file == 0 && !capturing {
        let home_rank = match side {
            Side::White => 1,
            Side::Black => 6,
        };
        if rank_of(from) != home_rank {
            return false;
        }
        let between = square_at((rank_of(from) as i8 + forward) as u8, file_of(from));
        return !mover.occupies(between) && !other.occupies(between);
    }
    false
}

/// Walks the strictly-between squares of a straight or diagonal line and
/// reports whether they are all empty in both rosters.
fn path_is_clear(mover: &Roster, other: &Roster, from: Square, destination: Square) -> bool {
    let rank_step = (rank_of(destination) as i8 - rank_of(from) as i8).signum();
    let file_step = (file_of(destination) as i8 - file_of(from) as i8).signum();
    let mut rank = rank_of(from) as i8 + rank_step;
    let mut file = file_of(from) as i8 + file_step;
    while (rank, file) != (rank_of(destination) as i8, file_of(destination) as i8) {
        let square = square_at(rank as u8, file as u8);
        if mover.occupies(square) || other.occupies(square) {
            return false;
        }
        rank += rank_step;
        file += file_step;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece_types::{
        KINGSIDE_KNIGHT, KING_SLOT, QUEENSIDE_BISHOP, QUEENSIDE_ROOK, QUEEN_SLOT,
    };
    use crate::notation::algebraic::square_from_text;

    fn square(text: &str) -> Square {
        square_from_text(text).unwrap()
    }

    fn fresh() -> (Roster, Roster) {
        (Roster::starting(Side::White), Roster::starting(Side::Black))
    }

    #[test]
    fn pawn_pushes_one_or_two_from_home() {
        let (white, black) = fresh();
        // e2 pawn is slot 4.
        assert!(can_reach(&white, &black, 4, square("e3"), false, Side::White));
        assert!(can_reach(&white, &black, 4, square("e4"), false, Side::White));
        assert!(!can_reach(&white, &black, 4, square("e5"), false, Side::White));
        assert!(!can_reach(&white, &black, 4, square("d3"), false, Side::White));
    }

    #[test]
    fn pawn_double_step_requires_the_home_rank_and_a_clear_path() {
        let (mut white, black) = fresh();
        white.slots[4].square = square("e3");
        assert!(!can_reach(&white, &black, 4, square("e5"), false, Side::White));

        let (mut white, black) = fresh();
        white.slots[KINGSIDE_KNIGHT].square = square("e3");
        assert!(!can_reach(&white, &black, 4, square("e4"), false, Side::White));
    }

    #[test]
    fn pawn_double_step_is_blocked_by_either_roster() {
        let (white, mut black) = fresh();
        black.slots[0].square = square("e3");
        assert!(!can_reach(&white, &black, 4, square("e4"), false, Side::White));
    }

    #[test]
    fn pawn_captures_only_diagonally() {
        let (white, black) = fresh();
        assert!(can_reach(&white, &black, 4, square("d3"), true, Side::White));
        assert!(can_reach(&white, &black, 4, square("f3"), true, Side::White));
        assert!(!can_reach(&white, &black, 4, square("e3"), true, Side::White));
        assert!(!can_reach(&white, &black, 4, square("g3"), true, Side::White));
    }

    #[test]
    fn black_pawns_move_toward_rank_one() {
        let (white, black) = fresh();
        assert!(can_reach(&black, &white, 4, square("e6"), false, Side::Black));
        assert!(can_reach(&black, &white, 4, square("e5"), false, Side::Black));
        assert!(!can_reach(&black, &white, 4, square("e7"), false, Side::Black));
        assert!(can_reach(&black, &white, 3, square("e6"), true, Side::Black));
    }

    #[test]
    fn rook_slides_along_clear_lines_only() {
        let (mut white, black) = fresh();
        assert!(!can_reach(
            &white,
            &black,
            QUEENSIDE_ROOK,
            square("a3"),
            false,
            Side::White
        ));
        white.slots[0].square = square("b3");
        assert!(can_reach(
            &white,
            &black,
            QUEENSIDE_ROOK,
            square("a3"),
            false,
            Side::White
        ));
        assert!(can_reach(
            &white,
            &black,
            QUEENSIDE_ROOK,
            square("a6"),
            false,
            Side::White
        ));
        assert!(!can_reach(
            &white,
            &black,
            QUEENSIDE_ROOK,
            square("a8"),
            false,
            Side::White
        ));
        assert!(!can_reach(
            &white,
            &black,
            QUEENSIDE_ROOK,
            square("b3"),
            false,
            Side::White
        ));
    }

    #[test]
    fn bishop_needs_a_clear_diagonal() {
        let (mut white, black) = fresh();
        assert!(!can_reach(
            &white,
            &black,
            QUEENSIDE_BISHOP,
            square("h6"),
            false,
            Side::White
        ));
        white.slots[3].square = square("d4");
        assert!(can_reach(
            &white,
            &black,
            QUEENSIDE_BISHOP,
            square("h6"),
            false,
            Side::White
        ));
        assert!(!can_reach(
            &white,
            &black,
            QUEENSIDE_BISHOP,
            square("c4"),
            false,
            Side::White
        ));
    }

    #[test]
    fn queen_combines_both_sliding_patterns() {
        let (mut white, black) = fresh();
        white.slots[QUEEN_SLOT].square = square("d4");
        assert!(can_reach(&white, &black, QUEEN_SLOT, square("d6"), false, Side::White));
        assert!(can_reach(&white, &black, QUEEN_SLOT, square("f6"), false, Side::White));
        assert!(can_reach(&white, &black, QUEEN_SLOT, square("a4"), false, Side::White));
        assert!(!can_reach(&white, &black, QUEEN_SLOT, square("e6"), false, Side::White));
        assert!(!can_reach(&white, &black, QUEEN_SLOT, square("d1"), false, Side::White));
    }

    #[test]
    fn knight_jumps_ignore_blockers() {
        let (white, black) = fresh();
        assert!(can_reach(
            &white,
            &black,
            KINGSIDE_KNIGHT,
            square("f3"),
            false,
            Side::White
        ));
        assert!(can_reach(
            &white,
            &black,
            KINGSIDE_KNIGHT,
            square("h3"),
            false,
            Side::White
        ));
        assert!(!can_reach(
            &white,
            &black,
            KINGSIDE_KNIGHT,
            square("g3"),
            false,
            Side::White
        ));
    }

    #[test]
    fn king_steps_one_square_any_direction() {
        let (mut white, black) = fresh();
        white.slots[KING_SLOT].square = square("e4");
        for target in ["d3", "d4", "d5", "e3", "e5", "f3", "f4", "f5"] {
            assert!(can_reach(
                &white,
                &black,
                KING_SLOT,
                square(target),
                false,
                Side::White
            ));
        }
        assert!(!can_reach(&white, &black, KING_SLOT, square("e4"), false, Side::White));
        assert!(!can_reach(&white, &black, KING_SLOT, square("e6"), false, Side::White));

        white.slots[KING_SLOT].class = PieceClass::KingMoved;
        assert!(can_reach(&white, &black, KING_SLOT, square("e5"), false, Side::White));
    }

    #[test]
    fn captured_slots_reach_nothing() {
        let (mut white, black) = fresh();
        white.slots[QUEEN_SLOT].class = PieceClass::Captured;
        assert!(!can_reach(&white, &black, QUEEN_SLOT, square("d2"), false, Side::White));
    }
}
