//! Fixed sixteen-slot piece rosters.
//!
//! Each side's pieces live in an array indexed by the slot constants of
//! `piece_types`: pawns in file order first, then the back rank in
//! queenside/kingside pairs, queen, king. A captured piece keeps its slot
//! with the `Captured` tombstone, so a slot index assigned at game start
//! addresses the same piece for the whole game. The disambiguation resolver
//! depends on this ordering when it scans for candidates.

use crate::board::piece_types::{
    square_at, PieceClass, Side, Square, KINGSIDE_BISHOP, KINGSIDE_KNIGHT, KINGSIDE_ROOK,
    KING_SLOT, QUEENSIDE_BISHOP, QUEENSIDE_KNIGHT, QUEENSIDE_ROOK, QUEEN_SLOT, ROSTER_SIZE,
};

/// One roster entry: a class tag plus the square the piece stands on.
///
/// The square of a `Captured` slot is stale and must not be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceSlot {
    pub class: PieceClass,
    pub square: Square,
}

/// A side's sixteen piece slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub slots: [PieceSlot; ROSTER_SIZE],
}

impl Roster {
    /// Builds the starting roster for `side`: pawns on the second or seventh
    /// rank, the back rank behind them.
    pub fn starting(side: Side) -> Self {
        let (back_rank, pawn_rank) = match side {
            Side::White => (0, 1),
            Side::Black => (7, 6),
        };
        let mut slots = [PieceSlot {
            class: PieceClass::Captured,
            square: 0,
        }; ROSTER_SIZE];
        for file in 0..8 {
            slots[file as usize] = PieceSlot {
                class: PieceClass::Pawn,
                square: square_at(pawn_rank, file),
            };
        }
        let back = [
            (QUEENSIDE_ROOK, PieceClass::Rook, 0),
            (KINGSIDE_ROOK, PieceClass::Rook, 7),
            (QUEENSIDE_KNIGHT, PieceClass::Knight, 1),
            (KINGSIDE_KNIGHT, PieceClass::Knight, 6),
            (QUEENSIDE_BISHOP, PieceClass::Bishop, 2),
            (KINGSIDE_BISHOP, PieceClass::Bishop, 5),
            (QUEEN_SLOT, PieceClass::Queen, 3),
            (KING_SLOT, PieceClass::King, 4),
        ];
        for (slot, class, file) in back {
            slots[slot] = PieceSlot {
                class,
                square: square_at(back_rank, file),
            };
        }
        Roster { slots }
    }

    /// Index of the first live slot standing on `square`, scanning in slot
    /// order. Captured slots are skipped even when their stale square
    /// matches.
    pub fn slot_at(&self, square: Square) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.class != PieceClass::Captured && slot.square == square)
    }

    /// Whether any live piece of this roster stands on `square`.
    #[inline]
    pub fn occupies(&self, square: Square) -> bool {
        self.slot_at(square).is_some()
    }
}
