//! Whole-position bookkeeping: both rosters plus the derived occupancy
//! projection that renderers consume.

use crate::board::piece_types::{PieceClass, Side, Square, KING_SLOT};
use crate::board::roster::Roster;

/// Both sides' rosters. This is the authoritative position; the square
/// grid view is derived from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub white: Roster,
    pub black: Roster,
}

/// Derived occupancy view: what stands on each square after a half-move.
///
/// Rebuilt in full from the rosters each time, never patched
/// incrementally. When live slots of both sides claim one square (which a
/// mis-resolved move can produce), the black entry wins because it is
/// written second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    squares: [Option<(Side, PieceClass)>; 64],
}

impl Projection {
    /// Occupant of `square`, if any.
    #[inline]
    pub fn at(&self, square: Square) -> Option<(Side, PieceClass)> {
        self.squares[square as usize]
    }
}

impl BoardState {
    /// Fresh game position with all thirty-two pieces on their home squares.
    pub fn new_game() -> Self {
        BoardState {
            white: Roster::starting(Side::White),
            black: Roster::starting(Side::Black),
        }
    }

    #[inline]
    pub fn roster(&self, side: Side) -> &Roster {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }

    #[inline]
    pub fn roster_mut(&mut self, side: Side) -> &mut Roster {
        match side {
            Side::White => &mut self.white,
            Side::Black => &mut self.black,
        }
    }

    /// The mover's roster and the opponent's, in that order.
    #[inline]
    pub fn rosters(&self, mover: Side) -> (&Roster, &Roster) {
        match mover {
            Side::White => (&self.white, &self.black),
            Side::Black => (&self.black, &self.white),
        }
    }

    /// Moves the piece in `slot` to `square`. The slot keeps its class, so
    /// this covers every quiet relocation including the two legs of
    /// castling.
    pub fn relocate(&mut self, side: Side, slot: usize, square: Square) {
        self.roster_mut(side).slots[slot].square = square;
    }

    /// Marks `slot` as captured. The slot stays in place as a tombstone so
    /// later slots keep their indices.
    pub fn capture(&mut self, side: Side, slot: usize) {
        self.roster_mut(side).slots[slot].class = PieceClass::Captured;
    }

    /// Reclasses the pawn in `slot` to its promotion target.
    pub fn promote(&mut self, side: Side, slot: usize, target: PieceClass) {
        self.roster_mut(side).slots[slot].class = target;
    }

    /// Records that `side`'s king has moved, ending its castling right. The
    /// tag is idempotent.
    pub fn mark_king_moved(&mut self, side: Side) {
        self.roster_mut(side).slots[KING_SLOT].class = PieceClass::KingMoved;
    }

    /// Rebuilds the square grid from both rosters: clear everything, write
    /// the white slots, then the black slots.
    pub fn project(&self) -> Projection {
        let mut squares = [None; 64];
        for (side, roster) in [(Side::White, &self.white), (Side::Black, &self.black)] {
            for slot in roster.slots.iter() {
                if slot.class != PieceClass::Captured {
                    squares[slot.square as usize] = Some((side, slot.class));
                }
            }
        }
        Projection { squares }
    }
}
