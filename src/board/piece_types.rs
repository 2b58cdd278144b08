//! Core board vocabulary: sides, piece classes, squares and the fixed
//! roster slot layout that the resolver addresses pieces by.

/// Board square index (`0..=63`), encoded `rank * 8 + file` with `a1 == 0`.
pub type Square = u8;

/// Number of slots in one side's roster.
pub const ROSTER_SIZE: usize = 16;

/// Slot indices fixed at game start. Pawns occupy slots `0..=7` in file
/// order a through h; the back rank pieces follow in queenside/kingside
/// pairs. Slots are never renumbered during a game, so these indices stay
/// valid for the whole replay.
pub const QUEENSIDE_ROOK: usize = 8;
pub const KINGSIDE_ROOK: usize = 9;
pub const QUEENSIDE_KNIGHT: usize = 10;
pub const KINGSIDE_KNIGHT: usize = 11;
pub const QUEENSIDE_BISHOP: usize = 12;
pub const KINGSIDE_BISHOP: usize = 13;
pub const QUEEN_SLOT: usize = 14;
pub const KING_SLOT: usize = 15;

#[inline]
pub const fn square_at(rank: u8, file: u8) -> Square {
    rank * 8 + file
}

#[inline]
pub const fn rank_of(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn file_of(square: Square) -> u8 {
    square % 8
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// Class tag stored in a roster slot.
///
/// `KingMoved` is a king that has lost its castling right; it moves exactly
/// like `King`. `Captured` is the tombstone left behind when a piece is
/// taken, so slot indices never shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceClass {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    KingMoved,
    Captured,
}

impl PieceClass {
    /// True for both king tags, moved or not.
    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceClass::King | PieceClass::KingMoved)
    }
}
