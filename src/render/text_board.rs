//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable view of an occupancy projection for debugging,
//! tests, and diagnostics in text environments.

use crate::board::board_state::Projection;
use crate::board::piece_types::{square_at, PieceClass, Side};

/// Render a projection to a Unicode string for terminal output.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
pub fn render_projection(projection: &Projection) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            match projection.at(square_at(rank, file)) {
                Some((side, class)) => out.push(piece_to_unicode(side, class)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(side: Side, class: PieceClass) -> char {
    match (side, class) {
        (Side::White, PieceClass::Pawn) => '♙',
        (Side::White, PieceClass::Knight) => '♘',
        (Side::White, PieceClass::Bishop) => '♗',
        (Side::White, PieceClass::Rook) => '♖',
        (Side::White, PieceClass::Queen) => '♕',
        (Side::White, PieceClass::King | PieceClass::KingMoved) => '♔',
        (Side::Black, PieceClass::Pawn) => '♟',
        (Side::Black, PieceClass::Knight) => '♞',
        (Side::Black, PieceClass::Bishop) => '♝',
        (Side::Black, PieceClass::Rook) => '♜',
        (Side::Black, PieceClass::Queen) => '♛',
        (Side::Black, PieceClass::King | PieceClass::KingMoved) => '♚',
        (_, PieceClass::Captured) => '·',
    }
}

#[cfg(test)]
mod tests {
    use super::render_projection;
    use crate::board::board_state::BoardState;

    #[test]
    fn start_position_renders_all_ranks() {
        let rendered = render_projection(&BoardState::new_game().project());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[2], "7 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟ 7");
        assert_eq!(lines[5], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[9], "  a b c d e f g h");
    }

    #[test]
    fn captures_leave_empty_squares() {
        let mut board = BoardState::new_game();
        board.capture(crate::board::piece_types::Side::Black, 0);
        let rendered = render_projection(&board.project());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "7 · ♟ ♟ ♟ ♟ ♟ ♟ ♟ 7");
    }
}
