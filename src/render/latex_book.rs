//! LaTeX diagram book output.
//!
//! Accumulates a complete LaTeX document in memory: one page per half-move
//! with the players header, the move heading, and the position as an 8x8
//! table of piece images. Image names follow the asset scheme of the
//! diagram picture set, `<piece color><piece letter><square color>`, so
//! `wpb` is a white pawn on a dark square and `xxw` an empty light square.
//! The document expects those images under `./pics/` next to the `.tex`
//! file when it is compiled.

use crate::board::piece_types::{square_at, PieceClass, Side, Square};
use crate::replay::context::GameContext;
use crate::replay::snapshot::{HalfMoveSnapshot, SnapshotConsumer};

const DOCUMENT_PREAMBLE: &str = r"\documentclass[12pt,a4paper,oneside,notitlepage]{book}
\usepackage{lmodern}
\usepackage[left=1cm,right=1cm,top=1cm,bottom=1cm]{geometry}
\usepackage[utf8]{inputenc}
\usepackage{graphicx}
\usepackage{nopageno}
\usepackage{array}

\graphicspath{{./pics/}}

\begin{document}

\newcolumntype{D}[1]{%
 >{\vbox to 1.335cm\bgroup\vfill\centering}%
 p{#1}%
 <{\egroup}}

";

const DOCUMENT_POSTAMBLE: &str = r"\end{document}";

const PAGE_BREAK: &str = "\\clearpage\n";

const BOARD_START: &str = r"\centering
\begin{tabular}{D{5mm}D{1.58cm}D{1.58cm}D{1.58cm}D{1.58cm}D{1.58cm}D{1.58cm}D{1.58cm}D{1.58cm}D{15mm}D{1mm}}
&\LARGE{a}&\LARGE{b}&\LARGE{c}&\LARGE{d}&\LARGE{e}&\LARGE{f}&\LARGE{g}&\LARGE{h}&& \\
";

const BOARD_FINISH: &str = r"&\LARGE{a}&\LARGE{b}&\LARGE{c}&\LARGE{d}&\LARGE{e}&\LARGE{f}&\LARGE{g}&\LARGE{h}&& \\
\end{tabular}
";

/// Builds the whole diagram book for one or more games. Feed it to the
/// driver as the snapshot consumer, calling `begin_game` before each game,
/// and take the finished document with `finish`.
#[derive(Debug)]
pub struct LatexBookRenderer {
    out: String,
    context: GameContext,
}

impl LatexBookRenderer {
    pub fn new() -> Self {
        LatexBookRenderer {
            out: DOCUMENT_PREAMBLE.to_string(),
            context: GameContext::default(),
        }
    }

    /// Starts a new game section: remembers the players for the page
    /// headers and opens a fresh page.
    pub fn begin_game(&mut self, context: &GameContext) {
        self.context = context.clone();
        self.out.push_str(PAGE_BREAK);
    }

    /// Closes the document and hands it over.
    pub fn finish(mut self) -> String {
        self.out.push_str(DOCUMENT_POSTAMBLE);
        self.out
    }
}

impl Default for LatexBookRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotConsumer for LatexBookRenderer {
    fn half_move(&mut self, snapshot: &HalfMoveSnapshot) {
        render_page(&mut self.out, &self.context, snapshot);
    }
}

fn render_page(out: &mut String, context: &GameContext, snapshot: &HalfMoveSnapshot) {
    out.push_str(PAGE_BREAK);
    out.push_str(&format!(
        "\\begin{{Large}} {}~---~{} \\end{{Large}}\n\\linebreak~\\linebreak\\begin{{Large}} {} \\end{{Large}}\n",
        context.white_name,
        context.black_name,
        move_heading(snapshot)
    ));
    out.push_str(BOARD_START);
    for rank in (0..8u8).rev() {
        out.push_str(&format!("\t \\LARGE{{{}}} ", rank + 1));
        for file in 0..8u8 {
            let name = cell_image(snapshot, square_at(rank, file), rank, file);
            out.push_str(&format!(
                "& \\includegraphics[width=2cm,height=2cm]{{{name}}} "
            ));
        }
        out.push_str(&format!(" & \\LARGE{{{}}} & \\\\\n", rank + 1));
    }
    out.push_str(BOARD_FINISH);
}

/// `3. Nf3` for white half-moves, `3... Nc6` for black ones, with the raw
/// token in a verbatim group so annotation characters survive LaTeX.
fn move_heading(snapshot: &HalfMoveSnapshot) -> String {
    match snapshot.side {
        Side::White => format!("{}. \\verb|{}|", snapshot.number, snapshot.label),
        Side::Black => format!("{}... \\verb|{}|", snapshot.number, snapshot.label),
    }
}

fn cell_image(snapshot: &HalfMoveSnapshot, square: Square, rank: u8, file: u8) -> String {
    let shade = if ((rank ^ file) & 1) == 1 { 'w' } else { 'b' };
    let occupant = match snapshot.projection.at(square) {
        Some((_, PieceClass::Captured)) | None => None,
        Some(entry) => Some(entry),
    };
    match occupant {
        Some((side, class)) => {
            let side_letter = match side {
                Side::White => 'w',
                Side::Black => 'b',
            };
            let piece_letter = match class {
                PieceClass::Pawn => 'p',
                PieceClass::Rook => 'r',
                PieceClass::Knight => 'n',
                PieceClass::Bishop => 'b',
                PieceClass::Queen => 'q',
                PieceClass::King | PieceClass::KingMoved => 'k',
                PieceClass::Captured => 'x',
            };
            format!("{side_letter}{piece_letter}{shade}")
        }
        None => format!("xx{shade}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::driver::{replay_game, ReplayOptions};

    fn book_for(movetext: &str, white: &str, black: &str) -> String {
        let mut renderer = LatexBookRenderer::new();
        renderer.begin_game(&GameContext {
            white_name: white.to_string(),
            black_name: black.to_string(),
        });
        replay_game(movetext, ReplayOptions::default(), &mut renderer).unwrap();
        renderer.finish()
    }

    #[test]
    fn document_is_framed_by_preamble_and_postamble() {
        let book = book_for("1. e4 *", "Morphy", "Duke of Brunswick");
        assert!(book.starts_with("\\documentclass[12pt,a4paper,oneside,notitlepage]{book}"));
        assert!(book.ends_with("\\end{document}"));
        assert!(book.contains("\\graphicspath{{./pics/}}"));
        assert!(book.contains("\\newcolumntype{D}[1]{%"));
    }

    #[test]
    fn page_shows_players_and_the_move_heading() {
        let book = book_for("1. e4 e5 *", "Morphy", "Duke of Brunswick");
        assert!(book.contains("\\begin{Large} Morphy~---~Duke of Brunswick \\end{Large}"));
        assert!(book.contains("1. \\verb|e4|"));
        assert!(book.contains("1... \\verb|e5|"));
        // One page break for the game start plus one per half-move.
        assert_eq!(book.matches(PAGE_BREAK).count(), 3);
    }

    #[test]
    fn cells_name_the_diagram_images() {
        let book = book_for("1. e4 *", "?", "?");
        // Pawn now on e4, a light square; empty squares come in both shades.
        assert!(book.contains("\\includegraphics[width=2cm,height=2cm]{wpw}"));
        assert!(book.contains("{xxb}"));
        assert!(book.contains("{wrb}"));
        assert!(book.contains("{bkw}"));
        assert!(book.contains("{bqb}"));
    }

    #[test]
    fn every_rank_row_appears_with_its_labels() {
        let book = book_for("1. d4 *", "?", "?");
        for rank in 1..=8 {
            assert!(book.contains(&format!("\t \\LARGE{{{rank}}} ")));
        }
        assert_eq!(book.matches(BOARD_START).count(), 1);
        assert_eq!(book.matches(BOARD_FINISH).count(), 1);
    }
}
