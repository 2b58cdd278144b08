//! PGN to LaTeX diagram book converter.
//!
//! Run with:
//! `cargo run --release -- games.pgn book.tex`
//!
//! Replays every game in the input and writes a LaTeX document with one
//! diagram page per half-move, ready to compile next to the `pics/` image
//! set. Half-moves that cannot be interpreted are reported on stderr and
//! rendered as the unchanged previous position.

use std::env;
use std::fs;
use std::process;

use pgn_replay::notation::movetext::movetext_start;
use pgn_replay::render::latex_book::LatexBookRenderer;
use pgn_replay::replay::context::GameContext;
use pgn_replay::replay::driver::{replay_game, ReplayOptions};
use pgn_replay::split::game_splitter::split_games;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        println!("usage: {} <input.pgn> <output.tex>", args[0]);
        return;
    }

    let bytes = match fs::read(&args[1]) {
        Ok(bytes) => bytes,
        Err(error) => {
            eprintln!("cannot read '{}': {error}", args[1]);
            process::exit(1);
        }
    };
    let text = String::from_utf8_lossy(&bytes);

    let records = split_games(&text);
    if records.is_empty() {
        eprintln!("no game records in '{}'", args[1]);
    }

    let mut renderer = LatexBookRenderer::new();
    for record in &records {
        let context = GameContext::from_pgn(record.text);
        renderer.begin_game(&context);
        let movetext = &record.text[movetext_start(record.text)..];
        match replay_game(movetext, ReplayOptions::default(), &mut renderer) {
            Ok(report) => {
                for diagnostic in &report.diagnostics {
                    eprintln!(
                        "game {}: half-move {} '{}' skipped: {}",
                        record.index, diagnostic.ply, diagnostic.token, diagnostic.error
                    );
                }
            }
            Err(error) => {
                eprintln!("game {}: replay stopped: {error}", record.index);
            }
        }
    }

    if let Err(error) = fs::write(&args[2], renderer.finish()) {
        eprintln!("cannot write '{}': {error}", args[2]);
        process::exit(1);
    }
}
