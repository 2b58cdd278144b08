//! Standalone PGN collection splitter.
//!
//! Run with:
//! `cargo run --release --bin split_games -- games.pgn out/`
//! `cargo run --release --bin split_games -- games.pgn out/ 40`
//! `cargo run --release --bin split_games -- games.pgn out/ 10 40`
//!
//! Writes each game of the collection to its own file in the output
//! directory, named `game-<n>.pgn` with a `-ww`, `-bw` or `-00` suffix for
//! decided games. The optional range selects games by their zero-based
//! position in the file; both bounds are inclusive, and file names keep
//! the in-file numbering either way.

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use pgn_replay::split::game_splitter::split_games;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 5 {
        println!(
            "usage:    {0} <in-pgn> <out-dir> [start_num end_num]\n\
             usage: or {0} <in-pgn> <out-dir> [end_num]\n\
             usage: or {0} <in-pgn> <out-dir>\n\
             start_num and end_num are 0-based and inclusive",
            args[0]
        );
        return;
    }

    let (start, end) = match args.len() {
        4 => (0, parse_number(&args[3])),
        5 => (parse_number(&args[3]), parse_number(&args[4])),
        _ => (0, usize::MAX),
    };

    let bytes = match fs::read(&args[1]) {
        Ok(bytes) => bytes,
        Err(error) => {
            eprintln!("cannot read '{}': {error}", args[1]);
            process::exit(1);
        }
    };
    let text = String::from_utf8_lossy(&bytes);
    let out_dir = args[2].trim_end_matches('/');

    for record in split_games(&text) {
        if record.index < start || record.index > end {
            continue;
        }
        let path = Path::new(out_dir).join(record.file_name());
        if let Err(error) = fs::write(&path, format!("{}\n", record.text)) {
            eprintln!("cannot write '{}': {error}", path.display());
            process::exit(2);
        }
    }
}

fn parse_number(text: &str) -> usize {
    text.parse().unwrap_or(0)
}
