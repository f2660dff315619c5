//! Perft driver: counts leaf nodes per depth from the start position or a
//! FEN given on the command line.
//!
//! Usage: `perft [fen] [max_depth]`

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use sable::board::Board;

const DEFAULT_MAX_DEPTH: usize = 5;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let (mut board, max_depth) = match args.as_slice() {
        [] => (Board::new(), DEFAULT_MAX_DEPTH),
        [fen] => match Board::try_from_fen(fen) {
            Ok(board) => (board, DEFAULT_MAX_DEPTH),
            Err(e) => {
                eprintln!("Bad FEN: {e}");
                return ExitCode::FAILURE;
            }
        },
        [fen, depth, ..] => {
            let board = match Board::try_from_fen(fen) {
                Ok(board) => board,
                Err(e) => {
                    eprintln!("Bad FEN: {e}");
                    return ExitCode::FAILURE;
                }
            };
            let depth = match depth.parse() {
                Ok(d) => d,
                Err(_) => {
                    eprintln!("Bad depth: {depth}");
                    return ExitCode::FAILURE;
                }
            };
            (board, depth)
        }
    };

    for depth in 1..=max_depth {
        let start = Instant::now();
        let nodes = board.perft(depth);
        let elapsed = start.elapsed();
        let nps = if elapsed.as_secs_f64() > 0.0 {
            (nodes as f64 / elapsed.as_secs_f64()) as u64
        } else {
            0
        };
        println!(
            "d={depth} nodes={nodes} time={:.1} ms ({nps} nps)",
            elapsed.as_secs_f64() * 1000.0
        );
    }

    ExitCode::SUCCESS
}
