use std::io::{self, BufRead, Write};
use std::time::Instant;

use sable::board::{find_best_move_with_stats, Board};
use sable::uci::{format_uci_move, parse_position_command};

const DEFAULT_DEPTH: u32 = 5;

fn main() {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut board = Board::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0] {
            "uci" => {
                println!("id name Sable");
                println!("id author the Sable authors");
                println!("uciok");
            }
            "isready" => {
                println!("readyok");
            }
            "ucinewgame" => {
                board = Board::new();
            }
            "position" => {
                parse_position_command(&mut board, &parts);
            }
            "go" => {
                // Only fixed-depth search is supported; "movetime" is
                // accepted for GUI compatibility and searches the default
                // depth.
                let mut depth = DEFAULT_DEPTH;
                let mut i = 1;
                while i < parts.len() {
                    match parts[i] {
                        "depth" => {
                            if let Some(value) = parts.get(i + 1) {
                                depth = value.parse().unwrap_or(DEFAULT_DEPTH);
                            }
                            i += 2;
                        }
                        "movetime" => {
                            i += 2;
                        }
                        _ => i += 1,
                    }
                }

                let start = Instant::now();
                let (best, stats) = find_best_move_with_stats(&mut board, depth);
                let elapsed = start.elapsed().as_millis();
                println!("info depth {depth} nodes {} time {elapsed}", stats.nodes);

                match best {
                    Some(mv) => println!("bestmove {}", format_uci_move(&mv)),
                    None => println!("bestmove 0000"),
                }
            }
            "stop" => {
                // Searches run to completion; nothing to interrupt.
            }
            "quit" => break,
            _ => {
                // Ignore unknown commands per the UCI convention.
            }
        }

        let _ = stdout.flush();
    }
}
