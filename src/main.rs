use std::io::{self, BufRead};
use std::process;

use turnboard::*;

fn parse_position(line: &str) -> Option<WorldPosition> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(WorldPosition::new(x, y))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SessionConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", path, e);
                process::exit(1);
            }
        },
        None => SessionConfig::default(),
    };

    let mut session = match GameSession::new(config, Box::new(StepRules)) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    println!("Turnboard");
    println!("=========\n");
    println!("Enter board positions as `x y`, one per line.\n");
    println!("{}", session.display_board());

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("{}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let Some(position) = parse_position(&line) else {
            println!("Expected two numbers, got {:?}", line);
            continue;
        };

        match session.handle_input_at(position) {
            InputOutcome::Ignored => println!("Nothing to select there"),
            InputOutcome::Rejected(_, coord) => println!("Cannot move to {}", coord),
            InputOutcome::Selected(_) | InputOutcome::Reselected { .. } => {
                println!("{}", session.display_board());
            }
            InputOutcome::Deselected(_) => println!("Selection cleared"),
            InputOutcome::Committed(record) => {
                println!("Moved {}", record);
                println!("{}", session.display_board());
            }
        }
    }

    println!("{} moves played", session.history().len());
}
