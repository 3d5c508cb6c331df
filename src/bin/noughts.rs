//! Terminal frontend for the noughts engine
//!
//! Plays the role of the external UI collaborator: renders the board,
//! status line, and scoreboard after every state change, forwards cell
//! selections to the engine, and owns the presentation delay before the
//! computer's reply.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use noughts::{GameEngine, Outcome};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Play Tic-Tac-Toe against a simple computer opponent", long_about = None)]
struct Cli {
    /// Pause before the computer's reply, in milliseconds
    #[arg(long, default_value_t = 500)]
    delay_ms: u64,

    /// Seed for the opponent's random fallback (default: nondeterministic)
    #[arg(long)]
    seed: Option<u64>,
}

fn render(engine: &GameEngine) {
    let scores = engine.scores();
    println!();
    println!("You (X): {}   Computer (O): {}", scores.human, scores.opponent);

    let board = engine.board();
    for row in 0..3 {
        let mut line = String::new();
        for col in 0..3 {
            let pos = row * 3 + col;
            let c = board.get(pos).to_char();
            // Show the index of selectable cells instead of '.'
            if c == '.' {
                line.push(char::from_digit(pos as u32, 10).unwrap_or('.'));
            } else {
                line.push(c);
            }
            if col < 2 {
                line.push_str(" | ");
            }
        }
        println!("  {line}");
        if row < 2 {
            println!("  ---------");
        }
    }
    println!("{}", engine.status_line());
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let mut engine = GameEngine::new();

    println!("Enter a cell number (0-8), 'r' for a new round, 'q' to quit.");
    render(&engine);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        match input.trim() {
            "" => continue,
            "q" | "quit" => break,
            "r" | "reset" => {
                engine.reset();
                render(&engine);
            }
            token => {
                let Ok(pos) = token.parse::<usize>() else {
                    println!("unrecognized input '{token}'");
                    continue;
                };
                match engine.apply_human_move(pos) {
                    Ok(cue) => {
                        render(&engine);
                        if let Some(cue) = cue {
                            thread::sleep(Duration::from_millis(cli.delay_ms));
                            if engine.computer_move(cue, &mut rng)? {
                                render(&engine);
                            }
                        }
                    }
                    Err(e) => println!("{e}"),
                }
                if engine.outcome() != Outcome::InProgress {
                    println!("Enter 'r' for a new round.");
                }
            }
        }
    }

    Ok(())
}
