//! Keypad Session
//!
//! Presses keys on a calculator and prints the screen after each one.
//!
//! Key concepts:
//! - Labels are validated up front; every bad key is reported at once
//! - Each key is dispatched through the pure reducer
//! - Keys that do not apply are absorbed without changing the screen
//!
//! Run with: cargo run --example keypad_session -- 5 + 3 + 2 =
//! Or:       cargo run --example keypad_session -- --compact "12.5*4="
//! Set RUST_LOG=keypad_calc=debug to see each transition.

use clap::Parser;
use keypad_calc::keypad::{parse_keys, split_labels};
use keypad_calc::{Calculator, DispatchResult, State};
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Drive the four-function calculator from the command line")]
struct Args {
    /// Treat the single argument as a compact sequence like "12+3="
    #[arg(long)]
    compact: bool,

    /// Print the transition history at the end
    #[arg(long)]
    history: bool,

    /// Key labels: 0-9 . + - * ÷ / AC DEL =
    keys: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let labels = if args.compact {
        split_labels(&args.keys.join(""))
    } else {
        args.keys
    };

    let actions = match parse_keys(&labels) {
        Validation::Success(actions) => actions,
        Validation::Failure(errors) => {
            for error in errors.iter() {
                eprintln!("error: {error}");
            }
            std::process::exit(2);
        }
    };

    let mut calc = Calculator::default();
    println!("=== Keypad Session ===\n");

    for action in actions {
        let key = action.to_string();
        let outcome = match calc.dispatch(action) {
            DispatchResult::Transitioned(state) => state.name().to_string(),
            DispatchResult::Absorbed => "absorbed".to_string(),
        };
        let screen = calc.screen();
        println!("[{key:>3}] {:>16} | {:<16} ({outcome})", screen.previous, screen.current);
    }

    if calc.current_state().is_error() {
        println!("\nThe result is not a finite number.");
    }

    if args.history {
        println!("\n=== History ===");
        for transition in calc.history().transitions() {
            println!(
                "#{:<3} {:<4} {} -> {}",
                transition.sequence,
                transition.action.to_string(),
                transition.from.name(),
                transition.to.name()
            );
        }
    }
}
