//! Strictly RPS - console front-end
//!
//! Wires the rock-scissors-paper engine to the terminal: prompts for the
//! human player's gestures and prints the game's progress lines.

#![warn(missing_docs)]

mod cli;
mod config;
mod console;

use std::cell::Cell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::ConsoleConfig;
use strictly_rps::{ComputerPlayer, Game, Gesture, HumanPlayer, Phase, Session};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play {
            config,
            name,
            rounds,
        } => run_play(config, name, rounds),
        Command::Demo { rounds } => run_demo(rounds),
    }
}

/// Interactive human vs computer sessions with a play-again loop.
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(config_path: PathBuf, name: Option<String>, rounds: Option<usize>) -> Result<()> {
    let config = ConsoleConfig::load_or_default(&config_path)?.with_overrides(name, rounds)?;

    println!();
    println!("  =============================================");
    println!("       Rock - Scissors - Paper   (Console)");
    println!("  =============================================");
    println!();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let player_name = match config.player_name() {
        Some(name) => name.clone(),
        None => console::read_name(&mut input, &mut output)?,
    };

    // The console reads and validates the choice; the human player hands it over.
    let pending = Rc::new(Cell::new(Gesture::default()));
    let human = HumanPlayer::new(player_name.clone(), {
        let pending = Rc::clone(&pending);
        move || pending.get()
    });
    let computer = ComputerPlayer::new(config.opponent_name().clone());

    let mut game = Game::new(human, computer);
    game.set_output(print_indented);

    loop {
        game.new_session(*config.rounds())?;

        while game.phase() == Phase::Running {
            let Some(choice) = console::read_choice(&mut input, &mut output)? else {
                anyhow::bail!("Input closed before the session finished");
            };
            pending.set(choice);
            game.play_single_round()?;
        }

        if !console::read_play_again(&mut input, &mut output)? {
            break;
        }
    }

    info!(player = %player_name, "Player quit");
    println!("\n  Thanks for playing, {}! Goodbye.\n", player_name);
    Ok(())
}

/// Computer vs computer, played as one batch.
#[instrument]
fn run_demo(rounds: usize) -> Result<()> {
    let mut session = Session::new(
        ComputerPlayer::new("Computer A"),
        ComputerPlayer::new("Computer B"),
        rounds,
    )?;
    session.on_round_completed(|index, record| {
        print_indented(&format!("Round {}: {}", index + 1, record));
    });

    session.run_to_completion()?;

    print_indented(&session.summary().to_string());
    print_indented(&format!("Elapsed: {:.3}s", session.elapsed().as_secs_f64()));
    Ok(())
}

fn print_indented(message: &str) {
    for line in message.lines() {
        println!("  {}", line);
    }
}

#[instrument]
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Tracing initialized");
}
