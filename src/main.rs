use anyhow::bail;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::json;

use warships::{
    default_ship_count, fleet_sizes, init_logging, Board, GameEngine, GameStatus, Targeter,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pit the targeting engine against itself on two random fleets.
    Sim {
        #[arg(long, default_value_t = 8)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Draw a random fleet and print where it landed.
    Place {
        #[arg(long, default_value_t = 8)]
        size: usize,
        #[arg(long, help = "Number of warships (defaults to min(size, 5))")]
        ships: Option<usize>,
        #[arg(long, help = "Fix RNG seed for reproducible placement")]
        seed: Option<u64>,
    },
}

#[derive(Serialize)]
struct SimReport {
    size: usize,
    seed: Option<u64>,
    status: GameStatus,
    winner: &'static str,
    player_shots: usize,
    opponent_shots: usize,
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim { size, seed } => {
            let report = simulate(size, seed)?;
            println!("{}", serde_json::to_string(&report)?);
        }
        Commands::Place { size, ships, seed } => {
            let mut rng = make_rng(seed);
            let mut board = Board::new(size, ships.unwrap_or_else(|| default_ship_count(size)))?;
            board.auto_place_fleet(&mut rng)?;
            let warships: Vec<Vec<String>> = board
                .warships()
                .iter()
                .map(|w| w.blocks().iter().map(|b| b.to_string()).collect())
                .collect();
            let placed = json!({
                "size": size,
                "warships": warships,
                "summary": board.fleet_summary(),
            });
            println!("{}", serde_json::to_string(&placed)?);
        }
    }
    Ok(())
}

/// Play a whole game where a second targeting engine stands in for the human.
fn simulate(size: usize, seed: Option<u64>) -> anyhow::Result<SimReport> {
    let mut rng = make_rng(seed);
    let mut engine = GameEngine::new(size)?;
    engine.place_opponent_fleet(&mut rng)?;
    engine.place_player_fleet(&mut rng)?;
    let mut stand_in = Targeter::with_fleet(size, &fleet_sizes(size, default_ship_count(size)))?;

    let mut player_shots = 0;
    let mut opponent_shots = 0;
    while engine.status() == GameStatus::InProgress {
        if player_shots > size * size {
            bail!("game did not finish within {} shots", size * size);
        }
        let guess = stand_in.next_guess(&mut rng)?;
        let outcome = engine.player_shot(guess)?;
        stand_in.feedback(outcome, &mut rng)?;
        player_shots += 1;
        if engine.status() != GameStatus::InProgress {
            break;
        }
        engine.opponent_turn(&mut rng)?;
        opponent_shots += 1;
    }

    let status = engine.status();
    let winner = match status {
        GameStatus::Won => "player",
        GameStatus::Lost => "opponent",
        GameStatus::InProgress => "none",
    };
    Ok(SimReport {
        size,
        seed,
        status,
        winner,
        player_shots,
        opponent_shots,
    })
}
