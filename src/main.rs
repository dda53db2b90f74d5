use anyhow::Context;
use chess_selfplay::core::{load_settings, read_settings, settings_path};
use chess_selfplay::selfplay::{self, GameEnd};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chess_selfplay", about = "Play a heuristic engine against itself")]
struct Args {
    /// Random seed; a fresh one is drawn and reported when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many half-moves
    #[arg(long)]
    max_plies: Option<usize>,
    /// Settings file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the final game snapshot as JSON
    #[arg(long)]
    json: bool,
    /// Only log warnings and errors
    #[arg(long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut settings = match &args.config {
        Some(path) => read_settings(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?,
        None => load_settings(&settings_path()),
    };
    if let Some(max_plies) = args.max_plies {
        settings.max_plies = max_plies;
    }
    let seed = args
        .seed
        .or(settings.engine.seed)
        .unwrap_or_else(rand::random::<u64>);
    settings.engine.seed = Some(seed);

    let report = selfplay::run(settings.engine, settings.max_plies)?;

    let position = chess_engine::Position::from_flat(&report.snapshot.board)?;
    println!("{position}");
    println!();
    println!(
        "seed {seed}: {} after {} plies, material {:+}",
        describe(&report.end),
        report.plies,
        report.material
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

fn describe(end: &GameEnd) -> String {
    let name = |color: i8| if color > 0 { "white" } else { "black" };
    match end {
        GameEnd::NoMoves {
            side,
            in_check: true,
        } => format!("{} has no move in check", name(*side)),
        GameEnd::NoMoves { side, .. } => format!("{} has no move", name(*side)),
        GameEnd::KingCaptured { winner } => format!("{} captured the king", name(*winner)),
        GameEnd::PlyLimit => "ply limit reached".to_string(),
    }
}
