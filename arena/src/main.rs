mod analyze;
mod arena_config;
mod match_runner;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe_engine::{log, logger};
use tictactoe_engine::tictactoe::Difficulty;

#[derive(Parser)]
#[command(name = "tictactoe_arena", about = "Plays and analyses tic-tac-toe games between bots")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file; defaults to tictactoe_arena.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a batch of games, X bot against the session's computer O.
    Play {
        #[arg(long)]
        games: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long = "x", value_enum)]
        x_difficulty: Option<DifficultyArg>,
        #[arg(long = "o", value_enum)]
        o_difficulty: Option<DifficultyArg>,
    },
    /// Show the outcome and bot choices for a position, e.g. "XX.OO....".
    Analyze { board: String },
    /// Write the default config file.
    InitConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Arena".to_string());
    logger::init_logger(prefix);

    let config_manager = arena_config::get_config_manager(args.config);

    match args.command {
        Command::Play {
            games,
            seed,
            x_difficulty,
            o_difficulty,
        } => {
            let mut config = config_manager.get_config()?;
            if let Some(games) = games {
                config.games = games;
            }
            if seed.is_some() {
                config.seed = seed;
            }
            if let Some(x) = x_difficulty {
                config.x_difficulty = x.into();
            }
            if let Some(o) = o_difficulty {
                config.o_difficulty = o.into();
            }
            tictactoe_engine::config::Validate::validate(&config)?;
            match_runner::run_matches(&config)?;
        }
        Command::Analyze { board } => {
            let analysis = analyze::analyze(&board)?;
            analyze::log_analysis(&analysis);
        }
        Command::InitConfig => {
            config_manager.set_config(&arena_config::ArenaConfig::default())?;
            log!("Default config written");
        }
    }

    Ok(())
}
