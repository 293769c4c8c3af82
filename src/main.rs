use clap::Parser;
use std::path::PathBuf;

use snake_mcts::logging::setup_logging;
use snake_mcts::recording::{new_game_id, CsvWriter, TurnRow};
use snake_mcts::{play_game, GameConfig, GameStatus, MctsHyperparameters};

#[derive(Parser, Debug)]
#[command(name = "snake_mcts", version, about = "Let the MCTS agent play snake")]
struct Config {
    /// Side length of the square board
    #[arg(short = 'n', long, default_value_t = 10)]
    grid_size: usize,

    /// Number of games to play
    #[arg(short = 'g', long, default_value_t = 1)]
    num_games: usize,

    /// Search iterations per move (overrides the config file)
    #[arg(short = 'i', long)]
    iterations: Option<usize>,

    /// Maximum rollout length (overrides the config file)
    #[arg(short = 'd', long)]
    rollout_depth: Option<usize>,

    /// UCT exploration constant (overrides the config file)
    #[arg(short = 'c', long)]
    exploration: Option<f64>,

    /// Seed of the first game; game k uses seed + k
    #[arg(short = 's', long)]
    seed: Option<u64>,

    /// JSON file with MCTS hyperparameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop a game after this many moves
    #[arg(long)]
    max_turns: Option<usize>,

    /// Append every played turn to this CSV file
    #[arg(long)]
    record: Option<PathBuf>,

    /// Print the board after every move
    #[arg(long, default_value_t = false)]
    render: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write rotating log files to this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Config {
    fn hyperparameters(&self) -> snake_mcts::Result<MctsHyperparameters> {
        let mut params = match &self.config {
            Some(path) => MctsHyperparameters::from_json_file(path)?,
            None => MctsHyperparameters::default(),
        };
        if let Some(iterations) = self.iterations {
            params.max_iterations = iterations;
        }
        if let Some(depth) = self.rollout_depth {
            params.max_rollout_depth = depth;
        }
        if let Some(c) = self.exploration {
            params.exploration_constant = c;
        }
        if self.seed.is_some() {
            params.seed = self.seed;
        }
        params.validate()?;
        Ok(params)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    let base_params = config.hyperparameters()?;
    log::info!("MCTS hyperparameters: {}", base_params.to_config_string());

    let mut writer = match &config.record {
        Some(path) => Some(CsvWriter::new(path)?),
        None => None,
    };

    let mut won = 0;
    let mut total_length = 0i64;
    for game in 0..config.num_games {
        let hyperparams = MctsHyperparameters {
            seed: base_params.seed.map(|s| s.wrapping_add(game as u64)),
            ..base_params.clone()
        };
        let game_config = GameConfig {
            grid_size: config.grid_size,
            max_turns: config.max_turns,
            hyperparams,
        };

        let mut rows = Vec::new();
        let summary = play_game(&game_config, |record, state| {
            if config.render {
                println!("turn {} ({}), length {}", record.turn, record.action, record.snake_length);
                println!("{}", state);
            }
            rows.push(record.clone());
        })?;

        if let Some(writer) = writer.as_mut() {
            let game_id = new_game_id(summary.seed);
            for record in &rows {
                writer.write_turn(&TurnRow::new(&game_id, record))?;
            }
            writer.flush()?;
        }

        if summary.status == GameStatus::Won {
            won += 1;
        }
        total_length += summary.final_length as i64;
        println!(
            "game {}: {:?} after {} turns, length {} (seed {})",
            game + 1,
            summary.status,
            summary.turns,
            summary.final_length,
            summary.seed
        );
    }

    if config.num_games > 1 {
        println!(
            "won {}/{} games, average final length {:.2}",
            won,
            config.num_games,
            total_length as f64 / config.num_games as f64
        );
    }
    Ok(())
}
