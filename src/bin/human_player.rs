use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use twenty48::config::SessionConfig;
use twenty48::engine::GameSession;
use twenty48::transform::Direction;
use twenty48::utils::parse_board;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play 2048 from the command line", long_about = None)]
struct Args {
    /// Grid size (defaults to 4 for a new board; checked against --board-file when given)
    #[clap(short, long)]
    size: Option<usize>,

    /// Seed for tile spawns, for a reproducible game
    #[clap(long)]
    seed: Option<u64>,

    /// Start from a board file (one row per line, numbers or '.' separated by spaces)
    #[clap(short, long)]
    board_file: Option<PathBuf>,

    /// Score to start from
    #[clap(long, default_value_t = 0)]
    score: u64,
}

/// Everything the interactive loop needs, owned in one place.
struct App {
    game: GameSession,
}

impl App {
    fn new(args: &Args) -> Result<Self> {
        let config = SessionConfig {
            size: args.size,
            seed: args.seed,
            initial_score: args.score,
        };

        let initial_board = match &args.board_file {
            Some(path) => {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read board file {}", path.display()))?;
                Some(parse_board(&content).with_context(|| {
                    format!("Invalid board in {}", path.display())
                })?)
            }
            None => None,
        };

        let game = GameSession::with_config(&config, initial_board)?;
        Ok(App { game })
    }

    fn print_status(&self) {
        println!("---------------------");
        println!("Score: {}", self.game.score());
        println!("{}", self.game.board());
    }

    fn run(&mut self) -> Result<()> {
        println!("Welcome to 2048!");

        loop {
            self.print_status();

            if self.game.is_game_over() {
                println!();
                println!("---------------------");
                println!("GAME OVER!");
                println!("Final Score: {}", self.game.score());
                println!("Largest Tile: {}", self.game.board().max_tile());
                println!("---------------------");
                return Ok(());
            }

            print!("Action ({}), or 'q' to quit: ", direction_keys("/"));
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                println!();
                return Ok(());
            }

            let trimmed_input = input.trim();
            if trimmed_input == "q" {
                println!("Thanks for playing!");
                return Ok(());
            }

            let mut chars = trimmed_input.chars();
            let direction = match (chars.next(), chars.next()) {
                (Some(c), None) => Direction::try_from(c),
                _ => trimmed_input.parse::<Direction>(),
            };

            match direction {
                Ok(direction) => {
                    self.game.make_move(direction)?;
                }
                Err(e) => {
                    warn!("rejected input {:?}: {}", trimmed_input, e);
                    println!("Wrong character: use one of {}.", direction_keys(", "));
                }
            }
        }
    }
}

/// The single-character keys for every direction, joined by `sep`.
fn direction_keys(sep: &str) -> String {
    Direction::ALL
        .iter()
        .map(|d| d.to_char().to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut app = App::new(&args)?;
    app.run()
}
