mod blackjack_table;
mod hacking_console;

use arcade_drivers::{parse_config_from_file, Config};
use clap::{Parser, Subcommand};

const DEFAULT_CONFIG_PATH: &str = "~/.arcade.yml";

#[derive(Debug, Parser)]
#[command(author, about, long_about = None)]
struct CommandLineArgs {
    /// The path of the config file
    #[arg(short, long, default_value_t = String::from(DEFAULT_CONFIG_PATH))]
    config: String,

    /// Seed for deterministic shuffles and puzzles
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(subcommand)]
    game: GameCommand,
}

#[derive(Debug, Subcommand)]
enum GameCommand {
    /// Play rounds of blackjack against the dealer
    Blackjack,
    /// Crack the terminal password
    Hacking,
}

fn main() {
    env_logger::init();
    let args = CommandLineArgs::parse();
    let config = resolve_config(&args.config);

    match args.game {
        GameCommand::Blackjack => blackjack_table::run(&config, args.seed),
        GameCommand::Hacking => hacking_console::run(&config, args.seed),
    }
}

/// The default config path is optional: a missing `~/.arcade.yml` means
/// defaults. An explicitly given path must exist.
fn resolve_config(path: &str) -> Config {
    if path == DEFAULT_CONFIG_PATH {
        let home_dir = home::home_dir().expect("Cannot find home directory");
        let config_file_path = home_dir.join(".arcade.yml");
        if !config_file_path.exists() {
            log::debug!("no config file at {:?}, using defaults", config_file_path);
            return Config::default();
        }
        let config_file_path = config_file_path
            .to_str()
            .expect("Config path is not valid UTF-8");
        return parse_config_from_file(config_file_path);
    }
    parse_config_from_file(path)
}
