use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use fingerforge::config::ModelConfig;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON model config; explicit command-line flags take precedence
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Tables(cmd::tables::TablesArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .init();

    info!("🎹 Initializing FingerForge...");

    let result = match cli.command {
        Commands::Score(args) => {
            let sub_matches = matches.subcommand_matches("score");
            let config = match (&cli.config, sub_matches) {
                (Some(path), Some(sub)) => {
                    info!("⚖️  Loading Model Config from: {}", path);
                    ModelConfig::load_from_file(path).map(|mut file_config| {
                        file_config.merge_from_cli(&args.config, sub);
                        file_config
                    })
                }
                _ => Ok(args.config.clone()),
            };
            config.and_then(|config| cmd::score::run(&args, &config))
        }
        Commands::Tables(args) => cmd::tables::run(&args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
