//! userdb CLI
//!
//! Serves the user-database tools to an agent runtime and exposes them for
//! one-off use from the shell.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use userdb_core::logging_facility;
use userdb_store::UserStore;

mod commands;
mod config;

use config::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "userdb")]
#[command(about = "userdb - user database tools for a conversational agent", long_about = None)]
struct Cli {
    /// Database file (overrides USERDB_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the tool catalog as JSON
    Tools,
    /// Print the agent manifest as JSON
    Manifest,
    /// Invoke one tool and print its result envelope
    Call(commands::call::CallArgs),
    /// Answer line-delimited JSON tool requests on stdin
    Serve,
    /// Insert the sample users if the database is empty
    Seed,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; real environment variables win.
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env(cli.db)?;

    logging_facility::init(config.log_profile);
    tracing::debug!(
        db_path = %config.db_path.display(),
        model = %config.model,
        api_key = %config.api_key,
        "configuration loaded"
    );

    let store = UserStore::open(&config.db_path)?;

    match cli.command {
        Commands::Tools => commands::tools::execute(),
        Commands::Manifest => commands::manifest::execute(&config),
        Commands::Call(args) => commands::call::execute(args, &store),
        Commands::Serve => commands::serve::execute(&store),
        Commands::Seed => commands::seed::execute(&store),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
