//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use bodbot::output::OutputMode;
use bodbot::paths::CONFIG_ENV;

/// bodbot - Task points from class sheets, on request
#[derive(Parser, Debug)]
#[command(
    name = "bodbot",
    version,
    about = "Task points from class sheets, on request",
    long_about = "Report students' task points from class CSV sheets.\n\n\
                  Each class sheet lists per-task minimum and maximum points and\n\
                  every student's scores. Students ask the bot for their points."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./bodbot.toml, then ~/.config/bodbot/config.toml)
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sync every class, then answer chat messages typed on stdin
    Serve {
        /// User id the typed messages come from
        #[arg(long = "as", default_value = "@student:localhost")]
        sender: String,
    },

    /// Sync every class and show what was loaded
    Sync,

    /// Sync every class and show one student's points
    Lookup {
        /// Student login (or full chat user id)
        login: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Serve { sender }) => commands::serve(config, &sender).await,
        Some(Command::Sync) => commands::sync(config, output_mode).await,
        Some(Command::Lookup { login }) => commands::lookup(config, &login, output_mode).await,
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("bodbot v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("bodbot v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'bodbot --help' for usage");
                println!("Run 'bodbot sync' to check your class sheets");
            }
            Ok(())
        },
    }
}
