// Rust guideline compliant 2026-10-16

//! Wrapkit CLI Application
//!
//! Command-line front end that resolves and renders response envelopes.

use clap::Parser;
use std::path::PathBuf;
use wrapkit_cli::commands;
use wrapkit_cli::commands::resolve::ResolveOptions;
use wrapkit_cli::logging::init_tracing;
use wrapkit_core::Config;

#[derive(Parser, Debug)]
#[command(
    name = "wrapkit",
    version,
    about = "Wrapkit: uniform JSON response envelopes",
    long_about = "Wrapkit resolves partially-filled response descriptors into uniform JSON envelopes with code, status, message and data.",
    after_help = "Examples:\n  wrapkit resolve\n  wrapkit resolve --code 404 --include\n  wrapkit resolve --error \"db down\" --show-error\n  wrapkit resolve --error-code 502 --error-data '{\"retry\":true}'\n  wrapkit show-config --config wrapkit.toml\n"
)]
struct Cli {
    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Resolve an envelope and print the rendered body
    Resolve {
        /// Explicit status code
        #[arg(long)]
        code: Option<u16>,

        /// Explicit message
        #[arg(long)]
        message: Option<String>,

        /// Explicit payload (JSON)
        #[arg(long)]
        data: Option<String>,

        /// Attach an error with this text
        #[arg(long)]
        error: Option<String>,

        /// Status code supplied by the attached error
        #[arg(long)]
        error_code: Option<u16>,

        /// Message supplied by the attached error
        #[arg(long)]
        error_message: Option<String>,

        /// Payload supplied by the attached error (JSON)
        #[arg(long)]
        error_data: Option<String>,

        /// Reveal error text on 5xx responses
        #[arg(long)]
        show_error: bool,

        /// Pretty-print the body
        #[arg(long)]
        pretty: bool,

        /// Print the status line and content type before the body
        #[arg(short, long)]
        include: bool,
    },

    /// Print the effective configuration
    ShowConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Resolve {
            code,
            message,
            data,
            error,
            error_code,
            error_message,
            error_data,
            show_error,
            pretty,
            include,
        }) => {
            let options = ResolveOptions {
                code,
                message,
                data,
                error,
                error_code,
                error_message,
                error_data,
                show_error: show_error.then_some(true),
                pretty: pretty.then_some(true),
                include,
            };
            commands::resolve::execute(options, &config)?;
        }
        Some(Commands::ShowConfig) => {
            commands::show_config::execute(&config)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
