mod args;
mod commands;
mod config;
mod global;
mod handlers;
mod logging;

use args::Commands;
use clap::Parser;
use global::GlobalArgs;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "web-encoder")]
#[command(version)]
#[command(
    about = "Encode text into compact URL-safe tokens and back",
    long_about = "Encode text into compact URL-safe tokens and back.\n\n\
                  Tokens use the web-safe base64 alphabet without padding. When zlib makes \
                  the payload smaller, the token is prefixed with '.'."
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::setup_logging(cli.global.verbose);

    let settings = config::resolve_settings(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &settings),
        Commands::Decode(args) => handlers::decode::handle(args, &settings),
    }
}

/// Prints an error to stderr, in color when stderr is a terminal.
pub fn report_error(err: &dyn std::error::Error) {
    let message = err.to_string();
    if should_use_color() {
        eprintln!("\x1b[1;31merror:\x1b[0m {}", message);
    } else {
        eprintln!("error: {}", message);
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    std::io::stderr().is_terminal()
}
