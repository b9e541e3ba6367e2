use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{error, quote, render, split};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "paramline")]
#[command(version = VERSION)]
#[command(about = "Resolve %parameter% templates and split or quote command lines")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand %name% placeholders in a template
    Render(render::RenderArgs),
    /// Split a command line into arguments
    Split(split::SplitArgs),
    /// Quote values that contain whitespace and join them
    Quote(quote::QuoteArgs),
    /// Strip one pair of surrounding double quotes
    Unquote(quote::UnquoteArgs),
    /// Inspect error codes
    Error(error::ErrorArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let (json_result, exit_code) = commands::run_json(cli.command);

    if let Err(err) = output::print_json_result(json_result) {
        eprintln!("{}", err);
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
