mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use prestamo_core::PrestamoError;

use commands::simular::SimularArgs;

/// Fixed-rate loan simulator with decimal precision
#[derive(Parser)]
#[command(
    name = "prestamo",
    version,
    about = "Simulador de préstamos a tipo fijo",
    long_about = "Computes the full economics of a fixed-rate amortizing loan: \
                  the constant installment, total financing cost, amortization \
                  schedule, and the fee-adjusted effective annual rate (TAE)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a loan and print its full economics
    Simular(SimularArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simular(args) => commands::simular::run_simular(args),
        Commands::Version => {
            println!("prestamo {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(outcome) => {
            output::format_output(&cli.output, &outcome);
            process::exit(0);
        }
        Err(e) => {
            match e.downcast_ref::<PrestamoError>() {
                Some(PrestamoError::Validation { messages }) => {
                    eprintln!("{}: la petición no es válida", "error".red().bold());
                    for message in messages {
                        eprintln!("  - {message}");
                    }
                }
                None => eprintln!("{}: {}", "error".red().bold(), e),
            }
            process::exit(1);
        }
    }
}
