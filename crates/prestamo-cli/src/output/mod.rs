pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use prestamo_core::LoanOutcome;

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, outcome: &LoanOutcome) {
    match format {
        OutputFormat::Json => json::print_json(outcome),
        OutputFormat::Table => table::print_table(outcome),
        OutputFormat::Csv => csv_out::print_csv(outcome),
        OutputFormat::Minimal => minimal::print_minimal(outcome),
    }
}
