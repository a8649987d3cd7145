use prestamo_core::LoanOutcome;

/// Pretty-print the outcome as wire-format JSON.
pub fn print_json(outcome: &LoanOutcome) {
    match serde_json::to_string_pretty(outcome) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
