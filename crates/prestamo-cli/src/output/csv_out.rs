use std::io;

use prestamo_core::LoanOutcome;

/// Write the amortization schedule as CSV to stdout, one row per
/// installment, using the wire column names.
pub fn print_csv(outcome: &LoanOutcome) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let _ = wtr.write_record(["numeroCuota", "interes", "amortizacion", "pendiente"]);
    for entry in &outcome.schedule {
        let _ = wtr.write_record([
            entry.index.to_string(),
            entry.interest.to_string(),
            entry.principal_portion.to_string(),
            entry.remaining_balance.to_string(),
        ]);
    }

    let _ = wtr.flush();
}
