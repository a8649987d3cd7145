use prestamo_core::{LoanOutcome, ScheduleEntry};
use rust_decimal::Decimal;
use tabled::{builder::Builder, Table};

/// Render the outcome as a summary table followed by the amortization
/// table. Amounts are rounded to cents for display only; the underlying
/// values stay untouched.
pub fn print_table(outcome: &LoanOutcome) {
    let mut builder = Builder::default();
    builder.push_record(["Concepto", "Importe"]);
    builder.push_record(["Cuota mensual", &outcome.payment.round_dp(2).to_string()]);
    if outcome.has_origination_fee {
        builder.push_record([
            "Comisión de apertura",
            &outcome.origination_fee_amount.round_dp(2).to_string(),
        ]);
    }
    builder.push_record([
        "Total financiación",
        &outcome.total_financing_cost.round_dp(2).to_string(),
    ]);
    builder.push_record([
        "Total intereses",
        &outcome.total_interest_cost.round_dp(2).to_string(),
    ]);
    builder.push_record([
        "TAE",
        &format!(
            "{} %",
            (outcome.effective_annual_rate * Decimal::ONE_HUNDRED).round_dp(2)
        ),
    ]);
    println!("{}", Table::from(builder));

    println!();
    println!("{}", schedule_table(&outcome.schedule));
}

fn schedule_table(schedule: &[ScheduleEntry]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Cuota", "Interés", "Amortización", "Pendiente"]);
    for entry in schedule {
        builder.push_record([
            entry.index.to_string(),
            entry.interest.round_dp(2).to_string(),
            entry.principal_portion.round_dp(2).to_string(),
            entry.remaining_balance.round_dp(2).to_string(),
        ]);
    }
    Table::from(builder)
}
