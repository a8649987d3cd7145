use prestamo_core::LoanOutcome;

/// Print just the key answer values: the installment and the TAE.
pub fn print_minimal(outcome: &LoanOutcome) {
    println!("cuota: {}", outcome.payment.round_dp(2));
    println!("tae: {}", outcome.effective_annual_rate.round_dp(6));
}
