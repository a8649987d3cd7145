use rust_decimal::Decimal;

use crate::types::{Money, Rate, ScheduleEntry};

/// Expand a loan into its period-by-period amortization schedule.
///
/// Running balance starts at the principal; each installment splits into
/// the interest accrued on the outstanding balance and the principal
/// repaid. The final row's balance is forced to exactly zero, overriding
/// the computed value, so accumulated representation drift never reaches
/// the caller. The schedule is fully materialized; the count is known and
/// small, and consumers index into it.
pub fn build_schedule(
    principal: Money,
    periodic_rate: Rate,
    periods: u32,
    payment: Money,
) -> Vec<ScheduleEntry> {
    let mut balance = principal;
    let mut entries = Vec::with_capacity(periods as usize);

    for index in 1..=periods {
        let interest = balance * periodic_rate;
        let principal_portion = payment - interest;
        balance -= principal_portion;
        entries.push(ScheduleEntry {
            index,
            interest,
            principal_portion,
            remaining_balance: if index == periods {
                Decimal::ZERO
            } else {
                balance
            },
        });
    }

    entries
}
