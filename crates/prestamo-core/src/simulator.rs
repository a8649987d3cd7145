//! The compute entry point: validation gate, installment, financing
//! totals, effective annual rate, and amortization schedule.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::annuity::{self, PaymentTiming, DEFAULT_RATE_GUESS};
use crate::error::PrestamoError;
use crate::schedule::build_schedule;
use crate::types::{LoanOutcome, LoanRequest, Rate};
use crate::PrestamoResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

const MSG_PRINCIPAL: &str = "La cantidad debe ser mayor que cero";
const MSG_TERM: &str = "El plazo debe ser mayor que cero";
const MSG_FEE: &str = "La comisión de apertura debe ser mayor o igual que cero";
const MSG_OTHER_COSTS: &str = "Los gastos adicionales deben ser mayor o igual que cero";

/// Check every request constraint independently and report all failures
/// at once, in field declaration order. Never short-circuits.
pub fn validate(request: &LoanRequest) -> PrestamoResult<()> {
    let checks = [
        (request.principal > Decimal::ZERO, MSG_PRINCIPAL),
        (request.term > 0, MSG_TERM),
        (request.origination_fee_rate >= Decimal::ZERO, MSG_FEE),
        (request.other_costs >= Decimal::ZERO, MSG_OTHER_COSTS),
    ];

    let messages: Vec<String> = checks
        .into_iter()
        .filter_map(|(ok, msg)| if ok { None } else { Some(msg.to_string()) })
        .collect();

    if messages.is_empty() {
        Ok(())
    } else {
        Err(PrestamoError::Validation { messages })
    }
}

/// Compute the full economics of a loan request.
///
/// Pure and re-entrant: all state is local to the call, and identical
/// requests produce identical outcomes.
pub fn simulate(request: &LoanRequest) -> PrestamoResult<LoanOutcome> {
    validate(request)?;

    let monthly_rate = request.nominal_annual_rate / MONTHS_PER_YEAR;
    let periods = request.period_count() as u32;

    let raw_payment = annuity::pmt(
        monthly_rate,
        periods,
        request.principal,
        Decimal::ZERO,
        PaymentTiming::End,
    );
    // Negated once so callers see the installment as a positive amount.
    let payment = -raw_payment;

    let origination_fee_amount = request.principal * request.origination_fee_rate;
    let total_financing_cost = payment * Decimal::from(periods) + origination_fee_amount;
    let total_interest_cost = total_financing_cost - request.principal;

    let effective_annual_rate =
        effective_annual_rate(request, periods, raw_payment, origination_fee_amount);
    let schedule = build_schedule(request.principal, monthly_rate, periods, payment);

    Ok(LoanOutcome {
        has_origination_fee: !request.origination_fee_rate.is_zero(),
        payment,
        origination_fee_amount,
        total_financing_cost,
        total_interest_cost,
        schedule,
        effective_annual_rate,
    })
}

/// Effective annual rate (TAE) implied by the fee-adjusted cash flows.
///
/// Up-front fees reduce the net disbursed principal while the installment
/// stays fixed, so the implied periodic rate exceeds the nominal one.
/// The annualization basis is monthly regardless of the request's
/// periodicity; periodicity only scales the period count.
fn effective_annual_rate(
    request: &LoanRequest,
    periods: u32,
    raw_payment: Decimal,
    origination_fee_amount: Decimal,
) -> Rate {
    let net_present_value = request.principal - origination_fee_amount - request.other_costs;
    let solution = annuity::rate(
        periods,
        raw_payment,
        net_present_value,
        Decimal::ZERO,
        PaymentTiming::End,
        DEFAULT_RATE_GUESS,
    );
    let annualized = solution.rate * MONTHS_PER_YEAR;
    ((MONTHS_PER_YEAR + annualized) / MONTHS_PER_YEAR).powd(MONTHS_PER_YEAR) - Decimal::ONE
}
