//! Annuity math: the closed-form payment formula and the implied-rate
//! solver. All math uses `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

use crate::types::{Money, Rate};

const SECANT_EPSILON: Decimal = dec!(0.0000000001);
const SECANT_MAX_ITERATIONS: u32 = 10;

/// Default initial guess for the implied-rate search.
pub const DEFAULT_RATE_GUESS: Decimal = dec!(0.01);

/// Whether installments fall due at the end or the beginning of each
/// period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentTiming {
    #[default]
    End,
    Begin,
}

impl PaymentTiming {
    fn as_decimal(self) -> Decimal {
        match self {
            PaymentTiming::End => Decimal::ZERO,
            PaymentTiming::Begin => Decimal::ONE,
        }
    }
}

/// Constant periodic payment of an annuity (PMT).
///
/// Spreadsheet sign convention: a positive disbursed present value yields
/// a negative payment (the borrower's outflow). Defined for
/// `periods >= 1` and `rate > -1`; never fails.
pub fn pmt(
    rate: Rate,
    periods: u32,
    present_value: Money,
    future_value: Money,
    timing: PaymentTiming,
) -> Money {
    if rate.is_zero() {
        // Straight-line split; the general formula divides by rate.
        return -(present_value + future_value) / Decimal::from(periods);
    }

    let factor = (Decimal::ONE + rate).powd(Decimal::from(periods));
    let mut payment = -rate * present_value * (factor + future_value) / (factor - Decimal::ONE);

    if timing == PaymentTiming::Begin {
        payment /= Decimal::ONE + rate;
    }

    payment
}

/// Result of the implied-rate search.
///
/// The solver always returns its last estimate; `residual` and
/// `converged` let a stricter caller reject an unconverged answer without
/// changing the default behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSolution {
    /// Last computed periodic rate.
    pub rate: Rate,
    /// `|y0 - y1|` at exit.
    pub residual: Decimal,
    /// Secant steps taken, at most `SECANT_MAX_ITERATIONS`.
    pub iterations: u32,
    /// True iff the residual fell within tolerance before the cap.
    pub converged: bool,
}

/// Periodic interest rate implied by a constant payment stream (RATE).
///
/// Secant iteration on the annuity value function, seeded at zero and at
/// `guess`, capped at ten steps. Non-convergence is not an error: the
/// last estimate is returned regardless, so consumers that need a
/// guarantee must check [`RateSolution::converged`] themselves.
pub fn rate(
    periods: u32,
    payment: Money,
    present_value: Money,
    future_value: Money,
    timing: PaymentTiming,
    guess: Rate,
) -> RateSolution {
    let n = Decimal::from(periods);
    let t = timing.as_decimal();

    let annuity_value = |r: Rate| -> Decimal {
        if r.abs() < SECANT_EPSILON {
            // Linearized around zero; the general form divides by r.
            present_value * (Decimal::ONE + n * r)
                + payment * (Decimal::ONE + r * t) * n
                + future_value
        } else {
            let factor = (Decimal::ONE + r).powd(n);
            present_value * factor
                + payment * (Decimal::ONE / r + t) * (factor - Decimal::ONE)
                + future_value
        }
    };

    // Closed linear form of the value at rate zero.
    let mut y0 = present_value + payment * n + future_value;
    let mut y1 = annuity_value(guess);
    let mut x0 = Decimal::ZERO;
    let mut x1 = guess;
    let mut estimate = guess;
    let mut iterations = 0;

    while (y0 - y1).abs() > SECANT_EPSILON && iterations < SECANT_MAX_ITERATIONS {
        let denominator = y1 - y0;
        if denominator.is_zero() {
            break;
        }
        estimate = (y1 * x0 - y0 * x1) / denominator;
        x0 = x1;
        x1 = estimate;
        y0 = y1;
        y1 = annuity_value(estimate);
        iterations += 1;
    }

    let residual = (y0 - y1).abs();
    RateSolution {
        rate: estimate,
        residual,
        iterations,
        converged: residual <= SECANT_EPSILON,
    }
}
