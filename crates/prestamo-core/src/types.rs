use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Unit in which the loan term is expressed.
///
/// Installments are always monthly; a term in years simply multiplies the
/// period count by twelve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Periodicity {
    #[default]
    #[serde(rename = "meses")]
    Months,
    #[serde(rename = "anios")]
    Years,
}

/// A loan simulation request.
///
/// Wire names keep the legacy Spanish contract this engine replaces.
/// The optional fee fields default to zero at deserialization; an absent
/// field and an explicit zero are indistinguishable from here on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Amount borrowed (present value of the loan). Must be positive.
    #[serde(rename = "cantidad")]
    pub principal: Money,
    /// Nominal annual rate as a fraction (0.05 = 5%).
    #[serde(rename = "tipoInteres")]
    pub nominal_annual_rate: Rate,
    /// Term length, in units of `periodicity`. Must be positive. Signed
    /// so that negative wire input reaches the validator instead of
    /// failing deserialization.
    #[serde(rename = "plazo")]
    pub term: i64,
    #[serde(rename = "periodicidad", default)]
    pub periodicity: Periodicity,
    /// Up-front origination fee as a fraction of principal.
    #[serde(rename = "comisionApertura", default)]
    pub origination_fee_rate: Rate,
    /// Other up-front costs, as an absolute amount.
    #[serde(rename = "otrosGastos", default)]
    pub other_costs: Money,
}

impl LoanRequest {
    /// The term expressed in months, the payment's natural period.
    pub fn period_count(&self) -> i64 {
        match self.periodicity {
            Periodicity::Months => self.term,
            Periodicity::Years => self.term * 12,
        }
    }
}

/// One row of the amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based installment number.
    #[serde(rename = "numeroCuota")]
    pub index: u32,
    /// Interest portion of the installment.
    #[serde(rename = "interes")]
    pub interest: Money,
    /// Principal repaid by the installment.
    #[serde(rename = "amortizacion")]
    pub principal_portion: Money,
    /// Balance outstanding after the installment. Exactly zero on the
    /// final row.
    #[serde(rename = "pendiente")]
    pub remaining_balance: Money,
}

/// Full economics of a simulated loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOutcome {
    #[serde(rename = "tieneComisionDeApertura")]
    pub has_origination_fee: bool,
    /// Constant monthly installment, presented as a positive amount.
    #[serde(rename = "cuota")]
    pub payment: Money,
    /// Origination fee in absolute terms (principal × fee rate).
    #[serde(rename = "importeApertura")]
    pub origination_fee_amount: Money,
    /// Installment × period count, plus the origination fee.
    #[serde(rename = "totalFinanciacion")]
    pub total_financing_cost: Money,
    /// Total financing cost minus the principal.
    #[serde(rename = "importeIntereses")]
    pub total_interest_cost: Money,
    /// One entry per period; length equals the period count.
    #[serde(rename = "tablaAmortizacion")]
    pub schedule: Vec<ScheduleEntry>,
    /// Effective annual rate (TAE) including up-front fees.
    #[serde(rename = "tae")]
    pub effective_annual_rate: Rate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_period_count_months_is_term() {
        let request = LoanRequest {
            principal: dec!(10_000),
            nominal_annual_rate: dec!(0.05),
            term: 18,
            periodicity: Periodicity::Months,
            origination_fee_rate: Decimal::ZERO,
            other_costs: Decimal::ZERO,
        };
        assert_eq!(request.period_count(), 18);
    }

    #[test]
    fn test_period_count_years_multiplies_by_twelve() {
        let request = LoanRequest {
            principal: dec!(10_000),
            nominal_annual_rate: dec!(0.05),
            term: 5,
            periodicity: Periodicity::Years,
            origination_fee_rate: Decimal::ZERO,
            other_costs: Decimal::ZERO,
        };
        assert_eq!(request.period_count(), 60);
    }

    #[test]
    fn test_periodicity_defaults_to_months() {
        assert_eq!(Periodicity::default(), Periodicity::Months);
    }
}
