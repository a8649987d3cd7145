use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use prestamo_core::{simulate, LoanRequest, Periodicity, PrestamoError};

fn base_request() -> LoanRequest {
    LoanRequest {
        principal: dec!(10_000),
        nominal_annual_rate: dec!(0.05),
        term: 12,
        periodicity: Periodicity::Months,
        origination_fee_rate: Decimal::ZERO,
        other_costs: Decimal::ZERO,
    }
}

// A 2.3% origination fee plus 100 of other costs on the base loan.
fn fee_request() -> LoanRequest {
    LoanRequest {
        origination_fee_rate: dec!(0.023),
        other_costs: dec!(100),
        ..base_request()
    }
}

// ===========================================================================
// Interest-free loans
// ===========================================================================

#[test]
fn test_interest_free_loan_costs_nothing() {
    let request = LoanRequest {
        principal: dec!(12_000),
        nominal_annual_rate: Decimal::ZERO,
        term: 12,
        periodicity: Periodicity::Months,
        origination_fee_rate: Decimal::ZERO,
        other_costs: Decimal::ZERO,
    };
    let outcome = simulate(&request).unwrap();

    // Straight-line split: 12,000 / 12, exactly.
    assert_eq!(outcome.payment, dec!(1_000));
    assert_eq!(outcome.total_financing_cost, dec!(12_000));
    assert_eq!(outcome.total_interest_cost, Decimal::ZERO);
    assert_eq!(outcome.effective_annual_rate, Decimal::ZERO);
}

// ===========================================================================
// Loans with interest
// ===========================================================================

#[test]
fn test_interest_bearing_loan_costs_more_than_principal() {
    let request = LoanRequest {
        principal: dec!(12_000),
        ..base_request()
    };
    let outcome = simulate(&request).unwrap();

    assert!(outcome.total_financing_cost > dec!(12_000));
    assert!(outcome.payment * dec!(12) > dec!(12_000));
}

#[test]
fn test_installment_matches_annuity_formula() {
    let outcome = simulate(&base_request()).unwrap();
    // 10,000 over 12 months at 5% nominal => ~856.07 per month.
    assert!((outcome.payment - dec!(856.07)).abs() < dec!(0.01));
}

#[test]
fn test_tae_without_fees_is_compounded_nominal() {
    let outcome = simulate(&base_request()).unwrap();
    // (1 + 0.05/12)^12 - 1 ~= 5.1162%
    assert!((outcome.effective_annual_rate - dec!(0.051162)).abs() < dec!(0.0005));
}

// ===========================================================================
// TAE monotonicity
// ===========================================================================

#[test]
fn test_tae_increases_with_nominal_rate() {
    let base = simulate(&base_request()).unwrap();
    let bumped = simulate(&LoanRequest {
        nominal_annual_rate: dec!(0.06),
        ..base_request()
    })
    .unwrap();
    assert!(base.effective_annual_rate < bumped.effective_annual_rate);
}

#[test]
fn test_tae_increases_with_origination_fee() {
    let base = simulate(&base_request()).unwrap();
    let bumped = simulate(&LoanRequest {
        origination_fee_rate: dec!(0.023),
        ..base_request()
    })
    .unwrap();
    assert!(base.effective_annual_rate < bumped.effective_annual_rate);
}

#[test]
fn test_tae_increases_with_other_costs() {
    let base = simulate(&base_request()).unwrap();
    let bumped = simulate(&LoanRequest {
        other_costs: dec!(200),
        ..base_request()
    })
    .unwrap();
    assert!(base.effective_annual_rate < bumped.effective_annual_rate);
}

// ===========================================================================
// Amortization schedule
// ===========================================================================

#[test]
fn test_schedule_length_matches_term_in_months() {
    let outcome = simulate(&base_request()).unwrap();
    assert_eq!(outcome.schedule.len(), 12);
}

#[test]
fn test_schedule_length_for_annual_periodicity() {
    let request = LoanRequest {
        term: 5,
        periodicity: Periodicity::Years,
        ..base_request()
    };
    let outcome = simulate(&request).unwrap();
    assert_eq!(outcome.schedule.len(), 60);
}

#[test]
fn test_schedule_last_entry_balance_is_exactly_zero() {
    let outcome = simulate(&fee_request()).unwrap();
    assert_eq!(
        outcome.schedule.last().unwrap().remaining_balance,
        Decimal::ZERO
    );
}

#[test]
fn test_schedule_entries_are_numbered_from_one() {
    let outcome = simulate(&base_request()).unwrap();
    for (position, entry) in outcome.schedule.iter().enumerate() {
        assert_eq!(entry.index as usize, position + 1);
    }
}

// ===========================================================================
// Validation
// ===========================================================================

#[test]
fn test_negative_principal_yields_single_message() {
    let request = LoanRequest {
        principal: dec!(-1),
        ..base_request()
    };
    let PrestamoError::Validation { messages } = simulate(&request).unwrap_err();
    assert_eq!(messages, vec!["La cantidad debe ser mayor que cero"]);
}

#[test]
fn test_all_four_constraints_reported_in_order() {
    let request = LoanRequest {
        principal: dec!(-1),
        nominal_annual_rate: dec!(0.05),
        term: -1,
        periodicity: Periodicity::Months,
        origination_fee_rate: dec!(-1),
        other_costs: dec!(-1),
    };
    let PrestamoError::Validation { messages } = simulate(&request).unwrap_err();
    assert_eq!(
        messages,
        vec![
            "La cantidad debe ser mayor que cero",
            "El plazo debe ser mayor que cero",
            "La comisión de apertura debe ser mayor o igual que cero",
            "Los gastos adicionales deben ser mayor o igual que cero",
        ]
    );
}

// ===========================================================================
// The reference scenario
// ===========================================================================

#[test]
fn test_reference_scenario_with_fees() {
    let outcome = simulate(&fee_request()).unwrap();

    assert!(outcome.has_origination_fee);
    assert_eq!(outcome.origination_fee_amount, dec!(230));
    assert_eq!(outcome.schedule.len(), 12);
    assert!((outcome.payment - dec!(856.07)).abs() < dec!(0.01));

    // Fees raise the effective rate above the no-fee equivalent.
    let without_fees = simulate(&base_request()).unwrap();
    assert!(outcome.effective_annual_rate > without_fees.effective_annual_rate);
}

#[test]
fn test_simulation_is_idempotent() {
    let first = simulate(&fee_request()).unwrap();
    let second = simulate(&fee_request()).unwrap();
    assert_eq!(first, second);
}

// ===========================================================================
// Wire contract
// ===========================================================================

#[test]
fn test_request_deserializes_from_legacy_wire_names() {
    let request: LoanRequest = serde_json::from_value(json!({
        "cantidad": 10_000,
        "tipoInteres": 0.05,
        "plazo": 12,
        "periodicidad": "meses",
    }))
    .unwrap();

    assert_eq!(request.principal, dec!(10_000));
    assert_eq!(request.nominal_annual_rate, dec!(0.05));
    assert_eq!(request.term, 12);
    assert_eq!(request.periodicity, Periodicity::Months);
    // Absent fee fields resolve to zero at construction.
    assert_eq!(request.origination_fee_rate, Decimal::ZERO);
    assert_eq!(request.other_costs, Decimal::ZERO);
}

#[test]
fn test_annual_periodicity_wire_name() {
    let request: LoanRequest = serde_json::from_value(json!({
        "cantidad": 10_000,
        "tipoInteres": 0.05,
        "plazo": 2,
        "periodicidad": "anios",
    }))
    .unwrap();
    assert_eq!(request.periodicity, Periodicity::Years);
}

#[test]
fn test_outcome_serializes_with_legacy_wire_names() {
    let outcome = simulate(&fee_request()).unwrap();
    let value = serde_json::to_value(&outcome).unwrap();
    let object = value.as_object().unwrap();

    for key in [
        "tieneComisionDeApertura",
        "cuota",
        "importeApertura",
        "totalFinanciacion",
        "importeIntereses",
        "tablaAmortizacion",
        "tae",
    ] {
        assert!(object.contains_key(key), "missing key {key}");
    }

    let first_row = value["tablaAmortizacion"][0].as_object().unwrap();
    for key in ["numeroCuota", "interes", "amortizacion", "pendiente"] {
        assert!(first_row.contains_key(key), "missing key {key}");
    }
}
