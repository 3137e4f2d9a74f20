//! persisted form state
//!
//! the surrounding shell keeps the raw form fields (as the user typed them,
//! strings included) in an external key-value store, restoring them at
//! startup and writing them back on every change. the engine itself never
//! sees this; it only receives the normalized numbers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::Result;
use crate::normalize::{parse_amount, parse_rate_percent, parse_term_months};
use crate::types::{AmortizationSystem, LoanParameters, Prepayments, VatBase};

/// raw form fields, preserved verbatim so a half-typed value survives a reload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub principal: String,
    pub annual_rate_pct: String,
    pub term_months: String,
    pub system: AmortizationSystem,
    pub monthly_insurance: String,
    pub monthly_admin_fee: String,
    pub vat_pct: String,
    pub vat_base: VatBase,
    pub prepayments: BTreeMap<u32, String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            principal: "0".to_string(),
            annual_rate_pct: "11.7".to_string(),
            term_months: "120".to_string(),
            system: AmortizationSystem::Annuity,
            monthly_insurance: "1050".to_string(),
            monthly_admin_fee: "175".to_string(),
            vat_pct: "0".to_string(),
            vat_base: VatBase::None,
            prepayments: BTreeMap::new(),
        }
    }
}

impl FormState {
    /// serialize for the external store
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// restore from the external store
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// normalize every field into engine input
    pub fn to_parameters(&self) -> LoanParameters {
        let prepayments: Prepayments = self
            .prepayments
            .iter()
            .map(|(k, v)| (*k, parse_amount(v)))
            .collect();

        LoanParameters::new(
            parse_amount(&self.principal),
            parse_rate_percent(&self.annual_rate_pct),
            parse_term_months(&self.term_months),
            self.system,
        )
        .with_fees(
            parse_amount(&self.monthly_insurance),
            parse_amount(&self.monthly_admin_fee),
        )
        .with_vat(parse_rate_percent(&self.vat_pct), self.vat_base)
        .with_prepayments(prepayments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::{Money, Rate};
    use rust_decimal_macros::dec;

    #[test]
    fn test_json_round_trip() {
        let mut state = FormState::default();
        state.principal = "$1,750,000".to_string();
        state.prepayments.insert(1, "10,000".to_string());

        let json = state.to_json().unwrap();
        let restored = FormState::from_json(&json).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(FormState::from_json("{not json").is_err());
        assert!(FormState::from_json(r#"{"principal": 42}"#).is_err());
    }

    #[test]
    fn test_to_parameters_normalizes_fields() {
        let mut state = FormState::default();
        state.principal = "$1,750,000.00".to_string();
        state.term_months = "120.5".to_string();
        state.prepayments.insert(1, "10,000".to_string());
        state.prepayments.insert(2, "garbage".to_string());

        let params = state.to_parameters();
        assert_eq!(params.principal, Money::from_major(1_750_000));
        assert_eq!(params.annual_rate, Rate::from_percent(dec!(11.7)));
        assert_eq!(params.term_months, 120);
        assert_eq!(params.monthly_insurance, Money::from_major(1050));
        assert_eq!(params.monthly_admin_fee, Money::from_major(175));
        assert_eq!(params.prepayments.amount_for(1), Money::from_major(10_000));
        assert_eq!(params.prepayments.amount_for(2), Money::ZERO);
    }
}
