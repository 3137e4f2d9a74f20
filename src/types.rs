use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::decimal::{Money, Rate};

/// amortization system for the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmortizationSystem {
    /// French system: fixed total payment, principal portion grows over time
    Annuity,
    /// German system: fixed principal portion, total payment shrinks over time
    EqualPrincipal,
}

/// which charges the VAT percentage applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VatBase {
    /// no VAT charged
    None,
    /// insurance + admin fee
    FeesOnly,
    /// interest + insurance + admin fee
    InterestPlusFees,
}

/// sparse map of extraordinary prepayments keyed by installment number
///
/// a missing installment means zero; lookups never fail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Prepayments(BTreeMap<u32, Money>);

impl Prepayments {
    pub fn new() -> Self {
        Prepayments(BTreeMap::new())
    }

    /// set the prepayment for an installment, replacing any previous amount
    pub fn set(&mut self, installment: u32, amount: Money) {
        self.0.insert(installment, amount);
    }

    /// remove the prepayment for an installment
    pub fn clear(&mut self, installment: u32) {
        self.0.remove(&installment);
    }

    /// prepayment requested for an installment, zero when unset
    pub fn amount_for(&self, installment: u32) -> Money {
        self.0.get(&installment).copied().unwrap_or(Money::ZERO)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, Money)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}

impl FromIterator<(u32, Money)> for Prepayments {
    fn from_iter<I: IntoIterator<Item = (u32, Money)>>(iter: I) -> Self {
        Prepayments(iter.into_iter().collect())
    }
}

/// full parameter set for one schedule run
///
/// all fields are accepted as-is; zero or negative amounts produce degenerate
/// schedules rather than errors, mirroring a form-driven tool where partially
/// typed input must not crash the computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub system: AmortizationSystem,
    pub monthly_insurance: Money,
    pub monthly_admin_fee: Money,
    pub vat_rate: Rate,
    pub vat_base: VatBase,
    pub prepayments: Prepayments,
}

impl LoanParameters {
    /// new parameter set with no fees, no VAT and no prepayments
    ///
    /// term is clamped to a minimum of one month
    pub fn new(
        principal: Money,
        annual_rate: Rate,
        term_months: u32,
        system: AmortizationSystem,
    ) -> Self {
        Self {
            principal,
            annual_rate,
            term_months: term_months.max(1),
            system,
            monthly_insurance: Money::ZERO,
            monthly_admin_fee: Money::ZERO,
            vat_rate: Rate::ZERO,
            vat_base: VatBase::None,
            prepayments: Prepayments::new(),
        }
    }

    /// set recurring accessory charges (insurance + admin fee)
    pub fn with_fees(mut self, insurance: Money, admin_fee: Money) -> Self {
        self.monthly_insurance = insurance;
        self.monthly_admin_fee = admin_fee;
        self
    }

    /// set the VAT percentage and the base it applies to
    pub fn with_vat(mut self, vat_rate: Rate, vat_base: VatBase) -> Self {
        self.vat_rate = vat_rate;
        self.vat_base = vat_base;
        self
    }

    /// set the prepayment map
    pub fn with_prepayments(mut self, prepayments: Prepayments) -> Self {
        self.prepayments = prepayments;
        self
    }

    /// same parameters with the prepayment map emptied
    pub fn without_prepayments(&self) -> Self {
        let mut baseline = self.clone();
        baseline.prepayments = Prepayments::new();
        baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepayments_default_to_zero() {
        let mut prepayments = Prepayments::new();
        prepayments.set(3, Money::from_major(10_000));

        assert_eq!(prepayments.amount_for(3), Money::from_major(10_000));
        assert_eq!(prepayments.amount_for(1), Money::ZERO);
        assert_eq!(prepayments.amount_for(999), Money::ZERO);

        prepayments.clear(3);
        assert_eq!(prepayments.amount_for(3), Money::ZERO);
        assert!(prepayments.is_empty());
    }

    #[test]
    fn test_term_clamped_to_one() {
        let params = LoanParameters::new(
            Money::from_major(1000),
            Rate::ZERO,
            0,
            AmortizationSystem::Annuity,
        );
        assert_eq!(params.term_months, 1);
    }

    #[test]
    fn test_without_prepayments() {
        let prepayments: Prepayments = [(1, Money::from_major(500))].into_iter().collect();
        let params = LoanParameters::new(
            Money::from_major(1000),
            Rate::ZERO,
            12,
            AmortizationSystem::EqualPrincipal,
        )
        .with_prepayments(prepayments);

        let baseline = params.without_prepayments();
        assert!(baseline.prepayments.is_empty());
        assert_eq!(baseline.principal, params.principal);
        assert_eq!(baseline.term_months, params.term_months);
    }
}
