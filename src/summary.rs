use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::schedule::Schedule;

/// per-field sums over a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SummaryTotals {
    pub interest: Money,
    pub vat: Money,
    pub principal: Money,
    pub insurance: Money,
    pub admin_fee: Money,
    pub total_payment: Money,
    pub prepayment: Money,
    /// periods actually needed to extinguish the balance
    pub effective_months: u32,
}

impl SummaryTotals {
    /// accessory charges plus tax across the whole schedule
    pub fn fees_and_vat(&self) -> Money {
        self.insurance + self.admin_fee + self.vat
    }
}

/// reduce a schedule into summary totals
///
/// pure fold with no failure modes; an empty schedule yields all zeros
pub fn summarize(schedule: &Schedule) -> SummaryTotals {
    schedule
        .iter()
        .fold(SummaryTotals::default(), |mut totals, row| {
            totals.interest += row.interest;
            totals.vat += row.vat;
            totals.principal += row.principal_portion;
            totals.insurance += row.insurance;
            totals.admin_fee += row.admin_fee;
            totals.total_payment += row.total_payment;
            totals.prepayment += row.prepayment_applied;
            totals.effective_months += 1;
            totals
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Rate;
    use crate::types::{AmortizationSystem, LoanParameters, Prepayments, VatBase};
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_schedule_sums_to_zero() {
        let totals = summarize(&Schedule::default());
        assert_eq!(totals, SummaryTotals::default());
        assert_eq!(totals.effective_months, 0);
    }

    #[test]
    fn test_zero_rate_totals() {
        let params = LoanParameters::new(
            Money::from_major(12_000),
            Rate::ZERO,
            12,
            AmortizationSystem::EqualPrincipal,
        )
        .with_fees(Money::from_major(100), Money::from_major(50));

        let totals = summarize(&Schedule::generate(&params));
        assert_eq!(totals.effective_months, 12);
        assert_eq!(totals.interest, Money::ZERO);
        assert_eq!(totals.principal, Money::from_major(12_000));
        assert_eq!(totals.insurance, Money::from_major(1200));
        assert_eq!(totals.admin_fee, Money::from_major(600));
        assert_eq!(totals.total_payment, Money::from_major(13_800));
        assert_eq!(totals.fees_and_vat(), Money::from_major(1800));
    }

    #[test]
    fn test_totals_track_rows() {
        let prepayments: Prepayments =
            [(6, Money::from_major(5000))].into_iter().collect();
        let params = LoanParameters::new(
            Money::from_major(100_000),
            Rate::from_percent(dec!(12)),
            24,
            AmortizationSystem::Annuity,
        )
        .with_vat(Rate::from_percent(dec!(16)), VatBase::InterestPlusFees)
        .with_prepayments(prepayments);

        let schedule = Schedule::generate(&params);
        let totals = summarize(&schedule);

        let mut interest = Money::ZERO;
        let mut payment = Money::ZERO;
        for row in &schedule {
            interest += row.interest;
            payment += row.total_payment;
        }
        assert_eq!(totals.interest, interest);
        assert_eq!(totals.total_payment, payment);
        assert_eq!(totals.prepayment, Money::from_major(5000));
        assert_eq!(totals.effective_months, schedule.effective_months());
    }
}
