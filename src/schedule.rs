use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{AmortizationSystem, LoanParameters, VatBase};

/// one installment of an amortization schedule
///
/// `opening_balance` is the balance before this period's amortization;
/// `base_installment` is principal + interest before fees and VAT
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentRow {
    pub installment_number: u32,
    pub opening_balance: Money,
    pub interest: Money,
    pub vat: Money,
    pub principal_portion: Money,
    pub base_installment: Money,
    pub insurance: Money,
    pub admin_fee: Money,
    pub total_payment: Money,
    pub prepayment_applied: Money,
}

/// ordered sequence of installments, at most `term_months` long
///
/// the schedule ends early when prepayments extinguish the balance before
/// the nominal term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Schedule {
    rows: Vec<InstallmentRow>,
}

/// generate the amortization schedule for a parameter set
///
/// pure function of its input: identical parameters always yield an
/// identical schedule, and no input is rejected — zero or negative values
/// produce degenerate rows instead of errors
pub fn generate(params: &LoanParameters) -> Schedule {
    Schedule::generate(params)
}

impl Schedule {
    /// generate payment schedule
    pub fn generate(params: &LoanParameters) -> Self {
        let term = params.term_months.max(1);
        let monthly_rate = params.annual_rate.monthly_rate();

        // fixed amount precomputed once: total payment for the French
        // system, principal portion for the German system
        let fixed = match params.system {
            AmortizationSystem::Annuity => {
                annuity_payment(params.principal, monthly_rate, term)
            }
            AmortizationSystem::EqualPrincipal => params.principal / Decimal::from(term),
        };

        let mut rows = Vec::new();
        let mut balance = params.principal;

        for k in 1..=term {
            if !balance.is_positive() {
                break;
            }

            let interest = balance.apply_rate(monthly_rate);

            let (mut base_installment, mut principal_portion) = match params.system {
                AmortizationSystem::Annuity => (fixed, (fixed - interest).max(Money::ZERO)),
                AmortizationSystem::EqualPrincipal => (interest + fixed, fixed),
            };

            // a prepayment can never exceed the balance left after the
            // regular principal portion, and cannot be negative
            let prepayment = params
                .prepayments
                .amount_for(k)
                .max(Money::ZERO)
                .min((balance - principal_portion).max(Money::ZERO));

            // final-period overshoot: never amortize more principal than exists
            if principal_portion + prepayment > balance {
                principal_portion = (balance - prepayment).max(Money::ZERO);
                base_installment = interest + principal_portion;
            }

            let vat_base = match params.vat_base {
                VatBase::None => Money::ZERO,
                VatBase::FeesOnly => params.monthly_insurance + params.monthly_admin_fee,
                VatBase::InterestPlusFees => {
                    interest + params.monthly_insurance + params.monthly_admin_fee
                }
            };
            let vat = vat_base.apply_rate(params.vat_rate);

            let total_payment =
                base_installment + params.monthly_insurance + params.monthly_admin_fee + vat;

            rows.push(InstallmentRow {
                installment_number: k,
                opening_balance: balance,
                interest,
                vat,
                principal_portion,
                base_installment,
                insurance: params.monthly_insurance,
                admin_fee: params.monthly_admin_fee,
                total_payment,
                prepayment_applied: prepayment,
            });

            balance = (balance - principal_portion - prepayment).max(Money::ZERO);
        }

        Schedule { rows }
    }

    pub fn rows(&self) -> &[InstallmentRow] {
        &self.rows
    }

    /// number of periods actually needed to extinguish the balance
    pub fn effective_months(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InstallmentRow> {
        self.rows.iter()
    }

    /// get the row for a specific installment
    pub fn row(&self, installment_number: u32) -> Option<&InstallmentRow> {
        self.rows.get(installment_number.checked_sub(1)? as usize)
    }

    /// balance left after a given installment
    ///
    /// installment 0 is the balance before any payment; anything past the
    /// last row is an extinguished balance
    pub fn balance_after(&self, installment_number: u32) -> Money {
        if let Some(row) = self.row(installment_number) {
            return (row.opening_balance - row.principal_portion - row.prepayment_applied)
                .max(Money::ZERO);
        }

        if installment_number as usize > self.rows.len() {
            Money::ZERO
        } else {
            self.rows
                .first()
                .map(|r| r.opening_balance)
                .unwrap_or(Money::ZERO)
        }
    }

    /// due date of each installment, stepping whole calendar months from
    /// the given start date
    pub fn payment_dates(&self, start_date: DateTime<Utc>) -> Vec<DateTime<Utc>> {
        self.rows
            .iter()
            .map(|r| {
                start_date
                    .checked_add_months(Months::new(r.installment_number))
                    .unwrap_or(start_date)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a InstallmentRow;
    type IntoIter = std::slice::Iter<'a, InstallmentRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// fixed payment for the French system
///
/// A = P * r * (1 + r)^n / ((1 + r)^n - 1)
///
/// at zero rate the formula degenerates; the payment falls back to straight
/// principal / term, matching the German system with zero interest
fn annuity_payment(principal: Money, monthly_rate: Rate, term_months: u32) -> Money {
    if term_months == 0 {
        return principal;
    }

    if monthly_rate.is_zero() {
        return principal / Decimal::from(term_months);
    }

    let r = monthly_rate.as_decimal();
    let base = match Decimal::ONE.checked_add(r) {
        Some(base) => base,
        None => return principal.apply_rate(monthly_rate),
    };

    let mut compound = Decimal::ONE;
    for _ in 0..term_months {
        compound = match compound.checked_mul(base) {
            Some(next) => next,
            // once (1+r)^n stops being representable, compound/(compound-1)
            // is within rounding of 1 and the payment of pure interest
            None => break,
        };
    }

    let denominator = compound - Decimal::ONE;
    if denominator.is_zero() {
        return principal / Decimal::from(term_months);
    }

    principal.apply_rate(monthly_rate) * (compound / denominator)
}
