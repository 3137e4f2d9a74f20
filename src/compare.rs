use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::schedule::Schedule;
use crate::summary::summarize;
use crate::types::LoanParameters;

/// what the prepayment map buys relative to a no-prepayment baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PrepaymentImpact {
    pub interest_saved: Money,
    pub months_saved: u32,
}

/// run the engine with and without the prepayment map and diff the results
///
/// the baseline is a full second run rather than cached bookkeeping, keeping
/// the engine a pure function of its inputs; both deltas are floored at zero
/// so rounding noise never reports a negative saving
pub fn compare_with_baseline(params: &LoanParameters) -> PrepaymentImpact {
    let actual = Schedule::generate(params);
    let baseline = Schedule::generate(&params.without_prepayments());

    let actual_totals = summarize(&actual);
    let baseline_totals = summarize(&baseline);

    PrepaymentImpact {
        interest_saved: (baseline_totals.interest - actual_totals.interest).max(Money::ZERO),
        months_saved: baseline
            .effective_months()
            .saturating_sub(actual.effective_months()),
    }
}
