/// what a yearly extra payment buys on a ten-year mortgage
use amortization_rs::{
    compare_with_baseline, AmortizationSystem, LoanParameters, Money, Prepayments, Rate,
};
use rust_decimal_macros::dec;

fn main() {
    // 50,000 extra every December
    let prepayments: Prepayments = (1..=9)
        .map(|year| (year * 12, Money::from_major(50_000)))
        .collect();

    let params = LoanParameters::new(
        Money::from_major(1_750_000),
        Rate::from_percent(dec!(11.7)),
        120,
        AmortizationSystem::Annuity,
    )
    .with_fees(Money::from_major(1050), Money::from_major(175))
    .with_prepayments(prepayments);

    let impact = compare_with_baseline(&params);
    println!("interest saved: {}", impact.interest_saved.round_dp(2));
    println!("months saved:   {}", impact.months_saved);
}
