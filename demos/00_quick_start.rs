/// quick start - build a schedule and print the headline numbers
use amortization_rs::{
    generate, summarize, AmortizationSystem, LoanParameters, Money, Rate,
};
use rust_decimal_macros::dec;

fn main() {
    // $1,750,000 mortgage at 11.7% over ten years, French system
    let params = LoanParameters::new(
        Money::from_major(1_750_000),
        Rate::from_percent(dec!(11.7)),
        120,
        AmortizationSystem::Annuity,
    )
    .with_fees(Money::from_major(1050), Money::from_major(175));

    let schedule = generate(&params);
    let totals = summarize(&schedule);

    let first = &schedule.rows()[0];
    println!("first installment:");
    println!("  interest   {}", first.interest.round_dp(2));
    println!("  principal  {}", first.principal_portion.round_dp(2));
    println!("  payment    {}", first.total_payment.round_dp(2));

    println!("over {} months:", totals.effective_months);
    println!("  total interest  {}", totals.interest.round_dp(2));
    println!("  total paid      {}", totals.total_payment.round_dp(2));
}
