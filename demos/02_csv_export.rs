/// stream a schedule as CSV to stdout
use amortization_rs::{generate, write_csv, AmortizationSystem, LoanParameters, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = LoanParameters::new(
        Money::from_major(250_000),
        Rate::from_percent(dec!(9.5)),
        36,
        AmortizationSystem::EqualPrincipal,
    )
    .with_fees(Money::from_major(350), Money::from_major(80));

    let schedule = generate(&params);
    write_csv(&schedule, &mut std::io::stdout())?;

    Ok(())
}
