/// round-trip raw form fields through JSON, then compute from them
use amortization_rs::{generate, summarize, FormState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut form = FormState::default();
    form.principal = "$1,750,000.00".to_string();
    form.prepayments.insert(12, "25,000".to_string());

    // what the shell writes to its key-value store on every change
    let saved = form.to_json()?;
    println!("persisted: {saved}");

    // what it reads back at startup
    let restored = FormState::from_json(&saved)?;
    let totals = summarize(&generate(&restored.to_parameters()));

    println!("effective months: {}", totals.effective_months);
    println!("total interest:   {}", totals.interest.round_dp(2));

    Ok(())
}
