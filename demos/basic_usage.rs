// ============================================================================
// Basic Usage Example
// ============================================================================

use micro_amount::prelude::*;
use tracing::{info, warn};

fn main() -> Result<(), AmountError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Micro Amount Example ===\n");

    let balance = ScaledAmount::from_units(100)?;
    let withdrawal: ScaledAmount = "0.1".parse()?;

    let remaining = balance.checked_sub(withdrawal)?;
    if remaining.is_negative() {
        warn!(%remaining, "not enough money");
        return Ok(());
    }
    info!(balance = %balance, withdrawal = %withdrawal, "applied withdrawal");
    println!("Remaining: {}", remaining.to_decimal_string()?);

    // Split three ways, rounding half away from zero
    let share = remaining.div_round(3)?;
    println!("Each share: {}", share.to_decimal_string()?);

    // Seventh digit decides rounding
    for literal in ["22.2222224", "22.2222225", "-0.9999995"] {
        let amount = ScaledAmount::parse(literal)?;
        println!("{literal:>12} -> {}", amount.to_decimal_string()?);
    }

    // Rejections are values, not panics
    println!("\n=== Rejected Inputs ===");
    for literal in ["1.2.3", "nan", "9000000000.000001", "625e-3"] {
        match ScaledAmount::parse(literal) {
            Ok(amount) => println!("{literal:>18} -> {amount}"),
            Err(err) => println!("{literal:>18} -> error: {err}"),
        }
    }

    let lenient = ScaledAmount::parse_with("625e-3", &ParseConfig::lenient())?;
    println!("\nWith exponents enabled, 625e-3 -> {}", lenient.to_decimal_string()?);

    let as_float = ScaledAmount::from_f64(0.1)?.checked_add(ScaledAmount::from_f64(0.2)?)?;
    println!("0.1 + 0.2 = {}", as_float.to_decimal_string()?);

    Ok(())
}
