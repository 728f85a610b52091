// ============================================================================
// Basic Usage Example
// ============================================================================

use long_decimal::prelude::*;
use num_bigint::BigInt;

fn main() -> Result<(), NumericError> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Long Decimal Example ===\n");

    // Scale changes under a few of the 36 modes
    let price: FixedDecimal = "2.25".parse()?;
    println!("Rounding {} to one digit:", price);
    for mode in [
        RoundingMode::UP,
        RoundingMode::DOWN,
        RoundingMode::HALF_EVEN,
        RoundingMode::GEOMETRIC_EVEN,
        RoundingMode::HARMONIC_EVEN,
        RoundingMode::CUBIC_EVEN,
    ] {
        println!("  {:<16} {}", mode, price.round_to_scale(1, mode)?);
    }

    // Division stays exact until it is rounded
    println!("\n=== Deferred Division ===");
    let third = FixedDecimal::from(1).checked_div(&FixedDecimal::from(3))?;
    let sum = &(&third + &third) + &third;
    println!("1/3 + 1/3 + 1/3 = {}", sum.round_to_scale(6, RoundingMode::UNNECESSARY)?);

    // Residue rounding: nearest value ending in 1 or 4 (mod 5)
    println!("\n=== Allowed Remainders ===");
    let allowed = [BigInt::from(1), BigInt::from(4)];
    let modulus = BigInt::from(5);
    for raw in ["7", "12", "13.5"] {
        let x: FixedDecimal = raw.parse()?;
        let rounded = x.round_to_allowed_remainders(
            0,
            &allowed,
            &modulus,
            RoundingMode::HALF_UP,
            ZeroRoundingMode::ClosestPreferPlus,
        )?;
        println!("  {} -> {}", x, rounded);
    }

    // Functions share one engine and its cache
    println!("\n=== Functions ===");
    let math = LongMath::with_config(MathConfig::clamping(1_000))?;
    let two = FixedDecimal::from(2);
    println!("sqrt(2)   = {}", math.sqrt(&two, 30, RoundingMode::HALF_EVEN)?);
    println!("cbrt(-2)  = {}", math.cbrt(&-&two, 30, RoundingMode::HALF_EVEN)?);
    println!("exp(1)    = {}", math.exp(&FixedDecimal::one(), 30, RoundingMode::HALF_EVEN)?);
    println!("log(2)    = {}", math.log(&two, 30, RoundingMode::HALF_EVEN)?);
    println!("log10(2)  = {}", math.log10(&two, 30, RoundingMode::HALF_EVEN)?);
    println!("2^0.5     = {}", math.power(&two, &"0.5".parse()?, 30, RoundingMode::HALF_EVEN)?);
    println!("pi        = {}", math.pi(50, RoundingMode::HALF_EVEN)?);

    // Requests above the limit are clamped
    let clamped = math.pi(5_000, RoundingMode::DOWN)?;
    println!("\npi at 5000 digits was clamped to {} digits", clamped.scale());
    println!("Cached function values: {}", math.cache().len());

    Ok(())
}
