// ============================================================================
// Expansion Demo
// ============================================================================

use exact_ratio::prelude::*;

fn main() -> Result<(), RatioError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Exact Ratio Example ===\n");

    // Fixed-width rationals
    let r = Ratio64::new(723, 70)?;
    println!("{r} in base 10: {}", r.to_base(10)?);

    match Ratio8::new(i8::MIN, -1) {
        Ok(r) => println!("unexpected: {r}"),
        Err(e) => println!("Ratio8::new(-128, -1): {e}"),
    }

    // Exact float values
    println!("\nWhat binary64 really stores:");
    for value in [0.1f64, 0.5, -0.75, 1.0e-3] {
        let bits = Float64Bits::from_f64(value);
        let exact = BigRatio::from_exact_f64(value)?;
        println!("{value:>8} = {exact}");
        println!("         {:?}", bits);
        println!("         {}", exact.to_base(10)?);
    }

    // Other bases and a long cycle (1/97 is past the bounded tracker, so it uses the map)
    println!("\nOther bases:");
    let third = BigRatio::new(1, 3)?;
    println!("1/3 in base 2: {}", third.to_base(2)?);

    let hex = Expander::new(ExpansionConfig::hexadecimal().with_radix_marker("p"))?;
    println!("31/2 in base 16: {}", hex.render(&BigRatio::new(31, 2)?));

    let long = BigRatio::new(1, 97)?.to_base(10)?;
    println!("1/97 has period {}", long.period());

    Ok(())
}
