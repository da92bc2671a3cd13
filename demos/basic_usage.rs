// ============================================================================
// Basic Usage Example
// ============================================================================

use exact_money::prelude::*;

fn main() -> Result<(), MoneyError> {
    // Lossy conversions are logged at debug, normalization at trace
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Exact Money Example ===\n");

    let usd = Currency::new("USD", 10, 2);
    let price = Money::<I64Calculator>::new(4545, usd.clone())?;
    let fee = Money::<I64Calculator>::with_scale(1250, usd.clone(), 3)?;

    println!("Price: {price}");
    println!("Fee:   {fee}");

    // Mixed scales are normalized before adding
    let total = add(&price, &fee)?;
    println!("Total: {total}");
    println!("Price > fee? {}", greater_than(&price, &fee)?);

    // Rendering with fewer digits under every rounding mode
    println!("\n=== Rounding {total} to whole dollars ===");
    for mode in RoundingMode::ALL {
        let options = FormatOptions::new().with_digits(0).with_round(mode);
        println!("  {:<20} {}", mode, to_format(&total, &CodeTransformer, &options)?);
    }

    // Split a bill three ways without losing a cent
    println!("\n=== Allocation ===");
    let bill = Money::<I64Calculator>::new(10_000, usd)?;
    let ratios = [ScaledAmount::from(1), ScaledAmount::from(1), ScaledAmount::from(1)];
    let shares = allocate(&bill, &ratios)?;
    for (index, share) in shares.iter().enumerate() {
        println!("  Share {}: {share}", index + 1);
    }
    println!("  Sum:     {}", sum(&shares)?);

    // Arbitrary precision when i64 is not enough
    println!("\n=== Big Integers ===");
    let calc = BigIntCalculator;
    let eth = Currency::decimal(&calc, "ETH", 18);
    let wei = calc.from_i64(1_000_000_007);
    let balance = Money::<BigIntCalculator>::new(calc.multiply(&wei, &wei)?, eth)?;
    println!("Balance: {balance}");

    // Custom transformer
    let formatter = create_formatter(
        |ctx: &FormatContext<i64>| match &ctx.decimal {
            Some(decimal) => format!("${decimal} ({})", ctx.snapshot.currency),
            None => format!("{} {}", ctx.amount, ctx.snapshot.currency),
        },
        FormatOptions::cents(),
    );
    println!("\nFormatted: {}", formatter.format(&total)?);

    Ok(())
}
