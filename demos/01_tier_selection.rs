/// tier selection - quote every configured tier and compare payments
use installment_ledger_rs::{quote_tiers, select_lowest_payment_tier, Money, RateTierProvider, TierSchedule};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let principal = Money::from_major(10_000);

    // tier schedules arrive as configuration records, often as json
    let schedule = TierSchedule::from_json(
        r#"[
            {"installment_count": 3, "rate": "0.015"},
            {"installment_count": 6, "rate": "0.02"},
            {"installment_count": 12, "rate": "0.035"}
        ]"#,
    )?;

    let tiers = schedule.rate_tiers()?;
    for quote in quote_tiers(principal, &tiers)? {
        println!(
            "{:>2} installments at {}: {} per installment, {} total",
            quote.tier.installment_count,
            quote.tier.rate,
            quote.pricing.per_installment,
            quote.pricing.total_with_interest,
        );
    }

    let best = select_lowest_payment_tier(principal, &tiers);
    println!("selected tier: {best} installments");

    Ok(())
}
