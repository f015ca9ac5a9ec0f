/// quick start - price a purchase and pick the cheapest financing tier
use installment_ledger_rs::{select_lowest_payment_tier, Money, TierSchedule};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // a $10,000 purchase financed against the standard schedule
    let principal = Money::from_major(10_000);
    let schedule = TierSchedule::standard();

    let best = select_lowest_payment_tier(principal, schedule.tiers());
    if best == 0 {
        println!("no financing tier available");
    } else {
        println!("lowest payment with {best} installments");
    }

    Ok(())
}
