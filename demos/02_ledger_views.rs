/// ledger views - aggregate disbursements and repayments for two audiences
use installment_ledger_rs::chrono::{TimeZone, Utc};
use installment_ledger_rs::{LedgerAggregator, LedgerEvent, LedgerView, Money, Perspective};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let events = vec![
        LedgerEvent::loan(
            "ord-1042",
            Money::from_major(5_000),
            Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
        ),
        LedgerEvent::repayment(
            "pay-2201",
            Money::from_major(2_000),
            Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap(),
        ),
        LedgerEvent::repayment(
            "pay-2202",
            Money::from_major(1_000),
            Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
        ),
    ];

    // same arithmetic, different labels per audience
    for perspective in [Perspective::Admin, Perspective::Financier] {
        let ledger = LedgerAggregator::new(perspective).build(&events)?;
        println!("--- {perspective:?} ---");
        println!("{}", LedgerView::from_ledger(&ledger).to_json_pretty()?);
    }

    Ok(())
}
