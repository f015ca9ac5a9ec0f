use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::types::RateTier;

use super::{compute_pricing, PricingResult};

/// source of configured rate tiers
///
/// upstream this is a remote configuration service; modeling it as a
/// trait keeps the calculator pure and testable
pub trait RateTierProvider {
    fn rate_tiers(&self) -> Result<Vec<RateTier>>;
}

/// quote for a single tier, as rendered in a financing picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierQuote {
    pub tier: RateTier,
    pub pricing: PricingResult,
}

/// installment count of the tier with the smallest per-installment
/// payment, or `0` when no tier is available
///
/// `0` is a sentinel, never a literal installment count. ties resolve
/// to the first tier in input order. tiers must carry an installment
/// count greater than zero; `TierSchedule` enforces this at
/// configuration time
pub fn select_lowest_payment_tier(principal: Money, tiers: &[RateTier]) -> u32 {
    let mut best: Option<(u32, Money)> = None;

    for tier in tiers {
        let payment = tier_payment(principal, tier);
        match best {
            Some((_, best_payment)) if payment >= best_payment => {}
            _ => best = Some((tier.installment_count, payment)),
        }
    }

    best.map(|(count, _)| count).unwrap_or(0)
}

/// quote every tier for a principal, preserving tier order
pub fn quote_tiers(principal: Money, tiers: &[RateTier]) -> Result<Vec<TierQuote>> {
    tiers
        .iter()
        .map(|&tier| {
            let pricing = compute_pricing(principal, tier.installment_count, tier.rate)?;
            Ok(TierQuote { tier, pricing })
        })
        .collect()
}

fn tier_payment(principal: Money, tier: &RateTier) -> Money {
    principal.with_rate_applied(tier.rate.as_decimal()) / Decimal::from(tier.installment_count)
}
