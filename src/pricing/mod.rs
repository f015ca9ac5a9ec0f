pub mod tiers;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};

pub use tiers::{quote_tiers, select_lowest_payment_tier, RateTierProvider, TierQuote};

/// customer-facing installment figures for one financing choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingResult {
    pub installment_count: u32,
    pub total_with_interest: Money,
    pub per_installment: Money,
    pub interest_amount: Money,
}

/// price a principal over a number of installments at a flat rate
///
/// an installment count of zero means "pay in full": the whole total
/// becomes the single payment, no error is raised
pub fn compute_pricing(principal: Money, installment_count: u32, rate: Rate) -> Result<PricingResult> {
    if principal.is_negative() {
        return Err(LedgerError::InvalidPrincipal { amount: principal });
    }
    if rate.is_negative() {
        return Err(LedgerError::InvalidRate { rate });
    }

    let total_with_interest = principal.with_rate_applied(rate.as_decimal());
    let per_installment = if installment_count > 0 {
        total_with_interest / Decimal::from(installment_count)
    } else {
        total_with_interest
    };

    Ok(PricingResult {
        installment_count,
        total_with_interest,
        per_installment,
        interest_amount: total_with_interest - principal,
    })
}
