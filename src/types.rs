use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Rate;

/// unique identifier for a ledger event
pub type EventId = Uuid;

/// kind of financial event in a loan ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    /// disbursement to the borrower, increases what is owed
    Loan,
    /// repayment from the borrower, decreases what is owed
    Repayment,
}

/// processing status reported by the upstream disbursement store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Pending,
    Completed,
    Cancelled,
}

/// audience a ledger is rendered for
///
/// perspective never changes the arithmetic, only which label each
/// entry carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Perspective {
    Admin,
    Financier,
}

impl Perspective {
    /// entry label for an event type under this perspective
    pub fn describe(&self, event_type: EventType) -> &'static str {
        match (self, event_type) {
            (Perspective::Admin, EventType::Loan) => "loan disbursed",
            (Perspective::Admin, EventType::Repayment) => "repayment received",
            (Perspective::Financier, EventType::Loan) => "funds advanced",
            (Perspective::Financier, EventType::Repayment) => "collection posted",
        }
    }
}

/// configured pairing of an installment count and its interest rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTier {
    pub installment_count: u32,
    pub rate: Rate,
}

impl RateTier {
    pub fn new(installment_count: u32, rate: Rate) -> Self {
        Self {
            installment_count,
            rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perspective_labels_differ() {
        assert_ne!(
            Perspective::Admin.describe(EventType::Loan),
            Perspective::Financier.describe(EventType::Loan)
        );
        assert_ne!(
            Perspective::Admin.describe(EventType::Repayment),
            Perspective::Financier.describe(EventType::Repayment)
        );
    }
}
