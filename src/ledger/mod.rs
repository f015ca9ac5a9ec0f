pub mod aggregate;
pub mod view;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::types::{EventId, EventStatus, EventType};

pub use aggregate::{Ledger, LedgerAggregator, LedgerEntry, LedgerSummary};
pub use view::LedgerView;

/// immutable financial event sourced from the disbursement/repayment store
///
/// amounts are non-negative magnitudes; the debit/credit direction comes
/// from the event type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEvent {
    pub id: EventId,
    /// key of the originating record in the upstream store
    pub reference: String,
    pub event_type: EventType,
    pub status: EventStatus,
    pub amount: Money,
    pub date: DateTime<Utc>,
}

impl LedgerEvent {
    pub fn new(
        reference: impl Into<String>,
        event_type: EventType,
        amount: Money,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            reference: reference.into(),
            event_type,
            status: EventStatus::Completed,
            amount,
            date,
        }
    }

    /// disbursement event
    pub fn loan(reference: impl Into<String>, amount: Money, date: DateTime<Utc>) -> Self {
        Self::new(reference, EventType::Loan, amount, date)
    }

    /// repayment event
    pub fn repayment(reference: impl Into<String>, amount: Money, date: DateTime<Utc>) -> Self {
        Self::new(reference, EventType::Repayment, amount, date)
    }

    /// build from a raw store row whose amount is still a string
    pub fn from_raw(
        reference: impl Into<String>,
        event_type: EventType,
        raw_amount: &str,
        date: DateTime<Utc>,
    ) -> Result<Self> {
        let reference = reference.into();
        let amount = Money::from_str_exact(raw_amount).map_err(|_| {
            LedgerError::UnparsableEventAmount {
                reference: reference.clone(),
                raw: raw_amount.to_string(),
            }
        })?;

        Ok(Self::new(reference, event_type, amount, date))
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    /// debit portion of this event (loans only)
    pub fn debit(&self) -> Money {
        match self.event_type {
            EventType::Loan => self.amount,
            EventType::Repayment => Money::ZERO,
        }
    }

    /// credit portion of this event (repayments only)
    pub fn credit(&self) -> Money {
        match self.event_type {
            EventType::Loan => Money::ZERO,
            EventType::Repayment => self.amount,
        }
    }

    /// signed amount: positive for loans, negative for repayments
    pub fn signed_amount(&self) -> Money {
        self.debit() - self.credit()
    }
}
