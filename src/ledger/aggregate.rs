use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::types::{EventId, EventStatus, EventType, Perspective};

use super::LedgerEvent;

/// ledger entry: one event enriched with its running balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub event_id: EventId,
    pub reference: String,
    pub event_type: EventType,
    pub status: EventStatus,
    pub date: DateTime<Utc>,
    pub description: String,
    pub debit: Money,
    pub credit: Money,
    /// net debit-minus-credit total as of this entry
    pub running_balance: Money,
}

/// rolled-up totals across a full ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LedgerSummary {
    pub total_entries: usize,
    pub total_debit: Money,
    pub total_credit: Money,
    /// total debits minus total credits; the net amount still owed
    pub outstanding_balance: Money,
}

/// chronologically ordered ledger with summary totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub perspective: Perspective,
    pub summary: LedgerSummary,
    pub entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// transforms a flat event list into a running-balance ledger
///
/// a single-pass fold over the date-ordered events; the input is never
/// mutated and separate calls share no state
#[derive(Debug, Clone, Copy)]
pub struct LedgerAggregator {
    perspective: Perspective,
}

impl LedgerAggregator {
    pub fn new(perspective: Perspective) -> Self {
        Self { perspective }
    }

    /// build the ledger for a batch of events
    ///
    /// the whole batch is validated up front: one bad amount rejects
    /// everything rather than producing corrupted totals. an empty batch
    /// yields a zero summary, not an error. same-date events keep their
    /// input order
    pub fn build(&self, events: &[LedgerEvent]) -> Result<Ledger> {
        for event in events {
            if event.amount.is_negative() {
                return Err(LedgerError::InvalidEventAmount {
                    reference: event.reference.clone(),
                    amount: event.amount,
                });
            }
        }

        let mut ordered: Vec<&LedgerEvent> = events.iter().collect();
        // stable sort: ties on date preserve input order
        ordered.sort_by_key(|event| event.date);

        let mut entries = Vec::with_capacity(ordered.len());
        let mut running_balance = Money::ZERO;
        let mut total_debit = Money::ZERO;
        let mut total_credit = Money::ZERO;

        for event in ordered {
            let debit = event.debit();
            let credit = event.credit();

            running_balance += debit - credit;
            total_debit += debit;
            total_credit += credit;

            entries.push(LedgerEntry {
                event_id: event.id,
                reference: event.reference.clone(),
                event_type: event.event_type,
                status: event.status,
                date: event.date,
                description: self.perspective.describe(event.event_type).to_string(),
                debit,
                credit,
                running_balance,
            });
        }

        let summary = LedgerSummary {
            total_entries: entries.len(),
            total_debit,
            total_credit,
            outstanding_balance: total_debit - total_credit,
        };

        // the summary must agree with the fold it rolled up
        debug_assert_eq!(
            summary.outstanding_balance,
            entries
                .last()
                .map(|entry| entry.running_balance)
                .unwrap_or(Money::ZERO)
        );

        Ok(Ledger {
            perspective: self.perspective,
            summary,
            entries,
        })
    }
}
