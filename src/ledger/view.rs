/// serialization support for ledger responses
use serde::{Deserialize, Serialize};

use super::aggregate::{Ledger, LedgerEntry, LedgerSummary};

/// wire shape consumed by ledger-display clients: `{ summary, entries }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerView {
    pub summary: LedgerSummary,
    pub entries: Vec<LedgerEntry>,
}

impl LedgerView {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        Self {
            summary: ledger.summary,
            entries: ledger.entries.clone(),
        }
    }

    /// convert to json string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Ledger> for LedgerView {
    fn from(ledger: Ledger) -> Self {
        Self {
            summary: ledger.summary,
            entries: ledger.entries,
        }
    }
}
