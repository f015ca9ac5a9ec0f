pub mod config;
pub mod decimal;
pub mod errors;
pub mod ledger;
pub mod pricing;
pub mod types;

// re-export key types
pub use config::TierSchedule;
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use ledger::{
    Ledger, LedgerAggregator, LedgerEntry, LedgerEvent, LedgerSummary, LedgerView,
};
pub use pricing::{
    compute_pricing, quote_tiers, select_lowest_payment_tier, PricingResult, RateTierProvider,
    TierQuote,
};
pub use types::{EventId, EventStatus, EventType, Perspective, RateTier};

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
