use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid principal: {amount}")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidRate {
        rate: Rate,
    },

    #[error("invalid event amount: {amount} on event {reference}")]
    InvalidEventAmount {
        reference: String,
        amount: Money,
    },

    #[error("unparsable event amount: {raw:?} on event {reference}")]
    UnparsableEventAmount {
        reference: String,
        raw: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
