use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid principal: {amount} (must be positive)")]
    InvalidPrincipal { amount: Money },

    #[error("invalid tenure: {months} months (must be at least 1)")]
    InvalidTenure { months: u32 },

    #[error("invalid interest rate: {rate} (must not be negative)")]
    InvalidRate { rate: Rate },

    #[error("invalid processing fee rate: {rate} (must not be negative)")]
    InvalidFeeRate { rate: Rate },

    #[error("invalid tax rate: {rate} (must not be negative)")]
    InvalidTaxRate { rate: Rate },
}

pub type Result<T> = std::result::Result<T, EngineError>;
