use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// A computed price that cannot be shown to a shopper.
///
/// Only reachable when the base price itself is corrupt (negative, or large
/// enough to overflow the 96-bit decimal mantissa).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("price invariant breached for base price {base_price}: {reason}")]
    InvariantBreach { base_price: Decimal, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionParseError {
    #[error("unknown size code \"{0}\"")]
    UnknownSize(String),

    #[error("unknown color \"{0}\"")]
    UnknownColor(String),
}
