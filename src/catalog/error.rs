//! Error types for catalog loading and price parsing.

use thiserror::Error;

use super::deal::DealId;

/// Errors produced while parsing a display price such as `$3.60`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Nothing left after trimming whitespace and the currency sign
    #[error("price is empty")]
    Empty,

    /// Non numeric characters or a malformed decimal point
    #[error("invalid price: {_0}")]
    Invalid(String),

    /// Prices are kept in whole cents and are never rounded implicitly
    #[error("price has more than two decimal places: {_0}")]
    TooPrecise(String),

    /// A bare yaml number with a fraction or sign
    #[error("price {_0} must be a quoted string such as \"$3.60\"")]
    Unquoted(String),

    /// The amount does not fit in cents
    #[error("price is too large: {_0}")]
    Overflow(String),
}

/// Errors produced while loading a deal catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog file: {_0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid catalog yaml
    #[error("failed to parse catalog: {_0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Catalog has no deals to show
    #[error("catalog contains no deals")]
    Empty,

    /// Two deals share an identifier
    #[error("duplicate deal id: {_0}")]
    DuplicateId(DealId),

    /// Discounted price is higher than the original price
    #[error("deal {_0} is discounted above its original price")]
    InvertedPrice(DealId),
}
