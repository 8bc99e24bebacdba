//! Error types for color and catalog-name parsing
//!
//! Every variant of [`ParseColorError`] is an invalid color format: the input
//! could not be read as a color. Callers report it and move on; nothing in the
//! core keeps state that a failed parse could corrupt.

use thiserror::Error;

/// Error returned when a color string or channel triple cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Nothing left after trimming whitespace and the leading `#`
    #[error("invalid color format: empty input")]
    Empty,
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid color format: expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),
    /// Non-hexadecimal character in a hex color
    #[error("invalid color format: {0:?} is not a hex color")]
    InvalidHex(String),
    /// A channel was outside 0..=255
    #[error("invalid color format: channel value {0} out of range 0..=255")]
    ChannelOutOfRange(i64),
    /// Input is neither hex nor `rgb(r, g, b)`
    #[error("invalid color format: unrecognized color {0:?}")]
    Unrecognized(String),
}

/// Error returned when a name does not match any catalog kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown catalog {0:?}, expected one of: names, ral, pantone, ncs")]
pub struct UnknownCatalogError(pub String);
