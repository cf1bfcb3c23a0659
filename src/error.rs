//! Error types for SNBT construction and formatting.
//!
//! Every fallible operation in this crate returns [`Result`], and every
//! failure is terminal for the call that raised it: nothing is retried or
//! partially recovered. Type conflicts during [`Compound::merge`] are
//! deliberately *not* errors — the incoming value wins.
//!
//! ## Error Categories
//!
//! - **Key errors**: a compound key failed the `[A-Za-z0-9_:]+` pattern check
//! - **Numeric literal errors**: malformed text, out-of-range values, or a
//!   signedness suffix with no width suffix
//! - **Shape errors**: auto-vivification found a value of the wrong kind
//! - **Serde errors**: a Rust value could not be converted to an NBT tree
//!
//! ## Examples
//!
//! ```rust
//! use snbt::{Compound, Error, Value};
//!
//! let mut nbt = Compound::new();
//! let err = nbt.insert("bad-key", Value::from(1)).unwrap_err();
//! assert!(matches!(err, Error::InvalidKey { .. }));
//! ```
//!
//! [`Compound::merge`]: crate::Compound::merge

use std::fmt;
use thiserror::Error;

/// All errors raised by SNBT construction, numeric parsing, and value
/// conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A compound key does not match `[A-Za-z0-9_:]+`.
    #[error("{key}: invalid NBT key")]
    InvalidKey { key: String },

    /// Text that should have been a numeric literal was not one.
    #[error("{text}: not a number")]
    NotANumber { text: String },

    /// A numeric literal does not fit the range its suffix demands.
    #[error("{text}: out of range for {kind}")]
    OutOfRange { text: String, kind: &'static str },

    /// A signedness suffix (`u`/`s`) was given without a width suffix.
    #[error("{text}: signedness suffix requires a width suffix (b, s, i, or l)")]
    MissingWidth { text: String },

    /// Auto-vivification found an existing value of a different shape.
    #[error("{key}: expected {expected} value")]
    WrongType { key: String, expected: &'static str },

    /// A Rust type has no NBT representation.
    #[error("unsupported type: {0}")]
    UnsupportedType(&'static str),

    /// Error reported through the serde trait surface.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    pub(crate) fn invalid_key(key: &str) -> Self {
        Error::InvalidKey {
            key: key.to_string(),
        }
    }

    pub(crate) fn not_a_number(text: &str) -> Self {
        Error::NotANumber {
            text: text.to_string(),
        }
    }

    pub(crate) fn out_of_range(text: &str, kind: &'static str) -> Self {
        Error::OutOfRange {
            text: text.to_string(),
            kind,
        }
    }

    pub(crate) fn missing_width(text: &str) -> Self {
        Error::MissingWidth {
            text: text.to_string(),
        }
    }

    pub(crate) fn wrong_type(key: &str, expected: &'static str) -> Self {
        Error::WrongType {
            key: key.to_string(),
            expected,
        }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
