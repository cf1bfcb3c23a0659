//! Configuration options for SNBT serialization.
//!
//! [`SnbtOptions`] carries the three formatting knobs the serializer reads on
//! every call:
//!
//! - **float precision**: decimal places floats are rounded to (default 3)
//! - **sort keys**: emit compound keys in case-insensitive sorted order
//!   (default on)
//! - **spaces**: put a space after `:` and `,` (default on)
//!
//! The options are an explicit value passed to [`to_string_with_options`]
//! rather than process-wide state, so two callers with different formatting
//! needs never interfere.
//!
//! ## Examples
//!
//! ```rust
//! use snbt::{nbt, to_string_with_options, SnbtOptions};
//!
//! let value = nbt!({"pos": [1.5, 2.34]});
//!
//! let compact = SnbtOptions::new().with_spaces(false);
//! assert_eq!(to_string_with_options(&value, &compact), "{pos:[1.5f,2.34f]}");
//!
//! let coarse = SnbtOptions::new().with_float_precision(1);
//! assert_eq!(to_string_with_options(&value, &coarse), "{pos: [1.5f, 2.3f]}");
//! ```
//!
//! [`to_string_with_options`]: crate::to_string_with_options

/// Formatting options read by the SNBT serializer.
///
/// `Default` matches the game-facing conventions: three decimal places,
/// sorted keys, and spaces after punctuation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnbtOptions {
    /// Decimal places for float output. Minimum 1.
    pub float_precision: u32,
    /// Whether compound keys are emitted in case-insensitive sorted order.
    pub sort_keys: bool,
    /// Whether to put a space after colons and commas.
    pub use_spaces: bool,
}

impl Default for SnbtOptions {
    fn default() -> Self {
        SnbtOptions {
            float_precision: 3,
            sort_keys: true,
            use_spaces: true,
        }
    }
}

impl SnbtOptions {
    /// Creates the default options (precision 3, sorted keys, spaces on).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::SnbtOptions;
    ///
    /// let options = SnbtOptions::new();
    /// assert_eq!(options.float_precision, 3);
    /// assert!(options.sort_keys);
    /// assert!(options.use_spaces);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the float precision. Values below 1 are clamped to 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::SnbtOptions;
    ///
    /// assert_eq!(SnbtOptions::new().with_float_precision(1).float_precision, 1);
    /// assert_eq!(SnbtOptions::new().with_float_precision(0).float_precision, 1);
    /// ```
    #[must_use]
    pub fn with_float_precision(mut self, precision: u32) -> Self {
        self.float_precision = precision.max(1);
        self
    }

    /// Sets whether compound keys are sorted at serialization time.
    ///
    /// When off, keys come out in insertion order.
    #[must_use]
    pub fn with_sort_keys(mut self, sort: bool) -> Self {
        self.sort_keys = sort;
        self
    }

    /// Sets whether a space follows colons and commas.
    #[must_use]
    pub fn with_spaces(mut self, spaces: bool) -> Self {
        self.use_spaces = spaces;
        self
    }
}
