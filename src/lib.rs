//! # snbt
//!
//! A builder and serializer for SNBT, the stringified NBT text format used
//! throughout Minecraft commands, data packs, and saved-game tooling.
//!
//! ## What is SNBT?
//!
//! NBT (Named Binary Tag) is Minecraft's tree-structured data model. SNBT is
//! its text form: `{key: value}` compounds, `[1, 2, 3]` lists, typed arrays
//! like `[B;1,2,3]`, and numeric literals with type suffixes (`1b`, `2s`,
//! `3L`, `1.5f`, `2.5d`). This crate models NBT trees as [`Value`]s, builds
//! them with an ordered [`Compound`] map, and writes game-ready SNBT text.
//!
//! ## Key Features
//!
//! - **Faithful text output**: numeric suffix rules, string quoting with
//!   escape handling, and the game's key-driven quirks (forced float types on
//!   `Motion`/`Rotation`, JSON text under `CustomName`, `minecraft:`
//!   namespacing inside `components`) are applied automatically
//! - **Order-preserving compounds**: insertion order is kept; output is
//!   sorted case-insensitively by default for stable diffs
//! - **Deep editing**: auto-vivifying accessors, dotted-path
//!   [`set_or_clear`](Compound::set_or_clear), and non-destructive
//!   [`merge`](Compound::merge)
//! - **Serde Compatible**: any `T: Serialize` converts to a [`Value`] tree
//!   via [`to_value`]
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! snbt = "0.1"
//! ```
//!
//! ### Building and Serializing a Tree
//!
//! ```rust
//! use snbt::{nbt, to_string};
//!
//! let entity = nbt!({
//!     "id": "minecraft:creeper",
//!     "Health": 20,
//!     "Motion": [0, 1, 0],
//!     "CustomName": "Fred",
//!     "Tags": ["second", "first"]
//! });
//!
//! assert_eq!(
//!     to_string(&entity),
//!     "{CustomName: '\"Fred\"', Health: 20, id: \"minecraft:creeper\", \
//!      Motion: [0d, 1d, 0d], Tags: [first, second]}"
//! );
//! ```
//!
//! ### Editing Compounds In Place
//!
//! ```rust
//! use snbt::Compound;
//!
//! let mut nbt = Compound::new();
//! nbt.set_or_clear("display.Name", "Sword of Testing")?;
//! nbt.get_list_mut("Lore")?.push("line one".into());
//! assert_eq!(
//!     nbt.to_string(),
//!     "{display: {Name: \"Sword of Testing\"}, Lore: [\"line one\"]}"
//! );
//! # Ok::<(), snbt::Error>(())
//! ```
//!
//! ### From Rust Types via Serde
//!
//! ```rust
//! use serde::Serialize;
//! use snbt::{to_string, to_value};
//!
//! #[derive(Serialize)]
//! struct Position {
//!     x: f64,
//!     y: f64,
//!     z: f64,
//! }
//!
//! let value = to_value(&Position { x: 0.5, y: 64.0, z: -0.5 })?;
//! assert_eq!(to_string(&value), "{x: 0.5f, y: 64.0f, z: -0.5f}");
//! # Ok::<(), snbt::Error>(())
//! ```
//!
//! ### Custom Formatting
//!
//! ```rust
//! use snbt::{nbt, to_string_with_options, SnbtOptions};
//!
//! let tree = nbt!({"b": 1, "a": 2});
//! let options = SnbtOptions::new().with_sort_keys(false).with_spaces(false);
//! assert_eq!(to_string_with_options(&tree, &options), "{b:1,a:2}");
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory for focused examples:
//!
//! - **`simple.rs`** - building a tree and printing its SNBT
//! - **`dynamic_values.rs`** - inspecting and editing trees at runtime
//! - **`custom_options.rs`** - precision, sorting, and spacing controls

pub mod compound;
pub mod error;
pub mod macros;
pub mod number;
pub mod options;
pub mod quote;
pub mod ser;
pub mod value;

pub use compound::{good_key, Compound};
pub use error::{Error, Result};
pub use options::SnbtOptions;
pub use ser::{to_value, Serializer, ValueSerializer};
pub use value::{ArrayKind, TypedArray, Value};

/// Serializes a [`Value`] tree as SNBT text using the default options.
///
/// # Examples
///
/// ```rust
/// use snbt::{nbt, to_string};
///
/// assert_eq!(to_string(&nbt!({"Health": 20})), "{Health: 20}");
/// ```
#[must_use]
pub fn to_string(value: &Value) -> String {
    to_string_with_options(value, &SnbtOptions::default())
}

/// Serializes a [`Value`] tree as SNBT text with custom options.
///
/// # Examples
///
/// ```rust
/// use snbt::{nbt, to_string_with_options, SnbtOptions};
///
/// let tree = nbt!({"pos": [1.5, 2.34]});
/// let options = SnbtOptions::new().with_float_precision(1);
/// assert_eq!(to_string_with_options(&tree, &options), "{pos: [1.5f, 2.3f]}");
/// ```
#[must_use]
pub fn to_string_with_options(value: &Value, options: &SnbtOptions) -> String {
    ser::to_string_with_options(value, options)
}
