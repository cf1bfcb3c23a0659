//! Dynamic value representation for NBT data.
//!
//! This module provides the [`Value`] enum, a closed tagged union over every
//! shape SNBT text can express. Making the union closed is the point: the
//! serializer matches it exhaustively, so there is no "what type is this
//! actually" case left to discover at serialization time.
//!
//! ## Core Types
//!
//! - [`Value`]: any NBT value (null, bool, int, float, string, list, typed
//!   array, compound)
//! - [`TypedArray`]: a homogeneous numeric array with an explicit element
//!   width (`[I;…]`, `[L;…]`, `[B;…]`)
//! - [`ArrayKind`]: the element width marker for a typed array
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use snbt::{nbt, Value};
//!
//! let null = Value::Null;
//! let flag = Value::from(true);
//! let count = Value::from(42);
//! let name = Value::from("zombie");
//!
//! let tree = nbt!({
//!     "id": "minecraft:creeper",
//!     "powered": true
//! });
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use snbt::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_int());
//! assert_eq!(value.as_i64(), Some(42));
//! assert_eq!(value.as_str(), None);
//! ```
//!
//! ### Serialization
//!
//! `Display` uses the default formatting options, so `to_string` on any value
//! yields game-ready SNBT text:
//!
//! ```rust
//! use snbt::{ArrayKind, TypedArray, Value};
//!
//! let arr = Value::Array(TypedArray::new(ArrayKind::Byte, vec![1, 2, 3]));
//! assert_eq!(arr.to_string(), "[B;1, 2, 3]");
//! ```

use crate::{Compound, Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any NBT value.
///
/// # Examples
///
/// ```rust
/// use snbt::Value;
///
/// let num = Value::Int(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_int());
/// assert!(text.is_string());
/// assert_eq!(num.to_string(), "42");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// Key absence. Compound entries holding `Null` are never written.
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Array(TypedArray),
    Compound(Compound),
}

/// The element width of a typed numeric array.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrayKind {
    /// 32-bit elements, written `[I;…]`.
    Int,
    /// 64-bit elements, written `[L;…]`.
    Long,
    /// 8-bit elements, written `[B;…]`.
    Byte,
}

impl ArrayKind {
    /// The letter the game's grammar uses for this width.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            ArrayKind::Int => 'I',
            ArrayKind::Long => 'L',
            ArrayKind::Byte => 'B',
        }
    }

    /// Parses a width letter, case-insensitively.
    ///
    /// # Errors
    ///
    /// Fails for any letter other than `I`, `L`, or `B`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::ArrayKind;
    ///
    /// assert_eq!(ArrayKind::from_letter('b').unwrap(), ArrayKind::Byte);
    /// assert!(ArrayKind::from_letter('d').is_err());
    /// ```
    pub fn from_letter(letter: char) -> Result<Self> {
        match letter.to_ascii_uppercase() {
            'I' => Ok(ArrayKind::Int),
            'L' => Ok(ArrayKind::Long),
            'B' => Ok(ArrayKind::Byte),
            other => Err(Error::custom(format!(
                "{other}: must be one of I, L, B"
            ))),
        }
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A homogeneous numeric array with an explicit element width.
///
/// Serializes as `[<T>;v1,v2,…]` with no per-element type suffix.
///
/// # Examples
///
/// ```rust
/// use snbt::{ArrayKind, TypedArray};
///
/// let arr = TypedArray::new(ArrayKind::Int, vec![1, 2, 3]);
/// assert_eq!(arr.to_string(), "[I;1, 2, 3]");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypedArray {
    pub kind: ArrayKind,
    pub elements: Vec<i64>,
}

impl TypedArray {
    #[must_use]
    pub fn new(kind: ArrayKind, elements: Vec<i64>) -> Self {
        TypedArray { kind, elements }
    }
}

impl fmt::Display for TypedArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = crate::SnbtOptions::default();
        write!(
            f,
            "{}",
            crate::ser::to_string_with_options(&Value::Array(self.clone()), &options)
        )
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns `true` if the value is a typed numeric array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is a compound.
    #[inline]
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Value::Compound(_))
    }

    /// If the value is a boolean, returns it.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is numeric, returns it as an `f64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::Value;
    ///
    /// assert_eq!(Value::Int(2).as_f64(), Some(2.0));
    /// assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
    /// assert_eq!(Value::Bool(true).as_f64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a list, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// If the value is a compound, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(nbt) => Some(nbt),
            _ => None,
        }
    }

    /// If the value is a compound, returns a mutable reference to it.
    #[inline]
    #[must_use]
    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(nbt) => Some(nbt),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Writes the value as SNBT text with default options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = crate::SnbtOptions::default();
        write!(f, "{}", crate::ser::to_string_with_options(self, &options))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<TypedArray> for Value {
    fn from(value: TypedArray) -> Self {
        Value::Array(value)
    }
}

impl From<Compound> for Value {
    fn from(value: Compound) -> Self {
        Value::Compound(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Int(i) => Ok(i),
            _ => Err(Error::custom(format!("expected integer, found {value:?}"))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Int(i) => Ok(i as f64),
            Value::Float(f) => Ok(f),
            _ => Err(Error::custom(format!("expected number, found {value:?}"))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(Error::custom(format!("expected bool, found {value:?}"))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(Error::custom(format!("expected string, found {value:?}"))),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(list) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for element in list {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.elements.len()))?;
                for element in &arr.elements {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Compound(nbt) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(nbt.len()))?;
                for (k, v) in nbt.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid NBT value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Value::Int)
                    .map_err(|_| E::custom(format!("{value} does not fit in an NBT long")))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut list = Vec::new();
                while let Some(element) = seq.next_element()? {
                    list.push(element);
                }
                Ok(Value::List(list))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut nbt = Compound::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    nbt.insert(key, value).map_err(de::Error::custom)?;
                }
                Ok(Value::Compound(nbt))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}
