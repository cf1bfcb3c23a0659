//! SNBT serialization.
//!
//! Two serializers live here:
//!
//! - [`Serializer`], the text writer: a single-pass recursive walk over a
//!   [`Value`] tree producing game-ready SNBT. It applies the formatting
//!   policy from [`SnbtOptions`] plus the engine's key-driven special cases
//!   (forced numeric suffixes, rich-text keys, component namespacing, `Tags`
//!   sorting).
//! - [`ValueSerializer`], a `serde::Serializer` producing [`Value`] trees, so
//!   any `T: Serialize` can be turned into NBT via [`to_value`].
//!
//! ## Usage
//!
//! Most users should go through the crate-root functions:
//!
//! ```rust
//! use snbt::{nbt, to_string, to_value};
//! use serde::Serialize;
//!
//! let tree = nbt!({"Health": 20, "Pos": [0.5, 64.0, 0.5]});
//! assert_eq!(to_string(&tree), "{Health: 20, Pos: [0.5f, 64.0f, 0.5f]}");
//!
//! #[derive(Serialize)]
//! struct Marker { invisible: bool }
//!
//! let value = to_value(&Marker { invisible: true }).unwrap();
//! assert_eq!(to_string(&value), "{invisible: true}");
//! ```

use crate::number::{format_float, format_int};
use crate::quote::{is_bare_word, quote};
use crate::{Compound, Error, Result, SnbtOptions, Value};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{ser, Serialize};
use std::borrow::Cow;

/// Keys whose numeric descendants always carry a specific type suffix,
/// regardless of the value's native type. The game stores these vectors as
/// doubles or floats and rejects bare integers.
const FORCED_TYPE_TAGS: &[(&str, char)] = &[
    ("Motion", 'd'),
    ("Rotation", 'f'),
    ("LeftArm", 'f'),
    ("RightArm", 'f'),
    ("LeftLeg", 'f'),
    ("RightLeg", 'f'),
    ("Head", 'f'),
    ("Body", 'f'),
];

/// Keys whose values the game reads as JSON text rather than nested NBT.
const JSON_TAGS: &[&str] = &["Text1", "Text2", "Text3", "Text4", "CustomName", "Pages"];

static NAMESPACED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z_0-9]+:").unwrap());

fn forced_type(key: &str) -> Option<char> {
    FORCED_TYPE_TAGS
        .iter()
        .find(|(tag, _)| *tag == key)
        .map(|(_, suffix)| *suffix)
}

/// Serializes `value` as SNBT text with the given options.
#[must_use]
pub fn to_string_with_options(value: &Value, options: &SnbtOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.write(value);
    serializer.into_inner()
}

/// The SNBT text serializer.
///
/// Walks a [`Value`] tree and appends its text form to an internal buffer.
/// Serialization cannot fail: every reachable tree state has a text form.
///
/// ```rust
/// use snbt::{nbt, Serializer, SnbtOptions};
///
/// let options = SnbtOptions::new().with_spaces(false);
/// let mut serializer = Serializer::new(&options);
/// serializer.write(&nbt!({"a": 1, "b": [1, 2]}));
/// assert_eq!(serializer.into_inner(), "{a:1,b:[1,2]}");
/// ```
pub struct Serializer<'a> {
    options: &'a SnbtOptions,
    out: String,
}

impl<'a> Serializer<'a> {
    #[must_use]
    pub fn new(options: &'a SnbtOptions) -> Self {
        Serializer {
            options,
            out: String::with_capacity(256),
        }
    }

    /// Appends the text form of `value` to the buffer.
    pub fn write(&mut self, value: &Value) {
        self.write_value(value, None, false);
    }

    /// Consumes the serializer and returns the accumulated text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.out
    }

    fn space(&mut self) {
        if self.options.use_spaces {
            self.out.push(' ');
        }
    }

    fn comma(&mut self, first: bool) -> bool {
        if !first {
            self.out.push(',');
            self.space();
        }
        false
    }

    fn write_key(&mut self, key: &str) {
        if is_bare_word(key) {
            self.out.push_str(key);
        } else {
            self.out.push_str(&quote(key));
        }
        self.out.push(':');
    }

    fn write_value(&mut self, value: &Value, force: Option<char>, components_child: bool) {
        match value {
            Value::Null => {}
            Value::Bool(b) => self.out.push_str(if *b { "true" } else { "false" }),
            Value::Int(i) => match force {
                Some(suffix) => {
                    self.out.push_str(&i.to_string());
                    self.out.push(suffix);
                }
                None => self.out.push_str(&format_int(*i)),
            },
            Value::Float(f) => {
                self.out
                    .push_str(&format_float(*f, self.options.float_precision));
                self.out.push(force.unwrap_or('f'));
            }
            Value::String(s) => self.out.push_str(&quote(s)),
            Value::List(list) => self.write_list(list, force, components_child),
            Value::Array(arr) => {
                self.out.push('[');
                self.out.push(arr.kind.letter());
                self.out.push(';');
                let mut first = true;
                for element in &arr.elements {
                    first = self.comma(first);
                    self.out.push_str(&element.to_string());
                }
                self.out.push(']');
            }
            Value::Compound(nbt) => self.write_compound(nbt, force, components_child),
        }
    }

    fn write_compound(&mut self, nbt: &Compound, force: Option<char>, components_child: bool) {
        self.out.push('{');
        let mut keys: Vec<&String> = nbt.keys().collect();
        if self.options.sort_keys {
            keys.sort_by_key(|key| key.to_lowercase());
        }
        let mut first = true;
        for key in keys {
            let value = match nbt.get(key) {
                Some(value) if !value.is_null() => value,
                // Null is key absence; the entry is not written.
                _ => continue,
            };
            first = self.comma(first);
            let out_key = if components_child {
                component_key(key)
            } else {
                Cow::Borrowed(key.as_str())
            };
            self.write_key(&out_key);
            self.space();

            if JSON_TAGS.contains(&key.as_str()) {
                let json = json_text(value, self.options.sort_keys);
                self.out.push_str(&quote(&json));
            } else if let Some(suffix) = forced_type(key) {
                self.write_value(value, Some(suffix), false);
            } else if key == "Tags" {
                self.write_tags(value, force);
            } else {
                let enters_components = key == "components" || key == "minecraft:components";
                self.write_value(value, force, enters_components);
            }
        }
        self.out.push('}');
    }

    fn write_list(&mut self, list: &[Value], force: Option<char>, components_child: bool) {
        let list = regularize(list);
        self.out.push('[');
        let mut first = true;
        for element in list.iter() {
            if element.is_null() {
                continue;
            }
            first = self.comma(first);
            self.write_value(element, force, components_child);
        }
        self.out.push(']');
    }

    /// Tag order is not semantically significant; sorting stabilizes diffs.
    fn write_tags(&mut self, value: &Value, force: Option<char>) {
        match value {
            Value::List(list)
                if self.options.sort_keys && list.iter().all(|v| v.is_string()) =>
            {
                let mut sorted = list.clone();
                sorted.sort_by(|a, b| a.as_str().cmp(&b.as_str()));
                self.write_list(&sorted, force, false);
            }
            other => self.write_value(other, force, false),
        }
    }
}

/// Rewrites an un-namespaced component key with the default namespace.
/// Literal match keys (`[…]`, `{…}`) pass through untouched, matching the
/// engine's own handling.
fn component_key(key: &str) -> Cow<'_, str> {
    if NAMESPACED_RE.is_match(key) || key.starts_with('[') || key.starts_with('{') {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(format!("minecraft:{key}"))
    }
}

/// Promotes a mixed int/float list to all floats; any non-numeric element
/// leaves the list untouched.
fn regularize(list: &[Value]) -> Cow<'_, [Value]> {
    let mut saw_int = false;
    let mut saw_float = false;
    for value in list {
        match value {
            Value::Int(_) => saw_int = true,
            Value::Float(_) => saw_float = true,
            _ => return Cow::Borrowed(list),
        }
    }
    if saw_int && saw_float {
        Cow::Owned(
            list.iter()
                .map(|value| match value {
                    Value::Int(i) => Value::Float(*i as f64),
                    other => other.clone(),
                })
                .collect(),
        )
    } else {
        Cow::Borrowed(list)
    }
}

/// Renders a value as the JSON text the game expects under rich-text keys.
///
/// Mirrors Python `json.dumps` defaults: `", "` and `": "` separators, keys
/// sorted case-sensitively when `sort_keys`, non-ASCII passed through.
fn json_text(value: &Value, sort_keys: bool) -> String {
    let mut out = String::new();
    write_json(&mut out, value, sort_keys);
    out
}

fn write_json(out: &mut String, value: &Value, sort_keys: bool) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Int(i) => out.push_str(&i.to_string()),
        Value::Float(f) => {
            let text = f.to_string();
            out.push_str(&text);
            if !text.contains('.') && !text.contains('e') && f.is_finite() {
                out.push_str(".0");
            }
        }
        Value::String(s) => write_json_string(out, s),
        Value::List(list) => {
            out.push('[');
            for (i, element) in list.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_json(out, element, sort_keys);
            }
            out.push(']');
        }
        Value::Array(arr) => {
            out.push('[');
            for (i, element) in arr.elements.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&element.to_string());
            }
            out.push(']');
        }
        Value::Compound(nbt) => {
            out.push('{');
            let mut keys: Vec<&String> = nbt.keys().collect();
            if sort_keys {
                keys.sort();
            }
            let mut first = true;
            for key in keys {
                let value = match nbt.get(key) {
                    Some(value) if !value.is_null() => value,
                    _ => continue,
                };
                if !first {
                    out.push_str(", ");
                }
                first = false;
                write_json_string(out, key);
                out.push_str(": ");
                write_json(out, value, sort_keys);
            }
            out.push('}');
        }
    }
}

fn write_json_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Converts any `T: Serialize` into a [`Value`] tree.
///
/// # Errors
///
/// [`Error::InvalidKey`] when a map or struct field name fails the key
/// check, [`Error::OutOfRange`] for `u64` values above `i64::MAX`, and
/// [`Error::UnsupportedType`] for shapes NBT cannot express.
///
/// # Examples
///
/// ```rust
/// use snbt::{to_string, to_value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Pos { x: f64, y: f64 }
///
/// let value = to_value(&Pos { x: 0.5, y: 64.0 }).unwrap();
/// assert_eq!(to_string(&value), "{x: 0.5f, y: 64.0f}");
/// ```
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// A `serde::Serializer` whose output is a [`Value`] tree.
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeCompound {
    nbt: Compound,
    current_key: Option<String>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeCompound;
    type SerializeStruct = SerializeCompound;
    type SerializeStructVariant = SerializeCompound;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Int(v as i64))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| Error::out_of_range(&v.to_string(), "long"))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let elements = v.iter().map(|&b| b as i64).collect();
        Ok(Value::Array(crate::TypedArray::new(
            crate::ArrayKind::Byte,
            elements,
        )))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::UnsupportedType("newtype variants"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeVec> {
        Err(Error::UnsupportedType("tuple variants"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeCompound> {
        Ok(SerializeCompound::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeCompound> {
        Ok(SerializeCompound::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<SerializeCompound> {
        Err(Error::UnsupportedType("struct variants"))
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeCompound {
    fn new() -> Self {
        SerializeCompound {
            nbt: Compound::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeMap for SerializeCompound {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.nbt.insert(key, to_value(value)?)?;
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Compound(self.nbt))
    }
}

impl ser::SerializeStruct for SerializeCompound {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.nbt.insert(key, to_value(value)?)?;
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Compound(self.nbt))
    }
}

impl ser::SerializeStructVariant for SerializeCompound {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.nbt.insert(key, to_value(value)?)?;
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Compound(self.nbt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nbt;

    fn text(value: &Value) -> String {
        to_string_with_options(value, &SnbtOptions::default())
    }

    #[test]
    fn test_empty_compound() {
        assert_eq!(text(&nbt!({})), "{}");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(text(&Value::Bool(true)), "true");
        assert_eq!(text(&Value::Bool(false)), "false");
        assert_eq!(text(&Value::Int(17)), "17");
        assert_eq!(text(&Value::Float(1.5)), "1.5f");
        assert_eq!(text(&Value::String("word".to_string())), "word");
        assert_eq!(text(&Value::Null), "");
    }

    #[test]
    fn test_long_suffix() {
        assert_eq!(text(&Value::Int(4_294_967_295)), "4294967295");
        assert_eq!(text(&nbt!({"key": 5000000000i64})), "{key: 5000000000L}");
    }

    #[test]
    fn test_key_sorting_case_insensitive() {
        let value = nbt!({"b": 1, "a": 2});
        assert_eq!(text(&value), "{a: 2, b: 1}");
        let value = nbt!({"Zed": 1, "alpha": 2});
        assert_eq!(text(&value), "{alpha: 2, Zed: 1}");
    }

    #[test]
    fn test_insertion_order_when_sorting_off() {
        let options = SnbtOptions::new().with_sort_keys(false);
        let value = nbt!({"b": 1, "a": 2});
        assert_eq!(to_string_with_options(&value, &options), "{b: 1, a: 2}");
    }

    #[test]
    fn test_spaces_toggle() {
        let value = nbt!({"key": {"nums": [1, 2, 3]}});
        assert_eq!(text(&value), "{key: {nums: [1, 2, 3]}}");
        let compact = SnbtOptions::new().with_spaces(false);
        assert_eq!(
            to_string_with_options(&value, &compact),
            "{key:{nums:[1,2,3]}}"
        );
    }

    #[test]
    fn test_regularization() {
        assert_eq!(text(&nbt!({"key": [1, 2]})), "{key: [1, 2]}");
        assert_eq!(text(&nbt!({"key": [1, 2.0]})), "{key: [1.0f, 2.0f]}");
        assert_eq!(text(&nbt!({"key": [1.0, 2.0]})), "{key: [1.0f, 2.0f]}");
        assert_eq!(
            text(&nbt!([1, 2.5, 3])),
            "[1.0f, 2.5f, 3.0f]"
        );
    }

    #[test]
    fn test_regularization_skips_non_numeric() {
        assert_eq!(text(&nbt!(["a", 1, 2.0])), "[a, 1, 2.0f]");
    }

    #[test]
    fn test_forced_types() {
        assert_eq!(text(&nbt!({"Motion": [1, 2]})), "{Motion: [1d, 2d]}");
        for key in ["Rotation", "LeftArm", "RightArm", "LeftLeg", "RightLeg", "Head", "Body"] {
            let mut nbt = Compound::new();
            nbt.insert(key, vec![Value::Int(1), Value::Int(2)])
                .unwrap();
            assert_eq!(
                text(&Value::Compound(nbt)),
                format!("{{{key}: [1f, 2f]}}")
            );
        }
    }

    #[test]
    fn test_forced_types_reach_nested_values() {
        let value = nbt!({"Rotation": {"pitch": 1, "yaw": 2.5}});
        assert_eq!(text(&value), "{Rotation: {pitch: 1f, yaw: 2.5f}}");
    }

    #[test]
    fn test_typed_arrays() {
        use crate::{ArrayKind, TypedArray};
        let byte = Value::Array(TypedArray::new(ArrayKind::Byte, vec![123, 4, 5, 6]));
        assert_eq!(text(&byte), "[B;123, 4, 5, 6]");
        let compact = SnbtOptions::new().with_spaces(false);
        assert_eq!(to_string_with_options(&byte, &compact), "[B;123,4,5,6]");
        let int = Value::Array(TypedArray::new(ArrayKind::Int, vec![123]));
        assert_eq!(text(&int), "[I;123]");
        let long = Value::Array(TypedArray::new(ArrayKind::Long, vec![5_000_000_000]));
        // Typed-array elements never carry suffixes.
        assert_eq!(text(&long), "[L;5000000000]");
    }

    #[test]
    fn test_string_quoting_in_compounds() {
        assert_eq!(text(&nbt!({"key": "val ue"})), "{key: \"val ue\"}");
        assert_eq!(text(&nbt!({"key": "value"})), "{key: value}");
    }

    #[test]
    fn test_namespaced_keys_quoted() {
        let mut nbt = Compound::new();
        nbt.insert("minecraft:custom_data", 1).unwrap();
        assert_eq!(
            text(&Value::Compound(nbt)),
            "{\"minecraft:custom_data\": 1}"
        );
    }

    #[test]
    fn test_null_entries_skipped() {
        let value = nbt!({"present": 1, "absent": null});
        assert_eq!(text(&value), "{present: 1}");
    }

    #[test]
    fn test_components_child_namespacing() {
        let value = nbt!({"components": {"dyed_color": 5}});
        assert_eq!(
            text(&value),
            "{components: {\"minecraft:dyed_color\": 5}}"
        );
        // Already-namespaced keys pass through.
        let value = nbt!({"components": {"minecraft:dyed_color": 5}});
        assert_eq!(
            text(&value),
            "{components: {\"minecraft:dyed_color\": 5}}"
        );
    }

    #[test]
    fn test_components_mode_stops_at_grandchildren() {
        let value = nbt!({"components": {"custom_data": {"depth": 1}}});
        assert_eq!(
            text(&value),
            "{components: {\"minecraft:custom_data\": {depth: 1}}}"
        );
    }

    #[test]
    fn test_tags_list_sorted() {
        let value = nbt!({"Tags": ["zebra", "apple", "mango"]});
        assert_eq!(text(&value), "{Tags: [apple, mango, zebra]}");
        let unsorted = SnbtOptions::new().with_sort_keys(false);
        assert_eq!(
            to_string_with_options(&value, &unsorted),
            "{Tags: [zebra, apple, mango]}"
        );
    }

    #[test]
    fn test_json_text_keys() {
        let value = nbt!({"Text1": {"text": "hi"}});
        assert_eq!(text(&value), "{Text1: '{\"text\": \"hi\"}'}");
        let value = nbt!({"CustomName": "Fred"});
        assert_eq!(text(&value), "{CustomName: '\"Fred\"'}");
    }

    #[test]
    fn test_json_text_sorts_keys_case_sensitively() {
        let value = nbt!({"Text1": {"text": "hi", "bold": true}});
        assert_eq!(
            text(&value),
            "{Text1: '{\"bold\": true, \"text\": \"hi\"}'}"
        );
    }

    #[test]
    fn test_float_precision_option() {
        let value = nbt!({"key": 1.12345});
        assert_eq!(text(&value), "{key: 1.123f}");
        let coarse = SnbtOptions::new().with_float_precision(1);
        assert_eq!(to_string_with_options(&value, &coarse), "{key: 1.1f}");
    }

    #[test]
    fn test_to_value_primitives() {
        assert_eq!(to_value(&true).unwrap(), Value::Bool(true));
        assert_eq!(to_value(&42i32).unwrap(), Value::Int(42));
        assert_eq!(to_value(&2.5f64).unwrap(), Value::Float(2.5));
        assert_eq!(to_value("hi").unwrap(), Value::String("hi".to_string()));
        assert_eq!(to_value(&Option::<i32>::None).unwrap(), Value::Null);
        assert!(to_value(&u64::MAX).is_err());
    }

    #[test]
    fn test_to_value_collections() {
        let value = to_value(&vec![1, 2, 3]).unwrap();
        assert_eq!(
            value,
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );

        use std::collections::BTreeMap;
        let mut map = BTreeMap::new();
        map.insert("a", 1);
        let value = to_value(&map).unwrap();
        assert_eq!(text(&value), "{a: 1}");
    }

    #[test]
    fn test_to_value_rejects_invalid_keys() {
        use std::collections::BTreeMap;
        let mut map = BTreeMap::new();
        map.insert("bad key", 1);
        assert!(matches!(
            to_value(&map),
            Err(Error::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_to_value_struct() {
        #[derive(Serialize)]
        #[allow(non_snake_case)]
        struct Item {
            id: String,
            Count: u8,
        }
        let value = to_value(&Item {
            id: "minecraft:stone".to_string(),
            Count: 64,
        })
        .unwrap();
        assert_eq!(text(&value), "{Count: 64, id: \"minecraft:stone\"}");
    }
}
