//! PDF dictionaries and the typed accessor protocol built on them.
//!
//! Every typed accessor is `find` followed by a variant match. A key that is
//! absent and a key that holds a different kind of object both yield `None`;
//! callers that must tell the two apart use [`Dict::find`] or [`Dict::entry`].
//!
//! # Example
//! ```
//! use pdf_object::{Dict, Object};
//!
//! let mut d = Dict::new();
//! d.insert("Type", Object::name("Page"));
//! d.insert("Size", Object::Integer(3));
//! d.insert("Linearized", Object::Integer(1));
//!
//! assert_eq!(d.type_name(), "Page");
//! assert_eq!(d.size(), 3);
//! assert!(d.is_linearization_parm_dict());
//! assert!(!d.is_obj_stm());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::array::Array;
use crate::error::{PdfError, Result};
use crate::types::{HexLiteral, IndirectRef, Object, StreamDict, StringLiteral};

/// A mapping from unique keys to objects.
///
/// Keys are names without the leading `/`. Iteration is always in
/// lexicographic key order, which both serializers rely on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dict(BTreeMap<String, Object>);

/// The value of a stream's `/Length` entry.
///
/// A length stored as an indirect reference must be resolved by the caller
/// before the stream data can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamLength {
    Direct(i64),
    Indirect(IndirectRef),
}

impl StreamLength {
    /// The direct length, or `None` if it must be resolved.
    pub fn direct(&self) -> Option<i64> {
        match self {
            StreamLength::Direct(n) => Some(*n),
            StreamLength::Indirect(_) => None,
        }
    }

    /// The object number holding the length, or `None` for a direct length.
    pub fn object_number(&self) -> Option<u32> {
        match self {
            StreamLength::Direct(_) => None,
            StreamLength::Indirect(r) => Some(r.object_number),
        }
    }
}

impl Dict {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Object)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Insert `value` unless `key` is already present. Never overwrites.
    ///
    /// Always returns `true`: after the call the dictionary holds an entry
    /// for `key`, whether it was just added or already there.
    pub fn insert(&mut self, key: impl Into<String>, value: Object) -> bool {
        self.0.entry(key.into()).or_insert(value);
        true
    }

    pub fn insert_int(&mut self, key: impl Into<String>, value: i64) {
        self.insert(key, Object::Integer(value));
    }

    pub fn insert_float(&mut self, key: impl Into<String>, value: f32) {
        self.insert(key, Object::Float(value));
    }

    /// Insert an already-escaped string literal.
    pub fn insert_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, Object::StringLiteral(StringLiteral::new(value)));
    }

    pub fn insert_name(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, Object::Name(value.into()));
    }

    /// Overwrite the entry for `key`. Passing `None` is a no-op, not a delete.
    pub fn update(&mut self, key: impl Into<String>, value: impl Into<Option<Object>>) {
        if let Some(value) = value.into() {
            self.0.insert(key.into(), value);
        }
    }

    /// Remove the entry for `key`, returning its prior value.
    pub fn delete(&mut self, key: &str) -> Option<Object> {
        self.0.remove(key)
    }

    pub fn find(&self, key: &str) -> Option<&Object> {
        self.0.get(key)
    }

    pub fn find_mut(&mut self, key: &str) -> Option<&mut Object> {
        self.0.get_mut(key)
    }

    /// Look up `key` on behalf of the dictionary called `dict_name`.
    ///
    /// An absent key and an explicit `null` are treated alike: an error when
    /// `required`, otherwise `Ok(None)`.
    pub fn entry(&self, dict_name: &str, key: &str, required: bool) -> Result<Option<&Object>> {
        match self.find(key) {
            Some(obj) if !obj.is_null() => Ok(Some(obj)),
            _ if required => Err(PdfError::MissingRequiredEntry {
                dict: dict_name.to_string(),
                key: key.to_string(),
            }),
            _ => Ok(None),
        }
    }

    pub fn boolean_entry(&self, key: &str) -> Option<bool> {
        match self.find(key)? {
            Object::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Escaped text of a string literal entry.
    pub fn string_entry(&self, key: &str) -> Option<&str> {
        self.string_literal_entry(key).map(StringLiteral::value)
    }

    pub fn name_entry(&self, key: &str) -> Option<&str> {
        match self.find(key)? {
            Object::Name(n) => Some(n),
            _ => None,
        }
    }

    /// Integer entry. Same as [`int64_entry`](Self::int64_entry); integers
    /// are stored as `i64` and never narrowed.
    pub fn int_entry(&self, key: &str) -> Option<i64> {
        self.int64_entry(key)
    }

    pub fn int64_entry(&self, key: &str) -> Option<i64> {
        match self.find(key)? {
            Object::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn float_entry(&self, key: &str) -> Option<f32> {
        match self.find(key)? {
            Object::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn indirect_ref_entry(&self, key: &str) -> Option<IndirectRef> {
        match self.find(key)? {
            Object::IndirectRef(r) => Some(*r),
            _ => None,
        }
    }

    /// Direct dictionary entry. An indirect reference is not followed; use
    /// [`indirect_ref_entry`](Self::indirect_ref_entry) and resolve it.
    pub fn dict_entry(&self, key: &str) -> Option<&Dict> {
        match self.find(key)? {
            Object::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn dict_entry_mut(&mut self, key: &str) -> Option<&mut Dict> {
        match self.find_mut(key)? {
            Object::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn stream_dict_entry(&self, key: &str) -> Option<&StreamDict> {
        match self.find(key)? {
            Object::Stream(s) => Some(s),
            _ => None,
        }
    }

    pub fn array_entry(&self, key: &str) -> Option<&Array> {
        match self.find(key)? {
            Object::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn string_literal_entry(&self, key: &str) -> Option<&StringLiteral> {
        match self.find(key)? {
            Object::StringLiteral(s) => Some(s),
            _ => None,
        }
    }

    pub fn hex_literal_entry(&self, key: &str) -> Option<&HexLiteral> {
        match self.find(key)? {
            Object::HexLiteral(h) => Some(h),
            _ => None,
        }
    }

    /// Raw bytes of a text entry stored either as a string literal or as a
    /// hex string.
    ///
    /// Returns `Ok(None)` when the key holds neither kind. Fails only when
    /// the literal that is present cannot be decoded.
    pub fn string_entry_bytes(&self, key: &str) -> Result<Option<Vec<u8>>> {
        if let Some(s) = self.string_literal_entry(key) {
            return s.bytes().map(Some);
        }
        if let Some(h) = self.hex_literal_entry(key) {
            return h.bytes().map(Some);
        }
        Ok(None)
    }

    /// The `/Length` of a stream dictionary.
    pub fn length(&self) -> Option<StreamLength> {
        if let Some(n) = self.int64_entry("Length") {
            return Some(StreamLength::Direct(n));
        }
        self.indirect_ref_entry("Length").map(StreamLength::Indirect)
    }

    /// Value of the `/Type` name, or `""`.
    pub fn type_name(&self) -> &str {
        self.name_entry("Type").unwrap_or_default()
    }

    /// Value of the `/Subtype` name, or `""`.
    pub fn subtype(&self) -> &str {
        self.name_entry("Subtype").unwrap_or_default()
    }

    pub fn size(&self) -> i64 {
        self.int_entry("Size").unwrap_or_default()
    }

    /// Byte offset of the previous cross-reference section, or 0.
    pub fn prev(&self) -> i64 {
        self.int64_entry("Prev").unwrap_or_default()
    }

    /// Number of objects in an object stream, or 0.
    pub fn n(&self) -> i64 {
        self.int_entry("N").unwrap_or_default()
    }

    /// Offset of the first object in an object stream.
    pub fn first(&self) -> Option<i64> {
        self.int_entry("First")
    }

    /// Subsection ranges of a cross-reference stream.
    pub fn index(&self) -> Option<&Array> {
        self.array_entry("Index")
    }

    /// Field widths of a cross-reference stream.
    pub fn w(&self) -> Option<&Array> {
        self.array_entry("W")
    }

    pub fn is_obj_stm(&self) -> bool {
        self.type_name() == "ObjStm"
    }

    /// True if the dictionary has an integer `/Linearized` entry. Its value
    /// is not examined.
    pub fn is_linearization_parm_dict(&self) -> bool {
        self.int_entry("Linearized").is_some()
    }

    /// Add `delta` to the integer stored under `key`.
    ///
    /// On error the dictionary is left unchanged.
    pub fn increment_by(&mut self, key: &str, delta: i64) -> Result<()> {
        let current = self
            .int64_entry(key)
            .ok_or_else(|| PdfError::UnknownKey(key.to_string()))?;
        let next = current
            .checked_add(delta)
            .ok_or_else(|| PdfError::IntegerOverflow(key.to_string()))?;
        self.update(key, Object::Integer(next));
        Ok(())
    }

    pub fn increment(&mut self, key: &str) -> Result<()> {
        self.increment_by(key, 1)
    }
}

impl FromIterator<(String, Object)> for Dict {
    fn from_iter<I: IntoIterator<Item = (String, Object)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a String, &'a Object);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
