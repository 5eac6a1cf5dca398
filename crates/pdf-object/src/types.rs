//! The PDF object variant type and its scalar payloads.
//!
//! [`Object`] is a closed sum over every kind of value a PDF object tree can
//! hold. Composite kinds ([`Array`], [`Dict`], [`StreamDict`]) own their
//! children; an [`IndirectRef`] is an identity pair only and is never
//! dereferenced here.

use serde::{Deserialize, Serialize};

use crate::array::Array;
use crate::dict::Dict;
use crate::error::Result;
use crate::literal;

/// A single node of a PDF object tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Object {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f32),
    /// A name without its leading `/`.
    Name(String),
    StringLiteral(StringLiteral),
    HexLiteral(HexLiteral),
    Array(Array),
    Dict(Dict),
    IndirectRef(IndirectRef),
    Stream(StreamDict),
}

impl Object {
    /// Shorthand for `Object::Name(name.into())`.
    pub fn name(name: impl Into<String>) -> Self {
        Object::Name(name.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Object::Null)
    }

    /// Short lowercase label for the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Object::Null => "null",
            Object::Boolean(_) => "boolean",
            Object::Integer(_) => "integer",
            Object::Float(_) => "float",
            Object::Name(_) => "name",
            Object::StringLiteral(_) => "string",
            Object::HexLiteral(_) => "hexstring",
            Object::Array(_) => "array",
            Object::Dict(_) => "dict",
            Object::IndirectRef(_) => "ref",
            Object::Stream(_) => "stream",
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Object::Dict(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Object::Array(a) => Some(a),
            _ => None,
        }
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Object::Boolean(b)
    }
}

impl From<i64> for Object {
    fn from(i: i64) -> Self {
        Object::Integer(i)
    }
}

impl From<i32> for Object {
    fn from(i: i32) -> Self {
        Object::Integer(i64::from(i))
    }
}

impl From<f32> for Object {
    fn from(f: f32) -> Self {
        Object::Float(f)
    }
}

impl From<StringLiteral> for Object {
    fn from(s: StringLiteral) -> Self {
        Object::StringLiteral(s)
    }
}

impl From<HexLiteral> for Object {
    fn from(h: HexLiteral) -> Self {
        Object::HexLiteral(h)
    }
}

impl From<Array> for Object {
    fn from(a: Array) -> Self {
        Object::Array(a)
    }
}

impl From<Dict> for Object {
    fn from(d: Dict) -> Self {
        Object::Dict(d)
    }
}

impl From<IndirectRef> for Object {
    fn from(r: IndirectRef) -> Self {
        Object::IndirectRef(r)
    }
}

impl From<StreamDict> for Object {
    fn from(s: StreamDict) -> Self {
        Object::Stream(s)
    }
}

/// A reference to another object by `(object number, generation)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndirectRef {
    pub object_number: u32,
    pub generation: u16,
}

impl IndirectRef {
    pub fn new(object_number: u32, generation: u16) -> Self {
        Self {
            object_number,
            generation,
        }
    }
}

/// The escaped text between the parentheses of a literal string.
///
/// The stored text is exactly what appears in the file; use [`bytes`](Self::bytes)
/// to obtain the unescaped content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringLiteral(pub String);

impl StringLiteral {
    pub fn new(escaped: impl Into<String>) -> Self {
        Self(escaped.into())
    }

    /// Build a literal by escaping raw bytes.
    pub fn from_bytes(raw: &[u8]) -> Self {
        Self(literal::escape(raw))
    }

    /// The escaped text as stored.
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Unescape to the raw byte content.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        literal::unescape(&self.0)
    }
}

/// The hex digits between the angle brackets of a hexadecimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexLiteral(pub String);

impl HexLiteral {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    /// Build a literal by hex-encoding raw bytes (uppercase digits).
    pub fn from_bytes(raw: &[u8]) -> Self {
        Self(literal::encode_hex(raw))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Decode the hex digits to bytes.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        literal::decode_hex(&self.0)
    }
}

/// A stream object: its dictionary plus the raw, still-filtered content bytes.
///
/// The bytes are opaque here; decoding them according to `/Filter` belongs to
/// the stream filter layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StreamDict {
    pub dict: Dict,
    #[serde(default)]
    pub raw: Vec<u8>,
}

impl StreamDict {
    pub fn new(dict: Dict, raw: Vec<u8>) -> Self {
        Self { dict, raw }
    }
}
