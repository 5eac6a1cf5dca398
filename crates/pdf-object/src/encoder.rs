//! Canonical encoder: renders object trees in PDF file syntax.
//!
//! The output is what a writer appends to the file body, byte for byte:
//!
//! - **Dictionaries**: `<</Key value/Key2 value>>` with keys in sorted order
//! - **Arrays**: `[1 2/Name(text)]`
//! - **Names**: `/` plus `#XX` escapes for irregular bytes
//! - **Numbers**: plain decimal, no exponents; floats always carry a `.`
//! - **References**: `12 0 R`
//!
//! A space separates two tokens only where the second does not begin with a
//! delimiter (`/`, `(`, `<`, `[`).
//!
//! # Example
//! ```
//! use pdf_object::{Dict, IndirectRef, Object};
//!
//! let mut d = Dict::new();
//! d.insert("Type", Object::name("Page"));
//! d.insert("Parent", Object::IndirectRef(IndirectRef::new(3, 0)));
//! d.insert("Rotate", Object::Integer(90));
//! assert_eq!(d.pdf_string(), "<</Parent 3 0 R/Rotate 90/Type/Page>>");
//! ```

use crate::array::Array;
use crate::dict::Dict;
use crate::literal::encode_name;
use crate::types::{IndirectRef, Object, StreamDict};

impl Object {
    /// Render the object in canonical PDF syntax.
    pub fn pdf_string(&self) -> String {
        let mut out = String::new();
        encode_object(self, &mut out);
        out
    }
}

impl Dict {
    /// Render the dictionary in canonical PDF syntax.
    pub fn pdf_string(&self) -> String {
        let mut out = String::new();
        encode_dict(self, &mut out);
        out
    }
}

impl Array {
    /// Render the array in canonical PDF syntax.
    pub fn pdf_string(&self) -> String {
        let mut out = String::new();
        encode_array(self, &mut out);
        out
    }
}

impl IndirectRef {
    pub fn pdf_string(&self) -> String {
        format!("{} {} R", self.object_number, self.generation)
    }
}

impl StreamDict {
    /// Canonical form of the stream dictionary. The `stream` ... `endstream`
    /// body is framed by the writer that places the object in the file.
    pub fn pdf_string(&self) -> String {
        self.dict.pdf_string()
    }
}

/// Dispatch on the variant. The match is exhaustive, so every variant has
/// exactly one encoding.
fn encode_object(obj: &Object, out: &mut String) {
    match obj {
        Object::Null => out.push_str("null"),
        Object::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Object::Integer(i) => out.push_str(&i.to_string()),
        Object::Float(f) => out.push_str(&format_float(*f)),
        Object::Name(n) => {
            out.push('/');
            out.push_str(&encode_name(n));
        }
        Object::StringLiteral(s) => {
            out.push('(');
            out.push_str(s.value());
            out.push(')');
        }
        Object::HexLiteral(h) => {
            out.push('<');
            out.push_str(h.value());
            out.push('>');
        }
        Object::Array(a) => encode_array(a, out),
        Object::Dict(d) => encode_dict(d, out),
        Object::IndirectRef(r) => out.push_str(&r.pdf_string()),
        Object::Stream(s) => encode_dict(&s.dict, out),
    }
}

/// Emit `<<`, each `/Key value` pair in key order, then `>>`.
fn encode_dict(dict: &Dict, out: &mut String) {
    out.push_str("<<");
    for (key, value) in dict.iter() {
        out.push('/');
        out.push_str(&encode_name(key));
        if !starts_with_delimiter(value) {
            out.push(' ');
        }
        encode_object(value, out);
    }
    out.push_str(">>");
}

/// Emit `[`, the elements, then `]`.
fn encode_array(arr: &Array, out: &mut String) {
    out.push('[');
    for (i, item) in arr.iter().enumerate() {
        if i > 0 && !starts_with_delimiter(item) {
            out.push(' ');
        }
        encode_object(item, out);
    }
    out.push(']');
}

/// True for variants whose encoding opens with a delimiter character and
/// therefore needs no separating space.
fn starts_with_delimiter(obj: &Object) -> bool {
    match obj {
        Object::Name(_)
        | Object::StringLiteral(_)
        | Object::HexLiteral(_)
        | Object::Array(_)
        | Object::Dict(_)
        | Object::Stream(_) => true,
        Object::Null
        | Object::Boolean(_)
        | Object::Integer(_)
        | Object::Float(_)
        | Object::IndirectRef(_) => false,
    }
}

/// Format a real number:
/// - No exponent notation (`Display` for `f32` never emits one)
/// - Always a fractional part, so the value reads back as a real (`1.0`)
/// - Negative zero and non-finite values normalize to `0.0`
fn format_float(f: f32) -> String {
    if !f.is_finite() || f == 0.0 {
        return "0.0".to_string();
    }
    let s = f.to_string();
    if s.contains('.') {
        s
    } else {
        format!("{}.0", s)
    }
}
