//! JSON interchange for object trees.
//!
//! Objects use serde's externally tagged layout, one key per variant:
//!
//! ```json
//! {"Dict": {"Type": {"Name": "Page"}, "Count": {"Integer": 3}, "Parent": "Null"}}
//! ```
//!
//! Dictionaries, arrays and the two literal string kinds are transparent, so
//! a `StringLiteral` is just its escaped text and a `HexLiteral` its digits.
//!
//! JSON has no NaN or infinity, so serializing a tree that holds a
//! non-finite `Float` fails with [`PdfError::Encoding`] rather than writing a
//! `null` that would not read back.

use crate::dict::Dict;
use crate::error::{PdfError, Result};
use crate::types::Object;

/// Parse a JSON document into an object tree.
pub fn from_json(json: &str) -> Result<Object> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize an object tree to compact JSON.
pub fn to_json(obj: &Object) -> Result<String> {
    check_finite(obj)?;
    Ok(serde_json::to_string(obj)?)
}

/// Serialize an object tree to indented JSON.
pub fn to_json_pretty(obj: &Object) -> Result<String> {
    check_finite(obj)?;
    Ok(serde_json::to_string_pretty(obj)?)
}

/// Reject trees containing a NaN or infinite real anywhere below `obj`.
fn check_finite(obj: &Object) -> Result<()> {
    match obj {
        Object::Float(f) if !f.is_finite() => Err(PdfError::Encoding(format!(
            "json: non-finite real {} has no JSON representation",
            f
        ))),
        Object::Array(a) => a.iter().try_for_each(check_finite),
        Object::Dict(d) => check_dict(d),
        Object::Stream(s) => check_dict(&s.dict),
        _ => Ok(()),
    }
}

fn check_dict(dict: &Dict) -> Result<()> {
    dict.iter().try_for_each(|(_, v)| check_finite(v))
}
