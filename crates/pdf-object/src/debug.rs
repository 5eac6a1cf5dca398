//! Indented debug rendering, exposed through `Display`.
//!
//! This form is for logs and diagnostics only and is not meant to be parsed
//! back. Dictionaries put one `<Key, value>` entry per line, indented by
//! tabs, with keys in sorted order:
//!
//! ```text
//! <<
//!     <Resources, <<
//!         <Font, (F1)>
//!     >>>
//!     <Type, Page>
//! >>
//! ```

use std::fmt;

use crate::array::Array;
use crate::dict::Dict;
use crate::types::{IndirectRef, Object, StreamDict};

impl Dict {
    fn indented_string(&self, level: usize) -> String {
        let tabs = "\t".repeat(level);
        let mut out = String::from("<<\n");
        for (key, value) in self.iter() {
            out.push_str(&tabs);
            out.push('<');
            out.push_str(key);
            out.push_str(", ");
            out.push_str(&indented_value(value, level + 1));
            out.push_str(">\n");
        }
        out.push_str(&"\t".repeat(level.saturating_sub(1)));
        out.push_str(">>");
        out
    }
}

impl Array {
    fn indented_string(&self, level: usize) -> String {
        let tabs = "\t".repeat(level);
        let mut out = String::from("[");
        let mut first = true;
        for item in self.iter() {
            let sep = if first { "" } else { " " };
            first = false;
            match item {
                Object::Dict(d) => {
                    // Dictionaries break out onto their own line
                    out.push('\n');
                    out.push_str(&tabs);
                    out.push_str(&d.indented_string(level + 1));
                    out.push('\n');
                    out.push_str(&tabs);
                    first = true;
                }
                other => {
                    out.push_str(sep);
                    out.push_str(&indented_value(other, level + 1));
                }
            }
        }
        out.push(']');
        out
    }
}

impl StreamDict {
    fn indented_string(&self, level: usize) -> String {
        format!(
            "{} stream({} bytes)",
            self.dict.indented_string(level),
            self.raw.len()
        )
    }
}

/// Composite values recurse at `level`; scalars use their plain `Display`.
fn indented_value(value: &Object, level: usize) -> String {
    match value {
        Object::Dict(d) => d.indented_string(level),
        Object::Array(a) => a.indented_string(level),
        Object::Stream(s) => s.indented_string(level),
        scalar => scalar.to_string(),
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Null => f.write_str("null"),
            Object::Boolean(b) => write!(f, "{}", b),
            Object::Integer(i) => write!(f, "{}", i),
            Object::Float(x) => write!(f, "{}", x),
            Object::Name(n) => f.write_str(n),
            Object::StringLiteral(s) => write!(f, "({})", s.value()),
            Object::HexLiteral(h) => write!(f, "<{}>", h.value()),
            Object::IndirectRef(r) => write!(f, "{}", r),
            Object::Array(a) => write!(f, "{}", a),
            Object::Dict(d) => write!(f, "{}", d),
            Object::Stream(s) => write!(f, "{}", s),
        }
    }
}

impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.indented_string(1))
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.indented_string(1))
    }
}

impl fmt::Display for StreamDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.indented_string(1))
    }
}

impl fmt::Display for IndirectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} R)", self.object_number, self.generation)
    }
}
