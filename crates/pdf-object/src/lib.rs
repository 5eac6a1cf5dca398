//! # pdf-object
//!
//! In-memory object model for PDF documents.
//!
//! PDF files are trees of a small set of primitive kinds: null, booleans,
//! integers, reals, names, literal and hexadecimal strings, arrays,
//! dictionaries, indirect references and streams. This crate models that tree
//! as the closed [`Object`] enum, provides the [`Dict`] container with a family
//! of typed accessors that fail soft (`None`) on absent or mistyped entries,
//! and renders trees in two forms: canonical PDF syntax for writers and an
//! indented debug form for diagnostics.
//!
//! Tokenizing file bytes, resolving indirect references and decoding stream
//! filters are left to the layers above.
//!
//! ## Quick start
//!
//! ```rust
//! use pdf_object::{Dict, IndirectRef, Object, StreamLength};
//!
//! let mut d = Dict::new();
//! d.insert("Type", Object::name("XRef"));
//! d.insert("Size", Object::Integer(42));
//! d.insert("Length", Object::IndirectRef(IndirectRef::new(17, 0)));
//!
//! assert_eq!(d.type_name(), "XRef");
//! assert_eq!(d.size(), 42);
//! assert_eq!(d.length(), Some(StreamLength::Indirect(IndirectRef::new(17, 0))));
//! assert_eq!(d.pdf_string(), "<</Length 17 0 R/Size 42/Type/XRef>>");
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `Object` variant type, `IndirectRef`, literal strings, `StreamDict`
//! - [`dict`] — `Dict` and the typed accessor protocol
//! - [`array`] — `Array`
//! - [`encoder`] — canonical PDF syntax (`pdf_string`)
//! - [`debug`] — indented debug form (`Display`)
//! - [`literal`] — string escaping, hex and name codecs
//! - [`json`] — JSON interchange via serde
//! - [`error`] — Error types

pub mod array;
pub mod debug;
pub mod dict;
pub mod encoder;
pub mod error;
pub mod json;
pub mod literal;
pub mod types;

pub use array::Array;
pub use dict::{Dict, StreamLength};
pub use error::{PdfError, Result};
pub use json::{from_json, to_json, to_json_pretty};
pub use types::{HexLiteral, IndirectRef, Object, StreamDict, StringLiteral};
