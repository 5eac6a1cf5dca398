/// Debug (indented) form tests.
use pdf_object::{Array, Dict, HexLiteral, IndirectRef, Object, StreamDict, StringLiteral};

#[test]
fn debug_scalars() {
    assert_eq!(Object::Null.to_string(), "null");
    assert_eq!(Object::Boolean(true).to_string(), "true");
    assert_eq!(Object::Integer(-3).to_string(), "-3");
    assert_eq!(Object::Float(1.5).to_string(), "1.5");
    assert_eq!(Object::name("Page").to_string(), "Page");
    assert_eq!(
        Object::StringLiteral(StringLiteral::new("hi")).to_string(),
        "(hi)"
    );
    assert_eq!(Object::HexLiteral(HexLiteral::new("0A")).to_string(), "<0A>");
    assert_eq!(
        Object::IndirectRef(IndirectRef::new(4, 0)).to_string(),
        "(4 0 R)"
    );
}

#[test]
fn debug_empty_dict() {
    assert_eq!(Dict::new().to_string(), "<<\n>>");
}

#[test]
fn debug_flat_dict_sorted_one_entry_per_line() {
    let mut d = Dict::new();
    d.insert("Type", Object::name("Page"));
    d.insert("Size", Object::Integer(3));
    assert_eq!(d.to_string(), "<<\n\t<Size, 3>\n\t<Type, Page>\n>>");
}

#[test]
fn debug_nested_dict_indents_one_level() {
    let mut font = Dict::new();
    font.insert("F1", Object::IndirectRef(IndirectRef::new(9, 0)));
    let mut d = Dict::new();
    d.insert("Font", Object::Dict(font));
    d.insert("Type", Object::name("Page"));
    assert_eq!(
        d.to_string(),
        "<<\n\t<Font, <<\n\t\t<F1, (9 0 R)>\n\t>>>\n\t<Type, Page>\n>>"
    );
}

#[test]
fn debug_array_in_dict() {
    let mut d = Dict::new();
    d.insert(
        "MediaBox",
        Object::Array(Array::from(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Integer(792),
        ])),
    );
    assert_eq!(d.to_string(), "<<\n\t<MediaBox, [0 0 612 792]>\n>>");
}

#[test]
fn debug_array_puts_dict_on_own_line() {
    let mut inner = Dict::new();
    inner.insert("A", Object::Integer(1));
    let a = Array::from(vec![
        Object::Integer(1),
        Object::Dict(inner),
        Object::Integer(2),
    ]);
    assert_eq!(a.to_string(), "[1\n\t<<\n\t\t<A, 1>\n\t>>\n\t2]");
}

#[test]
fn debug_nested_arrays() {
    let a = Array::from(vec![
        Object::Array(Array::from(vec![Object::Integer(1)])),
        Object::name("X"),
    ]);
    assert_eq!(a.to_string(), "[[1] X]");
}

#[test]
fn debug_stream_shows_dict_and_size() {
    let mut sd = Dict::new();
    sd.insert("Length", Object::Integer(3));
    let s = StreamDict::new(sd, b"abc".to_vec());
    assert_eq!(s.to_string(), "<<\n\t<Length, 3>\n>> stream(3 bytes)");
}

#[test]
fn debug_object_dict_matches_dict() {
    let mut d = Dict::new();
    d.insert("K", Object::Null);
    assert_eq!(Object::Dict(d.clone()).to_string(), d.to_string());
}

#[test]
fn debug_is_deterministic() {
    let mut a = Dict::new();
    a.insert("B", Object::Integer(2));
    a.insert("A", Object::Integer(1));
    let mut b = Dict::new();
    b.insert("A", Object::Integer(1));
    b.insert("B", Object::Integer(2));
    assert_eq!(a.to_string(), b.to_string());
}
