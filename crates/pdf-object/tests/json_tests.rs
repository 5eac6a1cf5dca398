/// JSON interchange tests.
use pdf_object::{
    from_json, to_json, to_json_pretty, Array, Dict, IndirectRef, Object, PdfError, StringLiteral,
};

#[test]
fn from_json_builds_page_dict() {
    let json = r#"{"Dict": {
        "Type": {"Name": "Page"},
        "Parent": {"IndirectRef": {"object_number": 3, "generation": 0}},
        "MediaBox": {"Array": [{"Integer": 0}, {"Integer": 0}, {"Integer": 612}, {"Integer": 792}]},
        "Rotate": "Null"
    }}"#;
    let obj = from_json(json).unwrap();
    let d = obj.as_dict().expect("dict");
    assert_eq!(d.type_name(), "Page");
    assert_eq!(d.indirect_ref_entry("Parent"), Some(IndirectRef::new(3, 0)));
    assert_eq!(d.array_entry("MediaBox").map(|a| a.len()), Some(4));
    assert_eq!(d.find("Rotate"), Some(&Object::Null));
    assert_eq!(
        obj.pdf_string(),
        "<</MediaBox[0 0 612 792]/Parent 3 0 R/Rotate null/Type/Page>>"
    );
}

#[test]
fn literals_are_transparent_strings() {
    let obj = from_json(r#"{"StringLiteral": "a\\(b\\)"}"#).unwrap();
    assert_eq!(obj, Object::StringLiteral(StringLiteral::new(r"a\(b\)")));
}

#[test]
fn stream_raw_defaults_to_empty() {
    let obj = from_json(r#"{"Stream": {"dict": {"Length": {"Integer": 0}}}}"#).unwrap();
    match obj {
        Object::Stream(s) => {
            assert!(s.raw.is_empty());
            assert_eq!(s.dict.length().and_then(|l| l.direct()), Some(0));
        }
        other => panic!("expected stream, got {other:?}"),
    }
}

#[test]
fn to_json_then_from_json_preserves_tree() {
    let mut inner = Dict::new();
    inner.insert("F", Object::Float(0.5));
    let mut d = Dict::new();
    d.insert("Inner", Object::Dict(inner));
    d.insert("Flag", Object::Boolean(true));
    let obj = Object::Dict(d);

    let json = to_json(&obj).unwrap();
    assert_eq!(from_json(&json).unwrap(), obj);
}

#[test]
fn invalid_json_is_error() {
    assert!(matches!(from_json("{not json"), Err(PdfError::Json(_))));
}

#[test]
fn unknown_variant_is_error() {
    assert!(matches!(
        from_json(r#"{"Complex": 1}"#),
        Err(PdfError::Json(_))
    ));
}

#[test]
fn pretty_json_reads_back() {
    let obj = Object::Array(Array::from(vec![Object::Integer(1), Object::name("A")]));
    let pretty = to_json_pretty(&obj).unwrap();
    assert!(pretty.contains('\n'));
    let back = from_json(&pretty).unwrap();
    assert_eq!(back.as_array().map(|a| a.len()), Some(2));
    assert_eq!(back, obj);
}

#[test]
fn non_finite_float_is_rejected_on_serialize() {
    assert!(matches!(
        to_json(&Object::Float(f32::NAN)),
        Err(PdfError::Encoding(_))
    ));

    // Nested inside arrays and dictionaries too
    let mut d = Dict::new();
    d.insert(
        "Matrix",
        Object::Array(Array::from(vec![Object::Float(1.0), Object::Float(f32::INFINITY)])),
    );
    let obj = Object::Dict(d);
    assert!(matches!(to_json(&obj), Err(PdfError::Encoding(_))));
    assert!(matches!(to_json_pretty(&obj), Err(PdfError::Encoding(_))));
}

#[test]
fn finite_floats_round_trip() {
    let obj = Object::Array(Array::from(vec![
        Object::Float(-0.0),
        Object::Float(1e10),
        Object::Float(0.25),
    ]));
    assert_eq!(from_json(&to_json(&obj).unwrap()).unwrap(), obj);
}
