/// Property-based tests for the dictionary contract and the literal codecs.
///
/// Strategies generate flat dictionaries of scalar entries with unique keys,
/// arbitrary byte strings, and keys that are guaranteed absent.
use pdf_object::literal::{decode_hex, encode_hex, escape, unescape};
use pdf_object::{Dict, HexLiteral, IndirectRef, Object, StringLiteral};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-zA-Z0-9]{0,10}").unwrap()
}

fn arb_scalar() -> impl Strategy<Value = Object> {
    prop_oneof![
        Just(Object::Null),
        any::<bool>().prop_map(Object::Boolean),
        any::<i64>().prop_map(Object::Integer),
        (-1.0e6f32..1.0e6f32).prop_map(Object::Float),
        "[A-Za-z]{1,8}".prop_map(Object::Name),
        "[a-z ]{0,8}".prop_map(|s| Object::StringLiteral(StringLiteral::new(s))),
        "([0-9A-F]{2}){0,4}".prop_map(|s| Object::HexLiteral(HexLiteral::new(s))),
        (0u32..1000, 0u16..3).prop_map(|(n, g)| Object::IndirectRef(IndirectRef::new(n, g))),
    ]
}

fn arb_entries() -> impl Strategy<Value = Vec<(String, Object)>> {
    prop::collection::btree_map(arb_key(), arb_scalar(), 0..12)
        .prop_map(|m| m.into_iter().collect())
}

fn build(entries: &[(String, Object)]) -> Dict {
    let mut d = Dict::new();
    for (k, v) in entries {
        d.insert(k.clone(), v.clone());
    }
    d
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn canonical_form_ignores_insertion_order(entries in arb_entries()) {
        let forward = build(&entries);
        let reversed: Vec<_> = entries.iter().rev().cloned().collect();
        let backward = build(&reversed);
        prop_assert_eq!(forward.pdf_string(), backward.pdf_string());
        prop_assert_eq!(forward.to_string(), backward.to_string());
    }

    #[test]
    fn absent_key_yields_none_everywhere(entries in arb_entries()) {
        let d = build(&entries);
        // Generated keys start uppercase, so this one is never present
        let k = "absent";
        prop_assert!(d.find(k).is_none());
        prop_assert!(d.boolean_entry(k).is_none());
        prop_assert!(d.int_entry(k).is_none());
        prop_assert!(d.int64_entry(k).is_none());
        prop_assert!(d.float_entry(k).is_none());
        prop_assert!(d.name_entry(k).is_none());
        prop_assert!(d.string_literal_entry(k).is_none());
        prop_assert!(d.hex_literal_entry(k).is_none());
        prop_assert!(d.indirect_ref_entry(k).is_none());
        prop_assert!(d.dict_entry(k).is_none());
        prop_assert!(d.array_entry(k).is_none());
        prop_assert!(d.entry("d", k, false).unwrap().is_none());
        prop_assert!(d.string_entry_bytes(k).unwrap().is_none());
    }

    #[test]
    fn update_then_find(entries in arb_entries(), key in arb_key(), value in arb_scalar()) {
        let mut d = build(&entries);
        d.update(key.clone(), value.clone());
        prop_assert_eq!(d.find(&key), Some(&value));
    }

    #[test]
    fn update_none_changes_nothing(entries in arb_entries(), key in arb_key()) {
        let mut d = build(&entries);
        let before = d.clone();
        d.update(key, None);
        prop_assert_eq!(d, before);
    }

    #[test]
    fn insert_never_overwrites(entries in arb_entries(), key in arb_key(), a in arb_scalar(), b in arb_scalar()) {
        let mut d = build(&entries);
        d.delete(&key);
        prop_assert!(d.insert(key.clone(), a.clone()));
        prop_assert!(d.insert(key.clone(), b));
        prop_assert_eq!(d.find(&key), Some(&a));
    }

    #[test]
    fn increment_by_adds(start in -1_000_000i64..1_000_000, delta in -1_000i64..1_000) {
        let mut d = Dict::new();
        d.insert("K", Object::Integer(start));
        d.increment_by("K", delta).unwrap();
        prop_assert_eq!(d.int64_entry("K"), Some(start + delta));
    }

    #[test]
    fn unescape_inverts_escape(raw in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(unescape(&escape(&raw)).unwrap(), raw);
    }

    #[test]
    fn decode_hex_inverts_encode_hex(raw in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(decode_hex(&encode_hex(&raw)).unwrap(), raw);
    }
}
