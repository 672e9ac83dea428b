use crate::ctx::normalization::parse_query_pairs;
use pretty_assertions::assert_eq;

fn assert_pairs(raw: &str, expected: &[(&str, &str)]) {
    let expected: Vec<(String, String)> = expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    assert_eq!(parse_query_pairs(raw), expected);
}

#[test]
fn empty_query_yields_no_pairs() {
    assert_pairs("", &[]);
}

#[test]
fn splits_simple_pairs() {
    assert_pairs("w=250&f=webp", &[("w", "250"), ("f", "webp")]);
}

#[test]
fn key_without_value_gets_empty_value() {
    assert_pairs("w", &[("w", "")]);
}

#[test]
fn duplicate_keys_are_preserved_in_order() {
    assert_pairs("w=100&w=300", &[("w", "100"), ("w", "300")]);
}

#[test]
fn empty_parts_vanish() {
    assert_pairs("w=250&&f=webp&", &[("w", "250"), ("f", "webp")]);
}

#[test]
fn percent_sequences_decode() {
    assert_pairs("f=web%70", &[("f", "webp")]);
}

#[test]
fn undecodable_sequences_are_kept_raw() {
    // %FF is not valid UTF-8 on its own; fail-open keeps the raw token.
    assert_pairs("f=%FF", &[("f", "%FF")]);
}
