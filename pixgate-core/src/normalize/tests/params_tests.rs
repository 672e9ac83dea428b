use crate::normalize::params::extract_operations;
use crate::normalize::tests::test_helpers::pairs;
use pretty_assertions::assert_eq;

#[test]
fn recognizes_all_four_keys() {
    // Arrange
    let query = pairs(&[("f", "webp"), ("w", "250"), ("h", "180"), ("q", "85")]);

    // Act
    let raw = extract_operations(&query);

    // Assert
    assert_eq!(raw.format.as_deref(), Some("webp"));
    assert_eq!(raw.width, Some(250));
    assert_eq!(raw.height, Some(180));
    assert_eq!(raw.quality, Some(85));
}

#[test]
fn keys_are_case_insensitive() {
    let query = pairs(&[("F", "png"), ("W", "300"), ("Q", "50")]);

    let raw = extract_operations(&query);

    assert_eq!(raw.format.as_deref(), Some("png"));
    assert_eq!(raw.width, Some(300));
    assert_eq!(raw.quality, Some(50));
}

#[test]
fn unrecognized_keys_are_ignored() {
    let query = pairs(&[("width", "300"), ("fmt", "png"), ("x", "1")]);

    let raw = extract_operations(&query);

    assert_eq!(raw.format, None);
    assert_eq!(raw.width, None);
}

#[test]
fn last_occurrence_wins() {
    let query = pairs(&[("w", "100"), ("w", "300")]);

    let raw = extract_operations(&query);

    assert_eq!(raw.width, Some(300));
}

#[test]
fn non_numeric_width_counts_as_unset() {
    for bad in ["abc", "250abc", "12.5", ""] {
        let raw = extract_operations(&pairs(&[("w", bad)]));
        assert_eq!(raw.width, None, "width {bad:?} should be unset");
    }
}

#[test]
fn non_positive_values_count_as_unset() {
    for bad in ["0", "-1", "-400"] {
        let raw = extract_operations(&pairs(&[("w", bad), ("q", bad), ("h", bad)]));
        assert_eq!(raw.width, None);
        assert_eq!(raw.quality, None);
        assert_eq!(raw.height, None);
    }
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let raw = extract_operations(&pairs(&[("w", " 250 ")]));

    assert_eq!(raw.width, Some(250));
}

#[test]
fn empty_format_value_is_ignored() {
    let raw = extract_operations(&pairs(&[("f", "")]));

    assert_eq!(raw.format, None);
}

#[test]
fn empty_query_yields_no_operations() {
    let raw = extract_operations(&[]);

    assert_eq!(raw.format, None);
    assert_eq!(raw.width, None);
    assert_eq!(raw.quality, None);
    assert_eq!(raw.height, None);
}
