use crate::normalize::suffix::{canonical_suffix, canonical_uri};
use crate::normalize::{Format, ImageOperations};
use pretty_assertions::assert_eq;

#[test]
fn tokens_follow_fixed_order() {
    // Arrange
    let ops = ImageOperations {
        format: Some(Format::Webp),
        width: Some(400),
        quality: Some(80),
        height: None,
    };

    // Act / Assert: format, quality, width - never any other order.
    assert_eq!(canonical_suffix(&ops), "format=webp,quality=80,width=400");
}

#[test]
fn quality_is_omitted_when_unresolved() {
    let ops = ImageOperations {
        format: Some(Format::Jpeg),
        width: Some(200),
        quality: None,
        height: None,
    };

    assert_eq!(canonical_suffix(&ops), "format=jpeg,width=200");
}

#[test]
fn forced_format_serializes_alone() {
    let ops = ImageOperations {
        format: Some(Format::Gif),
        width: None,
        quality: None,
        height: None,
    };

    assert_eq!(canonical_suffix(&ops), "format=gif");
}

#[test]
fn height_is_never_serialized() {
    let ops = ImageOperations {
        format: Some(Format::Jpeg),
        width: Some(400),
        quality: Some(100),
        height: Some(9999),
    };

    assert!(!canonical_suffix(&ops).contains("height"));
}

#[test]
fn uri_joins_path_and_suffix_with_a_slash() {
    let ops = ImageOperations {
        format: Some(Format::Jpeg),
        width: Some(400),
        quality: None,
        height: None,
    };

    assert_eq!(
        canonical_uri("/images/cat.jpg", &ops),
        "/images/cat.jpg/format=jpeg,width=400"
    );
}
