use crate::conf::types::{NormalizerConfig, QualityPolicyConfig};
use crate::normalize::tests::test_helpers::{
    bypass_policy, default_policy, headers, pairs, policy_from,
};
use crate::normalize::{NormalizeOutcome, normalize_request};
use http::HeaderMap;
use pretty_assertions::assert_eq;

fn assert_rewrite(outcome: NormalizeOutcome, expected_uri: &str) {
    match outcome {
        NormalizeOutcome::Rewrite { uri } => assert_eq!(uri, expected_uri),
        other => panic!("Expected Rewrite, got {:?}", other),
    }
}

//-----------------------------------------------------------------------------
// Production scenarios
//-----------------------------------------------------------------------------

#[test]
fn width_snaps_to_nearest_bucket_with_lower_tie() {
    // 250 ties between 200 and 300; the lower bucket wins.
    let outcome = normalize_request(
        &bypass_policy(),
        "/images/cat.jpg",
        &pairs(&[("w", "250"), ("f", "webp")]),
        &HeaderMap::new(),
    );

    assert_rewrite(outcome, "/images/cat.jpg/format=webp,width=200");
}

#[test]
fn bare_request_negotiates_webp_and_takes_default_width() {
    let outcome = normalize_request(
        &bypass_policy(),
        "/images/dog.png",
        &[],
        &headers(&[("accept", "image/webp,image/apng,*/*")]),
    );

    assert_rewrite(outcome, "/images/dog.png/format=webp,width=400");
}

#[test]
fn gif_bypasses_to_external_resizer() {
    let outcome = normalize_request(
        &bypass_policy(),
        "/images/banner.gif",
        &[],
        &headers(&[("host", "cdn.cacheimg.com")]),
    );

    match outcome {
        NormalizeOutcome::Redirect { status, location } => {
            assert_eq!(status, 302);
            assert_eq!(
                location,
                "https://minio.cacheimg.com/img/720/0/resize/images/banner.gif"
            );
        }
        other => panic!("Expected Redirect, got {:?}", other),
    }
}

#[test]
fn oversized_quality_clamps_into_the_top_bucket() {
    let outcome = normalize_request(
        &bypass_policy(),
        "/images/x.jpg",
        &pairs(&[("q", "999")]),
        &HeaderMap::new(),
    );

    assert_rewrite(outcome, "/images/x.jpg/format=jpeg,quality=100,width=400");
}

#[test]
fn auto_format_without_negotiable_accept_takes_default() {
    let outcome = normalize_request(
        &bypass_policy(),
        "/images/y.jpg",
        &pairs(&[("f", "AUTO")]),
        &headers(&[("accept", "image/png,image/jpeg")]),
    );

    assert_rewrite(outcome, "/images/y.jpg/format=jpeg,width=400");
}

//-----------------------------------------------------------------------------
// Policy knobs
//-----------------------------------------------------------------------------

#[test]
fn forced_format_suppresses_size_and_quality() {
    // The inline alternative to the bypass redirect: gif stays on this edge
    // but is never resized or transcoded.
    let policy = policy_from(NormalizerConfig {
        forced_formats: vec!["gif".to_string()],
        ..NormalizerConfig::default()
    });

    let outcome = normalize_request(
        &policy,
        "/images/banner.gif",
        &pairs(&[("w", "300"), ("q", "80"), ("f", "webp")]),
        &headers(&[("accept", "image/webp")]),
    );

    assert_rewrite(outcome, "/images/banner.gif/format=gif");
}

#[test]
fn clamp_policy_keeps_the_exact_quality() {
    let policy = policy_from(NormalizerConfig {
        quality_policy: QualityPolicyConfig::Clamp,
        ..NormalizerConfig::default()
    });

    let outcome = normalize_request(
        &policy,
        "/images/x.jpg",
        &pairs(&[("q", "75")]),
        &HeaderMap::new(),
    );

    assert_rewrite(outcome, "/images/x.jpg/format=jpeg,quality=75,width=400");
}

#[test]
fn explicit_format_beats_accept_negotiation() {
    let outcome = normalize_request(
        &default_policy(),
        "/images/z.jpg",
        &pairs(&[("f", "png")]),
        &headers(&[("accept", "image/webp")]),
    );

    assert_rewrite(outcome, "/images/z.jpg/format=png,width=400");
}

#[test]
fn height_is_parsed_but_never_emitted() {
    let outcome = normalize_request(
        &default_policy(),
        "/images/tall.jpg",
        &pairs(&[("h", "900"), ("w", "400")]),
        &HeaderMap::new(),
    );

    assert_rewrite(outcome, "/images/tall.jpg/format=jpeg,width=400");
}

#[test]
fn malformed_parameters_degrade_to_defaults() {
    let outcome = normalize_request(
        &default_policy(),
        "/images/x.jpg",
        &pairs(&[("w", "banana"), ("q", "-3"), ("f", "tiff")]),
        &HeaderMap::new(),
    );

    assert_rewrite(outcome, "/images/x.jpg/format=jpeg,width=400");
}

//-----------------------------------------------------------------------------
// Invariants
//-----------------------------------------------------------------------------

#[test]
fn rewritten_uri_never_carries_a_query_string() {
    let outcome = normalize_request(
        &bypass_policy(),
        "/images/cat.jpg",
        &pairs(&[("w", "250"), ("utm_source", "mail"), ("cachebust", "123")]),
        &HeaderMap::new(),
    );

    match outcome {
        NormalizeOutcome::Rewrite { uri } => assert!(!uri.contains('?')),
        other => panic!("Expected Rewrite, got {:?}", other),
    }
}

#[test]
fn normalization_is_a_single_pass_transform() {
    // Re-applying the transform to its own output appends a second suffix:
    // an empty query resolves to the default variant. Inputs must be
    // original client requests.
    let policy = default_policy();

    let first = match normalize_request(&policy, "/i.jpg", &[], &HeaderMap::new()) {
        NormalizeOutcome::Rewrite { uri } => uri,
        other => panic!("Expected Rewrite, got {:?}", other),
    };
    assert_eq!(first, "/i.jpg/format=jpeg,width=400");

    let second = match normalize_request(&policy, &first, &[], &HeaderMap::new()) {
        NormalizeOutcome::Rewrite { uri } => uri,
        other => panic!("Expected Rewrite, got {:?}", other),
    };
    assert_eq!(second, "/i.jpg/format=jpeg,width=400/format=jpeg,width=400");
}
