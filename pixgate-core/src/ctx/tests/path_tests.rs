use crate::ctx::normalization::{
    NormalizationOutcome, RejectReason, RewriteReason, normalize_path,
};
use pretty_assertions::assert_eq;

fn assert_accept_path(raw: &str) {
    match normalize_path(raw) {
        NormalizationOutcome::Accept(p) => assert_eq!(p.as_str(), raw),
        other => panic!("Expected Accept, got {:?}", other),
    }
}

fn assert_rewrite_path(raw: &str, expected: &str) {
    match normalize_path(raw) {
        NormalizationOutcome::Rewrite { value, reason } => {
            assert_eq!(value.as_str(), expected);
            assert_eq!(reason, RewriteReason::PathCanonicalization);
        }
        other => panic!("Expected Rewrite, got {:?}", other),
    }
}

fn assert_reject_path(raw: &str, expected: RejectReason) {
    match normalize_path(raw) {
        NormalizationOutcome::Reject { reason } => assert_eq!(reason, expected),
        other => panic!("Expected Reject, got {:?}", other),
    }
}

//-----------------------------------------------------------------------------
// Accept cases
//-----------------------------------------------------------------------------
#[test]
fn accept_simple_asset_path() {
    assert_accept_path("/images/cat.jpg");
}

#[test]
fn accept_root() {
    assert_accept_path("/");
}

//-----------------------------------------------------------------------------
// Rewrite cases
//-----------------------------------------------------------------------------
#[test]
fn rewrite_empty_to_root() {
    assert_rewrite_path("", "/");
}

#[test]
fn rewrite_relative_to_absolute() {
    assert_rewrite_path("images/cat.jpg", "/images/cat.jpg");
}

#[test]
fn rewrite_collapses_repeated_slashes() {
    assert_rewrite_path("//images///cat.jpg", "/images/cat.jpg");
}

#[test]
fn rewrite_drops_dot_segments() {
    assert_rewrite_path("/images/./thumbs/../cat.jpg", "/images/cat.jpg");
}

#[test]
fn rewrite_strips_trailing_slash() {
    assert_rewrite_path("/images/cat.jpg/", "/images/cat.jpg");
}

//-----------------------------------------------------------------------------
// Reject cases
//-----------------------------------------------------------------------------
#[test]
fn reject_traversal_above_root() {
    assert_reject_path("/../secret.jpg", RejectReason::PathTraversal);
}

#[test]
fn reject_nul_byte() {
    assert_reject_path("/images/cat\0.jpg", RejectReason::InvalidUtf8);
}
