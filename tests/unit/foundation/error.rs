use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AugmentError::empty_input("x")
            .to_string()
            .contains("empty input:")
    );
    assert!(
        AugmentError::degenerate("x")
            .to_string()
            .contains("degenerate transform:")
    );
    assert!(
        AugmentError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AugmentError::empty_corpus("x")
            .to_string()
            .contains("empty corpus:")
    );
    assert!(
        AugmentError::output_unwritable("x")
            .to_string()
            .contains("output unwritable:")
    );
}

#[test]
fn oversized_reports_both_dimensions() {
    let err = AugmentError::oversized(Dims::new(120, 118), Dims::new(100, 100));
    assert_eq!(
        err.to_string(),
        "oversized overlay: canvas 120x118 exceeds background 100x100"
    );
}

#[test]
fn only_startup_failures_are_fatal() {
    assert!(AugmentError::empty_input("x").is_per_item());
    assert!(AugmentError::degenerate("x").is_per_item());
    assert!(AugmentError::oversized(Dims::new(2, 2), Dims::new(1, 1)).is_per_item());
    assert!(!AugmentError::empty_corpus("x").is_per_item());
    assert!(!AugmentError::validation("x").is_per_item());
    assert!(!AugmentError::output_unwritable("x").is_per_item());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AugmentError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(err.is_per_item());
}
