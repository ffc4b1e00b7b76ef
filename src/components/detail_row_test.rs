use super::*;

#[test]
fn present_value_passes_through_verbatim() {
    assert_eq!(
        text_or_fallback(Some("₹45,000".to_owned())),
        "₹45,000"
    );
}

#[test]
fn missing_value_falls_back() {
    assert_eq!(text_or_fallback(None), NOT_AVAILABLE);
}

#[test]
fn blank_value_falls_back() {
    assert_eq!(text_or_fallback(Some("   ".to_owned())), NOT_AVAILABLE);
}
