use super::*;

// =============================================================
// Error normalization
// =============================================================

#[test]
fn error_message_prefers_detail_body() {
    let message = error_message(422, r#"{"detail": "Invalid file type. Only JPEG and PNG images are supported."}"#);
    assert_eq!(
        message,
        "Invalid file type. Only JPEG and PNG images are supported."
    );
}

#[test]
fn error_message_falls_back_on_unparseable_body() {
    let message = error_message(502, "<html>Bad Gateway</html>");
    assert_eq!(message, "The server returned an error (status 502).");
}

#[test]
fn error_message_falls_back_on_empty_body() {
    let message = error_message(500, "");
    assert_eq!(message, "The server returned an error (status 500).");
}

#[test]
fn error_message_ignores_unexpected_json_shape() {
    let message = error_message(503, r#"{"error": "down"}"#);
    assert_eq!(message, "The server returned an error (status 503).");
}

// =============================================================
// Base URL
// =============================================================

#[test]
fn base_url_defaults_to_api_prefix_off_browser() {
    // Without a browser window (non-hydrate build) the deployment prefix
    // is used.
    assert_eq!(base_url(), "/api");
}
