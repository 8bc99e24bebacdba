//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert JSON response has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Assert a 400 with the JSON error body
pub fn assert_bad_color(response: &TestResponse) {
    assert_status(response, StatusCode::BAD_REQUEST);
    assert_json_status(response, 400);
    let json: serde_json::Value = response.json();
    let error = json["error"].as_str().expect("error should be a string");
    assert!(
        error.starts_with("invalid color format"),
        "Unexpected error message: {error}"
    );
}

/// Assert a `{L, a, b}` object with numeric fields
pub fn assert_lab_object(value: &serde_json::Value) {
    for key in ["L", "a", "b"] {
        assert!(value[key].is_f64(), "Expected numeric {key} in {value}");
    }
}

/// Assert a `#rrggbb` lowercase display color
pub fn assert_display_hex(value: &str) {
    assert_eq!(value.len(), 7, "Expected #rrggbb, got {value}");
    assert!(value.starts_with('#'), "Expected #rrggbb, got {value}");
    assert!(
        value[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Expected lowercase hex, got {value}"
    );
}
