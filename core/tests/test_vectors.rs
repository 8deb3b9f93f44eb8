//! Verify request building and response parsing against JSON test vectors
//! stored in `test-vectors/`.
//!
//! Bodies are compared as parsed JSON, not raw strings, so field order does
//! not cause false negatives.

use users_core::client::{build_request, parse_response};
use users_core::{ApiError, HttpMethod, HttpResponse, Params};

const BASE_URL: &str = "http://localhost:3000";

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/request.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let path = format!("{BASE_URL}{}", case["path"].as_str().unwrap());
        let method = parse_method(case["method"].as_str().unwrap());
        let params: Params = serde_json::from_value(case["params"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        let req = build_request(&path, &params, method).unwrap();
        assert_eq!(req.method, method, "{name}: method");
        assert_eq!(
            req.path,
            format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()),
            "{name}: path"
        );

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        if expected_req["body"].is_null() {
            assert!(req.body.is_none(), "{name}: body should be None");
        } else {
            let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(body, expected_req["body"], "{name}: body");
        }
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/response.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let result = parse_response(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Network" => assert!(matches!(err, ApiError::Network { .. }), "{name}: expected Network"),
                "Deserialization" => assert!(
                    matches!(err, ApiError::Deserialization(_)),
                    "{name}: expected Deserialization"
                ),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            assert_eq!(result.unwrap(), case["expected_result"], "{name}: parsed result");
        }
    }
}
