//! Request/response protocol for the SNP analysis endpoint.
//!
//! [`handle`] is a pure function of the request and the injected
//! [`AnalysisEnv`]: it never touches the process environment or any shared
//! state, so the hosting server can call it from any number of tasks.

use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use http::{HeaderValue, Method, Request, Response, StatusCode};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::analysis::analyze;
use crate::config::AnalysisEnv;

const ALLOWED_ORIGIN: &str = "*";
const ALLOWED_METHODS: &str = "POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Used only if the error body itself cannot be serialized
const FALLBACK_ERROR_BODY: &[u8] = br#"{"error":"internal error"}"#;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Dispatch one request.
///
/// - `OPTIONS`: CORS pre-flight, 200 with an empty body
/// - `POST`: analyze the body, 200 with the result or 500 with `{"error": ...}`
/// - anything else: 405 with no headers and an empty body
pub fn handle(request: &Request<Vec<u8>>, env: &AnalysisEnv) -> Response<Vec<u8>> {
    match *request.method() {
        Method::OPTIONS => preflight_response(),
        Method::POST => match analyze(request.body(), env) {
            Ok(result) => {
                info!(
                    total_variants = result.metadata.total_variants,
                    api_configured = result.metadata.api_configured,
                    "SNP batch analyzed"
                );
                match serde_json::to_vec(&result) {
                    Ok(body) => json_response(StatusCode::OK, body),
                    Err(e) => error_response(&e.to_string()),
                }
            }
            Err(e) => {
                warn!(error = %e, "SNP batch rejected");
                error_response(&e.to_string())
            }
        },
        ref method => {
            debug!(%method, "method not allowed");
            method_not_allowed()
        }
    }
}

/// The single failure shape: 500, JSON content type, CORS origin, `{"error": message}`.
pub fn error_response(message: &str) -> Response<Vec<u8>> {
    let body = serde_json::to_vec(&ErrorBody { error: message })
        .unwrap_or_else(|_| FALLBACK_ERROR_BODY.to_vec());
    json_response(StatusCode::INTERNAL_SERVER_ERROR, body)
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response<Vec<u8>> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    let headers = response.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOWED_ORIGIN),
    );
    response
}

fn preflight_response() -> Response<Vec<u8>> {
    let mut response = Response::new(Vec::new());
    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOWED_ORIGIN),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}

fn method_not_allowed() -> Response<Vec<u8>> {
    let mut response = Response::new(Vec::new());
    *response.status_mut() = StatusCode::METHOD_NOT_ALLOWED;
    response
}
