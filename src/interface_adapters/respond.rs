use std::fmt;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::response::Response;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;

use crate::domain::validator::ValidationErrors;
use crate::interface_adapters::body::BodyError;

const SERVER_ERROR_MESSAGE: &str =
    "the server encountered a problem and could not process your request";

// Single-key JSON wrapper around a response or error payload, e.g.
// {"movie": {...}} or {"error": "..."}.
pub struct Envelope<T> {
    key: &'static str,
    value: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(key: &'static str, value: T) -> Self {
        Envelope { key, value }
    }
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.value)?;
        map.end()
    }
}

// Serialize a payload to tab-indented JSON with a trailing newline and build
// the response. Caller headers are merged in first so the content type,
// written last, always wins.
pub fn write_json<T>(
    status: StatusCode,
    data: &T,
    headers: HeaderMap,
) -> Result<Response, serde_json::Error>
where
    T: Serialize,
{
    let mut body = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut body, formatter);
    data.serialize(&mut serializer)?;
    body.push(b'\n');

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    for (name, value) in headers.iter() {
        response.headers_mut().insert(name, value.clone());
    }
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(response)
}

// Wrap a failure payload in the error envelope. If even that write fails,
// fall back to an empty 500 rather than recursing into this path.
pub fn error_response<T>(status: StatusCode, message: T) -> Response
where
    T: Serialize,
{
    match write_json(status, &Envelope::new("error", message), HeaderMap::new()) {
        Ok(response) => response,
        Err(err) => {
            tracing::error!(error = %err, "failed to encode error response");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        }
    }
}

// The full cause stays in the logs; the client only sees an opaque message.
pub fn server_error_response(err: impl fmt::Display) -> Response {
    tracing::error!(error = %err, "internal server error");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE)
}

pub fn not_found_response() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "the requested resource could not be found",
    )
}

pub fn method_not_allowed_response(method: &Method) -> Response {
    error_response(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("the {method} method is not supported for this resource"),
    )
}

pub fn bad_request_response(err: BodyError) -> Response {
    error_response(StatusCode::BAD_REQUEST, err.to_string())
}

pub fn failed_validation_response(errors: ValidationErrors) -> Response {
    error_response(StatusCode::UNPROCESSABLE_ENTITY, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::HeaderName;
    use serde_json::Value;

    async fn body_bytes(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("expected response body")
            .to_vec()
    }

    #[test]
    fn when_an_envelope_is_serialized_then_it_has_exactly_one_key() {
        let value = serde_json::to_value(Envelope::new("movie", 5)).expect("expected encode");
        assert_eq!(value, serde_json::json!({"movie": 5}));
    }

    #[tokio::test]
    async fn when_json_is_written_then_it_is_tab_indented_with_a_trailing_newline() {
        let response = write_json(
            StatusCode::OK,
            &Envelope::new("movie", serde_json::json!({"id": 1})),
            HeaderMap::new(),
        )
        .expect("expected write to succeed");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_bytes(response).await;
        let text = String::from_utf8(body).expect("expected utf-8 body");
        assert!(text.ends_with('\n'));
        assert!(text.contains("\n\t\"movie\""));
    }

    #[tokio::test]
    async fn when_custom_headers_are_supplied_then_they_are_merged_but_never_the_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static("abc-123"),
        );
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain"),
        );

        let response = write_json(StatusCode::OK, &Envelope::new("movie", 1), headers)
            .expect("expected write to succeed");

        assert_eq!(
            response.headers().get("x-request-id"),
            Some(&HeaderValue::from_static("abc-123"))
        );
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE),
            Some(&HeaderValue::from_static("application/json"))
        );
    }

    #[tokio::test]
    async fn when_an_error_response_is_built_then_the_message_sits_under_the_error_key() {
        let response = not_found_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let payload: Value =
            serde_json::from_slice(&body_bytes(response).await).expect("expected json body");
        assert_eq!(payload["error"], "the requested resource could not be found");
    }

    #[tokio::test]
    async fn when_a_method_is_rejected_then_the_message_names_the_method() {
        let response = method_not_allowed_response(&Method::DELETE);
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let payload: Value =
            serde_json::from_slice(&body_bytes(response).await).expect("expected json body");
        assert_eq!(
            payload["error"],
            "the DELETE method is not supported for this resource"
        );
    }
}
