use axum::body::{Body, to_bytes};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use thiserror::Error;

use crate::domain::runtime::INVALID_RUNTIME_FORMAT;

// Upper bound on request body size; bounds worst-case memory per request.
pub const MAX_BODY_BYTES: usize = 1_048_576;

// Client-facing decode failures. The Display strings are part of the API
// contract and are sent to the client verbatim in 400 responses.
#[derive(Debug, PartialEq, Error)]
pub enum BodyError {
    #[error("body must not be larger than {0} bytes")]
    TooLarge(usize),
    #[error("body must not be empty")]
    Empty,
    #[error("body contains badly-formed JSON")]
    BadlyFormed,
    #[error("body contains badly-formed JSON (at character {0})")]
    BadlyFormedAt(usize),
    #[error("body contains incorrect JSON type for field \"{0}\"")]
    IncorrectFieldType(String),
    #[error("body contains incorrect JSON type (at character {0})")]
    IncorrectTypeAt(usize),
    #[error("body contains unknown key \"{0}\"")]
    UnknownKey(String),
    #[error("body must only contain a single JSON value")]
    MultipleValues,
    #[error("invalid runtime format")]
    InvalidRuntimeFormat,
    #[error("{0}")]
    Other(String),
}

// Read a size-bounded request body and decode exactly one strict JSON
// document from it.
pub async fn read_json<T>(body: Body) -> Result<T, BodyError>
where
    T: DeserializeOwned,
{
    let bytes = to_bytes(body, MAX_BODY_BYTES).await.map_err(|err| {
        if is_length_limit(&err) {
            BodyError::TooLarge(MAX_BODY_BYTES)
        } else {
            BodyError::Other(err.to_string())
        }
    })?;

    decode(&bytes)
}

pub fn decode<T>(bytes: &[u8]) -> Result<T, BodyError>
where
    T: DeserializeOwned,
{
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    let value = serde_path_to_error::deserialize::<_, T>(&mut deserializer)
        .map_err(|err| classify(err, bytes))?;

    // A request body holds exactly one JSON document.
    if deserializer.end().is_err() {
        return Err(BodyError::MultipleValues);
    }

    Ok(value)
}

// Single boundary point converting serde_json's error taxonomy (plus the
// field path recorded during decoding) into the client-facing enumeration.
fn classify(err: serde_path_to_error::Error<serde_json::Error>, bytes: &[u8]) -> BodyError {
    let path = err.path().to_string();
    let inner = err.into_inner();
    let offset = byte_offset(bytes, inner.line(), inner.column());

    match inner.classify() {
        Category::Eof => {
            if bytes.iter().all(u8::is_ascii_whitespace) {
                BodyError::Empty
            } else {
                BodyError::BadlyFormed
            }
        }
        Category::Syntax => BodyError::BadlyFormedAt(offset),
        Category::Data => {
            let message = inner.to_string();
            if message.starts_with(INVALID_RUNTIME_FORMAT) {
                // The runtime codec's sentinel passes through untouched.
                BodyError::InvalidRuntimeFormat
            } else if let Some(name) = unknown_field_name(&message) {
                BodyError::UnknownKey(name)
            } else if path != "." {
                BodyError::IncorrectFieldType(path)
            } else {
                BodyError::IncorrectTypeAt(offset)
            }
        }
        Category::Io => BodyError::Other(inner.to_string()),
    }
}

// serde_json reports 1-based line/column; recover the byte offset into the
// document for the "(at character N)" messages.
fn byte_offset(bytes: &[u8], line: usize, column: usize) -> usize {
    let preceding: usize = bytes
        .split(|byte| *byte == b'\n')
        .take(line.saturating_sub(1))
        .map(|preceding_line| preceding_line.len() + 1)
        .sum();
    preceding + column
}

// serde phrases unknown-key failures as: unknown field `name`, expected ...
fn unknown_field_name(message: &str) -> Option<String> {
    let rest = message.strip_prefix("unknown field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

fn is_length_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(current) = source {
        if current.is::<http_body_util::LengthLimitError>() {
            return true;
        }
        source = current.source();
    }
    false
}
