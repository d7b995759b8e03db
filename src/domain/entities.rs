use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::runtime::Runtime;

// A movie record. The creation timestamp never leaves the server; year,
// runtime and genres are omitted from output while zero-valued.
#[derive(Clone, Debug, Serialize)]
pub struct Movie {
    pub id: i64,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    pub title: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub year: i32,
    #[serde(skip_serializing_if = "Runtime::is_zero")]
    pub runtime: Runtime,
    // None means the field was never supplied, which validation treats
    // differently from an empty list.
    #[serde(skip_serializing_if = "no_genres")]
    pub genres: Option<Vec<String>>,
    pub version: i32,
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

fn no_genres(genres: &Option<Vec<String>>) -> bool {
    genres.as_deref().is_none_or(|genres| genres.is_empty())
}
