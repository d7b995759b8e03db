use serde::{Deserialize, Serialize};

use crate::domain::runtime::Runtime;

// Request payload for movie creation. Absent fields decode to their zero
// values so validation can report them; unknown keys are rejected outright.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreateMovieRequest {
    pub title: String,
    pub year: i32,
    pub runtime: Runtime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
}

// Response payload for the healthcheck endpoint.
#[derive(Debug, Serialize)]
pub struct HealthcheckResponse {
    pub status: &'static str,
    pub environment: String,
    pub version: &'static str,
}
