use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::Response;

use crate::VERSION;
use crate::interface_adapters::body::read_json;
use crate::interface_adapters::protocol::{CreateMovieRequest, HealthcheckResponse};
use crate::interface_adapters::respond::{
    Envelope, bad_request_response, failed_validation_response, method_not_allowed_response,
    not_found_response, server_error_response, write_json,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::create_movie::CreateMovieUseCase;
use crate::use_cases::show_movie::ShowMovieUseCase;

// Handler reporting service availability, environment and version.
pub async fn healthcheck(State(state): State<AppState>) -> Response {
    let data = HealthcheckResponse {
        status: "available",
        environment: state.environment,
        version: VERSION,
    };

    match write_json(StatusCode::OK, &data, HeaderMap::new()) {
        Ok(response) => response,
        Err(err) => server_error_response(err),
    }
}

// Handler for movie creation. Decode failures become 400s with the decoder's
// message; validation failures become 422s with the per-field map.
pub async fn create_movie(request: Request) -> Response {
    let input: CreateMovieRequest = match read_json(request.into_body()).await {
        Ok(input) => input,
        Err(err) => return bad_request_response(err),
    };

    let use_case = CreateMovieUseCase { clock: SystemClock };
    match use_case.execute(&input) {
        // No movie store exists yet; echo the accepted input back.
        Ok(_movie) => {
            match write_json(StatusCode::OK, &Envelope::new("movie", &input), HeaderMap::new()) {
                Ok(response) => response,
                Err(err) => server_error_response(err),
            }
        }
        Err(errors) => failed_validation_response(errors),
    }
}

// Handler for fetching a single movie by id.
pub async fn show_movie(Path(id): Path<String>) -> Response {
    let Some(id) = read_id_param(&id) else {
        return not_found_response();
    };

    let use_case = ShowMovieUseCase { clock: SystemClock };
    let movie = use_case.execute(id);

    match write_json(StatusCode::OK, &Envelope::new("movie", movie), HeaderMap::new()) {
        Ok(response) => response,
        Err(err) => server_error_response(err),
    }
}

// A movie identifier is a positive base-10 integer; anything else is a 404.
fn read_id_param(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id >= 1)
}

// Fallback for routes with no matching resource.
pub async fn not_found() -> Response {
    not_found_response()
}

// Fallback for matched routes hit with an unsupported method.
pub async fn method_not_allowed(method: Method) -> Response {
    method_not_allowed_response(&method)
}
