use std::env;

// Runtime/server configuration (environment-driven).

pub fn http_port() -> u16 {
    env::var("MOVIE_SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(4000)
}

// Deployment environment name reported by the healthcheck endpoint.
pub fn environment() -> String {
    env::var("MOVIE_SERVER_ENV").unwrap_or_else(|_| "development".to_string())
}
