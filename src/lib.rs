pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

// API version reported by the healthcheck endpoint.
pub const VERSION: &str = "1.0.0";

pub use frameworks::config::http_port;
pub use frameworks::server::{run, run_with_config};
