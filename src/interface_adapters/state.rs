use chrono::{DateTime, Utc};

use crate::domain::ports::Clock;

// Application state shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    pub environment: String,
}

// System clock adapter used by the movie use cases.
#[derive(Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
