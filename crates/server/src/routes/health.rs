//! Liveness endpoint.

use serde::{Deserialize, Serialize};

pub const RUNNING_MESSAGE: &str = "Global Public Holidays API Running";

/// Output of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthOutput {
    pub message: String,
}

/// Static status message; never fails.
pub fn health_impl() -> HealthOutput {
    HealthOutput { message: RUNNING_MESSAGE.to_string() }
}
