//! HTTP route handlers.
//!
//! Each module holds the parameter/output types for one endpoint and an
//! `*_impl` function carrying its logic, separate from the axum extractors.

pub mod festivals;
pub mod health;
pub mod holidays;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use almanac_core::Error;

/// Where an envelope's data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "cache")]
    Cache,
    #[serde(rename = "nager.date")]
    NagerDate,
    #[serde(rename = "local")]
    Local,
}

/// Uniform success body for the data endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub source: Source,
    pub data: Arc<Value>,
}

impl Envelope {
    pub fn new(source: Source, data: Arc<Value>) -> Self {
        Self { source, data }
    }
}

/// Unwrap a required query parameter.
fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str, Error> {
    value.ok_or_else(|| Error::InvalidInput(format!("missing required query parameter '{}'", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_serialization() {
        assert_eq!(serde_json::to_value(Source::Cache).unwrap(), "cache");
        assert_eq!(serde_json::to_value(Source::NagerDate).unwrap(), "nager.date");
        assert_eq!(serde_json::to_value(Source::Local).unwrap(), "local");
    }

    #[test]
    fn test_envelope_shape() {
        let envelope = Envelope::new(Source::Local, Arc::new(json!([{"name": "Holi"}])));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value, json!({"source": "local", "data": [{"name": "Holi"}]}));
    }

    #[test]
    fn test_required_missing() {
        let result = required(None, "country");
        assert!(matches!(result, Err(Error::InvalidInput(msg)) if msg.contains("country")));
        assert_eq!(required(Some("JP"), "country").unwrap(), "JP");
    }
}
