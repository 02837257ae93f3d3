//! `GET /holidays` implementation.
//!
//! Validates the query, serves from the response cache when possible, and
//! otherwise fetches once from the upstream provider and caches the result.

use serde::{Deserialize, Serialize};

use almanac_core::{CacheKey, CountryCode, Error, Year};

use super::{Envelope, Source, required};
use crate::error::ApiError;
use crate::handler::AppState;

/// Query parameters for `GET /holidays`.
///
/// Both fields are kept as raw strings so that missing, malformed and
/// out-of-range values all fail through the same validation path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidaysParams {
    /// Two-letter country code, any case.
    #[serde(default)]
    pub country: Option<String>,

    /// Year in 1900..=2100.
    #[serde(default)]
    pub year: Option<String>,
}

/// Implementation of `GET /holidays`.
pub async fn holidays_impl(state: &AppState, params: HolidaysParams) -> Result<Envelope, ApiError> {
    let country = CountryCode::parse(required(params.country.as_deref(), "country")?)?;
    let year = Year::parse(required(params.year.as_deref(), "year")?)?;
    let key = CacheKey::new(country, year);

    if let Some(data) = state.cache.lookup(&key) {
        tracing::debug!(%key, "cache hit");
        return Ok(Envelope::new(Source::Cache, data));
    }

    tracing::debug!(%key, provider = state.provider.name(), "cache miss; fetching upstream");

    let payload = state
        .provider
        .public_holidays(&key.country, key.year)
        .await
        .map_err(|e| {
            tracing::warn!(%key, error = %e, "upstream holiday fetch failed");
            Error::UpstreamFailed(e.to_string())
        })?;

    let data = state.cache.insert(key, payload);
    Ok(Envelope::new(Source::NagerDate, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorCode, HOLIDAYS_NOT_FOUND};
    use crate::handler::tests::{FakeProvider, test_state};
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    fn params(country: &str, year: &str) -> HolidaysParams {
        HolidaysParams { country: Some(country.into()), year: Some(year.into()) }
    }

    #[tokio::test]
    async fn test_miss_then_hit() {
        let provider = Arc::new(FakeProvider::default());
        let (_dir, state) = test_state(provider.clone());

        let first = holidays_impl(&state, params("JP", "2025")).await.unwrap();
        assert_eq!(first.source, Source::NagerDate);

        let second = holidays_impl(&state, params("JP", "2025")).await.unwrap();
        assert_eq!(second.source, Source::Cache);
        assert_eq!(first.data, second.data);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_country() {
        let provider = Arc::new(FakeProvider::default());
        let (_dir, state) = test_state(provider.clone());

        let params = HolidaysParams { country: None, year: Some("2025".into()) };
        let err = holidays_impl(&state, params).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_year() {
        let provider = Arc::new(FakeProvider::default());
        let (_dir, state) = test_state(provider.clone());

        let params = HolidaysParams { country: Some("JP".into()), year: None };
        let err = holidays_impl(&state, params).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_upstream_failure_not_cached() {
        let provider = Arc::new(FakeProvider::failing());
        let (_dir, state) = test_state(provider.clone());

        let err = holidays_impl(&state, params("XX", "2025")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, HOLIDAYS_NOT_FOUND);
        assert!(state.cache.is_empty());

        holidays_impl(&state, params("XX", "2025")).await.unwrap_err();
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }
}
