//! `GET /festivals` and the `GET /festivals/test` diagnostic.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use almanac_core::{CountryCode, DatasetError, Error};

use super::{Envelope, Source, required};
use crate::error::ApiError;
use crate::handler::AppState;

/// Query parameters for `GET /festivals`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FestivalsParams {
    /// Two-letter country code, any case.
    #[serde(default)]
    pub country: Option<String>,
}

/// Output of the diagnostic listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FestivalListing {
    pub festivals_dir: String,
    pub files: Vec<String>,
}

/// Implementation of `GET /festivals`.
///
/// Reads the dataset file on every call; results are never cached.
pub fn festivals_impl(state: &AppState, params: FestivalsParams) -> Result<Envelope, ApiError> {
    let country = CountryCode::parse(required(params.country.as_deref(), "country")?)?;

    let data = state.festivals.load(&country).map_err(|e| {
        if let DatasetError::ReadFailed { .. } = e {
            tracing::error!(country = %country, error = %e, "festival dataset unreadable");
        }
        Error::from(e)
    })?;

    Ok(Envelope::new(Source::Local, Arc::new(data)))
}

/// Implementation of `GET /festivals/test`.
///
/// Exposes the raw directory listing; filesystem errors pass through as-is.
pub fn listing_impl(state: &AppState) -> Result<FestivalListing, ApiError> {
    let files = state.festivals.list_files().map_err(Error::from)?;

    Ok(FestivalListing { festivals_dir: state.festivals.dir().display().to_string(), files })
}
