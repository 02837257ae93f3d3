//! Cache key for holiday payloads.

use std::fmt;

use crate::country::{CountryCode, Year};

/// Identifies one upstream holiday payload: a normalized country and a year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub country: CountryCode,
    pub year: Year,
}

impl CacheKey {
    pub fn new(country: CountryCode, year: Year) -> Self {
        Self { country, year }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.country, self.year)
    }
}
