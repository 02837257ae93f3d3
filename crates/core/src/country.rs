//! Request parameter types shared by every endpoint.
//!
//! Country codes and years are validated here, once, so that nothing
//! downstream ever sees an unnormalized value.

use std::fmt;

use crate::Error;

/// Two-letter uppercase country code (e.g. `JP`, `US`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse and normalize a raw country code.
    ///
    /// Input is case-insensitive and must be exactly two characters. The
    /// characters themselves are not restricted; consumers that splice the
    /// code into a path or URL do their own escaping.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` for any other length.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        if raw.chars().count() != 2 {
            return Err(Error::InvalidInput(format!("country must be exactly 2 characters, got {:?}", raw)));
        }

        Ok(Self(raw.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Calendar year accepted by the holidays endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Year {
    pub const MIN: i32 = 1900;
    pub const MAX: i32 = 2100;

    /// Construct a year, rejecting values outside `[MIN, MAX]`.
    pub fn new(value: i32) -> Result<Self, Error> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(Error::InvalidInput(format!(
                "year must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value))
    }

    /// Parse a year from its query-string form.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        let value = raw
            .parse::<i32>()
            .map_err(|_| Error::InvalidInput(format!("year must be an integer, got {:?}", raw)))?;
        Self::new(value)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
