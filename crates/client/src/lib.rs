//! Client code for the holidays service.
//!
//! This crate provides the outbound HTTP client for the public-holiday
//! provider, behind the [`HolidayProvider`] trait the server depends on.

pub mod nager;

pub use nager::{FetchError, HolidayProvider, NagerClient, NagerConfig, SOURCE_NAME};
