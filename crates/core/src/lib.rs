//! Core types and shared functionality for the holidays service.
//!
//! This crate provides:
//! - Validated request parameters (country code, year)
//! - The response cache interface and its in-memory implementation
//! - The local festival dataset reader
//! - Unified error types
//! - Configuration structures

pub mod cache;
pub mod config;
pub mod country;
pub mod dataset;
pub mod error;

pub use cache::{CacheKey, MemoryCache, ResponseCache};
pub use config::{AppConfig, ConfigError};
pub use country::{CountryCode, Year};
pub use dataset::{DatasetError, FestivalStore};
pub use error::Error;
