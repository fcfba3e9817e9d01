//! # dashboard-core
//!
//! Core types and utilities for building dashboard navigation links.
//!
//! This crate provides the error type, configuration, validated identifiers,
//! percent-encoding, and the ordered parameter bag shared by link builders.
//!
//! ## Modules
//!
//! - [`error`] - Error type and error codes
//! - [`config`] - Base path and server URL configuration
//! - [`keys`] - Validated component and metric identifiers
//! - [`encode`] - URI component percent-encoding
//! - [`query`] - Ordered parameter bag and its serialization

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod encode;
pub mod error;
pub mod keys;
pub mod query;

// Re-export commonly used types
pub use config::DashboardConfig;
pub use encode::encode_component;
pub use error::{Error, Result};
pub use keys::{ComponentKey, MetricKey};
pub use query::QueryParams;
