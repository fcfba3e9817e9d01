//! Navigation link builders for the quality dashboard.
//!
//! Produces stable, relative links to component pages from a component key,
//! an optional metric and an optional ordered parameter bag. The free
//! functions use a builder mounted at the server root; use [`UrlBuilder`]
//! with a [`DashboardConfig`] when the dashboard lives under a base path.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;

pub use builder::{UrlBuilder, MAX_PERIOD};
pub use dashboard_core::{ComponentKey, DashboardConfig, Error, MetricKey, QueryParams};

/// Convenient result alias that reuses the shared dashboard error type.
pub type Result<T> = dashboard_core::Result<T>;

/// `/dashboard?id=<encoded key>`
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the component key is empty.
pub fn component_url(component_key: &str) -> Result<String> {
    UrlBuilder::default().component_url(component_key)
}

/// `/component_issues?id=<encoded key>#<encoded params>`
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the component key is empty.
pub fn component_issues_url(component_key: &str, params: &QueryParams) -> Result<String> {
    UrlBuilder::default().component_issues_url(component_key, params)
}

/// `/component_measures/metric/<metric>?id=<encoded key>`
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the component key or metric is empty.
pub fn component_drilldown_url(component_key: &str, metric: &str) -> Result<String> {
    UrlBuilder::default().component_drilldown_url(component_key, metric)
}
