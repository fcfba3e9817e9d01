//! Link builder bound to a dashboard configuration.

use crate::Result;
use dashboard_core::{ComponentKey, DashboardConfig, Error, MetricKey, QueryParams};
use tracing::{debug, trace};
use url::Url;

const DASHBOARD_PATH: &str = "/dashboard";
const COMPONENT_ISSUES_PATH: &str = "/component_issues";
const COMPONENT_MEASURES_METRIC_PATH: &str = "/component_measures/metric/";

/// Highest leak period index the dashboard defines.
pub const MAX_PERIOD: u8 = 5;

/// Builds navigation links for dashboard pages.
///
/// Every link is a path relative to the server root, prefixed with the
/// configured base path. Builders hold no mutable state and can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct UrlBuilder {
    base_path: String,
    server_url: Option<Url>,
}

impl UrlBuilder {
    /// Create a builder from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is malformed or
    /// the configured server URL cannot be parsed.
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        config.check()?;
        let server_url = match config.server_url {
            Some(_) => Some(config.parse_server_url()?),
            None => None,
        };
        if !config.base_path.is_empty() {
            debug!("building dashboard links under base path {}", config.base_path);
        }

        Ok(Self {
            base_path: config.base_path.clone(),
            server_url,
        })
    }

    /// Return the base path prepended to every link.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Link to the dashboard of a component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the component key is empty.
    pub fn component_url(&self, component_key: &str) -> Result<String> {
        let key = ComponentKey::new(component_key)?;
        Ok(self.component_url_for(&key))
    }

    /// Link to the dashboard of an already validated component.
    #[must_use]
    pub fn component_url_for(&self, key: &ComponentKey) -> String {
        let link = format!("{}{DASHBOARD_PATH}?id={}", self.base_path, key.encoded());
        trace!("component link: {link}");
        link
    }

    /// Link to the issues page of a component, filtered by `params`.
    ///
    /// The filter is carried in the fragment, which is always present even
    /// when `params` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the component key is empty.
    pub fn component_issues_url(
        &self,
        component_key: &str,
        params: &QueryParams,
    ) -> Result<String> {
        let key = ComponentKey::new(component_key)?;
        Ok(self.component_issues_url_for(&key, params))
    }

    /// Issues link for an already validated component.
    #[must_use]
    pub fn component_issues_url_for(&self, key: &ComponentKey, params: &QueryParams) -> String {
        let link = format!(
            "{}{COMPONENT_ISSUES_PATH}?id={}#{}",
            self.base_path,
            key.encoded(),
            params.encode()
        );
        trace!("component issues link: {link}");
        link
    }

    /// Link to the measure drilldown of one metric on a component.
    ///
    /// The metric is inserted verbatim as a path segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the component key or metric is empty.
    pub fn component_drilldown_url(&self, component_key: &str, metric: &str) -> Result<String> {
        let key = ComponentKey::new(component_key)?;
        let metric = MetricKey::new(metric)?;
        Ok(self.component_drilldown_url_for(&key, &metric))
    }

    /// Drilldown link for an already validated component and metric.
    #[must_use]
    pub fn component_drilldown_url_for(&self, key: &ComponentKey, metric: &MetricKey) -> String {
        let link = format!(
            "{}{COMPONENT_MEASURES_METRIC_PATH}{metric}?id={}",
            self.base_path,
            key.encoded()
        );
        trace!("component drilldown link: {link}");
        link
    }

    /// Drilldown link showing the variation over a leak period.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the component key or metric is empty,
    /// or if `period` is outside `1..=MAX_PERIOD`.
    pub fn component_drilldown_url_for_period(
        &self,
        component_key: &str,
        metric: &str,
        period: u8,
    ) -> Result<String> {
        if !(1..=MAX_PERIOD).contains(&period) {
            return Err(Error::InvalidInput(format!(
                "period must be between 1 and {MAX_PERIOD}, got {period}"
            )));
        }
        let mut link = self.component_drilldown_url(component_key, metric)?;
        link.push_str("&period=");
        link.push_str(&period.to_string());
        Ok(link)
    }

    /// Resolve a link produced by this builder into an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if no server URL is configured, or
    /// [`Error::InvalidEndpoint`] if the link cannot be joined onto it.
    pub fn absolute(&self, link: &str) -> Result<Url> {
        let server_url = self
            .server_url
            .as_ref()
            .ok_or_else(|| Error::ConfigError("No server URL configured".to_string()))?;
        Ok(server_url.join(link)?)
    }
}
