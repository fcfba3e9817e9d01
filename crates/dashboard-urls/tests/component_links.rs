//! Integration tests for component navigation links.
//!
//! Links are built through the crate's public entry points and compared
//! against literal expected strings.

use dashboard_urls::{
    component_drilldown_url, component_issues_url, component_url, DashboardConfig, Error,
    QueryParams, UrlBuilder,
};

const SIMPLE_COMPONENT_KEY: &str = "sonarqube";
const COMPLEX_COMPONENT_KEY: &str = "org.sonarsource.sonarqube:sonarqube";
const COMPLEX_COMPONENT_KEY_ENCODED: &str = "org.sonarsource.sonarqube%3Asonarqube";
const METRIC: &str = "coverage";

#[test]
fn test_component_url() {
    assert_eq!(
        component_url(SIMPLE_COMPONENT_KEY).unwrap(),
        "/dashboard?id=sonarqube"
    );
}

#[test]
fn test_component_url_encodes_key() {
    assert_eq!(
        component_url(COMPLEX_COMPONENT_KEY).unwrap(),
        format!("/dashboard?id={COMPLEX_COMPONENT_KEY_ENCODED}")
    );
}

#[test]
fn test_component_url_encodes_exactly_once() {
    let link = component_url(COMPLEX_COMPONENT_KEY).unwrap();
    assert_eq!(link.matches("%3A").count(), 1);
    assert!(!link.contains("%253A"));
}

#[test]
fn test_component_issues_url_without_parameters() {
    assert_eq!(
        component_issues_url(SIMPLE_COMPONENT_KEY, &QueryParams::new()).unwrap(),
        "/component_issues?id=sonarqube#"
    );
}

#[test]
fn test_component_issues_url_encodes_key() {
    assert_eq!(
        component_issues_url(COMPLEX_COMPONENT_KEY, &QueryParams::new()).unwrap(),
        format!("/component_issues?id={COMPLEX_COMPONENT_KEY_ENCODED}#")
    );
}

#[test]
fn test_component_issues_url_with_parameters() {
    let params = QueryParams::from([("resolved", "false")]);
    assert_eq!(
        component_issues_url(SIMPLE_COMPONENT_KEY, &params).unwrap(),
        "/component_issues?id=sonarqube#resolved=false"
    );
}

#[test]
fn test_component_issues_url_encodes_parameters() {
    let params = QueryParams::from([("componentUuids", COMPLEX_COMPONENT_KEY)]);
    assert_eq!(
        component_issues_url(SIMPLE_COMPONENT_KEY, &params).unwrap(),
        format!("/component_issues?id=sonarqube#componentUuids={COMPLEX_COMPONENT_KEY_ENCODED}")
    );
}

#[test]
fn test_component_issues_url_joins_parameters_in_order() {
    let params = QueryParams::new()
        .with("resolved", "false")
        .with("types", "BUG")
        .with("componentUuids", COMPLEX_COMPONENT_KEY);
    assert_eq!(
        component_issues_url(SIMPLE_COMPONENT_KEY, &params).unwrap(),
        format!(
            "/component_issues?id=sonarqube#resolved=false&types=BUG&componentUuids={COMPLEX_COMPONENT_KEY_ENCODED}"
        )
    );
}

#[test]
fn test_component_drilldown_url() {
    assert_eq!(
        component_drilldown_url(SIMPLE_COMPONENT_KEY, METRIC).unwrap(),
        "/component_measures/metric/coverage?id=sonarqube"
    );
}

#[test]
fn test_component_drilldown_url_encodes_key() {
    assert_eq!(
        component_drilldown_url(COMPLEX_COMPONENT_KEY, METRIC).unwrap(),
        format!("/component_measures/metric/coverage?id={COMPLEX_COMPONENT_KEY_ENCODED}")
    );
}

#[test]
fn test_empty_component_key_is_rejected() {
    assert!(matches!(component_url(""), Err(Error::InvalidInput(_))));
    assert!(matches!(
        component_issues_url("", &QueryParams::new()),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        component_drilldown_url("", METRIC),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_builder_from_json_config() {
    let config = DashboardConfig::from_json(
        r#"{"base_path":"/sonar","server_url":"https://sonar.example.com"}"#,
    )
    .unwrap();
    let urls = UrlBuilder::new(&config).unwrap();

    let link = urls
        .component_drilldown_url(COMPLEX_COMPONENT_KEY, METRIC)
        .unwrap();
    assert_eq!(
        link,
        format!("/sonar/component_measures/metric/coverage?id={COMPLEX_COMPONENT_KEY_ENCODED}")
    );
    assert_eq!(
        urls.absolute(&link).unwrap().as_str(),
        format!(
            "https://sonar.example.com/sonar/component_measures/metric/coverage?id={COMPLEX_COMPONENT_KEY_ENCODED}"
        )
    );
}

#[test]
fn test_builder_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<UrlBuilder>();
    assert_send_sync::<QueryParams>();
}
