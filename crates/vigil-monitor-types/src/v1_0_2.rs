// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Schema revision 1.0.2 (latest).
//!
//! Adds to 1.0.1: optional request headers and body, the `public` flag,
//! OpenTelemetry export settings, and documented defaults for `retry`,
//! `degradedAfter`, `timeout`, `active`, and `public`.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Mapping of monitor identifier to monitor definition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MonitorCollection(pub BTreeMap<String, MonitorSpec>);

/// A single synthetic check, discriminated by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum MonitorSpec {
    Http(HttpMonitor),
    Tcp(TcpMonitor),
}

/// An HTTP check run on a schedule from one or more regions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HttpMonitor {
    pub kind: HttpKind,
    /// Display name of the monitor.
    pub name: String,
    /// Longer human-readable description.
    pub description: Option<String>,
    /// Retry attempts on failure.
    #[serde(default = "default_retry")]
    #[schemars(range(min = 1, max = 10))]
    pub retry: Option<u32>,
    /// Latency threshold in milliseconds above which a result counts as
    /// degraded rather than healthy.
    #[serde(default = "default_degraded_after")]
    #[schemars(range(min = 0.0))]
    pub degraded_after: Option<f64>,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    #[schemars(range(min = 0.0))]
    pub timeout: Option<f64>,
    /// How often the check runs.
    pub frequency: Frequency,
    /// Whether the monitor is currently running.
    #[serde(default = "default_active")]
    pub active: Option<bool>,
    /// Whether the monitor appears on the public status page.
    #[serde(default = "default_public")]
    pub public: Option<bool>,
    /// Regions to run the request in.
    pub regions: Vec<RegionSelector>,
    /// OpenTelemetry export settings for check results.
    pub open_telemetry: Option<OpenTelemetry>,
    pub request: HttpRequest,
    /// Post-response validation rules, evaluated in order.
    pub assertions: Option<Vec<Assertion>>,
}

/// A TCP connect check run on a schedule from one or more regions.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TcpMonitor {
    pub kind: TcpKind,
    /// Display name of the monitor.
    pub name: String,
    /// Longer human-readable description.
    pub description: Option<String>,
    /// Retry attempts on failure.
    #[serde(default = "default_retry")]
    #[schemars(range(min = 1, max = 10))]
    pub retry: Option<u32>,
    /// Latency threshold in milliseconds above which a result counts as
    /// degraded rather than healthy.
    #[serde(default = "default_degraded_after")]
    #[schemars(range(min = 0.0))]
    pub degraded_after: Option<f64>,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout")]
    #[schemars(range(min = 0.0))]
    pub timeout: Option<f64>,
    /// How often the check runs.
    pub frequency: Frequency,
    /// Whether the monitor is currently running.
    #[serde(default = "default_active")]
    pub active: Option<bool>,
    /// Whether the monitor appears on the public status page.
    #[serde(default = "default_public")]
    pub public: Option<bool>,
    /// Regions to run the request in.
    pub regions: Vec<RegionSelector>,
    /// OpenTelemetry export settings for check results.
    pub open_telemetry: Option<OpenTelemetry>,
    pub request: TcpRequest,
}

/// Discriminator value for the HTTP monitor variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HttpKind {
    Http,
}

/// Discriminator value for the TCP monitor variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TcpKind {
    Tcp,
}

/// The HTTP request a monitor issues.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// URL to request.
    #[schemars(url)]
    #[schemars(example = "example_url")]
    #[schemars(example = "example_url_www")]
    pub url: String,
    /// Headers to send with the request.
    pub headers: Option<BTreeMap<String, String>>,
    /// Request body to send.
    pub body: Option<String>,
}

/// The TCP connection a monitor opens.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TcpRequest {
    /// Host to connect to.
    #[schemars(example = "example_host")]
    #[schemars(example = "example_host_local")]
    pub host: String,
    /// Port to connect to.
    #[schemars(example = "example_port_https")]
    #[schemars(example = "example_port_http")]
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

/// How often a check runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Frequency {
    #[serde(rename = "30s")]
    ThirtySeconds,
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "10m")]
    TenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "1h")]
    OneHour,
}

/// A fixed execution region, or the `private` sentinel for a user-operated
/// runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RegionSelector {
    Region(Region),
    Private(PrivateRegion),
}

/// Geographic execution locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Ams,
    Arn,
    Atl,
    Bog,
    Bom,
    Bos,
    Cdg,
    Den,
    Dfw,
    Ewr,
    Eze,
    Fra,
    Gdl,
    Gig,
    Gru,
    Hkg,
    Iad,
    Jnb,
    Lax,
    Lhr,
    Mad,
    Mia,
    Nrt,
    Ord,
    Otp,
    Phx,
    Qro,
    Scl,
    Sjc,
    Sea,
    Sin,
    Syd,
    Waw,
    Yul,
    Yyz,
}

/// A check executed from a user-operated private runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PrivateRegion {
    Private,
}

/// OpenTelemetry export settings for check results.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OpenTelemetry {
    /// OTLP endpoint to send check traces to.
    #[schemars(url)]
    pub endpoint: Option<String>,
    /// Headers to send with the OTLP export request.
    pub headers: Option<BTreeMap<String, String>>,
}

/// Post-response validation rule, discriminated by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Assertion {
    StatusCode(StatusCodeAssertion),
    Header(HeaderAssertion),
    TextBody(TextBodyAssertion),
}

/// Compares the response status code against a numeric target.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatusCodeAssertion {
    pub kind: StatusCodeKind,
    pub compare: NumberCompare,
    pub target: f64,
}

/// Compares a named response header against a string target.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeaderAssertion {
    pub kind: HeaderKind,
    pub compare: StringCompare,
    /// Name of the header to inspect.
    pub key: String,
    pub target: String,
}

/// Compares the response body text against a string target.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TextBodyAssertion {
    pub kind: TextBodyKind,
    pub compare: StringCompare,
    pub target: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum StatusCodeKind {
    StatusCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum HeaderKind {
    Header,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum TextBodyKind {
    TextBody,
}

/// Comparison operators for numeric assertion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NumberCompare {
    Eq,
    NotEq,
    Gt,
    Gte,
    Lt,
    Lte,
}

/// Comparison operators for string assertion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StringCompare {
    Contains,
    NotContains,
    Eq,
    NotEq,
    Empty,
    NotEmpty,
    Gt,
    Gte,
    Lt,
    Lte,
}

fn default_retry() -> Option<u32> {
    Some(3)
}

fn default_degraded_after() -> Option<f64> {
    Some(30000.0)
}

fn default_timeout() -> Option<f64> {
    Some(45000.0)
}

fn default_active() -> Option<bool> {
    Some(false)
}

fn default_public() -> Option<bool> {
    Some(false)
}

fn example_url() -> &'static str {
    "https://vigil.dev"
}

fn example_url_www() -> &'static str {
    "https://www.vigil.dev"
}

fn example_host() -> &'static str {
    "example.com"
}

fn example_host_local() -> &'static str {
    "localhost"
}

fn example_port_https() -> u16 {
    443
}

fn example_port_http() -> u16 {
    80
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_monitor_deserializes() {
        let json = serde_json::json!({
            "kind": "http",
            "name": "homepage",
            "frequency": "1m",
            "regions": ["ams", "private"],
            "request": { "method": "GET", "url": "https://vigil.dev" }
        });

        let spec: MonitorSpec = serde_json::from_value(json).unwrap();
        match spec {
            MonitorSpec::Http(m) => {
                assert_eq!(m.name, "homepage");
                assert_eq!(m.frequency, Frequency::OneMinute);
                assert_eq!(
                    m.regions,
                    vec![
                        RegionSelector::Region(Region::Ams),
                        RegionSelector::Private(PrivateRegion::Private)
                    ]
                );
            }
            MonitorSpec::Tcp(_) => panic!("expected http variant"),
        }
    }

    #[test]
    fn test_tcp_monitor_deserializes() {
        let json = serde_json::json!({
            "kind": "tcp",
            "name": "db",
            "frequency": "5m",
            "regions": ["fra"],
            "request": { "host": "db.internal", "port": 5432 }
        });

        let spec: MonitorSpec = serde_json::from_value(json).unwrap();
        assert!(matches!(spec, MonitorSpec::Tcp(_)));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = serde_json::json!({
            "kind": "icmp",
            "name": "ping",
            "frequency": "1m",
            "regions": ["ams"],
            "request": { "host": "example.com", "port": 7 }
        });

        assert!(serde_json::from_value::<MonitorSpec>(json).is_err());
    }

    #[test]
    fn test_assertion_kinds_deserialize() {
        let json = serde_json::json!([
            { "kind": "statusCode", "compare": "eq", "target": 200 },
            { "kind": "header", "compare": "contains", "key": "content-type", "target": "json" },
            { "kind": "textBody", "compare": "not_empty", "target": "" }
        ]);

        let assertions: Vec<Assertion> = serde_json::from_value(json).unwrap();
        assert!(matches!(assertions[0], Assertion::StatusCode(_)));
        assert!(matches!(assertions[1], Assertion::Header(_)));
        assert!(matches!(assertions[2], Assertion::TextBody(_)));
    }
}
