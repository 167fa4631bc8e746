// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Schema revision 1.0.1.
//!
//! Adds to 1.0.0: optional retry with the [1,10] bound, `degradedAfter`,
//! monitor descriptions, response assertions, request bodies, field
//! metadata, and the `private` region sentinel.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct MonitorCollection(pub BTreeMap<String, MonitorSpec>);

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum MonitorSpec {
    Http(HttpMonitor),
    Tcp(TcpMonitor),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HttpMonitor {
    pub kind: HttpKind,
    pub name: String,
    pub description: Option<String>,
    #[schemars(range(min = 1, max = 10))]
    pub retry: Option<u32>,
    #[schemars(range(min = 0.0))]
    pub degraded_after: Option<f64>,
    #[schemars(range(min = 0.0))]
    pub timeout: Option<f64>,
    pub frequency: Frequency,
    pub active: Option<bool>,
    /// Regions to run the request in.
    pub regions: Vec<RegionSelector>,
    pub assertions: Option<Vec<Assertion>>,
    pub request: HttpRequest,
}

/// TCP Request Schema
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TcpMonitor {
    pub kind: TcpKind,
    pub name: String,
    pub description: Option<String>,
    #[schemars(range(min = 1, max = 10))]
    pub retry: Option<u32>,
    #[schemars(range(min = 0.0))]
    pub degraded_after: Option<f64>,
    #[schemars(range(min = 0.0))]
    pub timeout: Option<f64>,
    pub frequency: Frequency,
    pub active: Option<bool>,
    /// Regions to run the request in.
    pub regions: Vec<RegionSelector>,
    pub request: TcpRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum HttpKind {
    Http,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TcpKind {
    Tcp,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HttpRequest {
    pub method: HttpMethod,
    /// URL to request
    #[schemars(url)]
    #[schemars(example = "example_url")]
    #[schemars(example = "example_url_www")]
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TcpRequest {
    /// Host to connect to
    #[schemars(example = "example_host")]
    #[schemars(example = "example_host_local")]
    pub host: String,
    /// Port to connect to
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RegionSelector {
    Region(Region),
    Private(PrivateRegion),
}

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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PrivateRegion {
    Private,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Assertion {
    StatusCode(StatusCodeAssertion),
    Header(HeaderAssertion),
    TextBody(TextBodyAssertion),
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatusCodeAssertion {
    pub kind: StatusCodeKind,
    pub compare: NumberCompare,
    pub target: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeaderAssertion {
    pub kind: HeaderKind,
    pub compare: StringCompare,
    pub key: String,
    pub target: String,
}

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
