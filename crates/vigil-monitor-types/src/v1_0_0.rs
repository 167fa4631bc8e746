// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Schema revision 1.0.0.
//!
//! The first published cut. Retry is unconditionally required with a [1,5]
//! bound, regions are limited to the fixed set (no `private` sentinel), and
//! there is no assertion support or field metadata yet.

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
    #[schemars(range(min = 1, max = 5))]
    pub retry: u32,
    #[schemars(range(min = 0.0))]
    pub timeout: Option<f64>,
    pub frequency: Frequency,
    pub active: Option<bool>,
    pub regions: Vec<Region>,
    pub request: HttpRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TcpMonitor {
    pub kind: TcpKind,
    pub name: String,
    #[schemars(range(min = 1, max = 5))]
    pub retry: u32,
    #[schemars(range(min = 0.0))]
    pub timeout: Option<f64>,
    pub frequency: Frequency,
    pub active: Option<bool>,
    pub regions: Vec<Region>,
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
    #[schemars(url)]
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TcpRequest {
    pub host: String,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_is_required() {
        let json = serde_json::json!({
            "kind": "tcp",
            "name": "db",
            "frequency": "5m",
            "regions": ["fra"],
            "request": { "host": "db.internal", "port": 5432 }
        });

        assert!(serde_json::from_value::<MonitorSpec>(json).is_err());
    }

    #[test]
    fn test_private_region_not_available() {
        let json = serde_json::json!({
            "kind": "tcp",
            "name": "db",
            "retry": 2,
            "frequency": "5m",
            "regions": ["private"],
            "request": { "host": "db.internal", "port": 5432 }
        });

        assert!(serde_json::from_value::<MonitorSpec>(json).is_err());
    }
}
