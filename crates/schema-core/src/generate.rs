// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! JSON Schema (draft-7) generation from the typed monitor models

use schemars::r#gen::SchemaSettings;
use schemars::schema::RootSchema;
use serde_json::Value;

use crate::error::Result;
use crate::version::SchemaVersion;

/// Human-readable description stamped onto every exported document.
pub const SCHEMA_DESCRIPTION: &str = "Vigil Synthetic Monitoring Schema";

/// Generate the draft-7 document for one schema revision.
///
/// The returned value is the complete interchange document: the generated
/// schema plus the root `description` and `version` metadata.
pub fn generate(version: SchemaVersion) -> Result<Value> {
    use vigil_monitor_types::{v1_0_0, v1_0_1, v1_0_2};

    let root = match version {
        SchemaVersion::V1_0_0 => root_schema_for::<v1_0_0::MonitorCollection>(),
        SchemaVersion::V1_0_1 => root_schema_for::<v1_0_1::MonitorCollection>(),
        SchemaVersion::V1_0_2 => root_schema_for::<v1_0_2::MonitorCollection>(),
    };

    let mut doc = serde_json::to_value(root)?;
    stamp_metadata(&mut doc, version);
    Ok(doc)
}

fn root_schema_for<T: schemars::JsonSchema>() -> RootSchema {
    // Inline subschemas so each discriminated branch is self-contained
    // instead of referencing a shared definitions section.
    let settings = SchemaSettings::draft07().with(|s| s.inline_subschemas = true);
    settings.into_generator().into_root_schema_for::<T>()
}

fn stamp_metadata(doc: &mut Value, version: SchemaVersion) {
    if let Some(obj) = doc.as_object_mut() {
        obj.insert(
            "description".to_string(),
            Value::String(SCHEMA_DESCRIPTION.to_string()),
        );
        obj.insert(
            "version".to_string(),
            Value::String(version.as_str().to_string()),
        );
    }
}
