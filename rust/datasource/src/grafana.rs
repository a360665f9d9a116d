//! Shapes owned by the Grafana host that the data source structs build upon.
//!
//! Only the fields the host persists for every data source are modelled. The
//! host's `authType` and `queryType` are left out on purpose: the Sheets structs
//! narrow both and carry them themselves.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A label/value pair as rendered by a select control.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectableValue<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl<T> SelectableValue<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        SelectableValue {
            label: Some(label.into()),
            value: Some(value),
            description: None,
        }
    }
}

/// Reference to a configured data source instance.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceRef {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

/// Fields common to every query the host sends to a data source.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuery {
    /// Identifies the query within its panel, e.g. `A`.
    pub ref_id: String,
    /// If `true` the query is not executed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
    /// Unique, guid like, string used in explore mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DataSourceRef>,
}

/// Options every data source stores in its plain (non secret) JSON data.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceJsonData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manage_alerts: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alertmanager_uid: Option<String>,
}
