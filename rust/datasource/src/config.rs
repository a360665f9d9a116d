use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{auth::GoogleAuthType, grafana::DataSourceJsonData};

/// Options shared by the Google Cloud data sources.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCloudOptions {
    #[serde(flatten)]
    pub json_data: DataSourceJsonData,
    #[serde(default)]
    pub authentication_type: GoogleAuthType,
}

/// The plain JSON data of a Sheets data source instance.
///
/// Whether `api_key` or `jwt_file` is set has no bearing on decoding; completeness
/// for the selected `auth_type` is checked by whoever authenticates.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetsSourceOptions {
    #[serde(flatten)]
    pub cloud: GoogleCloudOptions,
    #[serde(default)]
    pub auth_type: GoogleAuthType,
    /// API key for public access. Prefer storing it in the secure JSON data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Location of the service account key file, used with the `jwt` auth type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwt_file: Option<String>,
}

/// The part of the configuration the host keeps encrypted.
#[derive(Clone, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSheetsSecureJsonData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for GoogleSheetsSecureJsonData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleSheetsSecureJsonData")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
