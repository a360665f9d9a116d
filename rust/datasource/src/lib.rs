pub mod auth;
pub mod config;
pub mod grafana;
pub mod query;
pub mod settings;

pub use crate::{
    auth::{google_auth_types, GoogleAuthType, JwtCredentials},
    config::{GoogleCloudOptions, GoogleSheetsSecureJsonData, SheetsSourceOptions},
    grafana::{DataQuery, DataSourceJsonData, DataSourceRef, SelectableValue},
    query::{GoogleSheetRangeInfo, SheetsQuery},
    settings::SheetsSettings,
};

// plugin identity
/// Name of the backend executable.
pub const DATASOURCE_NAME: &str = "sheets-datasource";
/// Id Grafana registers the data source plugin under.
pub const PLUGIN_ID: &str = "grafana-googlesheets-datasource";
// query defaults
/// Cache duration applied to queries that do not set `cacheDurationSeconds`.
pub const DEFAULT_CACHE_DURATION_SECONDS: u64 = 300;
// secure json keys
/// Key of the API key in the decrypted secure JSON data.
pub const API_KEY: &str = "apiKey";
