use schemars::schema_for;
use sheets_datasource::{
    google_auth_types, GoogleSheetsSecureJsonData, SheetsQuery, SheetsSourceOptions,
};

/// The schemas of the plain settings, the secure settings and a query as a YAML stream.
pub fn schemas() -> Result<String, serde_yaml::Error> {
    Ok([
        serde_yaml::to_string(&schema_for!(SheetsSourceOptions))?,
        serde_yaml::to_string(&schema_for!(GoogleSheetsSecureJsonData))?,
        serde_yaml::to_string(&schema_for!(SheetsQuery))?,
    ]
    .join("---\n"))
}

pub fn auth_types() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&google_auth_types())
}
