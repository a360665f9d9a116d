use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};

use crate::{
    grafana::{DataQuery, SelectableValue},
    DEFAULT_CACHE_DURATION_SECONDS,
};

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("failed to parse Sheets query"))]
    ParseQuery { source: serde_json::Error },
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// Locates a block of cells within a spreadsheet.
#[derive(Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleSheetRangeInfo {
    /// The spreadsheet as picked in the editor, the value holds the spreadsheet id.
    #[serde(default)]
    pub spreadsheet: SelectableValue<String>,
    /// A range in A1 notation such as `Sheet1!A1:C10`.
    /// Validity is decided by the Sheets API when the query runs.
    #[serde(default)]
    pub range: String,
}

#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetsQuery {
    #[serde(flatten)]
    pub data_query: DataQuery,
    #[serde(flatten)]
    pub range_info: GoogleSheetRangeInfo,
    /// How long results may be served from the cache, defaults to 300 seconds.
    #[serde(default = "default_cache_duration_seconds")]
    pub cache_duration_seconds: u64,
    /// Discriminator interpreted by the query executor.
    #[serde(default)]
    pub query_type: String,
}

fn default_cache_duration_seconds() -> u64 {
    DEFAULT_CACHE_DURATION_SECONDS
}

impl SheetsQuery {
    pub fn new(ref_id: impl Into<String>, range_info: GoogleSheetRangeInfo) -> Self {
        SheetsQuery {
            data_query: DataQuery {
                ref_id: ref_id.into(),
                ..Default::default()
            },
            range_info,
            cache_duration_seconds: DEFAULT_CACHE_DURATION_SECONDS,
            query_type: String::new(),
        }
    }

    pub fn from_json(document: &[u8]) -> Result<Self> {
        serde_json::from_slice(document).context(ParseQuerySnafu)
    }

    pub fn ref_id(&self) -> &str {
        &self.data_query.ref_id
    }

    /// The id of the selected spreadsheet, if one was picked.
    pub fn spreadsheet_id(&self) -> Option<&str> {
        self.range_info.spreadsheet.value.as_deref()
    }

    pub fn range(&self) -> &str {
        &self.range_info.range
    }

    pub fn cache_duration(&self) -> Duration {
        Duration::from_secs(self.cache_duration_seconds)
    }
}
