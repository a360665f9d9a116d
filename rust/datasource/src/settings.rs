use std::collections::BTreeMap;

use snafu::{ResultExt, Snafu};
use tracing::debug;

use crate::{auth::GoogleAuthType, config::SheetsSourceOptions, API_KEY};

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("failed to parse data source settings"))]
    ParseSettings { source: serde_json::Error },
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// Data source settings as seen by a running instance: the plain options merged
/// with the values the host decrypted from the secure JSON data.
#[derive(Clone, Eq, PartialEq)]
pub struct SheetsSettings {
    pub options: SheetsSourceOptions,
    api_key: Option<String>,
}

impl SheetsSettings {
    /// Decodes `json_data` and applies `decrypted_secure_json_data` on top.
    /// A secure `apiKey` replaces one found in the plain options.
    pub fn load(
        json_data: &[u8],
        decrypted_secure_json_data: &BTreeMap<String, String>,
    ) -> Result<Self> {
        let options: SheetsSourceOptions = if json_data.iter().all(u8::is_ascii_whitespace) {
            SheetsSourceOptions::default()
        } else {
            serde_json::from_slice(json_data).context(ParseSettingsSnafu)?
        };

        let api_key = decrypted_secure_json_data
            .get(API_KEY)
            .filter(|key| !key.is_empty())
            .cloned()
            .or_else(|| options.api_key.clone());

        debug!(
            auth_type = %options.auth_type,
            api_key_present = api_key.is_some(),
            jwt_file_present = options.jwt_file.is_some(),
            "Loaded Sheets data source settings"
        );

        Ok(SheetsSettings { options, api_key })
    }

    pub fn auth_type(&self) -> GoogleAuthType {
        self.options.auth_type
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn jwt_file(&self) -> Option<&str> {
        self.options.jwt_file.as_deref()
    }
}

impl std::fmt::Debug for SheetsSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsSettings")
            .field("auth_type", &self.options.auth_type)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("jwt_file", &self.options.jwt_file)
            .finish()
    }
}
