use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use serde_json::{json, Value};
use sheets_datasource::{
    auth, query, settings, GoogleAuthType, JwtCredentials, SheetsQuery, SheetsSettings,
};
use snafu::{OptionExt, ResultExt, Snafu};
use tracing::{debug, info, warn};

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("failed to read [{}]", path.display()))]
    ReadFile {
        source: std::io::Error,
        path: PathBuf,
    },
    #[snafu(display("failed to parse secure JSON data from [{}]", path.display()))]
    ParseSecureJsonData {
        source: serde_json::Error,
        path: PathBuf,
    },
    #[snafu(display("invalid settings in [{}]", path.display()))]
    InvalidSettings {
        source: settings::Error,
        path: PathBuf,
    },
    #[snafu(display("invalid query in [{}]", path.display()))]
    InvalidQuery {
        source: query::Error,
        path: PathBuf,
    },
    #[snafu(display("auth type is jwt but no jwtFile is configured"))]
    MissingJwtFile,
    #[snafu(display("failed to load JWT credentials"))]
    LoadJwt { source: auth::Error },
}

type Result<T, E = Error> = std::result::Result<T, E>;

pub struct InspectRequest<'a> {
    pub settings: &'a Path,
    pub secure: Option<&'a Path>,
    pub queries: &'a [PathBuf],
    pub resolve_jwt: bool,
}

/// Loads the given documents and renders what the data source would see.
pub fn inspect(request: &InspectRequest) -> Result<Value> {
    let json_data = read(request.settings)?;
    let secure_json_data = match request.secure {
        Some(path) => serde_json::from_slice::<BTreeMap<String, String>>(&read(path)?)
            .context(ParseSecureJsonDataSnafu { path })?,
        None => BTreeMap::new(),
    };
    let settings = SheetsSettings::load(&json_data, &secure_json_data).context(
        InvalidSettingsSnafu {
            path: request.settings,
        },
    )?;
    info!(auth_type = %settings.auth_type(), "Loaded data source settings");

    let mut options = settings.options.clone();
    options.api_key = None;
    let mut output = json!({
        "settings": {
            "authType": settings.auth_type(),
            "authTypeLabel": settings.auth_type().label(),
            "apiKeyPresent": settings.api_key().is_some(),
            "jwtFile": settings.jwt_file(),
            "options": options,
        },
    });

    if request.resolve_jwt {
        if settings.auth_type() == GoogleAuthType::Jwt {
            let jwt_file = settings.jwt_file().context(MissingJwtFileSnafu)?;
            let credentials = JwtCredentials::from_path(jwt_file).context(LoadJwtSnafu)?;
            debug!(?credentials, "Resolved JWT credentials");
            output["jwt"] = json!({
                "clientEmail": credentials.client_email,
                "projectId": credentials.project_id,
                "tokenUri": credentials.token_uri,
            });
        } else {
            warn!(
                auth_type = %settings.auth_type(),
                "Not resolving JWT credentials, auth type is not jwt"
            );
        }
    }

    let queries = request
        .queries
        .iter()
        .map(|path| -> Result<SheetsQuery> {
            let query =
                SheetsQuery::from_json(&read(path)?).context(InvalidQuerySnafu { path })?;
            info!(
                ref_id = query.ref_id(),
                spreadsheet = query.spreadsheet_id().unwrap_or_default(),
                range = query.range(),
                "Loaded query"
            );
            Ok(query)
        })
        .collect::<Result<Vec<_>>>()?;
    output["queries"] = json!(queries);

    Ok(output)
}

fn read(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).context(ReadFileSnafu { path })
}
