mod inspect;
mod logging;
mod render;

use std::path::PathBuf;

use clap::{crate_description, Parser, Subcommand};
use sheets_datasource::{DATASOURCE_NAME, PLUGIN_ID};
use tracing::info;

use crate::inspect::InspectRequest;

mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

#[derive(Parser)]
#[clap(about, author, version)]
struct Opts {
    /// Tracing filter directives, e.g. `debug` or `sheets_datasource=trace`.
    #[clap(long, env = "SHEETS_DATASOURCE_LOG", default_value = "info", global = true)]
    log: String,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the JSON schemas of the persisted settings and queries as YAML
    Schema,
    /// Print the selectable authentication types as JSON
    AuthTypes,
    /// Decode data source settings and queries and print them as JSON
    Inspect {
        /// File containing the plain JSON data of the data source
        #[clap(long)]
        settings: PathBuf,
        /// File containing the decrypted secure JSON data as a JSON object
        #[clap(long)]
        secure: Option<PathBuf>,
        /// File containing a single query, may be given multiple times
        #[clap(long = "query")]
        queries: Vec<PathBuf>,
        /// Also load the JWT key file referenced by the settings
        #[clap(long)]
        resolve_jwt: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    logging::initialize_logging(&opts.log)?;
    info!(
        plugin_id = PLUGIN_ID,
        "Starting {DATASOURCE_NAME} {} ({}), built for {} by {} at {}",
        built_info::PKG_VERSION,
        crate_description!(),
        built_info::TARGET,
        built_info::RUSTC_VERSION,
        built_info::BUILT_TIME_UTC,
    );

    match opts.cmd {
        Command::Schema => {
            print!("{}", render::schemas()?);
        }
        Command::AuthTypes => {
            println!("{}", render::auth_types()?);
        }
        Command::Inspect {
            settings,
            secure,
            queries,
            resolve_jwt,
        } => {
            let output = inspect::inspect(&InspectRequest {
                settings: &settings,
                secure: secure.as_deref(),
                queries: &queries,
                resolve_jwt,
            })?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
