use snafu::{ResultExt, Snafu};
use tracing_subscriber::EnvFilter;

#[derive(Snafu, Debug)]
pub enum Error {
    #[snafu(display("invalid log filter [{directives}]"))]
    InvalidFilter {
        source: tracing_subscriber::filter::ParseError,
        directives: String,
    },
    #[snafu(display("failed to install the tracing subscriber"))]
    InstallSubscriber {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

type Result<T, E = Error> = std::result::Result<T, E>;

/// Installs a fmt subscriber logging to stderr, stdout is reserved for command output.
pub fn initialize_logging(directives: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directives).context(InvalidFilterSnafu { directives })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .context(InstallSubscriberSnafu)
}
