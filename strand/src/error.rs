use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors from the fallible edges of the crate. Editing operations
/// themselves never fail; invalid input is absorbed as a no-op.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("failed to read config file {}: {source}", path.display()))]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("failed to parse config file {}: {source}", path.display()))]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
}
