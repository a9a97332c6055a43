use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read input document {path:?}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write scenes to {path:?}: {source}")]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize scenes: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),
}
