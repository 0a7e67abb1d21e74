use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the mining core. An unreadable input file is reported
/// as `Io` with the offending path, so callers can tell it apart from an
/// input that is merely empty.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read basket file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
