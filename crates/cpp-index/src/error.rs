use std::{io, path::PathBuf};

use thiserror::Error;

/// Fatal setup failures. Everything recoverable (per-unit parse failures,
/// per-node extraction, report writes) is logged and skipped instead.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("compilation database not found at {}", .0.display())]
    MissingDatabase(PathBuf),

    #[error("failed to read compilation database {}", .path.display())]
    DatabaseRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed compilation database {}", .path.display())]
    DatabaseParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("compilation database {} contains no compile commands", .0.display())]
    EmptyDatabase(PathBuf),

    #[error("compile command working directory {} is not usable", .path.display())]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
