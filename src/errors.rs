//! Grating generator errors

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GratingError {
    /// The output file can't be created or truncated
    #[error("Can't open output file '{}': {source}", .path.display())]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Can't write output: {0}")]
    Write(#[from] io::Error),

    /// Document writer used out of order
    #[error("Can't {op} while document is {state}")]
    InvalidState {
        op: &'static str,
        state: &'static str,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
