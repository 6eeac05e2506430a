use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, error};

/// Errors raised while reading input or writing report files.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl IoError {
    pub fn log_error(&self) {
        match self {
            IoError::Open { path, source } => {
                error!("Failed to open {}: {}", path.display(), source);
                debug!("Open error details: {:?}", source);
            }
            IoError::Create { path, source } => {
                error!("Failed to create {}: {}", path.display(), source);
                debug!("Create error details: {:?}", source);
            }
            IoError::Csv(e) => {
                error!("CSV error: {}", e);
                debug!("CSV error details: {:?}", e);
            }
            IoError::Io(e) => {
                error!("IO error: {}", e);
                debug!("IO error details: {:?}", e);
            }
        }
    }
}
