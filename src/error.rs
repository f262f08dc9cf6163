use std::{path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisualizerError {
    /// The transaction's serialized form is not a well-formed zkApp command
    #[error("malformed transaction: {0}")]
    MalformedTransaction(#[from] serde_json::Error),

    /// The legend file is not a JSON object of labels
    #[error("malformed legend: {0}")]
    MalformedLegend(serde_json::Error),

    /// The external graph layout process exited unsuccessfully
    #[error("`{command}` exited with {status}: {stderr}")]
    Render {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The rendered image never appeared
    #[error("{} did not appear after {attempts} attempts ({interval:?} apart)", .path.display())]
    Timeout {
        path: PathBuf,
        attempts: u32,
        interval: Duration,
    },

    /// The image viewer exited unsuccessfully
    #[error("`{command}` exited with {status}")]
    Viewer {
        command: String,
        status: std::process::ExitStatus,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type VisualizerResult<T> = std::result::Result<T, VisualizerError>;
