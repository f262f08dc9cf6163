//! Terminal operations: show, save or print a transaction

use crate::{
    config::{PollPolicy, VisualizerConfig},
    error::{VisualizerError, VisualizerResult},
    graph::make_graph,
    inspect::inspect,
    legend::Legend,
    normalize::make_txn_json,
    render::render,
    txn::Transaction,
};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::process::Command;
use tracing::{debug, error, info, instrument};

/// Renders `txn` to `<tmp>/<name>.<format>` and opens it in the platform
/// image viewer. Returns the image path.
///
/// A viewer that cannot be launched is logged, not returned as an error,
/// since the image itself was produced.
pub async fn show_txn<T>(
    txn: &T,
    name: &str,
    legend: &mut Legend,
    config: &VisualizerConfig,
) -> VisualizerResult<PathBuf>
where
    T: Transaction + ?Sized,
{
    show_txn_on(std::env::consts::OS, txn, name, legend, config).await
}

/// [show_txn] with the viewer chosen for `os`
#[instrument(skip(txn, legend, config))]
pub async fn show_txn_on<T>(
    os: &str,
    txn: &T,
    name: &str,
    legend: &mut Legend,
    config: &VisualizerConfig,
) -> VisualizerResult<PathBuf>
where
    T: Transaction + ?Sized,
{
    let path = std::env::temp_dir().join(format!("{name}.{}", config.image_format));
    save_txn(txn, name, legend, &path, config).await?;
    wait_for_file_exists(&path, &config.poll).await?;

    match open_image_on(os, &path).await {
        Ok(ViewerOutcome::Opened(command)) => debug!("Opened image with {command}"),
        Ok(ViewerOutcome::Unsupported(platform)) => {
            error!("Unsupported platform: {platform}")
        }
        Err(e) => error!("Error opening image: {e}"),
    }
    Ok(path)
}

/// Renders `txn` to `path`
#[instrument(skip(txn, legend, config))]
pub async fn save_txn<T>(
    txn: &T,
    name: &str,
    legend: &mut Legend,
    path: &Path,
    config: &VisualizerConfig,
) -> VisualizerResult<()>
where
    T: Transaction + ?Sized,
{
    let normalized = make_txn_json(txn, name, legend)?;
    let graph = make_graph(&normalized);
    render(&graph, path, config).await?;

    info!(
        "Rendered {} account updates of {name} to {}",
        graph.nodes.len(),
        path.display()
    );
    Ok(())
}

/// Pretty-prints the normalized `txn` to stdout, colored when supported
pub fn print_txn<T>(txn: &T, name: &str, legend: &mut Legend) -> VisualizerResult<()>
where
    T: Transaction + ?Sized,
{
    let normalized = make_txn_json(txn, name, legend)?;
    let value = serde_json::to_value(&normalized)?;
    println!("{}", inspect(&value, console::colors_enabled()));
    Ok(())
}

/// DOT text of `txn`, for piping into other Graphviz tooling
pub fn txn_to_dot<T>(txn: &T, name: &str, legend: &mut Legend) -> VisualizerResult<String>
where
    T: Transaction + ?Sized,
{
    let normalized = make_txn_json(txn, name, legend)?;
    Ok(make_graph(&normalized).to_dot())
}

/// Polls until `path` exists.
///
/// Only "not found" is retried; any other I/O error is returned at once.
pub async fn wait_for_file_exists(path: &Path, policy: &PollPolicy) -> VisualizerResult<()> {
    for attempt in 1..=policy.max_attempts.max(1) {
        match tokio::fs::metadata(path).await {
            Ok(_) => return Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{} not found (attempt {attempt})", path.display());
                tokio::time::sleep(policy.interval).await;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(VisualizerError::Timeout {
        path: path.to_path_buf(),
        attempts: policy.max_attempts,
        interval: policy.interval,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerOutcome {
    Opened(ViewerCommand),
    Unsupported(String),
}

/// Command that opens an image in the platform default viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerCommand {
    pub program: &'static str,
    pub path: PathBuf,
}

impl ViewerCommand {
    /// `open` on macOS, `xdg-open` on Linux, nothing elsewhere
    pub fn for_platform(os: &str, path: &Path) -> Option<Self> {
        let program = match os {
            "macos" => "open",
            "linux" => "xdg-open",
            _ => return None,
        };
        Some(Self {
            program,
            path: path.to_path_buf(),
        })
    }

    /// Spawns the viewer and waits for it to exit
    pub async fn run(&self) -> VisualizerResult<()> {
        let status = Command::new(self.program).arg(&self.path).status().await?;
        if !status.success() {
            return Err(VisualizerError::Viewer {
                command: self.to_string(),
                status,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for ViewerCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} \"{}\"", self.program, self.path.display())
    }
}

/// Opens `path` with the viewer of the running platform
pub async fn open_image(path: &Path) -> VisualizerResult<ViewerOutcome> {
    open_image_on(std::env::consts::OS, path).await
}

pub async fn open_image_on(os: &str, path: &Path) -> VisualizerResult<ViewerOutcome> {
    let Some(command) = ViewerCommand::for_platform(os, path) else {
        return Ok(ViewerOutcome::Unsupported(os.to_string()));
    };

    info!("{command}");
    command.run().await?;
    Ok(ViewerOutcome::Opened(command))
}
