//! Image rendering through the Graphviz `dot` executable

use crate::{
    config::VisualizerConfig,
    error::{VisualizerError, VisualizerResult},
    graph::Graph,
};
use std::{path::Path, process::Stdio};
use tokio::{io::AsyncWriteExt, process::Command};
use tracing::{debug, instrument};

/// Lays out `graph` and writes the image to `path`.
///
/// The DOT text is piped to `<dot_command> -T<image_format> -o <path>` and the
/// process is awaited, so the image is complete once this returns `Ok`.
#[instrument(skip(graph, config), fields(title = %graph.title))]
pub async fn render(graph: &Graph, path: &Path, config: &VisualizerConfig) -> VisualizerResult<()> {
    let format = format!("-T{}", config.image_format);
    let command = format!("{} {format} -o {}", config.dot_command, path.display());
    debug!("Running {command}");

    let mut child = Command::new(&config.dot_command)
        .arg(&format)
        .arg("-o")
        .arg(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        // a renderer that exits early is reported through its exit status
        match stdin.write_all(graph.to_dot().as_bytes()).await {
            Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e.into()),
            _ => (),
        }
        // closing stdin lets the renderer finish
        drop(stdin);
    }

    let output = child.wait_with_output().await?;
    if !output.status.success() {
        return Err(VisualizerError::Render {
            command,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(())
}
