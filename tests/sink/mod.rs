use crate::helpers::{fixture, legend, setup_new_out_dir};
use std::path::{Path, PathBuf};
use zkapp_txn_visualizer::{
    config::VisualizerConfig,
    print_txn, save_txn,
    sink::{show_txn_on, txn_to_dot, wait_for_file_exists},
    VisualizerError,
};

/// Stand-in for `dot` that copies the DOT text from stdin to the `-o` path
#[cfg(unix)]
fn fake_renderer(dir: &Path) -> anyhow::Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join("fake-dot");
    std::fs::write(&script, "#!/bin/sh\nfor last; do :; done\ncat > \"$last\"\n")?;
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))?;
    Ok(script)
}

#[cfg(unix)]
#[tokio::test]
async fn save_pipes_dot_to_renderer() -> anyhow::Result<()> {
    let out_dir = setup_new_out_dir("zkapp-txn-visualizer-save")?;
    let config = VisualizerConfig {
        dot_command: fake_renderer(out_dir.path())?.display().to_string(),
        ..Default::default()
    };
    let path = out_dir.path().join("txn1.png");

    let txn = fixture("nested_txn.json")?;
    save_txn(&txn, "txn1", &mut legend()?, &path, &config).await?;
    wait_for_file_exists(&path, &config.poll).await?;

    let written = std::fs::read_to_string(&path)?;
    assert!(written.starts_with("digraph G {"));
    assert!(written.contains("label=\"txn1\";"));
    assert!(written.contains("\"0\" -> \"1\";"));
    assert!(written.contains("\"0\" -> \"2\";"));
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn failing_renderer_is_an_error() -> anyhow::Result<()> {
    let out_dir = setup_new_out_dir("zkapp-txn-visualizer-fail")?;
    let config = VisualizerConfig {
        dot_command: "false".to_string(),
        ..Default::default()
    };
    let path = out_dir.path().join("deploy_txn.png");

    let txn = fixture("deploy_txn.json")?;
    let result = save_txn(&txn, "deploy_txn", &mut legend()?, &path, &config).await;
    assert!(matches!(result, Err(VisualizerError::Render { .. })));
    Ok(())
}

#[cfg(unix)]
#[tokio::test]
async fn show_without_viewer_still_renders() -> anyhow::Result<()> {
    let out_dir = setup_new_out_dir("zkapp-txn-visualizer-show")?;
    let config = VisualizerConfig {
        dot_command: fake_renderer(out_dir.path())?.display().to_string(),
        ..Default::default()
    };
    let name = format!("zkapp-txn-visualizer-show-{}", std::process::id());

    let txn = fixture("nested_txn.json")?;
    let path = show_txn_on("windows", &txn, &name, &mut legend()?, &config).await?;

    assert_eq!(path, std::env::temp_dir().join(format!("{name}.png")));
    let written = std::fs::read_to_string(&path)?;
    std::fs::remove_file(&path)?;
    assert!(written.contains(&format!("label=\"{name}\";")));
    Ok(())
}

#[tokio::test]
async fn missing_renderer_is_an_error() -> anyhow::Result<()> {
    let out_dir = setup_new_out_dir("zkapp-txn-visualizer-missing")?;
    let config = VisualizerConfig {
        dot_command: "definitely-not-graphviz-dot".to_string(),
        ..Default::default()
    };
    let path = out_dir.path().join("deploy_txn.png");

    let txn = fixture("deploy_txn.json")?;
    let result = save_txn(&txn, "deploy_txn", &mut legend()?, &path, &config).await;
    assert!(matches!(result, Err(VisualizerError::Io(_))));
    assert!(!path.exists());
    Ok(())
}

#[test]
fn dot_and_print() -> anyhow::Result<()> {
    let txn = fixture("deploy_txn.json")?;
    let mut legend = legend()?;

    let dot = txn_to_dot(&txn, "deploy_txn", &mut legend)?;
    assert_eq!(dot.matches("fontname=\"monospace\"").count(), 2);
    assert!(!dot.contains("->"));

    print_txn(&txn, "deploy_txn", &mut legend)?;
    Ok(())
}
