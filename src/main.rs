use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;
use zkapp_txn_visualizer::{
    config::{handle_command_line_arguments, VisualizerArgs, VisualizerConfig},
    sink::{self, print_txn, save_txn, show_txn},
    Legend,
};

#[derive(Parser, Debug)]
#[command(name = "zkapp-txn-visualizer", author, version, about, long_about = Some("zkApp transaction visualizer\n\n\
Draw the account update tree of zkApp commands"))]
struct Cli {
    #[command(subcommand)]
    command: VisualizerCommand,
}

#[derive(Subcommand, Debug)]
enum VisualizerCommand {
    /// Render to a temporary image and open it
    Show(TxnArgs),
    /// Render to an image at the given path
    Save {
        #[command(flatten)]
        txn: TxnArgs,

        /// Image path; with several transactions the index is appended to the stem
        out: PathBuf,
    },
    /// Pretty-print the normalized transaction
    Print(TxnArgs),
    /// Write the graph as DOT to stdout
    Dot(TxnArgs),
}

#[derive(clap::Args, Debug)]
struct TxnArgs {
    /// zkApp command JSON, or a JSON array of them
    txn: PathBuf,

    /// Title of the graph; defaults to the file stem
    #[arg(short, long)]
    name: Option<String>,

    #[command(flatten)]
    config: VisualizerArgs,
}

impl TxnArgs {
    fn name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.txn
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| "txn".to_string())
        })
    }
}

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let args = match &cli.command {
        VisualizerCommand::Show(args)
        | VisualizerCommand::Print(args)
        | VisualizerCommand::Dot(args) => args,
        VisualizerCommand::Save { txn, .. } => txn,
    };
    let name = args.name();
    let config = handle_command_line_arguments(args.config.clone());

    // setup tracing
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut legend = load_legend(&config)?;
    let txns = read_txns(&args.txn)?;
    info!("Read {} transactions from {}", txns.len(), args.txn.display());

    for (n, txn) in txns.iter().enumerate() {
        let name = if txns.len() == 1 {
            name.clone()
        } else {
            format!("{name}_{n}")
        };

        match &cli.command {
            VisualizerCommand::Show(_) => {
                show_txn(txn, &name, &mut legend, &config).await?;
            }
            VisualizerCommand::Save { out, .. } => {
                let path = if txns.len() == 1 {
                    out.clone()
                } else {
                    indexed_path(out, n)
                };
                save_txn(txn, &name, &mut legend, &path, &config).await?;
            }
            VisualizerCommand::Print(_) => print_txn(txn, &name, &mut legend)?,
            VisualizerCommand::Dot(_) => print!("{}", sink::txn_to_dot(txn, &name, &mut legend)?),
        }
    }
    Ok(())
}

fn load_legend(config: &VisualizerConfig) -> anyhow::Result<Legend> {
    match &config.legend_path {
        Some(path) => Legend::from_path(path)
            .with_context(|| format!("Failed to read legend: {}", path.display())),
        None => Ok(Legend::new()),
    }
}

fn read_txns(path: &Path) -> anyhow::Result<Vec<Value>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read transaction file: {}", path.display()))?;
    let value: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("Failed to parse transaction file: {}", path.display()))?;

    Ok(match value {
        Value::Array(txns) => txns,
        txn => vec![txn],
    })
}

/// `out/graph.png` -> `out/graph_<n>.png`
fn indexed_path(out: &Path, n: usize) -> PathBuf {
    let stem = out
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    let file_name = match out.extension() {
        Some(ext) => format!("{stem}_{n}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{n}"),
    };
    out.with_file_name(file_name)
}
