use crate::constants::*;
use clap::Parser;
use std::{path::PathBuf, time::Duration};
use tracing::{debug, instrument, level_filters::LevelFilter};

#[derive(Parser, Debug, Clone)]
pub struct VisualizerArgs {
    /// Path to a JSON object mapping base58 keys to labels
    #[arg(short, long)]
    pub legend: Option<PathBuf>,

    /// Graphviz executable used for layout
    #[arg(long, default_value = DOT_COMMAND_DEFAULT)]
    pub dot_command: String,

    /// Output format passed to the layout executable
    #[arg(long, default_value = IMAGE_FORMAT_DEFAULT)]
    pub image_format: String,

    /// Milliseconds between checks for the rendered image
    #[arg(long, default_value_t = POLL_INTERVAL_DEFAULT.as_millis() as u64)]
    pub poll_interval_ms: u64,

    /// Checks for the rendered image before giving up
    #[arg(long, default_value_t = POLL_MAX_ATTEMPTS_DEFAULT)]
    pub poll_max_attempts: u32,

    #[arg(long, default_value_t = LevelFilter::INFO)]
    pub log_level: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub legend_path: Option<PathBuf>,
    pub dot_command: String,
    pub image_format: String,
    pub poll: PollPolicy,
    pub log_level: LevelFilter,
}

/// Fixed-interval retry with an upper bound on attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: POLL_INTERVAL_DEFAULT,
            max_attempts: POLL_MAX_ATTEMPTS_DEFAULT,
        }
    }
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            legend_path: None,
            dot_command: DOT_COMMAND_DEFAULT.to_string(),
            image_format: IMAGE_FORMAT_DEFAULT.to_string(),
            poll: PollPolicy::default(),
            log_level: LevelFilter::INFO,
        }
    }
}

#[instrument]
pub fn handle_command_line_arguments(args: VisualizerArgs) -> VisualizerConfig {
    debug!("Parsing visualizer args");
    VisualizerConfig {
        legend_path: args.legend,
        dot_command: args.dot_command,
        image_format: args.image_format,
        poll: PollPolicy {
            interval: Duration::from_millis(args.poll_interval_ms),
            max_attempts: args.poll_max_attempts,
        },
        log_level: args.log_level,
    }
}
