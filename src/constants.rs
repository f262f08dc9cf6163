use std::time::Duration;

// mina constants

pub const MINA_SCALE: u32 = 9;
pub const MINA_TOKEN_ADDRESS: &str = "wSHV2S4qX9jFsLjQo8r1BsMLH2ZRKsZx6EJd1sbozGPieEC4Jf";
pub const MINA_TOKEN_LABEL: &str = "MINA";

// normalizer constants

/// Number of trailing characters kept when abbreviating keys, proofs, etc.
pub const REDACTED_SUFFIX_LEN: usize = 6;
pub const REDACTED_PREFIX: &str = "...";

/// Replaces an app state whose every entry is zero
pub const ZERO_APP_STATE: &str = "0s";

// graph constants

pub const GRAPH_ID: &str = "G";
pub const GRAPH_TITLE_LOC: &str = "t";
pub const GRAPH_TITLE_FONT_SIZE: u32 = 18;
pub const NODE_FONT_NAME: &str = "monospace";

// sink defaults

pub const DOT_COMMAND_DEFAULT: &str = "dot";
pub const IMAGE_FORMAT_DEFAULT: &str = "png";
pub const POLL_INTERVAL_DEFAULT: Duration = Duration::from_millis(100);
pub const POLL_MAX_ATTEMPTS_DEFAULT: u32 = 600;
