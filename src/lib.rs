pub mod config;
pub mod constants;
pub mod error;
pub mod graph;
pub mod inspect;
pub mod legend;
pub mod normalize;
pub mod render;
pub mod sink;
pub mod txn;
pub mod utility;

pub use error::{VisualizerError, VisualizerResult};
pub use legend::Legend;
pub use normalize::make_txn_json;
pub use sink::{print_txn, save_txn, show_txn};
