pub mod functions;
pub mod serde;
