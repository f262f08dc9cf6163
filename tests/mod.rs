mod normalize;
mod sink;

pub mod helpers {
    use serde_json::Value;
    use zkapp_txn_visualizer::Legend;

    /// Reads a JSON fixture from `./tests/data`
    pub fn fixture(name: &str) -> anyhow::Result<Value> {
        let bytes = std::fs::read(format!("./tests/data/{name}"))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub fn legend() -> anyhow::Result<Legend> {
        Ok(Legend::from_path(std::path::Path::new("./tests/data/legend.json"))?)
    }

    /// Sets up a new temp dir, deleted when it goes out of scope
    pub fn setup_new_out_dir(prefix: &str) -> anyhow::Result<tempfile::TempDir> {
        Ok(tempfile::TempDir::with_prefix(prefix)?)
    }
}
