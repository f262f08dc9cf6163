//! Human-readable labels for public keys and token ids

use crate::{
    constants::{MINA_TOKEN_ADDRESS, MINA_TOKEN_LABEL},
    error::{VisualizerError, VisualizerResult},
    utility::functions::abbreviate,
};
use serde_derive::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

/// Maps base58 keys to display labels.
///
/// A legend is meant to be reused across a sequence of transactions so that
/// the same account keeps the same label. Normalizing a transaction needs
/// `&mut Legend` because the MINA token label is inserted on first use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Legend(BTreeMap<String, String>);

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON object of `key: label` pairs
    pub fn from_path(path: &Path) -> VisualizerResult<Self> {
        let bytes = std::fs::read(path)?;
        serde_json::from_slice(&bytes).map_err(VisualizerError::MalformedLegend)
    }

    pub fn insert(&mut self, key: impl Into<String>, label: impl Into<String>) {
        self.0.insert(key.into(), label.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels the default token id `MINA`
    pub fn seed_default_token(&mut self) {
        self.insert(MINA_TOKEN_ADDRESS, MINA_TOKEN_LABEL);
    }

    /// Label for `key`, or its abbreviation when unlabeled
    pub fn resolve(&self, key: &str) -> String {
        match self.get(key) {
            Some(label) => label.to_string(),
            None => abbreviate(key),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Legend
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
