//! Common (de)serialization functions

use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Deserialize from either a JSON string or a JSON number
///
/// The zkApp command JSON encodes 64-bit quantities as decimal strings, but
/// hand-written fixtures frequently use plain numbers.
pub fn from_str_or_num<'de, T, D>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    #[derive(serde_derive::Deserialize)]
    #[serde(untagged)]
    enum StrOrNum {
        Str(String),
        Num(serde_json::Number),
    }

    let s = match StrOrNum::deserialize(de)? {
        StrOrNum::Str(s) => s,
        StrOrNum::Num(n) => n.to_string(),
    };
    s.parse().map_err(serde::de::Error::custom)
}
