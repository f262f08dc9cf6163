use crate::constants::{MINA_SCALE, REDACTED_PREFIX, REDACTED_SUFFIX_LEN};
use rust_decimal::Decimal;

/// Converts Nanomina to Mina and strips any trailing zeros.
///
/// # Arguments
///
/// * `nanomina` - The amount in Nanomina to be converted.
///
/// # Returns
///
/// A `String` representing the value in Mina with trailing zeros removed.
pub fn nanomina_to_mina(nanomina: u64) -> String {
    Decimal::from_i128_with_scale(nanomina as i128, MINA_SCALE)
        .normalize()
        .to_string()
}

/// Abbreviates `value` to `"..."` followed by its last 6 characters.
/// Values shorter than that keep all of their characters.
pub fn abbreviate(value: &str) -> String {
    let n = value.chars().count();
    let tail: String = value
        .chars()
        .skip(n.saturating_sub(REDACTED_SUFFIX_LEN))
        .collect();
    format!("{REDACTED_PREFIX}{tail}")
}
