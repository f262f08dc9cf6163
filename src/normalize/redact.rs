//! Abbreviation of large cryptographic fields

use crate::{constants::ZERO_APP_STATE, txn::RawAccountUpdate, utility::functions::abbreviate};
use serde_json::Value;

/// Abbreviates proofs, signatures and verification keys in place and
/// collapses the app state update.
pub fn redact(au: &mut RawAccountUpdate) {
    if let Some(proof) = au.authorization.proof.as_mut() {
        *proof = abbreviate(proof);
    }
    if let Some(signature) = au.authorization.signature.as_mut() {
        *signature = abbreviate(signature);
    }

    if let Some(vk_hash) = au.body.authorization_kind.get_mut("verificationKeyHash") {
        abbreviate_value(vk_hash);
    }

    if let Some(vk) = au.body.update.get_mut("verificationKey") {
        for key in ["data", "hash"] {
            if let Some(field) = vk.get_mut(key) {
                abbreviate_value(field);
            }
        }
    }

    collapse_app_state(&mut au.body.update);
}

/// Replaces an app state whose entries are all zero with `"0s"`, otherwise
/// with `[position, value]` pairs of the entries that are set. An app state
/// with nothing set becomes null and is dropped by pruning.
pub fn collapse_app_state(update: &mut Value) {
    let Some(app_state) = update.get_mut("appState") else {
        return;
    };
    let collapsed = match app_state.as_array() {
        None => return,
        Some(entries) if entries.iter().all(is_zero) => {
            Value::String(ZERO_APP_STATE.to_string())
        }
        Some(entries) => {
            let pairs: Vec<Value> = entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| !entry.is_null())
                .map(|(n, entry)| Value::Array(vec![n.into(), entry.clone()]))
                .collect();

            if pairs.is_empty() {
                Value::Null
            } else {
                Value::Array(pairs)
            }
        }
    };
    *app_state = collapsed;
}

fn is_zero(value: &Value) -> bool {
    match value {
        Value::String(s) => s == "0",
        Value::Number(n) => n.as_u64() == Some(0),
        _ => false,
    }
}

fn abbreviate_value(value: &mut Value) {
    if let Value::String(s) = value {
        *s = abbreviate(s);
    }
}
