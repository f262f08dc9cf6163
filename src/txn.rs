//! zkApp command JSON as produced by the transaction builder
//!
//! Only the fields the visualizer reads are typed. `update`, `preconditions`
//! and `authorizationKind` stay generic because they are pruned and dumped
//! field by field rather than interpreted.

use crate::{error::VisualizerResult, utility::serde::from_str_or_num};
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

/// Anything that can produce the JSON of a zkApp command
pub trait Transaction {
    fn to_json(&self) -> VisualizerResult<String>;
}

impl Transaction for str {
    fn to_json(&self) -> VisualizerResult<String> {
        Ok(self.to_string())
    }
}

impl Transaction for String {
    fn to_json(&self) -> VisualizerResult<String> {
        Ok(self.clone())
    }
}

impl Transaction for Value {
    fn to_json(&self) -> VisualizerResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Transaction for ZkappCommandJson {
    fn to_json(&self) -> VisualizerResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZkappCommandJson {
    #[serde(default)]
    pub fee_payer: Value,

    /// Pre-order flattening of the account update forest
    pub account_updates: Vec<RawAccountUpdate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl ZkappCommandJson {
    pub fn from_transaction<T: Transaction + ?Sized>(txn: &T) -> VisualizerResult<Self> {
        let json = txn.to_json()?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAccountUpdate {
    pub body: AccountUpdateBody,
    pub authorization: Authorization,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdateBody {
    pub public_key: String,
    pub token_id: String,
    pub update: Value,
    pub balance_change: BalanceChange,
    pub events: Vec<Value>,
    pub actions: Vec<Value>,

    #[serde(deserialize_with = "from_str_or_num")]
    pub call_depth: u32,

    pub preconditions: Value,
    pub may_use_token: MayUseToken,
    pub authorization_kind: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceChange {
    #[serde(deserialize_with = "from_str_or_num")]
    pub magnitude: u64,
    pub sgn: Sign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sign {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MayUseToken {
    pub parents_own_token: bool,
    pub inherit_from_parent: bool,
}

impl MayUseToken {
    pub fn is_used(&self) -> bool {
        self.parents_own_token || self.inherit_from_parent
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authorization {
    #[serde(default)]
    pub proof: Option<String>,

    #[serde(default)]
    pub signature: Option<String>,
}

/// Which credential authorizes an account update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorizationTag {
    Proof,
    Signature,
    None,
}

impl From<&Authorization> for AuthorizationTag {
    fn from(value: &Authorization) -> Self {
        if value.proof.is_some() {
            Self::Proof
        } else if value.signature.is_some() {
            Self::Signature
        } else {
            Self::None
        }
    }
}

impl std::fmt::Display for AuthorizationTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Proof => write!(f, "proof"),
            Self::Signature => write!(f, "signature"),
            Self::None => write!(f, "none"),
        }
    }
}
