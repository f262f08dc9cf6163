//! Turns a flat zkApp command into a readable forest of account updates

pub mod forest;
pub mod prune;
pub mod redact;

use crate::{
    error::VisualizerResult,
    legend::Legend,
    txn::{AuthorizationTag, BalanceChange, MayUseToken, RawAccountUpdate, Sign, Transaction, ZkappCommandJson},
    utility::functions::nanomina_to_mina,
};
use forest::{ForestBuilder, Nested};
use prune::remove_null;
use serde_derive::Serialize;
use serde_json::Value;
use tracing::{debug, instrument};

/// A transaction ready to be rendered or printed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTxn {
    pub name: String,
    pub legend: Legend,

    /// Account updates without an ancestor in the flat list
    pub account_updates: Vec<NormalizedNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedNode {
    /// Position in the flat list
    pub idx: usize,
    pub public_key: String,
    pub token_id: String,
    pub balance_change: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<Value>,

    pub authorization: AuthorizationTag,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub may_use_token: Option<MayUseToken>,

    pub children: Vec<NormalizedNode>,
}

impl Nested for NormalizedNode {
    fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }
}

impl NormalizedNode {
    fn new(idx: usize, mut au: RawAccountUpdate, legend: &Legend) -> Self {
        redact::redact(&mut au);

        let RawAccountUpdate {
            body,
            authorization,
        } = au;

        Self {
            idx,
            public_key: legend.resolve(&body.public_key),
            token_id: legend.resolve(&body.token_id),
            balance_change: signed_mina(&body.balance_change),
            update: remove_null(body.update),
            authorization: AuthorizationTag::from(&authorization),
            may_use_token: Some(body.may_use_token).filter(MayUseToken::is_used),
            children: vec![],
        }
    }

    /// Every field shown in a graph label, i.e. all but `idx` and `children`
    pub fn label_fields(&self) -> serde_json::Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map
                .into_iter()
                .filter(|(key, _)| key != "idx" && key != "children")
                .collect(),
            _ => serde_json::Map::new(),
        }
    }

    /// Number of nodes in this subtree
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }
}

impl NormalizedTxn {
    /// Total number of account updates
    pub fn len(&self) -> usize {
        self.account_updates.iter().map(NormalizedNode::subtree_len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.account_updates.is_empty()
    }
}

/// `+`/`-` followed by the magnitude in MINA
pub fn signed_mina(balance_change: &BalanceChange) -> String {
    let sign = match balance_change.sgn {
        Sign::Positive => '+',
        Sign::Negative => '-',
    };
    format!("{sign}{}", nanomina_to_mina(balance_change.magnitude))
}

/// Normalizes `txn` into a named forest of account updates.
///
/// The default token id is added to `legend` so the same legend can be
/// passed to every transaction of a session.
#[instrument(skip(txn, legend))]
pub fn make_txn_json<T>(txn: &T, name: &str, legend: &mut Legend) -> VisualizerResult<NormalizedTxn>
where
    T: Transaction + ?Sized,
{
    legend.seed_default_token();

    let cmd = ZkappCommandJson::from_transaction(txn)?;
    debug!("{} account updates", cmd.account_updates.len());

    let mut forest = ForestBuilder::new();
    for (idx, au) in cmd.account_updates.into_iter().enumerate() {
        let depth = au.body.call_depth;
        forest.push(depth, NormalizedNode::new(idx, au, legend));
    }

    Ok(NormalizedTxn {
        name: name.to_string(),
        legend: legend.clone(),
        account_updates: forest.finish(),
    })
}
