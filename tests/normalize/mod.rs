use crate::helpers::{fixture, legend};
use pretty_assertions::assert_eq;
use serde_json::json;
use zkapp_txn_visualizer::{
    constants::{MINA_TOKEN_ADDRESS, MINA_TOKEN_LABEL},
    graph::make_graph,
    make_txn_json,
    txn::AuthorizationTag,
    Legend, VisualizerError,
};

#[test]
fn deploy_txn() -> anyhow::Result<()> {
    let txn = fixture("deploy_txn.json")?;
    let mut legend = legend()?;
    let normalized = make_txn_json(&txn, "deploy_txn", &mut legend)?;

    assert_eq!(normalized.name, "deploy_txn");
    assert_eq!(normalized.account_updates.len(), 2);

    let deployer = &normalized.account_updates[0];
    assert_eq!(deployer.idx, 0);
    assert_eq!(deployer.public_key, "deployer");
    assert_eq!(deployer.token_id, "MINA");
    assert_eq!(deployer.balance_change, "-1");
    assert_eq!(deployer.update, None);
    assert_eq!(deployer.authorization, AuthorizationTag::Signature);
    assert!(!deployer.label_fields().contains_key("preconditions"));

    let zkapp = &normalized.account_updates[1];
    assert_eq!(zkapp.public_key, "zkApp");
    assert_eq!(zkapp.balance_change, "+0");

    let update = zkapp.update.as_ref().unwrap();
    assert_eq!(update["appState"], json!("0s"));
    assert_eq!(
        update["verificationKey"],
        json!({ "data": "...5rz2a5", "hash": "...166218" })
    );
    assert_eq!(update["permissions"]["editState"], json!("Proof"));

    let keys: Vec<_> = update.as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, vec!["appState", "verificationKey", "permissions"]);
    Ok(())
}

#[test]
fn nested_txn() -> anyhow::Result<()> {
    let txn = fixture("nested_txn.json")?;
    let normalized = make_txn_json(&txn, "txn1", &mut legend()?)?;

    assert_eq!(normalized.account_updates.len(), 1);
    assert_eq!(normalized.len(), 3);

    let zkapp = &normalized.account_updates[0];
    assert_eq!(zkapp.authorization, AuthorizationTag::Proof);
    assert_eq!(zkapp.update, Some(json!({ "appState": [[0, "81"]] })));
    assert_eq!(zkapp.children.len(), 2);

    let receiver = &zkapp.children[0];
    assert_eq!(receiver.idx, 1);
    assert_eq!(receiver.public_key, "...L2tL1L");
    assert_eq!(receiver.balance_change, "+5");
    assert_eq!(receiver.authorization, AuthorizationTag::None);
    assert!(receiver.may_use_token.is_some_and(|m| m.parents_own_token));
    assert!(!receiver.label_fields().contains_key("events"));

    let sender = &zkapp.children[1];
    assert_eq!(sender.idx, 2);
    assert_eq!(sender.public_key, "deployer");
    assert_eq!(sender.balance_change, "-5");
    assert_eq!(sender.may_use_token, None);
    Ok(())
}

#[test]
fn nested_txn_graph() -> anyhow::Result<()> {
    let txn = fixture("nested_txn.json")?;
    let normalized = make_txn_json(&txn, "txn1", &mut legend()?)?;
    let graph = make_graph(&normalized);

    assert_eq!(graph.title, "txn1");
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges, vec![(0, 1), (0, 2)]);
    assert!(graph.nodes[0].label.contains("authorization: 'proof'"));
    assert!(graph.nodes[1].label.contains("publicKey: '...L2tL1L'"));
    assert!(!graph.nodes[1].label.contains("idx"));
    assert!(graph.nodes.iter().all(|n| n.label.ends_with("\\l")));
    Ok(())
}

#[test]
fn legend_shared_across_session() -> anyhow::Result<()> {
    let session = fixture("session.json")?;
    let txns = session.as_array().unwrap();
    let mut legend = Legend::new();
    legend.insert("B62qjzJvc59DdG9ahht9rwxkEz7GedKuUMsnaVTuXFUeANKqfBeWpRE", "zkApp");

    let deploy = make_txn_json(&txns[0], "deploy_txn", &mut legend)?;
    let call = make_txn_json(&txns[1], "txn1", &mut legend)?;

    assert_eq!(legend.len(), 2);
    assert_eq!(legend.get(MINA_TOKEN_ADDRESS), Some(MINA_TOKEN_LABEL));
    assert_eq!(deploy.account_updates[1].public_key, "zkApp");
    assert_eq!(call.account_updates[0].public_key, "zkApp");
    assert_eq!(call.legend, deploy.legend);
    Ok(())
}

#[test]
fn malformed_transactions() -> anyhow::Result<()> {
    let mut legend = Legend::new();
    assert!(matches!(
        make_txn_json("{ not json", "bad", &mut legend),
        Err(VisualizerError::MalformedTransaction(_))
    ));

    let mut txn = fixture("nested_txn.json")?;
    txn["accountUpdates"][1]["body"]
        .as_object_mut()
        .unwrap()
        .remove("balanceChange");
    assert!(matches!(
        make_txn_json(&txn, "missing", &mut legend),
        Err(VisualizerError::MalformedTransaction(_))
    ));
    Ok(())
}
