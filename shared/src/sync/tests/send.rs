//! # Send and Mock Receive Tests

use super::*;
use crate::model::TxKind;
use alloy_primitives::U256;

const RECIPIENT: &str = "0xabc0000000000000000000000000000000000002";

#[tokio::test]
async fn test_send_records_pending_before_confirmation() {
    // Arrange
    let harness = setup_connected().await;

    // Act
    harness.sync.send_native(RECIPIENT, "1.5").await;

    // Assert
    let expected = vec![
        format!("wallet:send:{RECIPIENT}"),
        "status:Sending tx: 0xfeed".to_string(),
        "txs:1".to_string(),
        "wallet:wait:0xfeed".to_string(),
        "status:Confirmed: 0xfeed".to_string(),
        format!("wallet:get_balance:{ADDRESS}"),
        "balance:2.0 tETH".to_string(),
    ];
    assert_eq!(harness.entries(), expected);

    let state = harness.sync.state();
    assert_eq!(state.txs.len(), 1);
    let tx = &state.txs[0];
    assert_eq!(tx.kind, TxKind::Send);
    assert_eq!(tx.to, RECIPIENT);
    assert_eq!(tx.amount, "1.5");
    assert_eq!(tx.hash, "0xfeed");

    let sent = harness.wallet.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, ADDRESS);
    assert_eq!(sent[0].value, U256::from(1_500_000_000_000_000_000u128));
}

#[tokio::test]
async fn test_send_trims_input() {
    let harness = setup_connected().await;

    harness.sync.send_native(&format!("  {RECIPIENT} "), " 0.25 ").await;

    let state = harness.sync.state();
    assert_eq!(state.txs[0].to, RECIPIENT);
    assert_eq!(state.txs[0].amount, "0.25");
}

#[tokio::test]
async fn test_send_requires_connection() {
    let harness = setup();

    harness.sync.send_native(RECIPIENT, "1.5").await;

    assert_eq!(harness.entries(), vec!["alert:Connect first"]);
    assert!(harness.wallet.sent().is_empty());
}

#[tokio::test]
async fn test_send_rejects_invalid_input_without_wallet_call() {
    let harness = setup_connected().await;

    harness.sync.send_native("abc", "1.5").await;
    harness.sync.send_native(RECIPIENT, "").await;

    assert_eq!(
        harness.presenter().alerts(),
        vec!["Enter valid recipient and amount", "Enter valid recipient and amount"]
    );
    assert!(harness.wallet.sent().is_empty());
}

#[tokio::test]
async fn test_send_unparseable_amount_reports_status() {
    let harness = setup_connected().await;

    harness.sync.send_native(RECIPIENT, "lots").await;

    let statuses = harness.presenter().statuses();
    assert_eq!(statuses.len(), 1);
    assert!(statuses[0].starts_with("Error: Invalid amount: lots"));
    assert!(harness.wallet.sent().is_empty());
    assert!(harness.presenter().alerts().is_empty());
}

#[tokio::test]
async fn test_send_negative_amount_is_rejected() {
    let harness = setup_connected().await;

    harness.sync.send_native(RECIPIENT, "-1.5").await;

    assert_eq!(
        harness.presenter().statuses(),
        vec!["Error: Invalid amount: -1.5: negative amount"]
    );
    assert!(harness.wallet.sent().is_empty());
    assert!(harness.sync.state().txs.is_empty());
}

#[tokio::test]
async fn test_send_rejected_by_wallet() {
    // Arrange
    let harness = setup_connected().await;
    harness
        .wallet
        .set_send_result(Err(WalletError::from_provider(Some(4001), "User denied transaction signature.")));

    // Act
    harness.sync.send_native(RECIPIENT, "1").await;

    // Assert
    assert_eq!(
        harness.presenter().statuses(),
        vec!["Error: User denied transaction signature."]
    );
    assert!(harness.sync.state().txs.is_empty());
    assert!(harness.presenter().alerts().is_empty());
}

#[tokio::test]
async fn test_confirmation_failure_keeps_pending_record() {
    let harness = setup_connected().await;
    harness
        .wallet
        .set_wait_result(Err(WalletError::from_provider(None, "transaction dropped")));

    harness.sync.send_native(RECIPIENT, "1").await;

    assert_eq!(
        harness.presenter().statuses(),
        vec!["Sending tx: 0xfeed", "Error: transaction dropped"]
    );
    assert_eq!(harness.sync.state().txs.len(), 1);
    assert!(harness.presenter().balances().is_empty());
}

#[tokio::test]
async fn test_mock_receive_requires_address() {
    let harness = setup();

    harness.sync.add_mock_receive();

    assert_eq!(harness.entries(), vec!["alert:Generate/Connect wallet first"]);
    assert!(harness.sync.state().txs.is_empty());
}

#[tokio::test]
async fn test_mock_receive_adds_local_entry() {
    // Arrange
    let harness = setup_connected().await;

    // Act
    harness.sync.add_mock_receive();

    // Assert
    let state = harness.sync.state();
    assert_eq!(state.txs.len(), 1);
    let tx = &state.txs[0];
    assert_eq!(tx.kind, TxKind::Receive);
    assert_eq!(tx.to, ADDRESS);
    assert!(tx.is_mock());
    let amount: f64 = tx.amount.parse().unwrap();
    assert!((0.0..10.0).contains(&amount));
    assert_eq!(harness.entries(), vec!["txs:1", "alert:Mock receive added"]);
}

#[tokio::test]
async fn test_history_cap_through_adapter() {
    let harness = setup_connected().await;

    for _ in 0..55 {
        harness.sync.add_mock_receive();
    }

    assert_eq!(harness.sync.state().txs.len(), crate::constants::MAX_TX_HISTORY);
}
