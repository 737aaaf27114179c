//! The first-run walkthrough: a fresh session with no trusted grant, an
//! interactive connect, a missing backing account, and the one-time
//! initialization.

use client::{
    testing::ScriptedProgram,
    ListState,
    ListStateStore,
    LocalWallet,
    SessionStatus,
    SyncOrchestrator,
    WalletSession,
};
use solana_sdk::signature::{
    Keypair,
    Signer,
};

#[tokio::test]
async fn first_run_bootstrap_flow() {
    // Fresh wallet with no trusted grant: the silent restore leaves the
    // session disconnected, the interactive connect binds the address.
    let keypair = Keypair::new();
    let expected_address = keypair.pubkey();
    let mut session = WalletSession::new(Some(LocalWallet::new(keypair)));

    session.restore_if_trusted().await.unwrap();
    assert_eq!(session.status(), SessionStatus::Disconnected);

    let granted = session.connect_interactive().await.unwrap();
    assert_eq!(granted, expected_address);
    assert_eq!(session.address(), Some(expected_address));

    // The backing account does not exist yet, so the connect-time fetch
    // leaves the list uninitialized and the bootstrap action is offered.
    let program = ScriptedProgram::uninitialized();
    let orchestrator = SyncOrchestrator::new(&program, ListStateStore::new());

    orchestrator.on_connected().await;
    assert_eq!(orchestrator.store().get(), ListState::Uninitialized);

    // One-time initialization, then the refetch shows the empty list.
    let user = session.signer().unwrap();
    orchestrator.initialize(user).await;
    assert_eq!(orchestrator.store().get(), ListState::Loaded(vec![]));

    // Running the bootstrap again fails remotely and is only logged; the
    // loaded state survives.
    orchestrator.initialize(user).await;
    assert_eq!(orchestrator.store().get(), ListState::Loaded(vec![]));
}
