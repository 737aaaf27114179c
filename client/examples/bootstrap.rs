//! First-run flow: connect a wallet, fetch the list, and run the one-time
//! initialization if the backing account does not exist yet.

use client::{
    logs::{
        log_info,
        log_warning,
    },
    ListState,
    ListStateStore,
    LocalWallet,
    PortalConfig,
    RemoteListClient,
    SyncOrchestrator,
    WalletSession,
};
use solana_sdk::signature::{
    Keypair,
    Signer,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = PortalConfig::from_env()?;
    let remote = RemoteListClient::new(config);
    log_info("List account", remote.list_address());

    let generated_user = std::env::var("GIFPORT_USER_KEYPAIR").is_err();
    let wallet = match std::env::var("GIFPORT_USER_KEYPAIR") {
        Ok(path) => LocalWallet::from_file(path)?,
        Err(_) => LocalWallet::trusted(Keypair::new()),
    };

    let mut session = WalletSession::new(Some(wallet));
    if let Err(notice) = session.restore_if_trusted().await {
        log_warning("Wallet", notice);
    }
    if !session.is_connected() {
        session.connect_interactive().await?;
    }
    let user = session
        .signer()
        .ok_or_else(|| anyhow::anyhow!("Session is not connected"))?;

    // A throwaway user has no balance to pay fees with.
    if generated_user {
        remote.fund_account(&user.pubkey(), 1_000_000_000).await?;
    }

    let orchestrator = SyncOrchestrator::new(&remote, ListStateStore::new());
    orchestrator.on_connected().await;

    if orchestrator.store().get() == ListState::Uninitialized {
        log_info("List", "Doing one-time initialization for the list account");
        orchestrator.initialize(user).await;
    }

    match orchestrator.store().get() {
        ListState::Loaded(items) => log_info("List ready", format!("{} item(s)", items.len())),
        other => log_warning("List unavailable", format!("{other:?}")),
    }

    Ok(())
}
