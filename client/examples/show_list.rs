//! Connects and prints the current list with vote counts.

use client::{
    logs::log_warning,
    ListState,
    ListStateStore,
    LocalWallet,
    PortalConfig,
    RemoteListClient,
    SyncOrchestrator,
    WalletSession,
};
use solana_sdk::signature::Keypair;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = PortalConfig::from_env()?;
    let remote = RemoteListClient::new(config);

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

    let orchestrator = SyncOrchestrator::new(&remote, ListStateStore::new());
    orchestrator.on_connected().await;

    match orchestrator.store().get() {
        ListState::Loaded(items) => {
            for (position, item) in items.iter().enumerate() {
                println!("{position:>3}. [{:>4}] {}", item.votes, item.link);
            }
        }
        other => log_warning(
            "List unavailable",
            format!("{other:?} (run the bootstrap flow first)"),
        ),
    }

    Ok(())
}
