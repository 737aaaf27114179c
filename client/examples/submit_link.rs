//! Prompts for a link, validates it, submits it, and shows the refreshed
//! list.

use std::io::{
    self,
    Write,
};

use client::{
    logs::{
        log_error,
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
    let user = session
        .signer()
        .ok_or_else(|| anyhow::anyhow!("Session is not connected"))?;

    print!("Enter gif link! ");
    io::stdout().flush()?;
    let mut raw = String::new();
    io::stdin().read_line(&mut raw)?;

    let orchestrator = SyncOrchestrator::new(&remote, ListStateStore::new());
    orchestrator.on_connected().await;

    if let Err(rejection) = orchestrator.submit_link(user, &raw).await {
        log_error("Rejected", rejection);
        return Ok(());
    }

    match orchestrator.store().get() {
        ListState::Loaded(items) => {
            for item in &items {
                println!("[{:>4}] {}", item.votes, item.link);
            }
        }
        other => log_warning("List unavailable", format!("{other:?}")),
    }

    Ok(())
}
