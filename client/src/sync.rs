//! Sequencing of session events, validation, remote calls, and store
//! writes.

use solana_sdk::signature::Keypair;

use crate::{
    logs::{
        log_error,
        log_info,
    },
    remote::ListProgram,
    store::{
        ListState,
        ListStateStore,
    },
    validate::{
        validate_link,
        ValidationError,
    },
};

/// Drives the mutate-then-refetch protocol against the remote list.
///
/// Every remote failure is caught at its step and logged; only a fetch
/// failure changes the store (to `Uninitialized`). Validation rejections
/// are the only errors surfaced to the caller, and nothing is retried
/// automatically.
pub struct SyncOrchestrator<C> {
    program: C,
    store: ListStateStore,
}

impl<C: ListProgram> SyncOrchestrator<C> {
    pub fn new(program: C, store: ListStateStore) -> Self {
        Self { program, store }
    }

    pub fn store(&self) -> &ListStateStore {
        &self.store
    }

    /// Entry point for a session that has just connected.
    pub async fn on_connected(&self) {
        log_info("Session connected", "fetching the list");
        self.refresh().await;
    }

    /// Re-reads the remote account into the store.
    ///
    /// A missing account and a transport failure are treated the same:
    /// both leave the list uninitialized, so the one-time bootstrap is
    /// offered in either case.
    pub async fn refresh(&self) {
        match self.program.fetch_account().await {
            Ok(account) => {
                log_info("Got the list", format!("{} item(s)", account.items.len()));
                self.store.set(ListState::Loaded(account.items));
            }
            Err(cause) => {
                log_error("Fetch failed", cause);
                self.store.set(ListState::Uninitialized);
            }
        }
    }

    /// Validates and submits a new link, then refetches.
    ///
    /// A rejected link aborts before any remote call. A failed append is
    /// logged and leaves the store untouched; the refetch runs only after
    /// a successful append, so readers never see an item the remote has
    /// not confirmed.
    pub async fn submit_link(&self, user: &Keypair, raw: &str) -> Result<(), ValidationError> {
        let link = validate_link(raw)?;

        match self.program.append_item(user, link).await {
            Ok(()) => self.refresh().await,
            Err(cause) => log_error("Error while sending link", cause),
        }

        Ok(())
    }

    /// Moves a link's vote count one step in either direction, then
    /// refetches.
    pub async fn vote(&self, user: &Keypair, link: &str, upvote: bool) {
        match self.program.vote_item(user, link, upvote).await {
            Ok(()) => self.refresh().await,
            Err(cause) => log_error("Error when voting", cause),
        }
    }

    /// The one-time bootstrap offered while the store is `Uninitialized`.
    pub async fn initialize(&self, user: &Keypair) {
        match self.program.initialize_account(user).await {
            Ok(()) => self.refresh().await,
            Err(cause) => log_error("Error creating list account", cause),
        }
    }
}
