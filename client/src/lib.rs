//! Client-side synchronization machinery for the gifport list program.
//!
//! Covers the wallet-session lifecycle, the remote-list RPC wrapper, the
//! cached list state, and the orchestrator that keeps the local projection
//! consistent with the remote account.

pub mod config;
pub mod logs;
pub mod remote;
pub mod store;
pub mod sync;
pub mod testing;
pub mod validate;
pub mod wallet;

pub use config::PortalConfig;
pub use remote::{
    ListProgram,
    RemoteError,
    RemoteListClient,
};
pub use store::{
    ListState,
    ListStateStore,
};
pub use sync::SyncOrchestrator;
pub use validate::{
    validate_link,
    ValidationError,
};
pub use wallet::{
    LocalWallet,
    SessionStatus,
    WalletError,
    WalletProvider,
    WalletSession,
};
