//! Wallet-session lifecycle over an injected wallet provider.

use std::path::Path;

use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signer,
    },
};

use crate::logs::{
    log_info,
    log_warning,
};

/// Failures at the wallet-provider boundary. None of these are fatal; the
/// session simply remains disconnected.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("No wallet provider is available")]
    ProviderUnavailable,
    #[error("The connect request was declined")]
    ConnectionRejected,
    #[error("Wallet provider failure: {0}")]
    Provider(#[from] anyhow::Error),
}

/// The boundary to a wallet that exposes a user identity and signs with it.
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// Capability probe: whether this provider is a kind the client will use
    /// for non-interactive reconnection.
    fn is_trusted_kind(&self) -> bool;

    /// Requests a connection. With `only_if_trusted` set the provider must
    /// not prompt, and may only resolve from a previously approved grant.
    async fn connect(&self, only_if_trusted: bool) -> Result<Pubkey, WalletError>;

    /// The signing keypair for the connected identity.
    fn signer(&self) -> &Keypair;
}

/// A keypair-backed wallet standing in for a browser-injected provider.
///
/// The `trusted` flag plays the role of a previously approved grant:
/// non-interactive reconnection succeeds only when it is set.
pub struct LocalWallet {
    keypair: Keypair,
    trusted: bool,
}

impl LocalWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self {
            keypair,
            trusted: false,
        }
    }

    /// A wallet that already holds a trusted grant, so `restore_if_trusted`
    /// reconnects without prompting.
    pub fn trusted(keypair: Keypair) -> Self {
        Self {
            keypair,
            trusted: true,
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let keypair = solana_keypair::read_keypair_file(path)
            .map_err(|e| anyhow::anyhow!("Couldn't read keypair file {}: {e}", path.display()))?;
        Ok(Self::trusted(keypair))
    }
}

impl WalletProvider for LocalWallet {
    fn is_trusted_kind(&self) -> bool {
        true
    }

    async fn connect(&self, only_if_trusted: bool) -> Result<Pubkey, WalletError> {
        if only_if_trusted && !self.trusted {
            return Err(WalletError::ConnectionRejected);
        }
        Ok(self.keypair.pubkey())
    }

    fn signer(&self) -> &Keypair {
        &self.keypair
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// The connect lifecycle for a single user identity.
///
/// At most one address is bound at a time; a reconnect overwrites status and
/// address together, so consumers never observe a half-bound session.
pub struct WalletSession<P> {
    provider: Option<P>,
    status: SessionStatus,
    address: Option<Pubkey>,
}

impl<P: WalletProvider> WalletSession<P> {
    pub fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            status: SessionStatus::Disconnected,
            address: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn address(&self) -> Option<Pubkey> {
        self.address
    }

    pub fn is_connected(&self) -> bool {
        self.status == SessionStatus::Connected
    }

    /// The signing handle for the connected identity, present only while the
    /// session is connected.
    pub fn signer(&self) -> Option<&Keypair> {
        match (self.status, &self.provider) {
            (SessionStatus::Connected, Some(provider)) => Some(provider.signer()),
            _ => None,
        }
    }

    /// Attempts a non-interactive reconnect from a previously trusted grant.
    ///
    /// Only the absence of a provider is surfaced to the caller. Any
    /// rejection or provider failure is logged here and leaves the session
    /// disconnected.
    pub async fn restore_if_trusted(&mut self) -> Result<(), WalletError> {
        match &self.provider {
            None => return Err(WalletError::ProviderUnavailable),
            Some(provider) if !provider.is_trusted_kind() => return Ok(()),
            Some(_) => {}
        }

        let connected = self.begin_connect()?.connect(true).await;
        match connected {
            Ok(address) => self.bind(address),
            Err(cause) => {
                self.status = SessionStatus::Disconnected;
                log_warning("Trusted reconnect failed", cause);
            }
        }
        Ok(())
    }

    /// Requests explicit user approval from the provider.
    pub async fn connect_interactive(&mut self) -> Result<Pubkey, WalletError> {
        let connected = self.begin_connect()?.connect(false).await;
        match connected {
            Ok(address) => {
                self.bind(address);
                Ok(address)
            }
            Err(cause) => {
                self.status = SessionStatus::Disconnected;
                Err(cause)
            }
        }
    }

    pub fn disconnect(&mut self) {
        self.status = SessionStatus::Disconnected;
        self.address = None;
    }

    fn begin_connect(&mut self) -> Result<&P, WalletError> {
        self.status = SessionStatus::Connecting;
        match &self.provider {
            Some(provider) => Ok(provider),
            None => {
                self.status = SessionStatus::Disconnected;
                Err(WalletError::ProviderUnavailable)
            }
        }
    }

    fn bind(&mut self, address: Pubkey) {
        self.address = Some(address);
        self.status = SessionStatus::Connected;
        log_info("Connected with public key", address);
    }
}
