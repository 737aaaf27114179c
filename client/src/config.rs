//! Fixed-at-startup configuration for a portal session.

use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signer,
    },
};

pub const DEVNET_URL: &str = "https://api.devnet.solana.com";

const CLUSTER_URL_ENV: &str = "GIFPORT_CLUSTER_URL";
const LIST_KEYPAIR_ENV: &str = "GIFPORT_LIST_KEYPAIR";

/// Everything a session needs to address the remote list: the cluster
/// endpoint, the commitment level, the program id, and the provisioning
/// keypair. Built once at startup and injected into the client; nothing
/// here is runtime-mutable.
pub struct PortalConfig {
    /// The cluster endpoint used for every call.
    pub cluster_url: String,
    /// The commitment level used for every call.
    pub commitment: CommitmentConfig,
    /// The list program's id.
    pub program_id: Pubkey,
    /// The provisioning keypair. Its pubkey is the backing account's
    /// address; the keypair itself co-signs the one-time initialization.
    pub list_keypair: Keypair,
}

impl PortalConfig {
    pub fn new(cluster_url: impl Into<String>, list_keypair: Keypair) -> Self {
        Self {
            cluster_url: cluster_url.into(),
            commitment: CommitmentConfig::processed(),
            program_id: gifport_interface::program::ID,
            list_keypair,
        }
    }

    /// Devnet configuration with environment overrides: `GIFPORT_CLUSTER_URL`
    /// for the endpoint and `GIFPORT_LIST_KEYPAIR` for the provisioning
    /// keypair file. Without a keypair file a throwaway keypair is
    /// generated, which addresses a fresh, still-uninitialized account.
    pub fn from_env() -> anyhow::Result<Self> {
        let cluster_url =
            std::env::var(CLUSTER_URL_ENV).unwrap_or_else(|_| DEVNET_URL.to_owned());

        let list_keypair = match std::env::var(LIST_KEYPAIR_ENV) {
            Ok(path) => solana_keypair::read_keypair_file(&path)
                .map_err(|e| anyhow::anyhow!("Couldn't read list keypair file {path}: {e}"))?,
            Err(_) => Keypair::new(),
        };

        Ok(Self::new(cluster_url, list_keypair))
    }

    /// The backing account's address.
    pub fn list_address(&self) -> Pubkey {
        self.list_keypair.pubkey()
    }
}
