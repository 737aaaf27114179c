//! The RPC wrapper around the remote list program.

use anyhow::Context;
use gifport_interface::{
    instructions::{
        append_item::AppendItem,
        initialize::Initialize,
        vote_item::VoteItem,
    },
    state::ListAccount,
};
use solana_client::rpc_client::RpcClient;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::{
    config::PortalConfig,
    logs::{
        log_info,
        log_success,
    },
};

/// A failure from the ledger or network layer.
///
/// Everything below the orchestrator collapses into this one kind, keeping
/// the originating cause for logging. A missing account is not
/// distinguished from a transport failure.
#[derive(Debug, thiserror::Error)]
#[error("Remote list operation failed: {0}")]
pub struct RemoteError(#[from] anyhow::Error);

/// The four operations the remote list program exposes.
///
/// `fetch_account` is read-only and safe to retry freely;
/// `initialize_account` is a one-time bootstrap and fails against an
/// already-initialized account. None of the operations retry internally;
/// retry policy belongs to the caller.
#[allow(async_fn_in_trait)]
pub trait ListProgram {
    async fn initialize_account(&self, user: &Keypair) -> Result<(), RemoteError>;

    async fn fetch_account(&self) -> Result<ListAccount, RemoteError>;

    async fn append_item(&self, user: &Keypair, link: &str) -> Result<(), RemoteError>;

    async fn vote_item(&self, user: &Keypair, link: &str, upvote: bool)
        -> Result<(), RemoteError>;
}

impl<C: ListProgram> ListProgram for &C {
    async fn initialize_account(&self, user: &Keypair) -> Result<(), RemoteError> {
        (**self).initialize_account(user).await
    }

    async fn fetch_account(&self) -> Result<ListAccount, RemoteError> {
        (**self).fetch_account().await
    }

    async fn append_item(&self, user: &Keypair, link: &str) -> Result<(), RemoteError> {
        (**self).append_item(user, link).await
    }

    async fn vote_item(
        &self,
        user: &Keypair,
        link: &str,
        upvote: bool,
    ) -> Result<(), RemoteError> {
        (**self).vote_item(user, link, upvote).await
    }
}

/// A long-lived RPC client bound to one cluster, one commitment level, and
/// one provisioning identity. Constructed once per session and reused for
/// every call.
pub struct RemoteListClient {
    rpc: RpcClient,
    config: PortalConfig,
}

impl RemoteListClient {
    pub fn new(config: PortalConfig) -> Self {
        let rpc = RpcClient::new_with_commitment(config.cluster_url.clone(), config.commitment);
        Self { rpc, config }
    }

    /// The backing account's address.
    pub fn list_address(&self) -> Pubkey {
        self.config.list_address()
    }

    /// Requests a devnet airdrop for `recipient` and waits for it to
    /// confirm.
    pub async fn fund_account(&self, recipient: &Pubkey, lamports: u64) -> anyhow::Result<()> {
        let signature = self
            .rpc
            .request_airdrop(recipient, lamports)
            .context("Failed to request airdrop")?;

        let mut attempts = 0;
        while !self
            .rpc
            .confirm_transaction(&signature)
            .context("Couldn't confirm airdrop")?
            && attempts < 10
        {
            std::thread::sleep(std::time::Duration::from_millis(500));
            attempts += 1;
        }

        Ok(())
    }

    async fn send_transaction(
        &self,
        payer: &Keypair,
        extra_signers: &[&Keypair],
        instructions: &[Instruction],
    ) -> anyhow::Result<Signature> {
        let blockhash = self
            .rpc
            .get_latest_blockhash()
            .context("Failed to fetch a recent blockhash")?;

        let msg = Message::new(instructions, Some(&payer.pubkey()));
        let mut tx = Transaction::new_unsigned(msg);

        let signers: Vec<&Keypair> = std::iter::once(payer)
            .chain(extra_signers.iter().copied())
            .collect();
        tx.try_sign(&signers, blockhash)
            .context("Failed to sign transaction")?;

        self.rpc
            .send_and_confirm_transaction(&tx)
            .context("Failed transaction submission")
    }
}

impl ListProgram for RemoteListClient {
    async fn initialize_account(&self, user: &Keypair) -> Result<(), RemoteError> {
        let ixn = Initialize {
            list_account: self.config.list_address(),
            user: user.pubkey(),
        }
        .instruction();

        // The provisioning keypair co-signs because the instruction creates
        // the account at its address.
        let sig = self
            .send_transaction(user, &[&self.config.list_keypair], &[ixn])
            .await?;

        log_success("Created list account", self.config.list_address());
        log_info("Signature", sig);
        Ok(())
    }

    async fn fetch_account(&self) -> Result<ListAccount, RemoteError> {
        let account = self
            .rpc
            .get_account(&self.config.list_address())
            .context("Couldn't fetch the list account")?;

        let decoded = ListAccount::from_owner_and_data(&account.owner, &account.data)
            .context("Couldn't decode the list account")?;

        Ok(decoded)
    }

    async fn append_item(&self, user: &Keypair, link: &str) -> Result<(), RemoteError> {
        let ixn = AppendItem {
            list_account: self.config.list_address(),
            user: user.pubkey(),
            link: link.to_owned(),
        }
        .instruction();

        let sig = self.send_transaction(user, &[], &[ixn]).await?;

        log_success("Link sent to program", link);
        log_info("Signature", sig);
        Ok(())
    }

    async fn vote_item(
        &self,
        user: &Keypair,
        link: &str,
        upvote: bool,
    ) -> Result<(), RemoteError> {
        let ixn = VoteItem {
            list_account: self.config.list_address(),
            user: user.pubkey(),
            link: link.to_owned(),
            upvote,
        }
        .instruction();

        let sig = self.send_transaction(user, &[], &[ixn]).await?;

        log_success(if upvote { "Upvoted" } else { "Downvoted" }, link);
        log_info("Signature", sig);
        Ok(())
    }
}
