//! Scriptable in-memory stand-ins for the remote program, used to drive
//! the orchestrator in tests without a cluster.

use std::cell::{
    Cell,
    RefCell,
};

use gifport_interface::{
    error::GifportError,
    state::{
        ListAccount,
        ListItem,
    },
};
use solana_sdk::signature::Keypair;

use crate::remote::{
    ListProgram,
    RemoteError,
};

/// An in-memory list program with switchable failure modes and call
/// counters.
#[derive(Default)]
pub struct ScriptedProgram {
    account: RefCell<Option<ListAccount>>,
    fail_fetches: Cell<bool>,
    fail_mutations: Cell<bool>,
    fetch_calls: Cell<u32>,
    mutation_calls: Cell<u32>,
}

impl ScriptedProgram {
    /// A program whose backing account has not been created yet.
    pub fn uninitialized() -> Self {
        Self::default()
    }

    /// A program with an initialized backing account holding `items`.
    pub fn with_items(items: Vec<ListItem>) -> Self {
        let program = Self::default();
        *program.account.borrow_mut() = Some(ListAccount {
            initialized: true,
            items,
        });
        program
    }

    pub fn set_fail_fetches(&self, fail: bool) {
        self.fail_fetches.set(fail);
    }

    pub fn set_fail_mutations(&self, fail: bool) {
        self.fail_mutations.set(fail);
    }

    pub fn fetch_calls(&self) -> u32 {
        self.fetch_calls.get()
    }

    pub fn mutation_calls(&self) -> u32 {
        self.mutation_calls.get()
    }
}

impl ListProgram for ScriptedProgram {
    async fn initialize_account(&self, _user: &Keypair) -> Result<(), RemoteError> {
        self.mutation_calls.set(self.mutation_calls.get() + 1);
        if self.fail_mutations.get() {
            return Err(anyhow::anyhow!("simulated ledger failure").into());
        }

        let mut account = self.account.borrow_mut();
        if account.is_some() {
            return Err(anyhow::anyhow!("account is already initialized").into());
        }
        *account = Some(ListAccount {
            initialized: true,
            items: vec![],
        });
        Ok(())
    }

    async fn fetch_account(&self) -> Result<ListAccount, RemoteError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        if self.fail_fetches.get() {
            return Err(anyhow::anyhow!("simulated network outage").into());
        }

        self.account
            .borrow()
            .clone()
            .ok_or_else(|| RemoteError::from(anyhow::anyhow!("account does not exist")))
    }

    async fn append_item(&self, _user: &Keypair, link: &str) -> Result<(), RemoteError> {
        self.mutation_calls.set(self.mutation_calls.get() + 1);
        if self.fail_mutations.get() {
            return Err(anyhow::anyhow!("simulated ledger failure").into());
        }

        match self.account.borrow_mut().as_mut() {
            Some(account) => {
                account.items.push(ListItem::new(link));
                Ok(())
            }
            None => Err(anyhow::anyhow!("account does not exist").into()),
        }
    }

    async fn vote_item(
        &self,
        _user: &Keypair,
        link: &str,
        upvote: bool,
    ) -> Result<(), RemoteError> {
        self.mutation_calls.set(self.mutation_calls.get() + 1);
        if self.fail_mutations.get() {
            return Err(anyhow::anyhow!("simulated ledger failure").into());
        }

        let mut account = self.account.borrow_mut();
        let Some(account) = account.as_mut() else {
            return Err(anyhow::anyhow!("account does not exist").into());
        };

        // First match, the same rule the remote program applies to
        // duplicate links.
        match account.items.iter_mut().find(|item| item.link == link) {
            Some(item) => {
                item.votes += if upvote { 1 } else { -1 };
                Ok(())
            }
            None => Err(anyhow::Error::from(GifportError::ItemNotFound).into()),
        }
    }
}
