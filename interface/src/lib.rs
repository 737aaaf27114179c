//! Wire-level interface for the gifport list program.
//!
//! Defines the instruction set, the backing account's state layout, and the
//! program's typed errors as seen by off-chain clients.

pub mod error;
pub mod instructions;
pub mod state;

pub mod program {
    solana_pubkey::declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");
}
