use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_pubkey::Pubkey;

use crate::instructions::InstructionTag;

/// Creates and initializes the program's backing list account.
///
/// This is a one-time bootstrap: the list account is created by this
/// instruction, so re-running it against an existing account fails inside
/// the program.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` List account
///  1. `[WRITE, SIGNER]` User funding the account creation
///  2. `[READ]` System program
pub struct Initialize {
    /// The backing list account to create.
    pub list_account: Pubkey,
    /// The user paying for and authorizing the creation.
    pub user: Pubkey,
}

impl Initialize {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: self.account_metas().to_vec(),
            data: self.pack_instruction_data(),
        }
    }

    pub fn account_metas(&self) -> [AccountMeta; 3] {
        [
            AccountMeta::new(self.list_account, true),
            AccountMeta::new(self.user, true),
            AccountMeta::new_readonly(solana_system_interface::program::ID, false),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        vec![InstructionTag::Initialize as u8]
    }
}
