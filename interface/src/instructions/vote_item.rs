use borsh::BorshSerialize;
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_pubkey::Pubkey;

use crate::instructions::InstructionTag;

/// Adjusts the vote count of the first item whose link matches.
///
/// The program applies a first-match rule when the same link appears more
/// than once; there is no client-side deduplication.
///
/// ### Accounts
///  0. `[WRITE]` List account
///  1. `[SIGNER]` Voting user
pub struct VoteItem {
    /// The backing list account.
    pub list_account: Pubkey,
    /// The user casting the vote.
    pub user: Pubkey,
    /// The link identifying the item to vote on.
    pub link: String,
    /// `true` adds one vote, `false` removes one.
    pub upvote: bool,
}

impl VoteItem {
    pub fn instruction(&self) -> Instruction {
        Instruction {
            program_id: crate::program::ID,
            accounts: self.account_metas().to_vec(),
            data: self.pack_instruction_data(),
        }
    }

    pub fn account_metas(&self) -> [AccountMeta; 2] {
        [
            AccountMeta::new(self.list_account, false),
            AccountMeta::new_readonly(self.user, true),
        ]
    }

    pub fn pack_instruction_data(&self) -> Vec<u8> {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        //   - [1..n]: the link as a borsh string, u32 length prefix + utf8 bytes
        //   - [n]: the upvote flag, 1 byte
        let mut data = vec![InstructionTag::VoteItem as u8];
        self.link
            .serialize(&mut data)
            .expect("Should serialize link into a Vec");
        self.upvote
            .serialize(&mut data)
            .expect("Should serialize upvote flag into a Vec");
        data
    }
}
