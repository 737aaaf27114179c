use borsh::BorshSerialize;
use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_pubkey::Pubkey;

use crate::instructions::InstructionTag;

/// Appends a new item to the list with a vote count of zero.
///
/// The program stores the link verbatim; callers are expected to have
/// validated it before submission.
///
/// ### Accounts
///  0. `[WRITE]` List account
///  1. `[SIGNER]` Submitting user
pub struct AppendItem {
    /// The backing list account.
    pub list_account: Pubkey,
    /// The user submitting the link.
    pub user: Pubkey,
    /// The link to append.
    pub link: String,
}

impl AppendItem {
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
        //   - [1..]: the link as a borsh string, u32 length prefix + utf8 bytes
        let mut data = vec![InstructionTag::AppendItem as u8];
        self.link
            .serialize(&mut data)
            .expect("Should serialize link into a Vec");
        data
    }
}

#[cfg(test)]
mod tests {
    use solana_pubkey::Pubkey;

    use super::AppendItem;
    use crate::instructions::InstructionTag;

    #[test]
    fn append_item_instruction_layout() {
        let link = "https://media.giphy.com/abc.gif";
        let ixn = AppendItem {
            list_account: Pubkey::new_unique(),
            user: Pubkey::new_unique(),
            link: link.to_owned(),
        }
        .instruction();

        assert_eq!(ixn.data[0], InstructionTag::AppendItem as u8);
        let decoded: String = borsh::from_slice(&ixn.data[1..]).unwrap();
        assert_eq!(decoded, link);

        assert_eq!(ixn.accounts.len(), 2);
        assert!(!ixn.accounts[0].is_signer && ixn.accounts[0].is_writable);
        assert!(ixn.accounts[1].is_signer && !ixn.accounts[1].is_writable);
    }
}
