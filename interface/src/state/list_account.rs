use borsh::{
    BorshDeserialize,
    BorshSerialize,
};
use solana_pubkey::Pubkey;

use crate::error::GifportError;

/// A single submitted link and its running vote total.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ListItem {
    /// The submitted link, stored verbatim.
    pub link: String,
    /// Net vote count. Downvotes can push it negative.
    pub votes: i64,
}

impl ListItem {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            votes: 0,
        }
    }
}

/// The program's single backing account.
///
/// Items are kept in submission order. An item's identity is its link plus
/// its position; the program permits duplicate links.
#[derive(Clone, Debug, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct ListAccount {
    /// Set once by `Initialize`, never cleared afterwards.
    pub initialized: bool,
    /// The submitted items, oldest first.
    pub items: Vec<ListItem>,
}

impl ListAccount {
    /// Decodes a fetched account's data, validating the owner and the
    /// initialized flag before exposing the items.
    pub fn from_owner_and_data(owner: &Pubkey, data: &[u8]) -> Result<Self, GifportError> {
        if owner != &crate::program::ID {
            return Err(GifportError::InvalidAccountOwner);
        }

        let account: ListAccount =
            borsh::from_slice(data).map_err(|_| GifportError::MalformedAccountData)?;

        if !account.initialized {
            return Err(GifportError::UninitializedAccount);
        }

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use solana_pubkey::Pubkey;

    use super::{
        ListAccount,
        ListItem,
    };
    use crate::error::GifportError;

    fn sample_account() -> ListAccount {
        ListAccount {
            initialized: true,
            items: vec![
                ListItem::new("https://media.giphy.com/a.gif"),
                ListItem {
                    link: "https://giphy.com/b.gif".to_owned(),
                    votes: -2,
                },
            ],
        }
    }

    #[test]
    fn decodes_a_valid_account() {
        let account = sample_account();
        let data = borsh::to_vec(&account).unwrap();

        let decoded = ListAccount::from_owner_and_data(&crate::program::ID, &data).unwrap();
        assert_eq!(decoded, account);
        assert_eq!(decoded.items[0].votes, 0);
    }

    #[test]
    fn rejects_a_foreign_owner() {
        let data = borsh::to_vec(&sample_account()).unwrap();

        assert_eq!(
            ListAccount::from_owner_and_data(&Pubkey::new_unique(), &data),
            Err(GifportError::InvalidAccountOwner)
        );
    }

    #[test]
    fn rejects_truncated_data() {
        let mut data = borsh::to_vec(&sample_account()).unwrap();
        data.truncate(data.len() - 1);

        assert_eq!(
            ListAccount::from_owner_and_data(&crate::program::ID, &data),
            Err(GifportError::MalformedAccountData)
        );
    }

    #[test]
    fn rejects_an_uninitialized_account() {
        let account = ListAccount {
            initialized: false,
            items: vec![],
        };
        let data = borsh::to_vec(&account).unwrap();

        assert_eq!(
            ListAccount::from_owner_and_data(&crate::program::ID, &data),
            Err(GifportError::UninitializedAccount)
        );
    }
}
