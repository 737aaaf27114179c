pub mod list_account;

pub use list_account::{
    ListAccount,
    ListItem,
};
