//! The last-known local copy of the remote list.

use std::{
    cell::RefCell,
    rc::Rc,
};

use gifport_interface::state::ListItem;

/// The cached projection of the remote account.
///
/// Readers can only reach items through [`ListState::Loaded`], so stale or
/// absent data is never mistaken for an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListState {
    /// No fetch has been attempted yet.
    #[default]
    Unknown,
    /// The last fetch failed or found no account. The one-time
    /// initialization action is offered while in this state.
    Uninitialized,
    /// The most recently fetched items, oldest first.
    Loaded(Vec<ListItem>),
}

/// Shared handle to the cached list state.
///
/// Single writer (the orchestrator), many readers. Clones share the same
/// underlying cell; each `set` is fully visible to the next `get`.
#[derive(Clone, Debug, Default)]
pub struct ListStateStore {
    inner: Rc<RefCell<ListState>>,
}

impl ListStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, next: ListState) {
        *self.inner.borrow_mut() = next;
    }

    pub fn get(&self) -> ListState {
        self.inner.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use gifport_interface::state::ListItem;

    use super::{
        ListState,
        ListStateStore,
    };

    #[test]
    fn starts_unknown() {
        assert_eq!(ListStateStore::new().get(), ListState::Unknown);
    }

    #[test]
    fn clones_share_state() {
        let store = ListStateStore::new();
        let reader = store.clone();

        store.set(ListState::Loaded(vec![ListItem::new("https://giphy.com/a.gif")]));

        let ListState::Loaded(items) = reader.get() else {
            panic!("reader should observe the loaded state");
        };
        assert_eq!(items.len(), 1);

        store.set(ListState::Uninitialized);
        assert_eq!(reader.get(), ListState::Uninitialized);
    }
}
