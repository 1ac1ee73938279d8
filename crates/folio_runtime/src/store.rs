//! Owned desktop state with a command API and synchronous change notification.
//!
//! The store is the single writer of [`DesktopState`]. Each command reduces into a copy of the
//! current state and commits only on success, so a rejected command leaves the state and its
//! observers untouched. Listeners run before the command returns.
//!
//! The store is single-threaded (`!Send`); hosts with several event threads must wrap it in one
//! mutex so stacking allocations stay serialized.

use std::sync::Arc;

use crate::{
    catalog::LocationNode,
    model::{DesktopState, WindowDescriptor, WindowKind, WindowPayload},
    reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Handle returned by [`DesktopStore::subscribe`].
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&DesktopState)>;

pub struct DesktopStore {
    state: DesktopState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl DesktopStore {
    pub fn new(state: DesktopState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    /// Registers a listener called with the committed state after every change.
    pub fn subscribe(&mut self, listener: impl FnMut(&DesktopState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription = self.next_subscription.saturating_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` for unknown handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Reduces `action`, commits the result, and notifies listeners if anything changed.
    ///
    /// # Errors
    ///
    /// Returns the reducer error unchanged; nothing is committed or notified in that case.
    pub fn dispatch(&mut self, action: DesktopAction) -> Result<Vec<RuntimeEffect>, ReducerError> {
        let mut next = self.state.clone();
        let effects = reduce_desktop(&mut next, action)?;
        if next != self.state {
            self.state = next;
            for (_, listener) in &mut self.listeners {
                listener(&self.state);
            }
        }
        Ok(effects)
    }

    /// Opens the window named `id`, or re-focuses it when already open.
    ///
    /// # Errors
    ///
    /// Rejects ids outside the window vocabulary with [`ReducerError::UnknownWindow`].
    pub fn open_window(
        &mut self,
        id: &str,
        payload: Option<WindowPayload>,
    ) -> Result<(), ReducerError> {
        let window = id.parse::<WindowKind>()?;
        self.dispatch(DesktopAction::OpenWindow { window, payload })
            .map(drop)
    }

    /// Closes the window named `id` and drops its payload.
    ///
    /// # Errors
    ///
    /// Rejects ids outside the window vocabulary with [`ReducerError::UnknownWindow`].
    pub fn close_window(&mut self, id: &str) -> Result<(), ReducerError> {
        let window = id.parse::<WindowKind>()?;
        self.dispatch(DesktopAction::CloseWindow { window }).map(drop)
    }

    /// Raises the window named `id`.
    ///
    /// # Errors
    ///
    /// Rejects ids outside the window vocabulary with [`ReducerError::UnknownWindow`].
    pub fn focus_window(&mut self, id: &str) -> Result<(), ReducerError> {
        let window = id.parse::<WindowKind>()?;
        self.dispatch(DesktopAction::FocusWindow { window }).map(drop)
    }

    /// Snapshot of the window named `id`.
    ///
    /// # Errors
    ///
    /// Rejects ids outside the window vocabulary with [`ReducerError::UnknownWindow`].
    pub fn get_window(&self, id: &str) -> Result<WindowDescriptor, ReducerError> {
        let window = id.parse::<WindowKind>()?;
        Ok(self.state.window(window).clone())
    }

    /// Shows `folder` in Finder.
    ///
    /// # Errors
    ///
    /// Rejects file nodes with [`ReducerError::NotAFolder`].
    pub fn set_active_location(&mut self, folder: &Arc<LocationNode>) -> Result<(), ReducerError> {
        self.dispatch(DesktopAction::SetActiveLocation {
            node: folder.clone(),
        })
        .map(drop)
    }

    /// Routes a click on `item`; external navigations come back as effects.
    ///
    /// # Errors
    ///
    /// Returns [`ReducerError::UnroutableItem`] for items without a viewer window.
    pub fn open_item(&mut self, item: &Arc<LocationNode>) -> Result<Vec<RuntimeEffect>, ReducerError> {
        self.dispatch(DesktopAction::OpenItem { node: item.clone() })
    }
}

impl Default for DesktopStore {
    fn default() -> Self {
        Self::new(DesktopState::default())
    }
}

impl std::fmt::Debug for DesktopStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesktopStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{catalog::FileType, model::UnknownWindowId};

    fn recording_store() -> (DesktopStore, Rc<RefCell<Vec<DesktopState>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = DesktopStore::default();
        let sink = seen.clone();
        store.subscribe(move |state| sink.borrow_mut().push(state.clone()));
        (store, seen)
    }

    #[test]
    fn listeners_see_committed_state_before_command_returns() {
        let (mut store, seen) = recording_store();
        store.open_window("finder", None).expect("open finder");

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].window(WindowKind::Finder).z_index, 1001);
        assert_eq!(&seen[0], store.state());
    }

    #[test]
    fn unknown_ids_are_rejected_without_notification() {
        let (mut store, seen) = recording_store();
        let before = store.state().clone();

        for result in [
            store.open_window("launchpad", None),
            store.close_window("launchpad"),
            store.focus_window("launchpad"),
        ] {
            assert_eq!(
                result,
                Err(ReducerError::UnknownWindow(UnknownWindowId(
                    "launchpad".to_string()
                )))
            );
        }
        assert!(store.get_window("launchpad").is_err());
        assert_eq!(store.state(), &before);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn repeated_navigation_to_same_folder_notifies_once() {
        let (mut store, seen) = recording_store();
        let folder = Arc::new(LocationNode::folder(1, "Work", Vec::new()));

        store.set_active_location(&folder).expect("first");
        store.set_active_location(&folder).expect("second");

        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(store.state().z_order.current(), 1000);
    }

    #[test]
    fn failed_compound_action_commits_nothing() {
        let (mut store, seen) = recording_store();
        let file = Arc::new(LocationNode::file(1, "a.txt", FileType::Txt));

        let result = store.dispatch(DesktopAction::RevealInFinder { node: file });

        assert!(matches!(result, Err(ReducerError::NotAFolder { .. })));
        assert!(!store.get_window("finder").expect("finder").is_open);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn ignored_link_produces_no_effect_and_no_notification() {
        let (mut store, seen) = recording_store();
        let link = Arc::new(LocationNode::file(2, "x.com", FileType::Url));

        assert_eq!(store.open_item(&link), Ok(Vec::new()));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unsubscribed_listeners_stop_receiving() {
        let seen = Rc::new(RefCell::new(0usize));
        let mut store = DesktopStore::default();
        let counter = seen.clone();
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.open_window("photos", None).expect("open");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.close_window("photos").expect("close");

        assert_eq!(*seen.borrow(), 1);
    }
}
