//! Finder navigation cursor and its back-history.

use std::sync::Arc;

use crate::{catalog::LocationNode, reducer::ReducerError};

/// Oldest history entries are dropped beyond this depth.
pub const MAX_NAVIGATION_HISTORY: usize = 64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// The folder currently shown by Finder plus the folders visited before it.
pub struct NavigationCursor {
    active: Option<Arc<LocationNode>>,
    history: Vec<Arc<LocationNode>>,
}

impl NavigationCursor {
    /// Cursor positioned at `folder` with empty history.
    ///
    /// # Errors
    ///
    /// Returns [`ReducerError::NotAFolder`] for file nodes.
    pub fn starting_at(folder: &Arc<LocationNode>) -> Result<Self, ReducerError> {
        ensure_folder(folder)?;
        Ok(Self {
            active: Some(folder.clone()),
            history: Vec::new(),
        })
    }

    pub fn active(&self) -> Option<&Arc<LocationNode>> {
        self.active.as_ref()
    }

    /// Identity comparison: sibling ids repeat across folders, handles do not.
    pub fn is_active(&self, node: &Arc<LocationNode>) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| Arc::ptr_eq(active, node))
    }

    /// Items shown in the content pane.
    pub fn visible_items(&self) -> &[Arc<LocationNode>] {
        self.active
            .as_deref()
            .map(|folder| folder.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Moves the cursor to `folder`, remembering the previous folder.
    ///
    /// Returns `Ok(false)` when `folder` is already active; nothing changes in that case.
    ///
    /// # Errors
    ///
    /// Returns [`ReducerError::NotAFolder`] for file nodes; the cursor is left untouched.
    pub fn set_active_location(&mut self, folder: &Arc<LocationNode>) -> Result<bool, ReducerError> {
        ensure_folder(folder)?;
        if self.is_active(folder) {
            return Ok(false);
        }
        if let Some(previous) = self.active.replace(folder.clone()) {
            self.history.push(previous);
            if self.history.len() > MAX_NAVIGATION_HISTORY {
                let overflow = self.history.len() - MAX_NAVIGATION_HISTORY;
                self.history.drain(0..overflow);
            }
        }
        Ok(true)
    }

    /// Returns to the previously shown folder. Empty history is a no-op returning `false`.
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.active = Some(previous);
                true
            }
            None => false,
        }
    }
}

fn ensure_folder(node: &LocationNode) -> Result<(), ReducerError> {
    if node.is_folder() {
        Ok(())
    } else {
        Err(ReducerError::NotAFolder {
            name: node.name.clone(),
        })
    }
}
