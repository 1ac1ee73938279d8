//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    catalog::{desktop_config, DockEntry, LocationNode, LocationRoot},
    dispatch::{route_item, ItemRoute},
    model::{DesktopState, UnknownWindowId, WindowKind, WindowPayload},
    window_manager::{close_window, focus_window, open_window, toggle_window},
    z_order::ZOrderExhausted,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or re-focus it if already open.
    OpenWindow {
        /// Window to open.
        window: WindowKind,
        /// Replacement payload; `None` keeps the payload of an already-open window.
        payload: Option<WindowPayload>,
    },
    /// Close a window and drop its payload.
    CloseWindow {
        /// Window to close.
        window: WindowKind,
    },
    /// Raise a window to the top.
    FocusWindow {
        /// Window to raise.
        window: WindowKind,
    },
    /// Show a folder in Finder.
    SetActiveLocation {
        /// Folder to show.
        node: Arc<LocationNode>,
    },
    /// Show one of the named roots in Finder.
    SelectRoot {
        /// Root to show.
        root: LocationRoot,
    },
    /// Return Finder to the previously shown folder.
    NavigateBack,
    /// Handle a click on a catalog item.
    OpenItem {
        /// Clicked item.
        node: Arc<LocationNode>,
    },
    /// Handle a click on a dock entry.
    ActivateDockEntry {
        /// Clicked entry.
        entry: DockEntry,
    },
    /// Show a folder in Finder and bring Finder up.
    RevealInFinder {
        /// Folder to show.
        node: Arc<LocationNode>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Open an external URL in a new browsing context.
    OpenExternalUrl(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Contract violations rejected by the reducer. State is left unchanged when one is returned.
pub enum ReducerError {
    /// A window id outside the closed vocabulary.
    #[error(transparent)]
    UnknownWindow(#[from] UnknownWindowId),
    /// Navigation targeted a file.
    #[error("cannot navigate into `{name}`: not a folder")]
    NotAFolder {
        /// Offending node name.
        name: String,
    },
    /// A catalog item whose `(file_type, kind)` pair has no viewer window.
    #[error("catalog item `{name}` ({file_type}/{kind}) has no window")]
    UnroutableItem {
        /// Offending node name.
        name: String,
        /// Its file type token, or `none`.
        file_type: String,
        /// Its kind token.
        kind: String,
    },
    /// No stacking values left.
    #[error(transparent)]
    StackingExhausted(#[from] ZOrderExhausted),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Every action produces at most one window or cursor change, except
/// [`DesktopAction::RevealInFinder`] which moves the cursor and raises Finder together.
///
/// # Errors
///
/// Returns [`ReducerError`] for contract violations. The state may be partially written when an
/// error is returned; callers that need atomicity reduce into a copy, as the store does.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { window, payload } => open_window(state, window, payload)?,
        DesktopAction::CloseWindow { window } => {
            close_window(state, window);
        }
        DesktopAction::FocusWindow { window } => focus_window(state, window)?,
        DesktopAction::SetActiveLocation { node } => {
            state.location.set_active_location(&node)?;
        }
        DesktopAction::SelectRoot { root } => {
            let node = desktop_config().locations.root(root).clone();
            state.location.set_active_location(&node)?;
        }
        DesktopAction::NavigateBack => {
            state.location.go_back();
        }
        DesktopAction::OpenItem { node } => match route_item(&node)? {
            ItemRoute::OpenWindow { window, payload } => open_window(state, window, payload)?,
            ItemRoute::Navigate(folder) => {
                state.location.set_active_location(&folder)?;
            }
            ItemRoute::OpenExternal(href) => effects.push(RuntimeEffect::OpenExternalUrl(href)),
            ItemRoute::Ignore => {
                #[cfg(debug_assertions)]
                leptos::logging::log!("catalog link `{}` has no address; ignored", node.name);
            }
        },
        DesktopAction::ActivateDockEntry { entry } => {
            if let Some(window) = entry.window()? {
                toggle_window(state, window)?;
            }
        }
        DesktopAction::RevealInFinder { node } => {
            state.location.set_active_location(&node)?;
            open_window(state, WindowKind::Finder, None)?;
        }
    }
    Ok(effects)
}
