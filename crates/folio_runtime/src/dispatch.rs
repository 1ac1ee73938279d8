//! Click routing for catalog items.
//!
//! Rules are checked in a fixed order and the first match wins:
//! 1. `pdf` items open the resume window, whatever their kind.
//! 2. folders move the Finder cursor.
//! 3. `url`/`fig` items with an address open it in a new tab; without one they do nothing.
//! 4. anything else opens the viewer window for its `(file_type, kind)` pair.

use std::sync::Arc;

use crate::{
    catalog::{FileType, LocationNode, NodeKind},
    model::WindowKind,
    reducer::ReducerError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// The single action a clicked item resolves to.
pub enum ItemRoute {
    /// Open (or re-focus) a window, optionally handing it the item.
    OpenWindow {
        window: WindowKind,
        payload: Option<Arc<LocationNode>>,
    },
    /// Show a folder in Finder.
    Navigate(Arc<LocationNode>),
    /// Leave the desktop for an external address.
    OpenExternal(String),
    /// Link item without an address.
    Ignore,
}

/// Viewer window for a `(file_type, kind)` pair.
pub const fn window_for_file(file_type: FileType, kind: NodeKind) -> Option<WindowKind> {
    match (file_type, kind) {
        (FileType::Txt, NodeKind::File) => Some(WindowKind::TxtFile),
        (FileType::Img, NodeKind::File) => Some(WindowKind::ImgFile),
        _ => None,
    }
}

/// Resolves what clicking `item` does.
///
/// # Errors
///
/// Returns [`ReducerError::UnroutableItem`] when rule 4 applies and the pair has no viewer.
pub fn route_item(item: &Arc<LocationNode>) -> Result<ItemRoute, ReducerError> {
    if item.file_type == Some(FileType::Pdf) {
        return Ok(ItemRoute::OpenWindow {
            window: WindowKind::Resume,
            payload: None,
        });
    }
    if item.kind == NodeKind::Folder {
        return Ok(ItemRoute::Navigate(item.clone()));
    }
    match item.file_type {
        Some(file_type) if file_type.is_link() => Ok(item
            .link_target()
            .map(|href| ItemRoute::OpenExternal(href.to_string()))
            .unwrap_or(ItemRoute::Ignore)),
        Some(file_type) => window_for_file(file_type, item.kind)
            .map(|window| ItemRoute::OpenWindow {
                window,
                payload: Some(item.clone()),
            })
            .ok_or_else(|| unroutable(item)),
        None => Err(unroutable(item)),
    }
}

fn unroutable(item: &LocationNode) -> ReducerError {
    ReducerError::UnroutableItem {
        name: item.name.clone(),
        file_type: item
            .file_type
            .map(FileType::as_str)
            .unwrap_or("none")
            .to_string(),
        kind: item.kind.as_str().to_string(),
    }
}
