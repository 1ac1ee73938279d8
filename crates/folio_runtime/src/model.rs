use std::{fmt, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{catalog::LocationNode, navigation::NavigationCursor, z_order::ZOrderAllocator};

/// Stacking value every window starts from.
pub const INITIAL_Z_INDEX: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The closed set of window kinds; each kind has exactly one window.
pub enum WindowKind {
    Finder,
    Contact,
    Resume,
    Safari,
    Photos,
    Terminal,
    TxtFile,
    ImgFile,
}

impl WindowKind {
    pub const COUNT: usize = 8;

    /// Every kind, in registry order.
    pub const ALL: [WindowKind; Self::COUNT] = [
        Self::Finder,
        Self::Contact,
        Self::Resume,
        Self::Safari,
        Self::Photos,
        Self::Terminal,
        Self::TxtFile,
        Self::ImgFile,
    ];

    /// Case-sensitive window id.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Finder => "finder",
            Self::Contact => "contact",
            Self::Resume => "resume",
            Self::Safari => "safari",
            Self::Photos => "photos",
            Self::Terminal => "terminal",
            Self::TxtFile => "txtfile",
            Self::ImgFile => "imgfile",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Finder => "Portfolio",
            Self::Contact => "Contact Me",
            Self::Resume => "Resume.pdf",
            Self::Safari => "Articles",
            Self::Photos => "Gallery",
            Self::Terminal => "Tech Stack",
            Self::TxtFile => "Text",
            Self::ImgFile => "Image",
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown window id `{0}`")]
/// A window id outside the closed vocabulary.
pub struct UnknownWindowId(pub String);

impl FromStr for WindowKind {
    type Err = UnknownWindowId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == raw)
            .ok_or_else(|| UnknownWindowId(raw.to_string()))
    }
}

/// Data handed to a window's content renderer.
pub type WindowPayload = Arc<LocationNode>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Canonical state of one window.
pub struct WindowDescriptor {
    pub id: WindowKind,
    pub is_open: bool,
    pub z_index: u32,
    pub data: Option<WindowPayload>,
}

impl WindowDescriptor {
    /// A closed window at the baseline stacking value.
    pub fn closed(id: WindowKind) -> Self {
        Self {
            id,
            is_open: false,
            z_index: INITIAL_Z_INDEX,
            data: None,
        }
    }

    /// Header title: the payload name for file viewers, the kind title otherwise.
    pub fn title(&self) -> String {
        match (self.id, self.data.as_ref()) {
            (WindowKind::TxtFile | WindowKind::ImgFile, Some(node)) => node.name.clone(),
            _ => self.id.title().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Mutable desktop state: the window registry, its stacking allocator, and the Finder cursor.
pub struct DesktopState {
    windows: [WindowDescriptor; WindowKind::COUNT],
    pub z_order: ZOrderAllocator,
    pub location: NavigationCursor,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: WindowKind::ALL.map(WindowDescriptor::closed),
            z_order: ZOrderAllocator::default(),
            location: NavigationCursor::default(),
        }
    }
}

impl DesktopState {
    /// Fresh state whose Finder cursor starts at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::reducer::ReducerError::NotAFolder`] when `location` is a file.
    pub fn with_location(
        location: &Arc<LocationNode>,
    ) -> Result<Self, crate::reducer::ReducerError> {
        Ok(Self {
            location: NavigationCursor::starting_at(location)?,
            ..Self::default()
        })
    }

    pub fn window(&self, kind: WindowKind) -> &WindowDescriptor {
        &self.windows[kind.slot()]
    }

    pub(crate) fn window_mut(&mut self, kind: WindowKind) -> &mut WindowDescriptor {
        &mut self.windows[kind.slot()]
    }

    /// All descriptors in registry order.
    pub fn windows(&self) -> impl Iterator<Item = &WindowDescriptor> {
        self.windows.iter()
    }

    /// The open window drawn on top, if any.
    pub fn topmost_open_window(&self) -> Option<WindowKind> {
        self.windows
            .iter()
            .filter(|window| window.is_open)
            .max_by_key(|window| window.z_index)
            .map(|window| window.id)
    }

    /// Open windows from bottom to top.
    pub fn open_windows_in_stack_order(&self) -> Vec<WindowKind> {
        let mut open: Vec<_> = self.windows.iter().filter(|w| w.is_open).collect();
        open.sort_by_key(|window| window.z_index);
        open.into_iter().map(|window| window.id).collect()
    }
}
