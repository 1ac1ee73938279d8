//! Static content catalog: the Finder location tree plus the desktop content lists.
//!
//! The catalog is authored in `desktop.toml`, validated by the build script, and decoded once on
//! first use. Nothing in it is mutated at runtime; nodes are shared through [`Arc`] handles and
//! runtime identity of a node is the identity of its handle (sibling ids repeat across folders).

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{UnknownWindowId, WindowKind};

include!(concat!(env!("OUT_DIR"), "/desktop_config_generated.rs"));

/// Schema version accepted by [`DesktopConfig::from_json`].
pub const DESKTOP_CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Whether a catalog node is a folder or a file.
pub enum NodeKind {
    /// Navigable container.
    Folder,
    /// Leaf item.
    File,
}

impl NodeKind {
    /// Stable lowercase token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::File => "file",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// File content type of a catalog node.
pub enum FileType {
    /// Plain text document.
    Txt,
    /// Web link.
    Url,
    /// Image.
    Img,
    /// Design file link.
    Fig,
    /// The resume document.
    Pdf,
}

impl FileType {
    /// Stable lowercase token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Url => "url",
            Self::Img => "img",
            Self::Fig => "fig",
            Self::Pdf => "pdf",
        }
    }

    /// Returns whether items of this type leave the desktop through an external link.
    pub const fn is_link(self) -> bool {
        matches!(self, Self::Url | Self::Fig)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One folder or file in the location tree.
pub struct LocationNode {
    /// Identifier, unique among siblings only.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Icon asset path.
    #[serde(default)]
    pub icon: String,
    /// Folder or file.
    pub kind: NodeKind,
    /// Content type; folders normally have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<FileType>,
    /// External address for url/fig items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Image shown by the image window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Heading shown by the text window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Header picture shown by the text window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Text paragraphs.
    #[serde(default)]
    pub description: Vec<String>,
    /// Ordered children (folders only).
    #[serde(default)]
    pub children: Vec<Arc<LocationNode>>,
    /// Placement hint inside the content pane.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Placement hint for the desktop project icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_position: Option<String>,
}

impl LocationNode {
    fn bare(id: u32, name: &str, kind: NodeKind) -> Self {
        Self {
            id,
            name: name.to_string(),
            icon: String::new(),
            kind,
            file_type: None,
            href: None,
            image_url: None,
            subtitle: None,
            image: None,
            description: Vec::new(),
            children: Vec::new(),
            position: None,
            window_position: None,
        }
    }

    /// Builds a folder node owning `children`.
    pub fn folder(id: u32, name: &str, children: Vec<LocationNode>) -> Self {
        Self {
            children: children.into_iter().map(Arc::new).collect(),
            ..Self::bare(id, name, NodeKind::Folder)
        }
    }

    /// Builds a file node of the given type.
    pub fn file(id: u32, name: &str, file_type: FileType) -> Self {
        Self {
            file_type: Some(file_type),
            ..Self::bare(id, name, NodeKind::File)
        }
    }

    /// Sets the external address.
    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    /// Overrides the content type, regardless of kind.
    pub fn with_file_type(mut self, file_type: FileType) -> Self {
        self.file_type = Some(file_type);
        self
    }

    /// Returns whether this node can become the navigation cursor.
    pub fn is_folder(&self) -> bool {
        self.kind == NodeKind::Folder
    }

    /// Returns the trimmed external address; blank addresses count as absent.
    pub fn link_target(&self) -> Option<&str> {
        self.href
            .as_deref()
            .map(str::trim)
            .filter(|href| !href.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// The four named entry points of the location tree.
pub enum LocationRoot {
    /// Projects.
    Work,
    /// About me.
    About,
    /// Resume.
    Resume,
    /// Trash.
    Trash,
}

impl LocationRoot {
    /// Roots in sidebar order.
    pub const ALL: [LocationRoot; 4] = [Self::Work, Self::About, Self::Resume, Self::Trash];

    /// Stable lowercase handle.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::About => "about",
            Self::Resume => "resume",
            Self::Trash => "trash",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Root folders of the location tree.
pub struct LocationCatalog {
    /// Projects root.
    pub work: Arc<LocationNode>,
    /// About-me root.
    pub about: Arc<LocationNode>,
    /// Resume root.
    pub resume: Arc<LocationNode>,
    /// Trash root.
    pub trash: Arc<LocationNode>,
}

impl LocationCatalog {
    /// Returns the folder node behind a named root.
    pub fn root(&self, root: LocationRoot) -> &Arc<LocationNode> {
        match root {
            LocationRoot::Work => &self.work,
            LocationRoot::About => &self.about,
            LocationRoot::Resume => &self.resume,
            LocationRoot::Trash => &self.trash,
        }
    }

    /// Sidebar "Favorites" section.
    pub fn favorites(&self) -> Vec<Arc<LocationNode>> {
        LocationRoot::ALL
            .iter()
            .map(|root| self.root(*root).clone())
            .collect()
    }

    /// Sidebar "My Projects" section: the children of the work root.
    pub fn projects(&self) -> &[Arc<LocationNode>] {
        &self.work.children
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Dock launcher entry.
pub struct DockEntry {
    /// Window id the entry toggles (or a decorative id when `can_open` is false).
    pub id: String,
    /// Label.
    pub name: String,
    /// Icon file name under `/images`.
    pub icon: String,
    /// Whether activating the entry does anything.
    pub can_open: bool,
}

impl DockEntry {
    /// Resolves the window this entry toggles; `None` for inert entries.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownWindowId`] when an openable entry names no window.
    pub fn window(&self) -> Result<Option<WindowKind>, UnknownWindowId> {
        if !self.can_open {
            return Ok(None);
        }
        self.id.parse().map(Some)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Navbar link opening one window.
pub struct NavLink {
    /// Identifier.
    pub id: u32,
    /// Label.
    pub name: String,
    /// Target window.
    pub window: WindowKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Social profile shown by the contact window.
pub struct SocialLink {
    pub id: u32,
    pub text: String,
    pub icon: String,
    pub bg: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Article card shown by the safari window.
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Skill group listed by the terminal window.
pub struct TechCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Sidebar entry of the photos window.
pub struct PhotoLink {
    pub id: u32,
    pub icon: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Picture of the photos window gallery.
pub struct GalleryPhoto {
    pub id: u32,
    pub img: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Everything the desktop shows that is data rather than state.
pub struct DesktopConfig {
    pub schema_version: u32,
    /// Document rendered by the resume window.
    pub resume_file: String,
    /// Page count of `resume_file`.
    pub resume_pages: u32,
    pub nav_links: Vec<NavLink>,
    pub dock: Vec<DockEntry>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
    #[serde(default)]
    pub tech_stack: Vec<TechCategory>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub photo_links: Vec<PhotoLink>,
    #[serde(default)]
    pub gallery: Vec<GalleryPhoto>,
    pub locations: LocationCatalog,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors decoding a desktop configuration document.
pub enum CatalogError {
    /// The document is not valid configuration JSON.
    #[error("desktop config decode failed: {0}")]
    Decode(String),
    /// The document was written for another schema.
    #[error("desktop config schema mismatch: expected {expected} found {found}")]
    SchemaMismatch {
        /// Supported version.
        expected: u32,
        /// Version found in the document.
        found: u32,
    },
}

impl DesktopConfig {
    /// Decodes a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for malformed JSON or an unsupported schema version.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|err| CatalogError::Decode(err.to_string()))?;
        if config.schema_version != DESKTOP_CONFIG_SCHEMA_VERSION {
            return Err(CatalogError::SchemaMismatch {
                expected: DESKTOP_CONFIG_SCHEMA_VERSION,
                found: config.schema_version,
            });
        }
        Ok(config)
    }
}

/// Returns the embedded desktop configuration, decoding it on first use.
///
/// # Panics
///
/// Panics if the embedded document fails to decode, which the build script rules out.
pub fn desktop_config() -> &'static DesktopConfig {
    static CONFIG: OnceLock<DesktopConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        DesktopConfig::from_json(DESKTOP_CONFIG_JSON).expect("desktop.toml validated by build.rs")
    })
}
