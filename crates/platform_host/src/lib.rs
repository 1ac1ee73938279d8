//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! Concrete browser adapters live in `platform_host_web`; this crate only names the services the
//! runtime needs from its host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod host;

pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, MemoryExternalUrlService, NoopExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
