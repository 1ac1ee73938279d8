//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Non-wasm builds compile the same adapters but report the browser-only services as
//! unsupported, which keeps native test runs of the runtime linkable.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod external_url;

pub use adapters::{
    build_host_services, external_url_service, host_strategy_name, selected_host_strategy,
    ExternalUrlServiceAdapter,
};
pub use external_url::{WebExternalUrlService, EXTERNAL_URL_TARGET};
