use std::rc::Rc;

use platform_host::{
    ExternalUrlFuture, ExternalUrlService, HostServices, HostStrategy, NoopExternalUrlService,
};

use crate::external_url::WebExternalUrlService;

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "headless-host")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "headless-host"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete external URL backend behind [`ExternalUrlService`].
#[derive(Debug, Clone, Copy)]
pub enum ExternalUrlServiceAdapter {
    /// Browser-backed external URL opening.
    Browser(WebExternalUrlService),
    /// No-op fallback used for headless compositions.
    Headless(NoopExternalUrlService),
}

impl ExternalUrlService for ExternalUrlServiceAdapter {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.open_url(url),
            Self::Headless(service) => service.open_url(url),
        }
    }
}

/// Builds the external URL adapter for the compile-time selected host strategy.
pub fn external_url_service() -> ExternalUrlServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ExternalUrlServiceAdapter::Browser(WebExternalUrlService),
        HostStrategy::Headless => ExternalUrlServiceAdapter::Headless(NoopExternalUrlService),
    }
}

/// Assembles the host service bundle injected into the desktop runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        external_urls: Rc::new(external_url_service()),
        host_strategy: selected_host_strategy(),
    }
}
