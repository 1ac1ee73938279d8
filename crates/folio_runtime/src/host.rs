//! Host-side runtime helpers for executing reducer effects.
//!
//! Effects that leave the desktop (external links) run through the injected
//! [`HostServices`] bundle so tests and non-browser builds can swap them out.

use std::{future::Future, rc::Rc};

use leptos::{logging, spawn_local};
use platform_host::{ExternalUrlService, HostServices};

use crate::reducer::RuntimeEffect;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    external_urls: Rc<dyn ExternalUrlService>,
    host_strategy_name: &'static str,
}

impl DesktopHostContext {
    pub fn new(services: HostServices) -> Self {
        Self {
            external_urls: services.external_urls,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.external_urls.clone()
    }

    /// Stable host strategy token for diagnostics.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Executes one reducer-emitted effect on the local task queue.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        spawn_local(self.runtime_effect_task(effect));
    }

    /// Future that performs `effect`; failures are logged, never returned.
    pub fn runtime_effect_task(&self, effect: RuntimeEffect) -> impl Future<Output = ()> + 'static {
        let service = self.external_url_service();
        let host = self.host_strategy_name;
        async move {
            match effect {
                RuntimeEffect::OpenExternalUrl(url) => {
                    if let Err(err) = service.open_url(&url).await {
                        logging::warn!("external url open failed on {host} host for {url}: {err}");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use platform_host::{HostStrategy, MemoryExternalUrlService};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn context_reports_injected_strategy() {
        let browser = DesktopHostContext::new(HostServices {
            external_urls: Rc::new(MemoryExternalUrlService::default()),
            host_strategy: HostStrategy::Browser,
        });
        let headless = DesktopHostContext::new(HostServices::headless());

        assert_eq!(browser.host_strategy_name(), "browser");
        assert_eq!(headless.host_strategy_name(), "headless");
    }

    #[test]
    fn external_url_effect_reaches_injected_service() {
        let memory = MemoryExternalUrlService::default();
        let context = DesktopHostContext::new(HostServices {
            external_urls: Rc::new(memory.clone()),
            host_strategy: HostStrategy::Headless,
        });

        block_on(context.runtime_effect_task(RuntimeEffect::OpenExternalUrl(
            "https://folio.dev/".to_string(),
        )));

        assert_eq!(memory.opened(), vec!["https://folio.dev/".to_string()]);
    }

    #[test]
    fn rejected_external_url_is_swallowed() {
        let memory = MemoryExternalUrlService::default();
        let context = DesktopHostContext::new(HostServices {
            external_urls: Rc::new(memory.clone()),
            host_strategy: HostStrategy::Headless,
        });

        block_on(context.runtime_effect_task(RuntimeEffect::OpenExternalUrl("  ".to_string())));

        assert!(memory.opened().is_empty());
    }
}
