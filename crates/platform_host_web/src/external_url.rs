//! External URL host-service adapter for browser contexts.

use platform_host::{ExternalUrlFuture, ExternalUrlService};

/// Browsing-context target used for every external link.
pub const EXTERNAL_URL_TARGET: &str = "_blank";

#[derive(Debug, Clone, Copy, Default)]
/// Browser external URL adapter that opens links in a new tab.
pub struct WebExternalUrlService;

impl ExternalUrlService for WebExternalUrlService {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        Box::pin(async move { open_in_new_tab(url) })
    }
}

#[cfg(target_arch = "wasm32")]
fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "browser window unavailable".to_string())?;
    let opened = window
        .open_with_url_and_target(url.trim(), EXTERNAL_URL_TARGET)
        .map_err(|err| format!("window.open failed: {err:?}"))?;
    if opened.is_none() {
        return Err(format!("popup blocked while opening {url}"));
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn open_in_new_tab(_url: &str) -> Result<(), String> {
    Err("External URL opening is only available when compiled for wasm32".to_string())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn non_wasm_targets_report_unsupported() {
        let err = block_on(WebExternalUrlService.open_url("https://example.com/"))
            .expect_err("native builds cannot open tabs");
        assert!(err.contains("wasm32"));
    }
}
