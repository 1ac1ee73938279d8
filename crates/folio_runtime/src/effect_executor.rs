//! Drains the runtime effect queue filled by [`DesktopRuntimeContext::dispatch_action`].

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the reactive drain. Each batch is taken out of the queue before it runs, so effects
/// queued while a batch executes are picked up on the next pass.
pub fn install(runtime: DesktopRuntimeContext) {
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }
        let batch = runtime
            .effects
            .try_update(std::mem::take)
            .unwrap_or_default();
        runtime.host.with_value(|host| {
            for effect in batch {
                host.run_runtime_effect(effect);
            }
        });
    });
}
