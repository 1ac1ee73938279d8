//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived [`DesktopStore`], mirrors its committed state into a reactive
//! signal, and queues reducer effects for the executor. UI composition stays in
//! [`crate::components`].
#![allow(clippy::clone_on_copy)]

use leptos::*;
use platform_host::HostServices;

use crate::{
    catalog::desktop_config,
    effect_executor,
    host::DesktopHostContext,
    model::DesktopState,
    reducer::{DesktopAction, RuntimeEffect},
    store::DesktopStore,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Single writer of desktop state.
    pub store: StoredValue<DesktopStore>,
    /// Reactive mirror of the committed store state.
    pub state: RwSignal<DesktopState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn initial_state() -> DesktopState {
    let work = &desktop_config().locations.work;
    DesktopState::with_location(work).unwrap_or_else(|err| {
        logging::warn!("desktop boot location rejected: {err}");
        DesktopState::default()
    })
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected host bundle assembled by the entry layer.
    host_services: HostServices,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let mut desktop_store = DesktopStore::new(initial_state());
    let state = create_rw_signal(desktop_store.state().clone());
    desktop_store.subscribe(move |committed| state.set(committed.clone()));
    let store = store_value(desktop_store);
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        match store.try_update_value(|store| store.dispatch(action)) {
            Some(Ok(new_effects)) => {
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Some(Err(err)) => logging::warn!("desktop reducer error: {err}"),
            None => logging::warn!("desktop store disposed; action dropped"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        store,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime.clone());
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
