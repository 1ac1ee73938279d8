pub mod catalog;
pub mod components;
pub mod dispatch;
pub mod drag;
mod effect_executor;
pub mod host;
pub mod model;
pub mod navigation;
pub mod reducer;
pub mod runtime_context;
pub mod store;
pub mod window_manager;
pub mod z_order;

pub use catalog::{desktop_config, DesktopConfig, FileType, LocationNode, LocationRoot, NodeKind};
pub use components::DesktopShell;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
pub use runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};
pub use store::{DesktopStore, SubscriptionId};
