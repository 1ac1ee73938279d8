//! Desktop shell UI composition: navbar, desktop icons, window layer, and dock.

mod content;
mod finder;
mod window;

use std::sync::Arc;

use leptos::*;

use self::{
    content::{ArticleList, ContactCard, ImageFile, PhotoGallery, ResumeViewer, TechStack, TextFile},
    finder::Finder,
    window::WindowFrame,
};

use crate::{
    catalog::{desktop_config, DockEntry, LocationNode, LocationRoot},
    drag::PointerPosition,
    model::{WindowDescriptor, WindowKind, WindowPayload},
    reducer::DesktopAction,
    runtime_context::use_desktop_runtime,
};

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn dock_icon_src(entry: &DockEntry) -> String {
    format!("/images/{}", entry.icon)
}

#[component]
/// Renders the full desktop: navbar, project icons, every window frame, and the dock.
pub fn DesktopShell() -> impl IntoView {
    view! {
        <main class="desktop">
            <Navbar />
            <ProjectIcons />
            <div class="window-layer">
                <For each=|| WindowKind::ALL key=|window| *window let:window>
                    <WindowFrame window=window />
                </For>
            </div>
            <Dock />
        </main>
    }
}

#[component]
fn Navbar() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <nav class="navbar">
            <div class="navbar-brand">
                <img src="/images/logo.svg" alt="" />
                <p>"Portfolio"</p>
            </div>
            <ul class="navbar-links">
                <For each=|| desktop_config().nav_links.clone() key=|link| link.id let:link>
                    <li
                        on:click=move |_| {
                            runtime.dispatch_action(DesktopAction::OpenWindow {
                                window: link.window,
                                payload: None,
                            });
                        }
                    >
                        <p>{link.name.clone()}</p>
                    </li>
                </For>
            </ul>
        </nav>
    }
}

#[component]
fn ProjectIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let projects: Vec<Arc<LocationNode>> = desktop_config().locations.projects().to_vec();

    view! {
        <ul class="desktop-icons">
            {projects
                .into_iter()
                .map(|project| {
                    let target = project.clone();
                    let position = project.window_position.clone().unwrap_or_default();
                    view! {
                        <li
                            class=format!("desktop-icon {position}")
                            on:dblclick=move |ev: web_sys::MouseEvent| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::RevealInFinder {
                                    node: target.clone(),
                                });
                            }
                        >
                            <img src="/images/folder.png" alt="" />
                            <p>{project.name.clone()}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <section class="dock">
            <ul class="dock-container" role="toolbar" aria-label="Dock">
                <For each=|| desktop_config().dock.clone() key=|entry| entry.id.clone() let:entry>
                    {{
                        let window = entry.window().ok().flatten();
                        let is_open = Signal::derive(move || {
                            window.is_some_and(|window| runtime.state.get().window(window).is_open)
                        });
                        let icon = dock_icon_src(&entry);
                        let label = entry.name.clone();
                        let can_open = entry.can_open;
                        view! {
                            <li class="dock-item">
                                <button
                                    class="dock-icon"
                                    aria-label=label.clone()
                                    title=label
                                    disabled=!can_open
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::ActivateDockEntry {
                                            entry: entry.clone(),
                                        });
                                    }
                                >
                                    <img src=icon alt="" class=if can_open { "" } else { "opacity-60" } />
                                </button>
                                <Show when=move || is_open.get() fallback=|| ()>
                                    <span class="dock-indicator" aria-hidden="true"></span>
                                </Show>
                            </li>
                        }
                    }}
                </For>
            </ul>
        </section>
    }
}
