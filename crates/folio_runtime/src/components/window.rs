use super::*;
use crate::drag::{DragOffset, DragSession};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn WindowFrame(window: WindowKind) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let descriptor = Signal::derive(move || runtime.state.get().window(window).clone());
    let is_topmost = Signal::derive(move || runtime.state.get().topmost_open_window() == Some(window));

    view! {
        <Show when=move || descriptor.get().is_open fallback=|| ()>
            {move || {
                // Mounted per open; the drag offset is dropped on close.
                let offset = create_rw_signal(DragOffset::default());
                let session = create_rw_signal(None::<DragSession>);

                let focus = move |_| {
                    if !is_topmost.get_untracked() {
                        runtime.dispatch_action(DesktopAction::FocusWindow { window });
                    }
                };
                let close = move |ev: web_sys::MouseEvent| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::CloseWindow { window });
                };
                let begin_drag = move |ev: web_sys::PointerEvent| {
                    if !is_primary_press(&ev) {
                        return;
                    }
                    try_set_pointer_capture(&ev);
                    ev.prevent_default();
                    session.set(Some(DragSession::begin(
                        ev.pointer_id(),
                        pointer_from_pointer_event(&ev),
                        offset.get_untracked(),
                    )));
                };
                let drag = move |ev: web_sys::PointerEvent| {
                    let Some(active) = session.get_untracked() else {
                        return;
                    };
                    if let Some(next) = active.offset_at(ev.pointer_id(), pointer_from_pointer_event(&ev)) {
                        offset.set(next);
                    }
                };
                let end_drag = move |ev: web_sys::PointerEvent| {
                    if session
                        .get_untracked()
                        .is_some_and(|active| active.pointer_id == ev.pointer_id())
                    {
                        session.set(None);
                    }
                };

                view! {
                    <section
                        id=format!("window-{}", window.as_str())
                        class=move || {
                            let focused = if is_topmost.get() { " focused" } else { "" };
                            let dragging = if session.get().is_some() { " dragging" } else { "" };
                            format!("window{focused}{dragging}")
                        }
                        style=move || format!(
                            "z-index:{};transform:{};",
                            descriptor.get().z_index,
                            offset.get().css_transform()
                        )
                        on:pointerdown=focus
                        role="dialog"
                        aria-label=move || descriptor.get().title()
                    >
                        <header
                            class="window-header"
                            on:pointerdown=begin_drag
                            on:pointermove=drag
                            on:pointerup=end_drag
                            on:pointercancel=end_drag
                        >
                            <div class="window-controls">
                                <button
                                    class="control close"
                                    aria-label="Close window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
                                    on:click=close
                                ></button>
                                <span class="control minimize" aria-hidden="true"></span>
                                <span class="control maximize" aria-hidden="true"></span>
                            </div>
                            <h2>{move || descriptor.get().title()}</h2>
                        </header>
                        <div class="window-body">
                            {window_body(window, descriptor)}
                        </div>
                    </section>
                }
            }}
        </Show>
    }
}

fn window_body(window: WindowKind, descriptor: Signal<WindowDescriptor>) -> View {
    let payload = Signal::derive(move || descriptor.get().data);
    match window {
        WindowKind::Finder => view! { <Finder /> }.into_view(),
        WindowKind::Contact => view! { <ContactCard /> }.into_view(),
        WindowKind::Resume => view! { <ResumeViewer /> }.into_view(),
        WindowKind::Safari => view! { <ArticleList /> }.into_view(),
        WindowKind::Photos => view! { <PhotoGallery /> }.into_view(),
        WindowKind::Terminal => view! { <TechStack /> }.into_view(),
        WindowKind::TxtFile => view! { <TextFile payload=payload /> }.into_view(),
        WindowKind::ImgFile => view! { <ImageFile payload=payload /> }.into_view(),
    }
}
