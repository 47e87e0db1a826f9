use super::*;
use crate::{
    model::{WindowId, WindowRecord},
    views::WindowBody,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

const RESIZE_EDGES: [ResizeEdge; 8] = [
    ResizeEdge::North,
    ResizeEdge::South,
    ResizeEdge::East,
    ResizeEdge::West,
    ResizeEdge::NorthEast,
    ResizeEdge::NorthWest,
    ResizeEdge::SouthEast,
    ResizeEdge::SouthWest,
];

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

/// Primary-button (or primary touch) presses only.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Whether a press on the window should focus it: minimized, inactive, or not topmost.
fn press_needs_focus(state: &DesktopState, id: &WindowId) -> bool {
    let Some(win) = state.window(id) else {
        return false;
    };
    win.is_minimized || !state.is_active(id) || state.z_index(id) != Some(state.windows.len())
}

fn window_style(win: &WindowRecord, z_index: usize) -> String {
    let rect = win.rect_or(catalog::default_size(&win.kind));
    let display = if win.is_minimized { "display:none;" } else { "" };
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};{}",
        rect.x, rect.y, rect.w, rect.h, z_index, display
    )
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = store_value(window_id);

    let window = Signal::derive(move || {
        let id = window_id.get_value();
        runtime.state.get().window(&id).cloned()
    });
    let is_active = Signal::derive(move || runtime.state.get().is_active(&window_id.get_value()));
    let z_index = Signal::derive(move || {
        runtime
            .state
            .get()
            .z_index(&window_id.get_value())
            .unwrap_or_default()
    });

    let focus = move |_| {
        let should_focus = runtime
            .state
            .with_untracked(|state| press_needs_focus(state, &window_id.get_value()));
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: window_id.get_value(),
            });
        }
    };
    let minimize = move || {
        runtime.dispatch_action(DesktopAction::MinimizeWindow {
            window_id: window_id.get_value(),
        })
    };
    let close = move || {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: window_id.get_value(),
        })
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: window_id.get_value(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    let Some(initial) = window.get_untracked() else {
        return ().into_view();
    };
    let kind = initial.kind;
    let descriptor = catalog::descriptor(&kind);
    let closable = descriptor.closable;
    let chrome_class = if descriptor.show_title_bar { "" } else { " chromeless" };
    let title = move || window.get().map(|w| w.title).unwrap_or_default();

    let titlebar = if descriptor.show_title_bar {
        view! {
            <header class="titlebar" on:pointerdown=begin_move>
                <div class="titlebar-title">
                    <span
                        class="titlebar-app-icon"
                        data-icon=descriptor.icon.clone()
                        aria-hidden="true"
                    ></span>
                    <span>{title}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                        on:mousedown=move |ev| stop_mouse_event(&ev)
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            minimize();
                        }
                    >
                        "_"
                    </button>
                    <Show when=move || closable fallback=|| ()>
                        <button
                            class="titlebar-close"
                            aria-label="Close window"
                            on:pointerdown=move |ev: web_sys::PointerEvent| {
                                ev.prevent_default();
                                ev.stop_propagation();
                            }
                            on:mousedown=move |ev| stop_mouse_event(&ev)
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                close();
                            }
                        >
                            "✕"
                        </button>
                    </Show>
                </div>
            </header>
        }
        .into_view()
    } else {
        view! {
            <div class="titlebar titlebar-slim" aria-hidden="true" on:pointerdown=begin_move />
        }
        .into_view()
    };

    view! {
        <section
            class=move || {
                let minimized = window.get().is_some_and(|w| w.is_minimized);
                format!(
                    "desktop-window{}{}{}",
                    if is_active.get() { " focused" } else { "" },
                    if minimized { " minimized" } else { "" },
                    chrome_class
                )
            }
            style=move || {
                window
                    .get()
                    .map(|w| window_style(&w, z_index.get()))
                    .unwrap_or_default()
            }
            data-window-id=initial.id.dom_key()
            on:pointerdown=focus
            role="dialog"
            aria-label=title
        >
            {titlebar}
            <div class="window-body">
                <WindowBody window_id=initial.id.clone() kind=kind />
            </div>
            {RESIZE_EDGES
                .into_iter()
                .map(|edge| view! { <WindowResizeHandle window_id=initial.id.clone() edge=edge /> })
                .collect_view()}
        </section>
    }
    .into_view()
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = store_value(window_id);
    let class_name = format!("window-resize-handle {}", resize_edge_class(edge));

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id: window_id.get_value(),
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    view! {
        <div
            class=class_name
            aria-hidden="true"
            on:pointerdown=on_pointerdown
        />
    }
}
