//! Desktop shell UI composition and interaction surfaces.

pub(crate) mod a11y;
mod menus;
mod taskbar;
mod window;

use leptos::*;

use self::{taskbar::Taskbar, window::DesktopWindow};

use crate::{
    catalog,
    model::{DesktopState, PointerPosition, ResizeEdge},
    reducer::DesktopAction,
    wallpaper::{self, WallpaperMediaKind},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
fn DesktopWallpaperRenderer(state: RwSignal<DesktopState>) -> impl IntoView {
    let preset = Signal::derive(move || wallpaper::resolve_wallpaper(state.get().wallpaper));

    move || {
        let preset = preset.get();
        match preset.media_kind {
            WallpaperMediaKind::StaticImage => view! {
                <img
                    data-ui-slot="wallpaper-layer"
                    data-ui-kind="wallpaper-layer"
                    src=preset.url
                    alt=""
                />
            }
            .into_view(),
            WallpaperMediaKind::Video => view! {
                <video
                    data-ui-slot="wallpaper-layer"
                    data-ui-kind="wallpaper-layer"
                    src=preset.url
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                />
            }
            .into_view(),
        }
    }
}

#[component]
fn DesktopIconGrid(runtime: DesktopRuntimeContext) -> impl IntoView {
    view! {
        <div class="desktop-icons" data-ui-kind="desktop-icon-grid">
            <For each=catalog::desktop_icons key=|icon| icon.label let:icon>
                {{
                    let kind = icon.kind.clone();
                    view! {
                        <button
                            class="desktop-icon"
                            data-icon=icon.icon
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::OpenWindow(
                                    catalog::open_request(kind.clone()),
                                ));
                            }
                        >
                            <span class="desktop-icon-glyph" aria-hidden="true"></span>
                            <span>{icon.label}</span>
                        </button>
                    }
                }}
            </For>
        </div>
    }
}

#[component]
/// Renders the full desktop shell UI: wallpaper, icons, window layer, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    };
    let on_pointer_end = move |_| end_active_pointer_interaction(runtime);

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            data-ui-kind="desktop-root"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-backdrop" data-ui-kind="desktop-backdrop">
                <DesktopWallpaperRenderer state=state />
                <div
                    data-ui-slot="dismiss-layer"
                    on:mousedown=move |_| runtime.dispatch_action(DesktopAction::CloseStartMenu)
                />
                <DesktopIconGrid runtime=runtime />

                <div class="desktop-window-layer" data-ui-kind="desktop-window-layer">
                    <For
                        each=move || state.get().windows
                        key=|win| win.id.clone()
                        let:win
                    >
                        <DesktopWindow window_id=win.id />
                    </For>
                </div>

                <button
                    class="wallpaper-button"
                    title=move || {
                        format!(
                            "Wallpaper: {}",
                            wallpaper::resolve_wallpaper(state.get().wallpaper).display_name
                        )
                    }
                    on:click=move |_| runtime.dispatch_action(DesktopAction::CycleWallpaper)
                >
                    "Change Wallpaper"
                </button>
            </div>

            <Taskbar />
        </div>
    }
}

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

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

fn resize_edge_class(edge: ResizeEdge) -> &'static str {
    match edge {
        ResizeEdge::North => "edge-n",
        ResizeEdge::South => "edge-s",
        ResizeEdge::East => "edge-e",
        ResizeEdge::West => "edge-w",
        ResizeEdge::NorthEast => "edge-ne",
        ResizeEdge::NorthWest => "edge-nw",
        ResizeEdge::SouthEast => "edge-se",
        ResizeEdge::SouthWest => "edge-sw",
    }
}
