use std::time::Duration;

use super::*;
use crate::{
    clock::{self, ClockSnapshot},
    model::WindowRecord,
};

fn taskbar_window_button_class(win: &WindowRecord, active: bool) -> &'static str {
    match (win.is_minimized, active) {
        (true, _) => "taskbar-window-button minimized",
        (false, true) => "taskbar-window-button active",
        (false, false) => "taskbar-window-button",
    }
}

fn taskbar_window_aria_label(win: &WindowRecord, active: bool) -> String {
    let mut parts = vec![win.title.clone()];
    if active && !win.is_minimized {
        parts.push("focused".to_string());
    }
    if win.is_minimized {
        parts.push("minimized".to_string());
    }
    parts.join(", ")
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let clock_now = create_rw_signal(ClockSnapshot::now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <div class="taskbar-left">
                <button
                    id="taskbar-start-button"
                    class=move || {
                        if state.get().start_menu_open {
                            "start-button pressed"
                        } else {
                            "start-button"
                        }
                    }
                    aria-label="Open start menu"
                    aria-haspopup="menu"
                    aria-controls="desktop-start-menu"
                    aria-expanded=move || state.get().start_menu_open.to_string()
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu)
                >
                    <span class="taskbar-glyph" aria-hidden="true"></span>
                    <span>"Start"</span>
                </button>
            </div>

            <div class="taskbar-windows" role="group" aria-label="Open windows">
                <For
                    each=move || state.get().windows
                    key=|win| win.id.clone()
                    let:win
                >
                    {{
                        let window_id = store_value(win.id.clone());
                        let record = Signal::derive(move || {
                            state.get().window(&window_id.get_value()).cloned()
                        });
                        let active = Signal::derive(move || {
                            state.get().is_active(&window_id.get_value())
                        });
                        view! {
                            <button
                                class=move || {
                                    record
                                        .get()
                                        .map(|w| taskbar_window_button_class(&w, active.get()))
                                        .unwrap_or("taskbar-window-button")
                                }
                                aria-label=move || {
                                    record
                                        .get()
                                        .map(|w| taskbar_window_aria_label(&w, active.get()))
                                        .unwrap_or_default()
                                }
                                on:click=move |_| {
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
                                        window_id: window_id.get_value(),
                                    });
                                }
                            >
                                {move || record.get().map(|w| w.title).unwrap_or_default()}
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-tray">
                <span
                    class="taskbar-clock"
                    title=move || clock::format_date(clock_now.get())
                >
                    {move || clock::format_time(clock_now.get())}
                </span>
            </div>

            <super::menus::StartMenu state runtime />
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{OpenWindowRequest, WindowKind};

    fn skills_window(minimized: bool) -> WindowRecord {
        let mut state = DesktopState::default();
        state.open_window(OpenWindowRequest::new(WindowKind::Skills, "Skills"));
        let mut win = state.windows.remove(0);
        win.is_minimized = minimized;
        win
    }

    #[test]
    fn button_reflects_window_state() {
        assert_eq!(
            taskbar_window_button_class(&skills_window(false), true),
            "taskbar-window-button active"
        );
        assert_eq!(
            taskbar_window_button_class(&skills_window(true), true),
            "taskbar-window-button minimized"
        );
    }

    #[test]
    fn aria_label_lists_state_flags() {
        assert_eq!(
            taskbar_window_aria_label(&skills_window(false), true),
            "Skills, focused"
        );
        assert_eq!(
            taskbar_window_aria_label(&skills_window(true), false),
            "Skills, minimized"
        );
    }
}
