use super::{
    a11y::{focus_element_by_id, focus_first_menu_item, handle_menu_roving_keydown},
    *,
};
use crate::catalog::{StartMenuEntry, StartMenuItem};

const START_MENU_ID: &str = "desktop-start-menu";

fn launch(runtime: DesktopRuntimeContext, item: StartMenuItem) {
    if item == StartMenuItem::ShutDown {
        logging::log!("shut down requested; nothing to do in a browser session");
    }
    runtime.dispatch_action(DesktopAction::LaunchStartMenuItem(item));
}

#[component]
pub(super) fn StartMenu(
    state: RwSignal<DesktopState>,
    runtime: DesktopRuntimeContext,
) -> impl IntoView {
    let was_open = create_rw_signal(false);

    create_effect(move |_| {
        let is_open = state.get().start_menu_open;
        if is_open && !was_open.get_untracked() {
            was_open.set(true);
            let _ = focus_first_menu_item(START_MENU_ID);
        } else if !is_open && was_open.get_untracked() {
            was_open.set(false);
        }
    });

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if runtime.state.get_untracked().start_menu_open {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
            let _ = focus_element_by_id("taskbar-start-button");
        }
    });
    on_cleanup(move || escape_listener.remove());

    let outside_click_listener = window_event_listener(ev::mousedown, move |_| {
        if runtime.state.get_untracked().start_menu_open {
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || outside_click_listener.remove());

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <div
                id=START_MENU_ID
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    handle_menu_roving_keydown(&ev, START_MENU_ID);
                }
                on:mousedown=move |ev| ev.stop_propagation()
            >
                {catalog::start_menu_entries()
                    .iter()
                    .map(|entry| match *entry {
                        StartMenuEntry::Separator => {
                            view! { <div class="start-menu-separator" role="separator"></div> }
                                .into_view()
                        }
                        StartMenuEntry::Item(item) => {
                            view! {
                                <button
                                    id=item.dom_id()
                                    class="start-menu-item"
                                    role="menuitem"
                                    on:click=move |_| launch(runtime, item)
                                >
                                    <span>{item.label()}</span>
                                </button>
                            }
                                .into_view()
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
