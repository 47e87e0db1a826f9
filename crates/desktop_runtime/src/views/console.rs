use super::*;
use crate::{
    host::window_input_dom_id,
    terminal::{TerminalSession, STREAM_INTERVAL},
};

pub(super) fn terminal_view(window_id: &WindowId) -> View {
    let session = create_rw_signal(TerminalSession::default());
    let input = create_rw_signal(String::new());

    if let Ok(interval) = set_interval_with_handle(
        move || {
            if session.with_untracked(TerminalSession::is_streaming) {
                session.update(|session| {
                    session.tick();
                });
            }
        },
        STREAM_INTERVAL,
    ) {
        on_cleanup(move || interval.clear());
    }

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() != "Enter" {
            return;
        }
        ev.prevent_default();
        let line = input.get_untracked();
        let accepted = session
            .try_update(|session| session.submit(&line))
            .unwrap_or(false);
        if accepted {
            input.set(String::new());
        }
    };

    view! {
        <div class="terminal">
            <pre class="terminal-transcript">
                {move || {
                    session.with(|session| {
                        session
                            .lines()
                            .iter()
                            .map(|line| view! { <div class="terminal-line">{line.clone()}</div> })
                            .collect_view()
                    })
                }}
            </pre>
            <div class="terminal-prompt">
                <span aria-hidden="true">"$"</span>
                <input
                    id=window_input_dom_id(window_id)
                    type="text"
                    autocomplete="off"
                    spellcheck="false"
                    aria-label="Terminal input"
                    disabled=move || session.with(TerminalSession::is_streaming)
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn run_view(runtime: DesktopRuntimeContext, window_id: &WindowId) -> View {
    let input = create_rw_signal(String::new());
    let window_id = store_value(window_id.clone());

    let submit = move || {
        runtime.dispatch_action(DesktopAction::RunCommand {
            input: input.get_untracked(),
        });
    };
    let cancel = move || {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: window_id.get_value(),
        });
    };

    view! {
        <div class="run-dialog">
            <p>"Type the name of a program, folder, document, or Internet resource."</p>
            <label class="run-field">
                <span>"Open:"</span>
                <input
                    id=window_input_dom_id(&window_id.get_value())
                    type="text"
                    autocomplete="off"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                        "Enter" => {
                            ev.prevent_default();
                            submit();
                        }
                        "Escape" => {
                            ev.prevent_default();
                            ev.stop_propagation();
                            cancel();
                        }
                        _ => {}
                    }
                />
            </label>
            <div class="dialog-buttons">
                <button on:click=move |_| submit()>"OK"</button>
                <button on:click=move |_| cancel()>"Cancel"</button>
            </div>
        </div>
    }
    .into_view()
}
