//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the reactive store container, the runtime effect queue, and the boot
//! sequence. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    catalog, effect_executor, host,
    model::{DesktopState, InteractionState, WindowKind},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer drag/resize interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and drained by the effect executor.
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

fn boot(runtime: DesktopRuntimeContext, deep_link: Vec<WindowKind>) {
    let requests = catalog::boot_requests(host::viewport_width());
    logging::log!(
        "desktop boot: opening {} windows, {} from deep link",
        requests.len(),
        deep_link.len()
    );
    for request in requests {
        runtime.dispatch_action(DesktopAction::OpenWindow(request));
    }
    if !deep_link.is_empty() {
        runtime.dispatch_action(DesktopAction::ApplyDeepLink { targets: deep_link });
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and runs the boot sequence.
pub fn DesktopProvider(
    /// Windows to open on top of the boot windows, usually parsed from the page URL.
    #[prop(optional)]
    deep_link: Vec<WindowKind>,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();
        let previous_desktop = desktop.clone();
        let previous_ui = ui.clone();

        let new_effects = reduce_desktop(&mut desktop, &mut ui, action);
        if desktop != previous_desktop {
            state.set(desktop);
        }
        if ui != previous_ui {
            interaction.set(ui);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = DesktopRuntimeContext {
        state,
        interaction,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);
    boot(runtime, deep_link);

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
