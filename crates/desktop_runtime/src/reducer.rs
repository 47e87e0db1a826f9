//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::{
    catalog::{self, StartMenuItem},
    model::{
        DesktopState, DragSession, InteractionState, OpenWindowRequest, PointerPosition,
        ResizeEdge, ResizeSession, WindowId, WindowKind, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    },
    run_dialog, wallpaper,
    window_manager::{clamp_resized_rect, resize_rect},
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window, or surface the existing window with the same id.
    OpenWindow(OpenWindowRequest),
    CloseWindow {
        window_id: WindowId,
    },
    MinimizeWindow {
        window_id: WindowId,
    },
    /// Un-minimize and activate a window without raising it.
    RestoreWindow {
        window_id: WindowId,
    },
    /// Activate and raise a window.
    FocusWindow {
        window_id: WindowId,
    },
    UpdateWindowPosition {
        window_id: WindowId,
        x: f64,
        y: f64,
    },
    UpdateWindowSize {
        window_id: WindowId,
        width: f64,
        height: f64,
    },
    /// Taskbar button behavior: minimize the active window, otherwise restore and raise it.
    ToggleTaskbarWindow {
        window_id: WindowId,
    },
    ToggleStartMenu,
    CloseStartMenu,
    /// Activate a start menu entry and close the menu.
    LaunchStartMenuItem(StartMenuItem),
    /// Submit the Run dialog; the dialog closes whether or not the input resolves.
    RunCommand {
        input: String,
    },
    CycleWallpaper,
    /// Open a link that leaves the desktop.
    OpenExternal {
        url: String,
    },
    /// Open windows parsed from a deep link, in order.
    ApplyDeepLink {
        targets: Vec<WindowKind>,
    },
    BeginMove {
        window_id: WindowId,
        pointer: PointerPosition,
    },
    UpdateMove {
        pointer: PointerPosition,
    },
    EndMove,
    BeginResize {
        window_id: WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
    },
    UpdateResize {
        pointer: PointerPosition,
    },
    EndResize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Move DOM focus into the window's primary input.
    FocusWindowInput(WindowId),
    OpenExternalUrl(String),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// The transition is total: actions naming windows that are not open leave the stack unchanged.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow(req) => open(state, req, &mut effects),
        DesktopAction::CloseWindow { window_id } => {
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|s| s.window_id == window_id)
            {
                interaction.dragging = None;
            }
            if interaction
                .resizing
                .as_ref()
                .is_some_and(|s| s.window_id == window_id)
            {
                interaction.resizing = None;
            }
            state.close_window(&window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => state.minimize_window(&window_id),
        DesktopAction::RestoreWindow { window_id } => {
            state.restore_window(&window_id);
            push_focus_input(state, &window_id, &mut effects);
        }
        DesktopAction::FocusWindow { window_id } => {
            state.focus_window(&window_id);
            state.start_menu_open = false;
        }
        DesktopAction::UpdateWindowPosition { window_id, x, y } => {
            state.update_window_position(&window_id, x, y);
        }
        DesktopAction::UpdateWindowSize {
            window_id,
            width,
            height,
        } => state.update_window_size(&window_id, width, height),
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let Some(window) = state.window(&window_id) else {
                return effects;
            };
            if state.is_active(&window_id) && !window.is_minimized {
                state.minimize_window(&window_id);
            } else {
                state.restore_window(&window_id);
                state.focus_window(&window_id);
                push_focus_input(state, &window_id, &mut effects);
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::LaunchStartMenuItem(item) => {
            state.start_menu_open = false;
            if let Some(req) = item.open_request() {
                open(state, req, &mut effects);
            }
        }
        DesktopAction::RunCommand { input } => {
            if let Some(req) = run_dialog::resolve_run_command(&input) {
                open(state, req, &mut effects);
            }
            state.close_window(&WindowKind::Run.window_id());
        }
        DesktopAction::CycleWallpaper => {
            state.wallpaper = wallpaper::next_wallpaper(state.wallpaper);
        }
        DesktopAction::OpenExternal { url } => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
        DesktopAction::ApplyDeepLink { targets } => {
            for kind in targets {
                open(state, catalog::open_request(kind), &mut effects);
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let Some(window) = state.window(&window_id) else {
                return effects;
            };
            let rect_start = window.rect_or(catalog::default_size(&window.kind));
            state.focus_window(&window_id);
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let (dx, dy) = pointer_delta(session.pointer_start, pointer);
                let moved = session.rect_start.offset(dx, dy);
                state.update_window_position(&session.window_id, moved.x, moved.y);
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let Some(window) = state.window(&window_id) else {
                return effects;
            };
            let rect_start = window.rect_or(catalog::default_size(&window.kind));
            state.focus_window(&window_id);
            interaction.resizing = Some(ResizeSession {
                window_id,
                edge,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let (dx, dy) = pointer_delta(session.pointer_start, pointer);
                let resized = clamp_resized_rect(
                    session.rect_start,
                    resize_rect(session.rect_start, session.edge, dx, dy),
                    session.edge,
                    MIN_WINDOW_WIDTH,
                    MIN_WINDOW_HEIGHT,
                );
                state.update_window_size(&session.window_id, resized.w, resized.h);
                state.update_window_position(&session.window_id, resized.x, resized.y);
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
    }

    effects
}

fn open(state: &mut DesktopState, req: OpenWindowRequest, effects: &mut Vec<RuntimeEffect>) {
    let window_id = req.id.clone();
    state.open_window(req);
    state.start_menu_open = false;
    push_focus_input(state, &window_id, effects);
}

fn push_focus_input(state: &DesktopState, window_id: &WindowId, effects: &mut Vec<RuntimeEffect>) {
    let has_input = state
        .window(window_id)
        .is_some_and(|w| !w.is_minimized && catalog::descriptor(&w.kind).primary_input);
    if has_input {
        effects.push(RuntimeEffect::FocusWindowInput(window_id.clone()));
    }
}

fn pointer_delta(start: PointerPosition, current: PointerPosition) -> (f64, f64) {
    (
        f64::from(current.x - start.x),
        f64::from(current.y - start.y),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WallpaperId;

    fn dispatch(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action)
    }

    fn open_kind(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        kind: WindowKind,
    ) -> WindowId {
        let req = catalog::open_request(kind);
        let id = req.id.clone();
        dispatch(state, interaction, DesktopAction::OpenWindow(req));
        id
    }

    #[test]
    fn open_window_closes_start_menu_and_focuses_new_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);

        let about = open_kind(&mut state, &mut interaction, WindowKind::About);

        assert!(!state.start_menu_open);
        assert_eq!(state.active_window_id, Some(about));
    }

    #[test]
    fn opening_window_with_primary_input_requests_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(catalog::open_request(WindowKind::Run)),
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusWindowInput(WindowId::new("run"))]
        );

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(catalog::open_request(WindowKind::About)),
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn taskbar_toggle_minimizes_active_and_restores_otherwise() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let about = open_kind(&mut state, &mut interaction, WindowKind::About);
        let projects = open_kind(&mut state, &mut interaction, WindowKind::Projects);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                window_id: projects.clone(),
            },
        );
        assert!(state.window(&projects).expect("projects").is_minimized);
        assert_eq!(state.active_window_id, None);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                window_id: about.clone(),
            },
        );
        assert_eq!(state.active_window_id, Some(about.clone()));
        assert_eq!(state.windows.last().map(|w| &w.id), Some(&about));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                window_id: projects.clone(),
            },
        );
        let record = state.window(&projects).expect("projects");
        assert!(!record.is_minimized);
        assert_eq!(state.windows.last().map(|w| &w.id), Some(&projects));
    }

    #[test]
    fn restore_unminimizes_in_place_and_focuses_input() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let run = open_kind(&mut state, &mut interaction, WindowKind::Run);
        let about = open_kind(&mut state, &mut interaction, WindowKind::About);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow {
                window_id: run.clone(),
            },
        );

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow {
                window_id: run.clone(),
            },
        );

        assert!(!state.window(&run).expect("run").is_minimized);
        assert_eq!(state.active_window_id, Some(run.clone()));
        assert_eq!(state.z_index(&run), Some(1));
        assert_eq!(state.z_index(&about), Some(2));
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(run)]);
    }

    #[test]
    fn restore_of_absent_window_still_sets_active_id() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let ghost = WindowId::new("contact");

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RestoreWindow {
                window_id: ghost.clone(),
            },
        );

        assert!(state.windows.is_empty());
        assert_eq!(state.active_window_id, Some(ghost));
        assert!(effects.is_empty());
    }

    #[test]
    fn direct_geometry_updates_are_stored_unclamped() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let skills = open_kind(&mut state, &mut interaction, WindowKind::Skills);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowPosition {
                window_id: skills.clone(),
                x: -40.5,
                y: 12.25,
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateWindowSize {
                window_id: skills.clone(),
                width: 120.0,
                height: 80.0,
            },
        );

        let record = state.window(&skills).expect("skills");
        assert_eq!((record.x, record.y), (-40.5, 12.25));
        assert_eq!((record.width, record.height), (Some(120.0), Some(80.0)));
    }

    #[test]
    fn taskbar_toggle_on_absent_window_is_noop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open_kind(&mut state, &mut interaction, WindowKind::About);
        let before = state.clone();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow {
                window_id: WindowId::new("ghost"),
            },
        );
        assert_eq!(state, before);
    }

    #[test]
    fn run_command_opens_terminal_and_closes_dialog() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open_kind(&mut state, &mut interaction, WindowKind::Run);

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RunCommand {
                input: "me".to_string(),
            },
        );

        let ids: Vec<_> = state.windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["terminal"]);
        assert_eq!(state.active_window_id, Some(WindowId::new("terminal")));
        assert_eq!(
            effects,
            vec![RuntimeEffect::FocusWindowInput(WindowId::new("terminal"))]
        );
    }

    #[test]
    fn unresolved_run_command_only_closes_dialog() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        open_kind(&mut state, &mut interaction, WindowKind::Run);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::RunCommand {
                input: "format c:".to_string(),
            },
        );
        assert!(state.windows.is_empty());
        assert_eq!(state.active_window_id, None);
    }

    #[test]
    fn start_menu_item_opens_window_and_closes_menu() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::LaunchStartMenuItem(StartMenuItem::Skills),
        );
        assert!(!state.start_menu_open);
        assert_eq!(state.active_window_id, Some(WindowId::new("skills")));

        dispatch(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::LaunchStartMenuItem(StartMenuItem::ShutDown),
        );
        assert!(!state.start_menu_open);
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn deep_link_opens_targets_in_order() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::ApplyDeepLink {
                targets: vec![WindowKind::Contact, WindowKind::project("project-two")],
            },
        );

        let ids: Vec<_> = state.windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["contact", "project:project-two"]);
        assert_eq!(state.windows[1].title, "Project: Project Two");
    }

    #[test]
    fn drag_moves_window_by_pointer_delta() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let about = open_kind(&mut state, &mut interaction, WindowKind::About);
        let _projects = open_kind(&mut state, &mut interaction, WindowKind::Projects);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: about.clone(),
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(state.windows.last().map(|w| &w.id), Some(&about));

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 35, y: 50 },
            },
        );
        let record = state.window(&about).expect("about");
        assert_eq!((record.x, record.y), (125.0, 90.0));

        dispatch(&mut state, &mut interaction, DesktopAction::EndMove);
        assert!(interaction.dragging.is_none());
    }

    #[test]
    fn resize_clamps_to_minimum_chrome_size() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let contact = open_kind(&mut state, &mut interaction, WindowKind::Contact);

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: contact.clone(),
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: -500, y: -500 },
            },
        );

        let record = state.window(&contact).expect("contact");
        assert_eq!((record.width, record.height), (Some(300.0), Some(200.0)));
        assert_eq!((record.x, record.y), (100.0, 50.0));
        dispatch(&mut state, &mut interaction, DesktopAction::EndResize);
        assert!(interaction.resizing.is_none());
    }

    #[test]
    fn resize_of_unsized_window_starts_from_catalog_default() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow(OpenWindowRequest::new(WindowKind::About, "About Me")),
        );
        let about = WindowId::new("about");

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: about.clone(),
                edge: ResizeEdge::East,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: 20, y: 0 },
            },
        );

        let record = state.window(&about).expect("about");
        assert_eq!((record.width, record.height), (Some(920.0), Some(600.0)));
    }

    #[test]
    fn closing_dragged_window_ends_drag_session() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let about = open_kind(&mut state, &mut interaction, WindowKind::About);
        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: about.clone(),
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );

        dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: about },
        );
        assert!(interaction.dragging.is_none());
        assert!(state.windows.is_empty());
    }

    #[test]
    fn wallpaper_cycles_and_external_links_become_effects() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        dispatch(&mut state, &mut interaction, DesktopAction::CycleWallpaper);
        assert_eq!(state.wallpaper, WallpaperId(1));

        let effects = dispatch(
            &mut state,
            &mut interaction,
            DesktopAction::OpenExternal {
                url: "https://github.com/Sakilalakmal".to_string(),
            },
        );
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(
                "https://github.com/Sakilalakmal".to_string()
            )]
        );
    }
}
