//! Window-manager operations over [`DesktopState`].
//!
//! Every operation is total: targeting an id that is not present is a no-op rather than an error,
//! so UI handlers can fire them without checking the stack first.

use crate::model::{
    DesktopState, OpenWindowRequest, ResizeEdge, WindowId, WindowRecord, WindowRect,
    CASCADE_ORIGIN_X, CASCADE_ORIGIN_Y, CASCADE_STEP,
};

impl DesktopState {
    /// Opens a window, or un-minimizes and focuses the existing window with the same id.
    ///
    /// An existing record keeps its stored title, geometry and stack position.
    pub fn open_window(&mut self, request: OpenWindowRequest) {
        if let Some(existing) = self.window_mut(&request.id) {
            existing.is_minimized = false;
            self.active_window_id = Some(request.id);
            return;
        }

        let (cascade_x, cascade_y) = cascade_position(self.windows.len());
        self.windows.push(WindowRecord {
            id: request.id.clone(),
            kind: request.kind,
            title: request.title,
            is_minimized: false,
            x: request.x.unwrap_or(cascade_x),
            y: request.y.unwrap_or(cascade_y),
            width: request.width,
            height: request.height,
        });
        self.active_window_id = Some(request.id);
    }

    pub fn close_window(&mut self, id: &WindowId) {
        self.windows.retain(|w| &w.id != id);
        self.clear_active_if(id);
    }

    pub fn minimize_window(&mut self, id: &WindowId) {
        if let Some(window) = self.window_mut(id) {
            window.is_minimized = true;
        }
        self.clear_active_if(id);
    }

    /// Un-minimizes `id` and marks it active. The active id is set even when `id` is absent.
    pub fn restore_window(&mut self, id: &WindowId) {
        if let Some(window) = self.window_mut(id) {
            window.is_minimized = false;
        }
        self.active_window_id = Some(id.clone());
    }

    /// Marks `id` active and raises it to the top of the stack without touching its minimized
    /// flag. The active id is set even when `id` is absent.
    pub fn focus_window(&mut self, id: &WindowId) {
        self.active_window_id = Some(id.clone());
        if let Some(index) = self.windows.iter().position(|w| &w.id == id) {
            let window = self.windows.remove(index);
            self.windows.push(window);
        }
    }

    pub fn update_window_position(&mut self, id: &WindowId, x: f64, y: f64) {
        if let Some(window) = self.window_mut(id) {
            window.x = x;
            window.y = y;
        }
    }

    pub fn update_window_size(&mut self, id: &WindowId, width: f64, height: f64) {
        if let Some(window) = self.window_mut(id) {
            window.width = Some(width);
            window.height = Some(height);
        }
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn is_active(&self, id: &WindowId) -> bool {
        self.active_window_id.as_ref() == Some(id)
    }

    /// Stack position of `id` as a 1-based z-index.
    pub fn z_index(&self, id: &WindowId) -> Option<usize> {
        self.windows.iter().position(|w| &w.id == id).map(|i| i + 1)
    }

    fn window_mut(&mut self, id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| &w.id == id)
    }

    fn clear_active_if(&mut self, id: &WindowId) {
        if self.active_window_id.as_ref() == Some(id) {
            self.active_window_id = None;
        }
    }
}

/// Default top-left corner for the next window when `open_count` windows are already open.
///
/// The cascade is unbounded; it does not wrap.
pub fn cascade_position(open_count: usize) -> (f64, f64) {
    let offset = CASCADE_STEP * open_count as f64;
    (CASCADE_ORIGIN_X + offset, CASCADE_ORIGIN_Y + offset)
}

/// Applies resize deltas for a given edge/corner drag.
pub fn resize_rect(start: WindowRect, edge: ResizeEdge, dx: f64, dy: f64) -> WindowRect {
    match edge {
        ResizeEdge::East => WindowRect {
            w: start.w + dx,
            ..start
        },
        ResizeEdge::West => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            ..start
        },
        ResizeEdge::South => WindowRect {
            h: start.h + dy,
            ..start
        },
        ResizeEdge::North => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            ..start
        },
        ResizeEdge::NorthEast => WindowRect {
            y: start.y + dy,
            h: start.h - dy,
            w: start.w + dx,
            ..start
        },
        ResizeEdge::NorthWest => WindowRect {
            x: start.x + dx,
            y: start.y + dy,
            w: start.w - dx,
            h: start.h - dy,
        },
        ResizeEdge::SouthEast => WindowRect {
            w: start.w + dx,
            h: start.h + dy,
            ..start
        },
        ResizeEdge::SouthWest => WindowRect {
            x: start.x + dx,
            w: start.w - dx,
            h: start.h + dy,
            ..start
        },
    }
}

/// Clamps a resized rect to the minimum size, pinning the edge opposite the one being dragged.
pub fn clamp_resized_rect(
    start: WindowRect,
    resized: WindowRect,
    edge: ResizeEdge,
    min_w: f64,
    min_h: f64,
) -> WindowRect {
    let clamped = resized.clamped_min(min_w, min_h);
    let moves_left = matches!(
        edge,
        ResizeEdge::West | ResizeEdge::NorthWest | ResizeEdge::SouthWest
    );
    let moves_top = matches!(
        edge,
        ResizeEdge::North | ResizeEdge::NorthEast | ResizeEdge::NorthWest
    );
    WindowRect {
        x: if moves_left {
            start.x + start.w - clamped.w
        } else {
            clamped.x
        },
        y: if moves_top {
            start.y + start.h - clamped.h
        } else {
            clamped.y
        },
        ..clamped
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowKind;

    fn request(id: &str) -> OpenWindowRequest {
        let kind = id.parse::<WindowKind>().expect("known window id");
        OpenWindowRequest::new(kind, id.to_uppercase())
    }

    fn ids(state: &DesktopState) -> Vec<&str> {
        state.windows.iter().map(|w| w.id.as_str()).collect()
    }

    fn boot_four() -> DesktopState {
        let mut state = DesktopState::default();
        for id in ["weather", "calm-mind-player", "projects", "about"] {
            state.open_window(request(id));
        }
        state
    }

    #[test]
    fn distinct_opens_create_one_record_each() {
        let mut state = DesktopState::default();
        for id in ["about", "projects", "contact", "skills", "project:a", "project:b"] {
            state.open_window(request(id));
        }
        assert_eq!(state.windows.len(), 6);
    }

    #[test]
    fn first_windows_cascade_from_origin() {
        let mut state = DesktopState::default();
        state.open_window(request("about"));
        state.open_window(request("projects"));

        let about = state.window(&"about".into()).expect("about");
        let projects = state.window(&"projects".into()).expect("projects");
        assert_eq!((about.x, about.y), (100.0, 50.0));
        assert_eq!((projects.x, projects.y), (120.0, 70.0));
    }

    #[test]
    fn cascade_does_not_wrap() {
        assert_eq!(cascade_position(12), (340.0, 290.0));
    }

    #[test]
    fn explicit_axis_overrides_cascade_independently() {
        let mut state = DesktopState::default();
        state.open_window(request("about"));
        let mut req = request("projects");
        req.x = Some(7.5);
        state.open_window(req);

        let projects = state.window(&"projects".into()).expect("projects");
        assert_eq!((projects.x, projects.y), (7.5, 70.0));
    }

    #[test]
    fn reopening_existing_id_unminimizes_and_keeps_stored_record() {
        let mut state = DesktopState::default();
        state.open_window(request("about").at(10.0, 20.0).with_size(300.0, 250.0));
        state.open_window(request("projects"));
        state.minimize_window(&"about".into());
        let before = state.window(&"about".into()).cloned().expect("about");

        state.open_window(request("about").at(999.0, 999.0).with_size(1.0, 1.0));

        let after = state.window(&"about".into()).expect("about");
        assert_eq!(state.windows.len(), 2);
        assert!(!after.is_minimized);
        assert_eq!((after.x, after.y), (before.x, before.y));
        assert_eq!((after.width, after.height), (Some(300.0), Some(250.0)));
        assert_eq!(state.active_window_id, Some(WindowId::new("about")));
        assert_eq!(ids(&state), vec!["about", "projects"]);
    }

    #[test]
    fn reopening_parameterized_window_keeps_first_title() {
        let mut state = DesktopState::default();
        state.open_window(OpenWindowRequest::new(
            WindowKind::project("kada-mandiya"),
            "Kada Mandiya",
        ));
        state.open_window(OpenWindowRequest::new(
            WindowKind::project("kada-mandiya"),
            "Project: Kada Mandiya",
        ));

        assert_eq!(state.windows.len(), 1);
        assert_eq!(state.windows[0].title, "Kada Mandiya");
    }

    #[test]
    fn last_opened_window_is_topmost_and_active() {
        let state = boot_four();
        assert_eq!(
            ids(&state),
            vec!["weather", "calm-mind-player", "projects", "about"]
        );
        assert_eq!(state.active_window_id, Some(WindowId::new("about")));
    }

    #[test]
    fn focus_raises_window_and_preserves_relative_order() {
        let mut state = boot_four();
        state.focus_window(&"weather".into());

        assert_eq!(
            ids(&state),
            vec!["calm-mind-player", "projects", "about", "weather"]
        );
        assert_eq!(state.active_window_id, Some(WindowId::new("weather")));
        assert_eq!(state.z_index(&"weather".into()), Some(4));
    }

    #[test]
    fn focus_does_not_unminimize() {
        let mut state = boot_four();
        state.minimize_window(&"projects".into());
        state.focus_window(&"projects".into());

        let projects = state.window(&"projects".into()).expect("projects");
        assert!(projects.is_minimized);
        assert!(state.is_active(&"projects".into()));
    }

    #[test]
    fn focus_on_absent_id_sets_active_without_reordering() {
        let mut state = boot_four();
        let before = state.windows.clone();
        state.focus_window(&"ghost".into());

        assert_eq!(state.windows, before);
        assert_eq!(state.active_window_id, Some(WindowId::new("ghost")));
    }

    #[test]
    fn close_is_idempotent_and_clears_active() {
        let mut state = boot_four();
        state.close_window(&"about".into());
        let after_first = state.clone();
        state.close_window(&"about".into());

        assert_eq!(state, after_first);
        assert_eq!(state.windows.len(), 3);
        assert_eq!(state.active_window_id, None);
        assert_eq!(ids(&state), vec!["weather", "calm-mind-player", "projects"]);
    }

    #[test]
    fn closing_inactive_window_keeps_active() {
        let mut state = boot_four();
        state.close_window(&"weather".into());
        assert_eq!(state.active_window_id, Some(WindowId::new("about")));
    }

    #[test]
    fn reopen_after_close_starts_fresh() {
        let mut state = DesktopState::default();
        state.open_window(request("about"));
        state.update_window_position(&"about".into(), 400.0, 300.0);
        state.close_window(&"about".into());
        state.open_window(request("about"));

        let about = state.window(&"about".into()).expect("about");
        assert_eq!((about.x, about.y), (100.0, 50.0));
    }

    #[test]
    fn minimizing_active_window_clears_active_and_keeps_order() {
        let mut state = boot_four();
        state.minimize_window(&"about".into());

        assert_eq!(state.active_window_id, None);
        assert!(state.window(&"about".into()).expect("about").is_minimized);
        assert_eq!(
            ids(&state),
            vec!["weather", "calm-mind-player", "projects", "about"]
        );
    }

    #[test]
    fn minimizing_inactive_window_keeps_active() {
        let mut state = boot_four();
        state.minimize_window(&"weather".into());
        assert_eq!(state.active_window_id, Some(WindowId::new("about")));
    }

    #[test]
    fn restore_sets_active_even_when_not_minimized() {
        let mut state = boot_four();
        state.restore_window(&"weather".into());

        assert_eq!(state.active_window_id, Some(WindowId::new("weather")));
        assert!(!state.window(&"weather".into()).expect("weather").is_minimized);
        assert_eq!(ids(&state)[0], "weather");
    }

    #[test]
    fn position_and_size_updates_are_exact() {
        let mut state = DesktopState::default();
        state.open_window(request("about"));
        state.update_window_position(&"about".into(), -12.25, 1e6 + 0.125);
        state.update_window_size(&"about".into(), 301.5, 199.75);

        let about = state.window(&"about".into()).expect("about");
        assert_eq!((about.x, about.y), (-12.25, 1e6 + 0.125));
        assert_eq!((about.width, about.height), (Some(301.5), Some(199.75)));
    }

    #[test]
    fn updates_on_absent_ids_are_noops() {
        let mut state = boot_four();
        let before = state.clone();
        state.update_window_position(&"ghost".into(), 1.0, 2.0);
        state.update_window_size(&"ghost".into(), 3.0, 4.0);
        state.minimize_window(&"ghost".into());
        state.close_window(&"ghost".into());
        assert_eq!(state, before);
    }

    #[test]
    fn resize_from_west_is_pinned_to_right_edge_at_minimum() {
        let start = WindowRect {
            x: 100.0,
            y: 100.0,
            w: 400.0,
            h: 300.0,
        };
        let resized = resize_rect(start, ResizeEdge::West, 250.0, 0.0);
        let clamped = clamp_resized_rect(start, resized, ResizeEdge::West, 300.0, 200.0);

        assert_eq!(clamped.w, 300.0);
        assert_eq!(clamped.x, 200.0);
        assert_eq!(clamped.x + clamped.w, start.x + start.w);
    }

    #[test]
    fn resize_south_east_grows_without_moving_origin() {
        let start = WindowRect {
            x: 10.0,
            y: 20.0,
            w: 400.0,
            h: 300.0,
        };
        let resized = resize_rect(start, ResizeEdge::SouthEast, 30.0, 40.0);
        assert_eq!(
            resized,
            WindowRect {
                x: 10.0,
                y: 20.0,
                w: 430.0,
                h: 340.0
            }
        );
    }
}
