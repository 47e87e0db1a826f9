//! Window catalog built from `windows.manifest.toml`, plus the fixed launch points of the desktop
//! (desktop icons, start menu, boot sequence).

use std::sync::OnceLock;

use serde::Deserialize;

use crate::{
    model::{OpenWindowRequest, WindowKind, WindowSize},
    portfolio::{self, FEATURED_PROJECT_ID},
};

include!(concat!(env!("OUT_DIR"), "/window_catalog_generated.rs"));

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowDescriptor {
    pub kind: String,
    pub title: String,
    pub icon: String,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub desktop_icon_label: Option<String>,
    #[serde(default)]
    pub desktop_icon_order: Option<u32>,
    /// Whether the window body has a text input that should take focus when the window does.
    #[serde(default)]
    pub primary_input: bool,
    #[serde(default = "default_true")]
    pub closable: bool,
    #[serde(default = "default_true")]
    pub show_title_bar: bool,
}

impl WindowDescriptor {
    pub fn default_size(&self) -> WindowSize {
        WindowSize {
            width: self.width,
            height: self.height,
        }
    }
}

pub fn window_catalog() -> &'static [WindowDescriptor] {
    static CATALOG: OnceLock<Vec<WindowDescriptor>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        serde_json::from_str(WINDOW_MANIFEST_CATALOG_JSON)
            .expect("window manifest catalog is validated by build.rs")
    })
}

/// Returns the catalog entry for `kind`.
///
/// # Panics
///
/// Never in practice: `build.rs` rejects a manifest that misses any kind tag.
pub fn descriptor(kind: &WindowKind) -> &'static WindowDescriptor {
    let tag = kind.tag();
    window_catalog()
        .iter()
        .find(|entry| entry.kind == tag)
        .expect("window descriptor exists")
}

pub fn default_size(kind: &WindowKind) -> WindowSize {
    descriptor(kind).default_size()
}

pub fn default_title(kind: &WindowKind) -> String {
    match kind {
        WindowKind::ProjectDetails { project_id } => match portfolio::project_by_id(project_id) {
            Some(project) => format!("Project: {}", project.name),
            None => format!("Project: {project_id}"),
        },
        WindowKind::ServiceDetails { service_id } => portfolio::title_case_slug(service_id),
        other => descriptor(other).title.clone(),
    }
}

/// Canonical open request for `kind`: catalog title and default size, cascaded position.
pub fn open_request(kind: WindowKind) -> OpenWindowRequest {
    let size = default_size(&kind);
    let title = default_title(&kind);
    OpenWindowRequest::new(kind, title).with_size(size.width, size.height)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesktopIcon {
    pub kind: WindowKind,
    pub label: &'static str,
    pub icon: &'static str,
}

pub fn desktop_icons() -> Vec<DesktopIcon> {
    let mut icons = window_catalog()
        .iter()
        .filter_map(|entry| {
            let label = entry.desktop_icon_label.as_deref()?;
            let order = entry.desktop_icon_order?;
            let kind = entry.kind.parse::<WindowKind>().ok()?;
            Some((order, DesktopIcon {
                kind,
                label,
                icon: entry.icon.as_str(),
            }))
        })
        .collect::<Vec<_>>();
    icons.sort_by_key(|(order, _)| *order);
    icons.into_iter().map(|(_, icon)| icon).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMenuItem {
    MyComputer,
    About,
    Projects,
    Skills,
    Contact,
    FeaturedProject,
    Resume,
    Run,
    ShutDown,
}

impl StartMenuItem {
    pub fn label(self) -> &'static str {
        match self {
            Self::MyComputer => "My Computer",
            Self::About => "About Me",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
            Self::FeaturedProject => "Kada Mandiya (Featured)",
            Self::Resume => "Resume.pdf",
            Self::Run => "Run...",
            Self::ShutDown => "Shut Down...",
        }
    }

    pub fn dom_id(self) -> &'static str {
        match self {
            Self::MyComputer => "start-menu-item-my-computer",
            Self::About => "start-menu-item-about",
            Self::Projects => "start-menu-item-projects",
            Self::Skills => "start-menu-item-skills",
            Self::Contact => "start-menu-item-contact",
            Self::FeaturedProject => "start-menu-item-featured",
            Self::Resume => "start-menu-item-resume",
            Self::Run => "start-menu-item-run",
            Self::ShutDown => "start-menu-item-shutdown",
        }
    }

    /// Window opened by the item; `None` for items without a window.
    pub fn open_request(self) -> Option<OpenWindowRequest> {
        let request = match self {
            Self::MyComputer => open_request(WindowKind::MyComputer),
            Self::About => open_request(WindowKind::About),
            Self::Projects => open_request(WindowKind::Projects),
            Self::Skills => open_request(WindowKind::Skills),
            Self::Contact => open_request(WindowKind::Contact),
            Self::FeaturedProject => {
                let kind = WindowKind::project(FEATURED_PROJECT_ID);
                let title = portfolio::project_by_id(FEATURED_PROJECT_ID)
                    .map(|project| project.name.to_string())
                    .unwrap_or_else(|| default_title(&kind));
                OpenWindowRequest::new(kind, title).with_size(700.0, 560.0)
            }
            Self::Resume => open_request(WindowKind::Resume),
            Self::Run => open_request(WindowKind::Run),
            Self::ShutDown => return None,
        };
        Some(request)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMenuEntry {
    Item(StartMenuItem),
    Separator,
}

const START_MENU: [StartMenuEntry; 13] = [
    StartMenuEntry::Item(StartMenuItem::MyComputer),
    StartMenuEntry::Separator,
    StartMenuEntry::Item(StartMenuItem::About),
    StartMenuEntry::Item(StartMenuItem::Projects),
    StartMenuEntry::Item(StartMenuItem::Skills),
    StartMenuEntry::Item(StartMenuItem::Contact),
    StartMenuEntry::Separator,
    StartMenuEntry::Item(StartMenuItem::FeaturedProject),
    StartMenuEntry::Item(StartMenuItem::Resume),
    StartMenuEntry::Separator,
    StartMenuEntry::Item(StartMenuItem::Run),
    StartMenuEntry::Separator,
    StartMenuEntry::Item(StartMenuItem::ShutDown),
];

pub fn start_menu_entries() -> &'static [StartMenuEntry] {
    &START_MENU
}

/// Windows opened when the desktop first mounts; later entries stack on top.
pub fn boot_requests(viewport_width: f64) -> Vec<OpenWindowRequest> {
    vec![
        OpenWindowRequest::new(WindowKind::Weather, default_title(&WindowKind::Weather))
            .at(viewport_width - 340.0, 14.0),
        OpenWindowRequest::new(
            WindowKind::CalmMindPlayer,
            default_title(&WindowKind::CalmMindPlayer),
        )
        .with_size(300.0, 380.0)
        .at(200.0, 60.0),
        OpenWindowRequest::new(WindowKind::Projects, default_title(&WindowKind::Projects))
            .with_size(520.0, 420.0)
            .at(450.0, 80.0),
        OpenWindowRequest::new(WindowKind::About, default_title(&WindowKind::About))
            .at(100.0, 50.0),
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::WindowId;

    #[test]
    fn catalog_covers_every_kind() {
        for tag in WindowKind::TAGS {
            assert!(
                window_catalog().iter().any(|entry| entry.kind == tag),
                "missing {tag}"
            );
        }
    }

    #[test]
    fn desktop_icons_follow_declared_order() {
        let labels: Vec<_> = desktop_icons().iter().map(|icon| icon.label).collect();
        assert_eq!(labels, vec!["My Computer", "Projects", "About", "Contact"]);
    }

    #[test]
    fn open_request_uses_catalog_defaults() {
        let req = open_request(WindowKind::Contact);
        assert_eq!(req.id, WindowId::new("contact"));
        assert_eq!(req.title, "Contact");
        assert_eq!((req.width, req.height), (Some(440.0), Some(520.0)));
        assert_eq!((req.x, req.y), (None, None));
    }

    #[test]
    fn parameterized_titles_resolve_from_portfolio() {
        assert_eq!(
            default_title(&WindowKind::project("kada-mandiya")),
            "Project: Kada Mandiya"
        );
        assert_eq!(
            default_title(&WindowKind::service("order-service")),
            "Order Service"
        );
    }

    #[test]
    fn featured_start_menu_item_opens_project_window() {
        let req = StartMenuItem::FeaturedProject
            .open_request()
            .expect("featured project request");
        assert_eq!(req.id, WindowId::new("project:kada-mandiya"));
        assert_eq!(req.title, "Kada Mandiya");
        assert!(StartMenuItem::ShutDown.open_request().is_none());
    }

    #[test]
    fn weather_window_has_no_chrome_controls() {
        let weather = descriptor(&WindowKind::Weather);
        assert!(!weather.closable);
        assert!(!weather.show_title_bar);
        assert!(descriptor(&WindowKind::Run).primary_input);
    }

    #[test]
    fn boot_sequence_places_weather_against_right_edge() {
        let boot = boot_requests(1280.0);
        let ids: Vec<_> = boot.iter().map(|req| req.id.as_str()).collect();
        assert_eq!(ids, vec!["weather", "calm-mind-player", "projects", "about"]);
        assert_eq!((boot[0].x, boot[0].y), (Some(940.0), Some(14.0)));
        assert_eq!((boot[3].x, boot[3].y), (Some(100.0), Some(50.0)));
    }
}
