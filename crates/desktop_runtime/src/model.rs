use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Horizontal origin of the cascade applied to windows opened without an explicit position.
pub const CASCADE_ORIGIN_X: f64 = 100.0;
/// Vertical origin of the cascade applied to windows opened without an explicit position.
pub const CASCADE_ORIGIN_Y: f64 = 50.0;
/// Per-window cascade step, applied independently to both axes.
pub const CASCADE_STEP: f64 = 20.0;
pub const DEFAULT_WINDOW_WIDTH: f64 = 560.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 360.0;
pub const MIN_WINDOW_WIDTH: f64 = 300.0;
pub const MIN_WINDOW_HEIGHT: f64 = 200.0;

const PROJECT_ID_PREFIX: &str = "project";
const SERVICE_ID_PREFIX: &str = "service-details";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DOM-safe form of the id, used for element ids.
    pub fn dom_key(&self) -> String {
        self.0
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
            .collect()
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// View selector for a desktop window.
///
/// Parameterized variants carry their parameter directly so views never have to recover it from
/// the window id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WindowKind {
    About,
    Projects,
    ProjectDetails { project_id: String },
    Contact,
    Weather,
    CalmMindPlayer,
    MyComputer,
    Skills,
    Resume,
    Terminal,
    Run,
    SystemProperties,
    ArchitecturesDrive,
    DevopsDrive,
    MicroservicesDetails,
    MonolithicDetails,
    ServiceDetails { service_id: String },
}

impl WindowKind {
    /// Every kind tag, in catalog order.
    pub const TAGS: [&'static str; 17] = [
        "about",
        "projects",
        "project-details",
        "contact",
        "weather",
        "calm-mind-player",
        "my-computer",
        "skills",
        "resume",
        "terminal",
        "run",
        "system-properties",
        "architectures-drive",
        "devops-drive",
        "microservices-details",
        "monolithic-details",
        "service-details",
    ];

    pub fn project(project_id: impl Into<String>) -> Self {
        Self::ProjectDetails {
            project_id: project_id.into(),
        }
    }

    pub fn service(service_id: impl Into<String>) -> Self {
        Self::ServiceDetails {
            service_id: service_id.into(),
        }
    }

    /// Stable tag naming the view, shared by every window of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::ProjectDetails { .. } => "project-details",
            Self::Contact => "contact",
            Self::Weather => "weather",
            Self::CalmMindPlayer => "calm-mind-player",
            Self::MyComputer => "my-computer",
            Self::Skills => "skills",
            Self::Resume => "resume",
            Self::Terminal => "terminal",
            Self::Run => "run",
            Self::SystemProperties => "system-properties",
            Self::ArchitecturesDrive => "architectures-drive",
            Self::DevopsDrive => "devops-drive",
            Self::MicroservicesDetails => "microservices-details",
            Self::MonolithicDetails => "monolithic-details",
            Self::ServiceDetails { .. } => "service-details",
        }
    }

    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::ProjectDetails { project_id } => Some(project_id),
            Self::ServiceDetails { service_id } => Some(service_id),
            _ => None,
        }
    }

    /// Canonical window id for this kind; one window per id can exist at a time.
    pub fn window_id(&self) -> WindowId {
        match self {
            Self::ProjectDetails { project_id } => {
                WindowId(format!("{PROJECT_ID_PREFIX}:{project_id}"))
            }
            Self::ServiceDetails { service_id } => {
                WindowId(format!("{SERVICE_ID_PREFIX}:{service_id}"))
            }
            other => WindowId::new(other.tag()),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors produced when parsing a window id into a [`WindowKind`].
pub enum ParseWindowKindError {
    #[error("window id is empty")]
    Empty,
    #[error("unknown window kind `{0}`")]
    UnknownKind(String),
    #[error("window kind `{0}` requires a parameter")]
    MissingParameter(&'static str),
    #[error("window kind `{0}` does not take a parameter")]
    UnexpectedParameter(&'static str),
}

impl FromStr for WindowKind {
    type Err = ParseWindowKindError;

    /// Parses a canonical window id (`about`, `project:kada-mandiya`, ...).
    ///
    /// The parameter is everything after the first `:`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ParseWindowKindError::Empty);
        }
        let (head, parameter) = match raw.split_once(':') {
            Some((head, parameter)) => (head, Some(parameter)),
            None => (raw, None),
        };

        let require = |tag: &'static str| match parameter {
            Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
            _ => Err(ParseWindowKindError::MissingParameter(tag)),
        };

        let kind = match head {
            PROJECT_ID_PREFIX | "project-details" => {
                return require("project-details").map(|project_id| Self::ProjectDetails {
                    project_id,
                });
            }
            SERVICE_ID_PREFIX => {
                return require(SERVICE_ID_PREFIX).map(|service_id| Self::ServiceDetails {
                    service_id,
                });
            }
            "about" => Self::About,
            "projects" => Self::Projects,
            "contact" => Self::Contact,
            "weather" => Self::Weather,
            "calm-mind-player" => Self::CalmMindPlayer,
            "my-computer" => Self::MyComputer,
            "skills" => Self::Skills,
            "resume" => Self::Resume,
            "terminal" => Self::Terminal,
            "run" => Self::Run,
            "system-properties" => Self::SystemProperties,
            "architectures-drive" => Self::ArchitecturesDrive,
            "devops-drive" => Self::DevopsDrive,
            "microservices-details" => Self::MicroservicesDetails,
            "monolithic-details" => Self::MonolithicDetails,
            other => return Err(ParseWindowKindError::UnknownKind(other.to_string())),
        };

        if parameter.is_some() {
            return Err(ParseWindowKindError::UnexpectedParameter(kind.tag()));
        }
        Ok(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl WindowRect {
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min_w: f64, min_h: f64) -> Self {
        Self {
            w: self.w.max(min_w),
            h: self.h.max(min_h),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub kind: WindowKind,
    pub title: String,
    pub is_minimized: bool,
    pub x: f64,
    pub y: f64,
    /// `None` until resized; the view falls back to the catalog default of its kind.
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl WindowRecord {
    /// Resolves the rendered rect, filling a missing size from `fallback`.
    pub fn rect_or(&self, fallback: WindowSize) -> WindowRect {
        WindowRect {
            x: self.x,
            y: self.y,
            w: self.width.unwrap_or(fallback.width),
            h: self.height.unwrap_or(fallback.height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WallpaperId(pub usize);

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DesktopState {
    /// Z-ordered window stack; the last record is topmost.
    pub windows: Vec<WindowRecord>,
    pub active_window_id: Option<WindowId>,
    pub start_menu_open: bool,
    pub wallpaper: WallpaperId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenWindowRequest {
    pub id: WindowId,
    pub kind: WindowKind,
    pub title: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl OpenWindowRequest {
    /// Builds a request whose id is the canonical id of `kind`.
    pub fn new(kind: WindowKind, title: impl Into<String>) -> Self {
        Self {
            id: kind.window_id(),
            kind,
            title: title.into(),
            x: None,
            y: None,
            width: None,
            height: None,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}
