//! Portfolio desktop runtime: window store, reducer, catalog, and the Leptos shell that renders
//! them.

pub mod catalog;
pub mod clock;
pub mod components;
mod effect_executor;
pub mod host;
pub mod model;
pub mod playlist;
pub mod portfolio;
pub mod reducer;
pub mod run_dialog;
mod runtime_context;
pub mod terminal;
mod views;
pub mod wallpaper;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
