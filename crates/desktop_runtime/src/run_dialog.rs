//! Command resolution for the Run dialog.

use crate::{
    catalog,
    model::{OpenWindowRequest, WindowKind},
};

/// Resolves Run dialog input to the window it launches.
///
/// `about`, `me` and `terminal` launch the terminal; any other input naming a window id opens
/// that window. Anything else resolves to nothing.
pub fn resolve_run_command(input: &str) -> Option<OpenWindowRequest> {
    let command = input.trim().to_lowercase();
    match command.as_str() {
        "" => None,
        "about" | "me" | "terminal" => Some(catalog::open_request(WindowKind::Terminal)),
        other => match other.parse::<WindowKind>() {
            Ok(WindowKind::Run) | Err(_) => None,
            Ok(kind) => Some(catalog::open_request(kind)),
        },
    }
}
