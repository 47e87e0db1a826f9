//! Window bodies, one per [`WindowKind`].
//!
//! Views only read static portfolio data and dispatch [`DesktopAction`] values; the window frame
//! around them lives in [`crate::components`].

mod console;
mod gadgets;
mod profile;
mod system;

use leptos::*;

use crate::{
    catalog,
    model::{OpenWindowRequest, WindowId, WindowKind},
    reducer::DesktopAction,
    runtime_context::{use_desktop_runtime, DesktopRuntimeContext},
};

fn open_window(runtime: DesktopRuntimeContext, request: OpenWindowRequest) {
    runtime.dispatch_action(DesktopAction::OpenWindow(request));
}

fn open_kind(runtime: DesktopRuntimeContext, kind: WindowKind) {
    open_window(runtime, catalog::open_request(kind));
}

fn open_external(runtime: DesktopRuntimeContext, url: &str) {
    runtime.dispatch_action(DesktopAction::OpenExternal {
        url: url.to_string(),
    });
}

/// Enter on a focused launcher tile behaves like a double click.
fn is_activation_key(ev: &web_sys::KeyboardEvent) -> bool {
    ev.key() == "Enter"
}

#[component]
pub(crate) fn WindowBody(window_id: WindowId, kind: WindowKind) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let contents = match kind {
        WindowKind::About => profile::about_view(runtime),
        WindowKind::Projects => profile::projects_view(runtime),
        WindowKind::ProjectDetails { project_id } => {
            profile::project_details_view(runtime, &project_id)
        }
        WindowKind::Contact => profile::contact_view(runtime),
        WindowKind::Skills => profile::skills_view(),
        WindowKind::Resume => profile::resume_view(runtime),
        WindowKind::Weather => gadgets::weather_view(),
        WindowKind::CalmMindPlayer => gadgets::calm_mind_player_view(),
        WindowKind::Terminal => console::terminal_view(&window_id),
        WindowKind::Run => console::run_view(runtime, &window_id),
        WindowKind::MyComputer => system::my_computer_view(runtime),
        WindowKind::SystemProperties => system::system_properties_view(runtime, window_id),
        WindowKind::ArchitecturesDrive => system::architectures_drive_view(runtime),
        WindowKind::DevopsDrive => system::devops_drive_view(),
        WindowKind::MicroservicesDetails => system::microservices_details_view(runtime),
        WindowKind::MonolithicDetails => system::monolithic_details_view(),
        WindowKind::ServiceDetails { service_id } => system::service_details_view(&service_id),
    };

    view! {
        <div class="window-body-content">
            {contents}
        </div>
    }
}
