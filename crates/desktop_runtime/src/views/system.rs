use super::*;
use crate::portfolio;

struct Shortcut {
    label: &'static str,
    subtitle: &'static str,
    target: Option<WindowKind>,
}

fn sidebar_shortcuts() -> [Shortcut; 8] {
    [
        Shortcut {
            label: "Desktop",
            subtitle: "",
            target: None,
        },
        Shortcut {
            label: "My Computer",
            subtitle: "",
            target: None,
        },
        Shortcut {
            label: "About Me",
            subtitle: "",
            target: Some(WindowKind::About),
        },
        Shortcut {
            label: "Projects",
            subtitle: "",
            target: Some(WindowKind::Projects),
        },
        Shortcut {
            label: "Skills",
            subtitle: "",
            target: Some(WindowKind::Skills),
        },
        Shortcut {
            label: "Contact",
            subtitle: "",
            target: Some(WindowKind::Contact),
        },
        Shortcut {
            label: "Resume.pdf",
            subtitle: "",
            target: Some(WindowKind::Resume),
        },
        Shortcut {
            label: "System Info",
            subtitle: "",
            target: Some(WindowKind::SystemProperties),
        },
    ]
}

fn drive_shortcuts() -> [Shortcut; 5] {
    [
        Shortcut {
            label: "C: Sakila's OS",
            subtitle: "Main Portfolio System",
            target: Some(WindowKind::About),
        },
        Shortcut {
            label: "D: Architectures",
            subtitle: "Design Patterns • Systems",
            target: Some(WindowKind::ArchitecturesDrive),
        },
        Shortcut {
            label: "E: DevOps",
            subtitle: "Docker • CI/CD",
            target: Some(WindowKind::DevopsDrive),
        },
        Shortcut {
            label: "F: Learning",
            subtitle: "Python • SQL • System Design",
            target: Some(WindowKind::Skills),
        },
        Shortcut {
            label: "System Properties",
            subtitle: "About this OS",
            target: Some(WindowKind::SystemProperties),
        },
    ]
}

const SYSTEM_PROPERTIES: [(&str, &str); 8] = [
    ("OS Name:", "Sakila's OS 98"),
    ("User:", "Sakila Lakmal"),
    ("Role:", "Full Stack Developer / Backend Engineer"),
    ("Architecture:", "Event-driven Microservices"),
    ("Message Broker:", "RabbitMQ"),
    ("Databases:", "SQL Server, PostgreSQL"),
    ("DevOps:", "Docker, CI/CD"),
    ("Status:", "Learning • Building • Shipping"),
];

const DEVOPS_TOOLS: [&str; 5] = ["Docker", "Docker Compose", "Jenkins", "GitHub Actions", "AWS"];
const DEVOPS_HIGHLIGHTS: [&str; 3] = [
    "Containerized local dev",
    "CI/CD automation",
    "Deployment-ready architecture",
];

const MONOLITH_FEATURES: [(&str, &str); 4] = [
    ("Single Codebase", "All functionality in one application"),
    ("Shared Database", "Centralized data management"),
    ("Simple Deployment", "Deploy as a single unit"),
    ("Easy Development", "Straightforward to develop and test"),
];
const MONOLITH_STACK: [&str; 4] = [
    "ASP.NET Core",
    "SQL Server",
    "Entity Framework",
    "MVC Pattern",
];

const MICROSERVICES_STACK: &str = "Node.js • TypeScript • RabbitMQ • SQL Server • Docker";
const SERVICE_STACK: &str = "Node.js • TypeScript • Express • SQL Server • RabbitMQ";

/// A selectable tile that opens `kind` on double click or Enter.
fn launcher_tile(
    runtime: DesktopRuntimeContext,
    selected: RwSignal<Option<WindowId>>,
    label: String,
    subtitle: &'static str,
    kind: WindowKind,
) -> View {
    let tile_id = kind.window_id();
    let click_id = tile_id.clone();
    let on_key = kind.clone();
    view! {
        <div
            class=move || {
                if selected.with(|selected| selected.as_ref() == Some(&tile_id)) {
                    "launcher-tile selected"
                } else {
                    "launcher-tile"
                }
            }
            tabindex="0"
            on:click=move |_| selected.set(Some(click_id.clone()))
            on:dblclick=move |_| open_kind(runtime, kind.clone())
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if is_activation_key(&ev) {
                    open_kind(runtime, on_key.clone());
                }
            }
        >
            <div class="launcher-tile-label">{label}</div>
            <div class="launcher-tile-subtitle">{subtitle}</div>
        </div>
    }
    .into_view()
}

pub(super) fn my_computer_view(runtime: DesktopRuntimeContext) -> View {
    let selected = create_rw_signal(None::<WindowId>);

    view! {
        <div class="explorer">
            <nav class="explorer-sidebar">
                {sidebar_shortcuts()
                    .into_iter()
                    .map(|shortcut| {
                        let target = shortcut.target;
                        let current = shortcut.label == "My Computer";
                        view! {
                            <button
                                class=if current { "explorer-link current" } else { "explorer-link" }
                                on:click=move |_| {
                                    if let Some(kind) = target.clone() {
                                        open_kind(runtime, kind);
                                    }
                                }
                            >
                                {shortcut.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="explorer-items">
                {drive_shortcuts()
                    .into_iter()
                    .filter_map(|shortcut| {
                        let kind = shortcut.target?;
                        Some(launcher_tile(
                            runtime,
                            selected,
                            shortcut.label.to_string(),
                            shortcut.subtitle,
                            kind,
                        ))
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn system_properties_view(runtime: DesktopRuntimeContext, window_id: WindowId) -> View {
    let window_id = store_value(window_id);
    let close = move || {
        runtime.dispatch_action(DesktopAction::CloseWindow {
            window_id: window_id.get_value(),
        });
    };

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        let id = window_id.get_value();
        if runtime.state.get_untracked().is_active(&id) {
            ev.prevent_default();
            close();
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <div class="system-properties">
            <dl>
                {SYSTEM_PROPERTIES
                    .iter()
                    .map(|(label, value)| view! {
                        <dt>{*label}</dt>
                        <dd>{*value}</dd>
                    })
                    .collect_view()}
            </dl>
            <div class="dialog-buttons">
                <button on:click=move |_| close()>"OK"</button>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn architectures_drive_view(runtime: DesktopRuntimeContext) -> View {
    let selected = create_rw_signal(None::<WindowId>);

    view! {
        <div class="drive">
            <h2>"Software Architecture Patterns"</h2>
            <div class="explorer-items">
                {launcher_tile(
                    runtime,
                    selected,
                    "Monolithic Architecture".to_string(),
                    "",
                    WindowKind::MonolithicDetails,
                )}
                {launcher_tile(
                    runtime,
                    selected,
                    "Microservices Architecture".to_string(),
                    "",
                    WindowKind::MicroservicesDetails,
                )}
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn devops_drive_view() -> View {
    view! {
        <div class="drive">
            <h2>"Tools"</h2>
            <div class="tool-badges">
                {DEVOPS_TOOLS
                    .iter()
                    .map(|tool| view! { <span class="tool-badge">{*tool}</span> })
                    .collect_view()}
            </div>
            <h2>"Highlights"</h2>
            <ul>
                {DEVOPS_HIGHLIGHTS
                    .iter()
                    .map(|highlight| view! { <li>{*highlight}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
    .into_view()
}

pub(super) fn microservices_details_view(runtime: DesktopRuntimeContext) -> View {
    let selected = create_rw_signal(None::<WindowId>);

    view! {
        <div class="architecture">
            <p class="architecture-stack">{MICROSERVICES_STACK}</p>
            <div class="explorer-items">
                {portfolio::services()
                    .iter()
                    .map(|service| {
                        launcher_tile(
                            runtime,
                            selected,
                            service.display_name(),
                            "",
                            WindowKind::service(service.id),
                        )
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn monolithic_details_view() -> View {
    view! {
        <div class="architecture">
            <p>"Traditional single-tier application architecture"</p>
            <div class="feature-grid">
                {MONOLITH_FEATURES
                    .iter()
                    .map(|(title, desc)| view! {
                        <div class="feature">
                            <div class="feature-title">{*title}</div>
                            <div class="feature-desc">{*desc}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
            <h2>"Tech Stack"</h2>
            <div class="tool-badges">
                {MONOLITH_STACK
                    .iter()
                    .map(|tech| view! { <span class="tool-badge">{*tech}</span> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

fn event_list(events: &'static [&'static str]) -> View {
    if events.is_empty() {
        return view! { <li class="event-none">"None"</li> }.into_view();
    }
    events
        .iter()
        .map(|event| view! { <li>{format!("• {event}")}</li> })
        .collect_view()
}

/// Renders nothing when `service_id` names no known service.
pub(super) fn service_details_view(service_id: &str) -> View {
    let Some(service) = portfolio::service_by_id(service_id) else {
        logging::warn!("no service with id `{service_id}`");
        return ().into_view();
    };

    view! {
        <div class="service-details">
            <h1>{service.display_name()}</h1>
            <div class="architecture-stack">{SERVICE_STACK}</div>
            <div class="service-events">
                <section>
                    <h3>"Events Published"</h3>
                    <ul>{event_list(service.publishes)}</ul>
                </section>
                <section>
                    <h3>"Events Consumed"</h3>
                    <ul>{event_list(service.consumes)}</ul>
                </section>
            </div>
        </div>
    }
    .into_view()
}
