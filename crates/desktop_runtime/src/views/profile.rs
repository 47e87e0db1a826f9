use super::*;
use crate::portfolio::{self, Project};

const EMAIL: &str = "sakilalakmal77@gmail.com";
const GITHUB_URL: &str = "https://github.com/Sakilalakmal";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sakila-lakmal-a970502b7/";
const PHONE: &str = "+94 712207719";
const WHATSAPP_NUMBER: &str = "94712207719";
const RESUME_PDF: &str = "/resume/Sakila-Lakmal-Resume.pdf";

const PROJECT_WINDOW_WIDTH: f64 = 820.0;
const PROJECT_WINDOW_HEIGHT: f64 = 520.0;

const CURRENTLY_LEARNING: [&str; 3] = ["Python", "SQL", "Microservices"];
const LANGUAGES_AND_TOOLS: [&str; 24] = [
    "TypeScript",
    "JavaScript",
    "Kotlin",
    "Dart",
    "Python",
    "React",
    "Next.js",
    "Flutter",
    "Tailwind CSS",
    "Node.js",
    "Express",
    "PostgreSQL",
    "MongoDB",
    "Prisma",
    "Supabase",
    "Docker",
    "AWS",
    "Jenkins",
    "GitHub Actions",
    "Linux",
    "Figma",
    "Postman",
    "VS Code",
    "pnpm",
];

struct ContactEntry {
    label: &'static str,
    value: &'static str,
    href: String,
}

fn contact_entries() -> Vec<ContactEntry> {
    vec![
        ContactEntry {
            label: "Phone",
            value: PHONE,
            href: format!("tel:{}", PHONE.replace(' ', "")),
        },
        ContactEntry {
            label: "Email",
            value: EMAIL,
            href: format!("mailto:{EMAIL}"),
        },
        ContactEntry {
            label: "LinkedIn",
            value: "sakila-lakmal",
            href: LINKEDIN_URL.to_string(),
        },
        ContactEntry {
            label: "GitHub",
            value: "Sakilalakmal",
            href: GITHUB_URL.to_string(),
        },
        ContactEntry {
            label: "WhatsApp",
            value: PHONE,
            href: format!("https://wa.me/{WHATSAPP_NUMBER}"),
        },
    ]
}

fn project_request(project: &Project) -> OpenWindowRequest {
    catalog::open_request(WindowKind::project(project.id))
        .with_size(PROJECT_WINDOW_WIDTH, PROJECT_WINDOW_HEIGHT)
}

fn external_button(runtime: DesktopRuntimeContext, label: &'static str, url: String) -> View {
    view! {
        <button class="link-button" on:click=move |_| open_external(runtime, &url)>
            {label}
        </button>
    }
    .into_view()
}

pub(super) fn about_view(runtime: DesktopRuntimeContext) -> View {
    view! {
        <div class="about">
            <section class="about-hero">
                <div>
                    <p class="about-kicker">"PORTFOLIO / 2026"</p>
                    <h1>"Full Stack Developer"</h1>
                    <p class="about-focus">"BACKEND • DEVOPS • SYSTEM DESIGN"</p>
                </div>
                <div class="about-portrait">
                    <img src="/sakila-lakmal.png" alt="Portrait" />
                    <div class="about-links">
                        {external_button(runtime, "Email", format!("mailto:{EMAIL}"))}
                        {external_button(runtime, "GitHub", GITHUB_URL.to_string())}
                        {external_button(runtime, "LinkedIn", LINKEDIN_URL.to_string())}
                    </div>
                </div>
            </section>
            <section class="about-bio">
                <h2>"Profile"</h2>
                <p>
                    "I am a Computer Science undergraduate (Class of 2027) with a strong foundation \
                     in Full Stack Development (Next.js, TypeScript, Node.js) and a practical focus \
                     on DevOps automation."
                </p>
                <p>
                    "Recently, I architected a scalable Learning Management System where I built \
                     the backend APIs and configured a complete CI/CD pipeline using Docker and \
                     Jenkins to automate deployments."
                </p>
            </section>
        </div>
    }
    .into_view()
}

pub(super) fn projects_view(runtime: DesktopRuntimeContext) -> View {
    view! {
        <div class="project-grid">
            {portfolio::projects()
                .iter()
                .map(|project| {
                    let request = project_request(project);
                    let on_key = request.clone();
                    view! {
                        <div
                            class="project-tile"
                            tabindex="0"
                            on:dblclick=move |_| open_window(runtime, request.clone())
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if is_activation_key(&ev) {
                                    open_window(runtime, on_key.clone());
                                }
                            }
                        >
                            <img src="/icons/folder.svg" alt="" width="48" height="48" />
                            <div class="project-tile-name">{project.name}</div>
                            <div class="project-tile-tagline">{project.tagline}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

/// Renders nothing when `project_id` names no known project.
pub(super) fn project_details_view(runtime: DesktopRuntimeContext, project_id: &str) -> View {
    let Some(project) = portfolio::project_by_id(project_id) else {
        logging::warn!("no project with id `{project_id}`");
        return ().into_view();
    };

    view! {
        <article class="project-details">
            <header>
                <h1>{project.name}</h1>
                <p class="project-tagline">{project.tagline}</p>
            </header>
            <div class="project-actions">
                {external_button(runtime, "Source Code", project.source_url.to_string())}
                {external_button(runtime, "Live Demo", project.live_url.to_string())}
            </div>
            <p>{project.description}</p>
            <h2>"Tech Stack"</h2>
            <ul class="tech-stack">
                {project
                    .tech_stack
                    .iter()
                    .map(|tech| view! { <li>{*tech}</li> })
                    .collect_view()}
            </ul>
        </article>
    }
    .into_view()
}

pub(super) fn contact_view(runtime: DesktopRuntimeContext) -> View {
    view! {
        <div class="contact">
            <h2>"Get in touch"</h2>
            {contact_entries()
                .into_iter()
                .map(|entry| {
                    let href = entry.href;
                    view! {
                        <button class="contact-item" on:click=move |_| open_external(runtime, &href)>
                            <span class="contact-label">{entry.label}</span>
                            <span class="contact-value">{entry.value}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

fn skill_badges(names: &'static [&'static str]) -> View {
    names
        .iter()
        .map(|name| view! { <span class="skill-badge">{*name}</span> })
        .collect_view()
}

pub(super) fn skills_view() -> View {
    view! {
        <div class="skills">
            <section>
                <h2>"Currently Learning"</h2>
                <div class="skill-badges">{skill_badges(&CURRENTLY_LEARNING)}</div>
            </section>
            <section>
                <h2>"Languages & Tools"</h2>
                <div class="skill-badges">{skill_badges(&LANGUAGES_AND_TOOLS)}</div>
            </section>
        </div>
    }
    .into_view()
}

pub(super) fn resume_view(runtime: DesktopRuntimeContext) -> View {
    view! {
        <div class="resume">
            <div class="resume-toolbar">
                <a class="toolbar-button" href=RESUME_PDF download="Sakila_Lakmal_Resume.pdf">
                    "Download"
                </a>
                <button
                    class="toolbar-button"
                    on:click=move |_| open_external(runtime, RESUME_PDF)
                >
                    "Open in Tab"
                </button>
            </div>
            <iframe
                class="resume-frame"
                src=format!("{RESUME_PDF}#view=FitH&zoom=67")
                title="Resume PDF"
            ></iframe>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn project_tiles_open_parameterized_windows() {
        let project = &portfolio::projects()[0];
        let request = project_request(project);
        assert_eq!(request.id, WindowId::new("project:kada-mandiya"));
        assert_eq!(request.title, "Project: Kada Mandiya");
        assert_eq!(
            (request.width, request.height),
            (Some(PROJECT_WINDOW_WIDTH), Some(PROJECT_WINDOW_HEIGHT))
        );
    }

    #[test]
    fn contact_links_use_expected_schemes() {
        let hrefs: Vec<_> = contact_entries().into_iter().map(|entry| entry.href).collect();
        assert_eq!(
            hrefs,
            vec![
                "tel:+94712207719".to_string(),
                "mailto:sakilalakmal77@gmail.com".to_string(),
                LINKEDIN_URL.to_string(),
                GITHUB_URL.to_string(),
                "https://wa.me/94712207719".to_string(),
            ]
        );
    }
}
