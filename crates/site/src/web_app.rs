use desktop_runtime::{portfolio, DesktopProvider, DesktopShell, ParseWindowKindError, WindowKind};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

/// Parses the `open` query value: a comma-separated list of window ids.
///
/// Blank segments are skipped. Ids that fail to parse are returned alongside the parsed kinds so
/// the caller can report them.
pub fn parse_open_targets(raw: &str) -> (Vec<WindowKind>, Vec<(String, ParseWindowKindError)>) {
    let mut targets = Vec::new();
    let mut rejected = Vec::new();
    for segment in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        match segment.parse::<WindowKind>() {
            Ok(kind) => targets.push(kind),
            Err(err) => rejected.push((segment.to_string(), err)),
        }
    }
    (targets, rejected)
}

fn project_deep_link(slug: &str) -> String {
    format!("/?open={}", WindowKind::project(slug).window_id())
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Sakila Lakmal" />
        <Meta name="description" content="A retro desktop-style portfolio." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/projects/:slug" view=CanonicalProjectRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let raw = query.with_untracked(|map| map.get("open").cloned().unwrap_or_default());
    let (deep_link, rejected) = parse_open_targets(&raw);
    for (segment, err) in rejected {
        logging::warn!("ignoring deep link target `{segment}`: {err}");
    }

    view! {
        <DesktopProvider deep_link=deep_link>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn CanonicalProjectRoute() -> impl IntoView {
    let params = use_params_map();
    let slug = move || {
        params
            .with(|map| map.get("slug").cloned())
            .unwrap_or_else(|| "unknown".to_string())
    };
    let name = move || {
        portfolio::project_by_id(&slug())
            .map(|project| project.name.to_string())
            .unwrap_or_else(|| slug())
    };
    let tagline = move || {
        portfolio::project_by_id(&slug())
            .map(|project| project.tagline)
            .unwrap_or("Unknown project")
    };

    view! {
        <section class="canonical-content canonical-project">
            <h1>{name}</h1>
            <p>{tagline}</p>
            <A href=move || project_deep_link(&slug())>"Open in Desktop"</A>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_comma_separated_window_ids() {
        let (targets, rejected) = parse_open_targets("about, project:kada-mandiya,,skills");
        assert_eq!(
            targets,
            vec![
                WindowKind::About,
                WindowKind::project("kada-mandiya"),
                WindowKind::Skills,
            ]
        );
        assert!(rejected.is_empty());
    }

    #[test]
    fn reports_unparseable_segments() {
        let (targets, rejected) = parse_open_targets("notepad,contact,project");
        assert_eq!(targets, vec![WindowKind::Contact]);
        let segments: Vec<_> = rejected.iter().map(|(segment, _)| segment.as_str()).collect();
        assert_eq!(segments, vec!["notepad", "project"]);
        assert_eq!(
            rejected[0].1,
            ParseWindowKindError::UnknownKind("notepad".to_string())
        );
    }

    #[test]
    fn empty_query_opens_nothing() {
        let (targets, rejected) = parse_open_targets("");
        assert!(targets.is_empty());
        assert!(rejected.is_empty());
    }

    #[test]
    fn project_route_links_back_into_desktop() {
        assert_eq!(project_deep_link("kada-mandiya"), "/?open=project:kada-mandiya");
    }
}
