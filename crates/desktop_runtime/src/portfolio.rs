//! Portfolio entries resolved by parameterized windows.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub source_url: &'static str,
    pub live_url: &'static str,
    pub tech_stack: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub publishes: &'static [&'static str],
    pub consumes: &'static [&'static str],
}

/// Project shown as the featured entry of the start menu.
pub const FEATURED_PROJECT_ID: &str = "kada-mandiya";

const PROJECTS: [Project; 3] = [
    Project {
        id: "kada-mandiya",
        name: "Kada Mandiya",
        tagline: "E-commerce & LMS Platform",
        source_url: "https://github.com/Sakilalakmal",
        live_url: "https://github.com/Sakilalakmal",
        tech_stack: &[
            "Next.js",
            "TypeScript",
            "Node.js",
            "RabbitMQ",
            "SQL Server",
            "Docker",
            "Jenkins",
        ],
        description: "A platform combining e-commerce with a learning management system. \
            Scalable backend APIs and a complete CI/CD pipeline for automated deployments.",
    },
    Project {
        id: "project-two",
        name: "Project Two",
        tagline: "Another Cool App",
        source_url: "https://github.com/Sakilalakmal",
        live_url: "https://github.com/Sakilalakmal",
        tech_stack: &["React", "Tailwind", "Firebase"],
        description: "Real-time data synchronization behind a responsive UI.",
    },
    Project {
        id: "project-three",
        name: "Project Three",
        tagline: "Creative Dashboard",
        source_url: "https://github.com/Sakilalakmal",
        live_url: "https://github.com/Sakilalakmal",
        tech_stack: &["Vue.js", "D3.js", "Express"],
        description: "An interactive dashboard for visualizing complex datasets.",
    },
];

const SERVICES: [Service; 7] = [
    Service {
        id: "auth-service",
        publishes: &["user.authenticated", "user.logged_out"],
        consumes: &["user.created"],
    },
    Service {
        id: "user-service",
        publishes: &["user.created", "user.updated"],
        consumes: &["order.created"],
    },
    Service {
        id: "product-service",
        publishes: &["product.created", "product.updated"],
        consumes: &["order.created"],
    },
    Service {
        id: "cart-service",
        publishes: &["cart.updated"],
        consumes: &["user.created", "product.updated"],
    },
    Service {
        id: "order-service",
        publishes: &["order.created", "order.updated"],
        consumes: &["payment.succeeded", "cart.updated"],
    },
    Service {
        id: "payment-service",
        publishes: &["payment.succeeded", "payment.failed"],
        consumes: &["order.created"],
    },
    Service {
        id: "notification-service",
        publishes: &[],
        consumes: &["order.created", "payment.succeeded", "user.created"],
    },
];

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn services() -> &'static [Service] {
    &SERVICES
}

pub fn service_by_id(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.id == id)
}

impl Service {
    pub fn display_name(&self) -> String {
        title_case_slug(self.id)
    }
}

/// `"order-service"` -> `"Order Service"`.
pub fn title_case_slug(slug: &str) -> String {
    slug.split(['-', '_'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
