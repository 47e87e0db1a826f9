use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const KNOWN_KINDS: [&str; 17] = [
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

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManifestEntry {
    kind: String,
    title: String,
    icon: String,
    width: f64,
    height: f64,
    #[serde(default)]
    desktop_icon_label: Option<String>,
    #[serde(default)]
    desktop_icon_order: Option<u32>,
    #[serde(default)]
    primary_input: bool,
    #[serde(default = "default_true")]
    closable: bool,
    #[serde(default = "default_true")]
    show_title_bar: bool,
}

#[derive(Debug, Deserialize)]
struct WindowManifest {
    schema_version: u32,
    window: Vec<WindowManifestEntry>,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("windows.manifest.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let manifest: WindowManifest = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if manifest.schema_version != 1 {
        panic!(
            "manifest schema mismatch in {}: expected 1 found {}",
            path.display(),
            manifest.schema_version
        );
    }

    let mut seen = BTreeSet::new();
    for entry in &manifest.window {
        if !KNOWN_KINDS.contains(&entry.kind.as_str()) {
            panic!("unknown window kind `{}` in {}", entry.kind, path.display());
        }
        if !seen.insert(entry.kind.clone()) {
            panic!("duplicate window kind `{}` in {}", entry.kind, path.display());
        }
        if entry.width <= 0.0 || entry.height <= 0.0 {
            panic!(
                "window kind `{}` must declare a positive default size",
                entry.kind
            );
        }
        if entry.desktop_icon_label.is_some() != entry.desktop_icon_order.is_some() {
            panic!(
                "window kind `{}` must declare desktop_icon_label and desktop_icon_order together",
                entry.kind
            );
        }
    }
    for kind in KNOWN_KINDS {
        if !seen.contains(kind) {
            panic!("window kind `{kind}` is missing from {}", path.display());
        }
    }

    let json =
        serde_json::to_string_pretty(&manifest.window).expect("serialize window manifest catalog");
    let generated = format!(
        "/// Build-time generated window manifest catalog JSON.\n\
pub const WINDOW_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("window_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
