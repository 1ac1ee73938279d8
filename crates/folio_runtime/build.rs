use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

const WINDOW_IDS: [&str; 8] = [
    "finder", "contact", "resume", "safari", "photos", "terminal", "txtfile", "imgfile",
];

#[derive(Debug, Deserialize)]
struct RawNavLink {
    id: u32,
    window: String,
}

#[derive(Debug, Deserialize)]
struct RawDockEntry {
    id: String,
    can_open: bool,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    id: u32,
    name: String,
    kind: String,
    file_type: Option<String>,
    href: Option<String>,
    #[serde(default)]
    children: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLocations {
    work: RawNode,
    about: RawNode,
    resume: RawNode,
    trash: RawNode,
}

#[derive(Debug, Deserialize)]
struct RawDesktopConfig {
    schema_version: u32,
    resume_pages: u32,
    nav_links: Vec<RawNavLink>,
    dock: Vec<RawDockEntry>,
    locations: RawLocations,
}

fn validate_node(node: &RawNode, path: &str, errors: &mut Vec<String>) {
    let path = format!("{path}/{}", node.name);
    match (node.kind.as_str(), node.file_type.as_deref()) {
        ("folder", None) => {}
        ("folder", Some(file_type)) => {
            errors.push(format!("{path}: folder carries file_type `{file_type}`"));
        }
        ("file", Some("txt" | "img" | "pdf")) => {}
        ("file", Some(file_type @ ("url" | "fig"))) => {
            if node.href.as_deref().map(str::trim).unwrap_or("").is_empty() {
                println!("cargo:warning={path}: {file_type} item without href is inert");
            }
        }
        ("file", Some(other)) => errors.push(format!("{path}: unknown file_type `{other}`")),
        ("file", None) => errors.push(format!("{path}: file without file_type")),
        (other, _) => errors.push(format!("{path}: unknown kind `{other}`")),
    }

    if node.kind == "file" && !node.children.is_empty() {
        errors.push(format!("{path}: file nodes cannot have children"));
    }

    let mut sibling_ids = HashSet::new();
    for child in &node.children {
        if !sibling_ids.insert(child.id) {
            errors.push(format!("{path}: duplicate child id {}", child.id));
        }
        validate_node(child, &path, errors);
    }
}

fn validate(config: &RawDesktopConfig) -> Vec<String> {
    let mut errors = Vec::new();
    if config.schema_version != 1 {
        errors.push(format!(
            "schema mismatch: expected 1 found {}",
            config.schema_version
        ));
    }
    if config.resume_pages == 0 {
        errors.push("resume_pages must be at least 1".to_string());
    }

    let roots = [
        ("work", &config.locations.work),
        ("about", &config.locations.about),
        ("resume", &config.locations.resume),
        ("trash", &config.locations.trash),
    ];
    for (key, root) in roots {
        if root.kind != "folder" {
            errors.push(format!("root `{key}` must be a folder"));
        }
        validate_node(root, "", &mut errors);
    }

    for entry in &config.dock {
        if entry.can_open && !WINDOW_IDS.contains(&entry.id.as_str()) {
            errors.push(format!("dock entry `{}` opens an unknown window", entry.id));
        }
    }
    for link in &config.nav_links {
        if !WINDOW_IDS.contains(&link.window.as_str()) {
            errors.push(format!(
                "nav link {} targets unknown window `{}`",
                link.id, link.window
            ));
        }
    }
    errors
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("desktop.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let value: toml::Value = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    let config: RawDesktopConfig = value
        .clone()
        .try_into()
        .unwrap_or_else(|err| panic!("invalid desktop config {}: {err}", path.display()));

    let errors = validate(&config);
    if !errors.is_empty() {
        panic!(
            "desktop config {} failed validation:\n  {}",
            path.display(),
            errors.join("\n  ")
        );
    }

    let json = serde_json::to_string_pretty(&value).expect("serialize desktop config");
    let generated = format!(
        "/// Build-time validated desktop configuration JSON.\n\
pub const DESKTOP_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("desktop_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
