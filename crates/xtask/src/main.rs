use std::collections::BTreeMap;

use anyhow::Context;
use serde::Deserialize;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

/// Workspace crates and the internal crates each one may depend on.
const ALLOWED_INTERNAL_DEPS: &[(&str, &[&str])] = &[
    ("approvals-domain", &[]),
    ("approvals-shared", &["approvals-domain"]),
    ("approvals-engine", &["approvals-domain", "approvals-shared"]),
    (
        "approvals-player-app",
        &["approvals-domain", "approvals-shared"],
    ),
    ("approvals-player", &["approvals-domain", "approvals-player-app"]),
    ("xtask", &[]),
];

/// External crates that must stay out of the inner layers.
const FRAMEWORK_CRATES: &[&str] = &["axum", "sqlx", "dioxus", "reqwest", "tokio", "gloo-net"];
const FRAMEWORK_FREE: &[&str] = &["approvals-domain", "approvals-shared"];

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    #[serde(default)]
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata output")?;

    let violations = check(&metadata);
    if violations.is_empty() {
        println!(
            "arch-check: {} workspace crates respect layer boundaries",
            metadata.packages.len()
        );
        return Ok(());
    }

    for violation in &violations {
        eprintln!("arch-check: {violation}");
    }
    anyhow::bail!("{} layer violation(s)", violations.len())
}

fn check(metadata: &Metadata) -> Vec<String> {
    let allowed: BTreeMap<&str, &[&str]> = ALLOWED_INTERNAL_DEPS.iter().copied().collect();
    let mut violations = Vec::new();

    for package in &metadata.packages {
        let Some(allowed_deps) = allowed.get(package.name.as_str()) else {
            violations.push(format!("unknown workspace crate `{}`", package.name));
            continue;
        };

        // Dev-dependencies may reach across layers for test fixtures.
        let normal_deps = package
            .dependencies
            .iter()
            .filter(|dep| dep.kind.as_deref() != Some("dev"));

        for dep in normal_deps {
            let internal = allowed.contains_key(dep.name.as_str());
            if internal && !allowed_deps.contains(&dep.name.as_str()) {
                violations.push(format!("`{}` must not depend on `{}`", package.name, dep.name));
            }
            if FRAMEWORK_FREE.contains(&package.name.as_str())
                && FRAMEWORK_CRATES.contains(&dep.name.as_str())
            {
                violations.push(format!(
                    "`{}` must stay framework-free but depends on `{}`",
                    package.name, dep.name
                ));
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: &str) -> Metadata {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn clean_layering_passes() {
        let metadata = metadata(
            r#"{"packages": [
                {"name": "approvals-domain", "dependencies": [{"name": "serde", "kind": null}]},
                {"name": "approvals-shared", "dependencies": [{"name": "approvals-domain", "kind": null}]},
                {"name": "approvals-engine", "dependencies": [
                    {"name": "approvals-shared", "kind": null},
                    {"name": "axum", "kind": null}
                ]}
            ]}"#,
        );
        assert!(check(&metadata).is_empty());
    }

    #[test]
    fn inward_dependency_is_reported() {
        let metadata = metadata(
            r#"{"packages": [
                {"name": "approvals-shared", "dependencies": [{"name": "approvals-engine", "kind": null}]}
            ]}"#,
        );
        let violations = check(&metadata);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("approvals-engine"));
    }

    #[test]
    fn framework_in_domain_is_reported() {
        let metadata = metadata(
            r#"{"packages": [
                {"name": "approvals-domain", "dependencies": [{"name": "sqlx", "kind": null}]}
            ]}"#,
        );
        assert_eq!(check(&metadata).len(), 1);
    }

    #[test]
    fn dev_dependencies_are_ignored() {
        let metadata = metadata(
            r#"{"packages": [
                {"name": "approvals-player-app", "dependencies": [{"name": "tokio", "kind": "dev"}]},
                {"name": "approvals-domain", "dependencies": [{"name": "approvals-shared", "kind": "dev"}]}
            ]}"#,
        );
        assert!(check(&metadata).is_empty());
    }
}
