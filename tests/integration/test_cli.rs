use assert_cmd::Command;
use predicates::prelude::*;

fn workflow_factory() -> Command {
    Command::cargo_bin("workflow-factory").expect("binary builds")
}

#[test]
fn list_prints_every_catalog_recipe() {
    workflow_factory()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("nextjs-vercel"))
        .stdout(predicate::str::contains("node-docker-ghcr"))
        .stdout(predicate::str::contains("static-gh-pages"));
}

#[test]
fn list_json_emits_a_json_array() {
    let output = workflow_factory()
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    let recipes = parsed.as_array().expect("array");
    assert_eq!(recipes.len(), 3);
    assert!(recipes
        .iter()
        .any(|r| r["id"] == "nextjs-vercel"));
}

#[test]
fn generate_writes_workflow_yaml_to_stdout() {
    workflow_factory()
        .args(["generate", "static-gh-pages"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("name: Static Site to GitHub Pages"))
        .stdout(predicate::str::contains("actions/deploy-pages@v4"));
}

#[test]
fn generate_writes_to_output_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("deploy.yml");

    workflow_factory()
        .args(["generate", "nextjs-vercel", "--output"])
        .arg(&path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).expect("file written");
    assert!(written.contains("name: Next.js to Vercel"));
    assert!(written.contains("${{ secrets.VERCEL_TOKEN }}"));
}

#[test]
fn generate_json_includes_secrets_and_permissions() {
    let output = workflow_factory()
        .args(["generate", "node-docker-ghcr", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert!(parsed["yaml"].as_str().expect("yaml field").contains("jobs:"));
    assert_eq!(parsed["secrets"][0]["name"], "GITHUB_TOKEN");
    assert!(parsed["permissions"]
        .as_array()
        .expect("permissions")
        .iter()
        .any(|p| p["scope"] == "packages" && p["level"] == "write"));
    assert_eq!(parsed["recipe"]["id"], "node-docker-ghcr");
}

#[test]
fn generate_reports_required_secrets_on_stderr() {
    workflow_factory()
        .args(["generate", "nextjs-vercel"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Required secrets:"))
        .stderr(predicate::str::contains("VERCEL_TOKEN"));
}

#[test]
fn generate_unknown_recipe_fails_with_catalog_hint() {
    workflow_factory()
        .args(["generate", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown recipe 'does-not-exist'"))
        .stderr(predicate::str::contains("nextjs-vercel"));
}

#[test]
fn validate_reports_valid_catalog_recipes() {
    for recipe in ["nextjs-vercel", "node-docker-ghcr", "static-gh-pages"] {
        workflow_factory()
            .args(["validate", recipe])
            .assert()
            .success()
            .stdout(predicate::str::contains("valid"));
    }
}

#[test]
fn validate_json_reports_result_shape() {
    let output = workflow_factory()
        .args(["validate", "static-gh-pages", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert_eq!(parsed["valid"], true);
    assert_eq!(parsed["errors"].as_array().expect("errors").len(), 0);
    assert_eq!(parsed["warnings"].as_array().expect("warnings").len(), 0);
}

#[test]
fn help_lists_subcommands() {
    workflow_factory()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn version_prints_crate_version() {
    workflow_factory()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
