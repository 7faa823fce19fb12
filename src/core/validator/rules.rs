use super::{Finding, ParsedJob, ParsedStep, ParsedWorkflow, ValidationError, ValidationWarning};
use crate::core::types::{PermissionLevel, PermissionScope, SecretDef};
use indexmap::{IndexMap, IndexSet};
use regex::Regex;
use serde_yaml::Value;
use std::sync::OnceLock;

/// Action versions that defeat the point of pinning.
const UNSTABLE_VERSIONS: [&str; 3] = ["latest", "master", "main"];

/// Secret provided by the platform itself; always considered declared.
const IMPLICIT_SECRET: &str = "GITHUB_TOKEN";

/// Trigger events GitHub Actions understands. Anything else is tolerated but
/// flagged as an unknown event.
const KNOWN_EVENTS: [&str; 22] = [
    "push",
    "pull_request",
    "pull_request_target",
    "workflow_dispatch",
    "workflow_call",
    "schedule",
    "release",
    "create",
    "delete",
    "deployment",
    "issues",
    "issue_comment",
    "label",
    "milestone",
    "page_build",
    "project",
    "public",
    "registry_package",
    "repository_dispatch",
    "status",
    "watch",
    "fork",
];

fn is_known_event(event: &str) -> bool {
    KNOWN_EVENTS.contains(&event)
}

/// Treat missing, null, and empty-string values as absent.
fn is_blank(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

/// Check required top-level and per-job keys, step shape, and action pinning.
pub(crate) fn check_structure(
    workflow: &ParsedWorkflow,
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationWarning>,
) {
    if workflow.name.as_deref().unwrap_or_default().is_empty() {
        errors.push(Finding::new(
            "MISSING_NAME",
            "Workflow must have a name",
            Some("name".to_string()),
        ));
    }

    if is_blank(&workflow.on) {
        errors.push(Finding::new(
            "MISSING_TRIGGER",
            "Workflow must have at least one trigger (on)",
            Some("on".to_string()),
        ));
    }

    let jobs = match &workflow.jobs {
        Some(jobs) if !jobs.is_empty() => jobs,
        _ => {
            // No jobs at all: skip every per-job check.
            errors.push(Finding::new(
                "MISSING_JOBS",
                "Workflow must have at least one job",
                Some("jobs".to_string()),
            ));
            return;
        }
    };

    for (job_id, job) in jobs {
        check_job(job_id, job, errors, warnings);
    }
}

fn check_job(
    job_id: &str,
    job: &ParsedJob,
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationWarning>,
) {
    if is_blank(&job.runs_on) {
        errors.push(Finding::new(
            "MISSING_RUNS_ON",
            format!("Job \"{job_id}\" must specify runs-on"),
            Some(format!("jobs.{job_id}.runs-on")),
        ));
    }

    let steps = match &job.steps {
        Some(steps) if !steps.is_empty() => steps,
        _ => {
            errors.push(Finding::new(
                "MISSING_STEPS",
                format!("Job \"{job_id}\" must have at least one step"),
                Some(format!("jobs.{job_id}.steps")),
            ));
            return;
        }
    };

    for (index, step) in steps.iter().enumerate() {
        check_step(job_id, index, step, errors, warnings);
    }
}

fn check_step(
    job_id: &str,
    index: usize,
    step: &ParsedStep,
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationWarning>,
) {
    if step.uses.is_none() && step.run.is_none() {
        errors.push(Finding::new(
            "INVALID_STEP",
            format!(
                "Step {} in job \"{job_id}\" must have either 'uses' or 'run'",
                index + 1
            ),
            Some(format!("jobs.{job_id}.steps[{index}]")),
        ));
    }

    let Some(uses) = step.uses.as_deref() else {
        return;
    };

    // A pinned reference is <anything>@<version> with both halves non-empty.
    match uses.split_once('@') {
        Some((action, version)) if !action.is_empty() && !version.is_empty() => {
            if UNSTABLE_VERSIONS.contains(&version) {
                warnings.push(Finding::new(
                    "UNSTABLE_VERSION",
                    format!("Action \"{uses}\" uses unstable version \"{version}\""),
                    Some(format!("jobs.{job_id}.steps[{index}].uses")),
                ));
            }
        }
        _ => {
            warnings.push(Finding::new(
                "UNPINNED_ACTION",
                format!("Action \"{uses}\" should be pinned to a version"),
                Some(format!("jobs.{job_id}.steps[{index}].uses")),
            ));
        }
    }
}

fn secret_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{\{\s*secrets\.([A-Z_][A-Z0-9_]*)\s*\}\}")
            .expect("secret reference pattern is valid")
    })
}

/// Collect every referenced secret name from the raw YAML text, deduplicated
/// in first-seen order.
pub(crate) fn extract_secret_references(yaml: &str) -> Vec<String> {
    let mut names: IndexSet<String> = IndexSet::new();
    for captures in secret_pattern().captures_iter(yaml) {
        if let Some(name) = captures.get(1) {
            names.insert(name.as_str().to_string());
        }
    }
    names.into_iter().collect()
}

/// Audit secret references against the recipe's declared secrets.
///
/// This deliberately scans the serialized text rather than the parsed
/// structure: secret expressions buried in CLI argument strings have no
/// structured field to inspect.
pub(crate) fn audit_secrets(
    yaml: &str,
    declared_secrets: &[SecretDef],
    errors: &mut Vec<ValidationError>,
    warnings: &mut Vec<ValidationWarning>,
) {
    let referenced = extract_secret_references(yaml);

    for name in &referenced {
        let declared = name == IMPLICIT_SECRET
            || declared_secrets.iter().any(|secret| secret.name == *name);
        if !declared {
            errors.push(Finding::new(
                "UNDECLARED_SECRET",
                format!("Secret \"{name}\" is referenced but not declared in recipe metadata"),
                None,
            ));
        }
    }

    for secret in declared_secrets {
        if secret.name != IMPLICIT_SECRET && !referenced.contains(&secret.name) {
            warnings.push(Finding::new(
                "UNUSED_SECRET",
                format!(
                    "Secret \"{}\" is declared but not referenced in the workflow",
                    secret.name
                ),
                None,
            ));
        }
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => serde_yaml::to_string(other)
            .unwrap_or_default()
            .trim_end()
            .to_string(),
    }
}

fn check_permission_map(
    map: &IndexMap<String, Value>,
    path_prefix: &str,
    job_context: Option<&str>,
    errors: &mut Vec<ValidationError>,
) {
    for (scope, level) in map {
        if PermissionScope::parse(scope).is_none() {
            let message = match job_context {
                Some(job_id) => {
                    format!("Invalid permission scope in job \"{job_id}\": \"{scope}\"")
                }
                None => format!("Invalid permission scope: \"{scope}\""),
            };
            errors.push(Finding::new(
                "INVALID_PERMISSION_SCOPE",
                message,
                Some(format!("{path_prefix}.{scope}")),
            ));
        }

        let level_text = scalar_to_string(level);
        if PermissionLevel::parse(&level_text).is_none() {
            let message = match job_context {
                Some(job_id) => format!(
                    "Invalid permission level in job \"{job_id}\": \"{level_text}\""
                ),
                None => format!("Invalid permission level: \"{level_text}\" for scope \"{scope}\""),
            };
            errors.push(Finding::new(
                "INVALID_PERMISSION_LEVEL",
                message,
                Some(format!("{path_prefix}.{scope}")),
            ));
        }
    }
}

/// Audit workflow- and job-level permission maps against the fixed scope and
/// level enumerations. Scope and level are checked independently; one entry
/// can produce both errors.
pub(crate) fn audit_permissions(workflow: &ParsedWorkflow, errors: &mut Vec<ValidationError>) {
    if let Some(permissions) = &workflow.permissions {
        check_permission_map(permissions, "permissions", None, errors);
    }

    if let Some(jobs) = &workflow.jobs {
        for (job_id, job) in jobs {
            if let Some(permissions) = &job.permissions {
                check_permission_map(
                    permissions,
                    &format!("jobs.{job_id}.permissions"),
                    Some(job_id),
                    errors,
                );
            }
        }
    }
}

/// Audit the `on` value, supporting the single-event, event-list, and
/// event-mapping shorthand forms.
pub(crate) fn audit_triggers(workflow: &ParsedWorkflow, warnings: &mut Vec<ValidationWarning>) {
    let Some(on) = &workflow.on else {
        return;
    };

    match on {
        Value::String(event) => {
            if !is_known_event(event) {
                warnings.push(Finding::new(
                    "UNKNOWN_EVENT",
                    format!("Unknown trigger event: \"{event}\""),
                    Some("on".to_string()),
                ));
            }
        }
        Value::Sequence(events) => {
            for event in events.iter().filter_map(Value::as_str) {
                if !is_known_event(event) {
                    warnings.push(Finding::new(
                        "UNKNOWN_EVENT",
                        format!("Unknown trigger event: \"{event}\""),
                        Some("on".to_string()),
                    ));
                }
            }
        }
        Value::Mapping(events) => {
            for event in events.keys().filter_map(Value::as_str) {
                if !is_known_event(event) {
                    warnings.push(Finding::new(
                        "UNKNOWN_EVENT",
                        format!("Unknown trigger event: \"{event}\""),
                        Some(format!("on.{event}")),
                    ));
                }
            }

            let dangerous = events
                .keys()
                .filter_map(Value::as_str)
                .any(|event| event == "pull_request_target");
            if dangerous {
                warnings.push(Finding::new(
                    "DANGEROUS_TRIGGER",
                    "pull_request_target can be dangerous - ensure you understand the security implications",
                    Some("on.pull_request_target".to_string()),
                ));
            }
        }
        _ => {}
    }
}
