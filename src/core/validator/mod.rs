use crate::core::generator::GeneratorOutput;
use crate::core::types::SecretDef;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

pub mod rules;

/// Individual validation finding. `code` values are a stable public contract
/// consumed by callers and tests; they must not be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Finding {
    pub fn new(code: impl Into<String>, message: impl Into<String>, path: Option<String>) -> Self {
        Finding {
            code: code.into(),
            message: message.into(),
            path,
        }
    }
}

/// Findings that make the workflow invalid.
pub type ValidationError = Finding;
/// Advisory findings; never affect validity.
pub type ValidationWarning = Finding;

/// Aggregate result of one validation pass. Invariant:
/// `valid == errors.is_empty()`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// Lenient structural model the YAML is re-parsed into. Only the keys the
/// audits look at are modeled; everything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ParsedWorkflow {
    name: Option<String>,
    on: Option<Value>,
    permissions: Option<IndexMap<String, Value>>,
    jobs: Option<IndexMap<String, ParsedJob>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ParsedJob {
    #[serde(rename = "runs-on")]
    runs_on: Option<Value>,
    steps: Option<Vec<ParsedStep>>,
    permissions: Option<IndexMap<String, Value>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ParsedStep {
    uses: Option<String>,
    run: Option<String>,
}

/// Validate a generated workflow against its recipe's declared secrets.
pub fn validate_workflow(output: &GeneratorOutput) -> ValidationResult {
    validate_yaml(&output.yaml, &output.secrets)
}

/// Validate raw workflow text against a set of declared secrets.
///
/// Single pass, stateless: parse, then structural check, secrets audit,
/// permissions audit, triggers audit. Findings are appended in exactly that
/// order, with jobs and steps visited in document declaration order.
pub fn validate_yaml(yaml: &str, declared_secrets: &[SecretDef]) -> ValidationResult {
    let workflow: ParsedWorkflow = match serde_yaml::from_str(yaml) {
        Ok(parsed) => parsed,
        Err(err) => {
            // Unparseable YAML short-circuits every other check.
            return ValidationResult {
                valid: false,
                errors: vec![Finding::new(
                    "INVALID_YAML",
                    format!("Failed to parse YAML: {err}"),
                    None,
                )],
                warnings: Vec::new(),
            };
        }
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    rules::check_structure(&workflow, &mut errors, &mut warnings);
    rules::audit_secrets(yaml, declared_secrets, &mut errors, &mut warnings);
    rules::audit_permissions(&workflow, &mut errors);
    rules::audit_triggers(&workflow, &mut warnings);

    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Quick check that a document is parseable YAML at all.
pub fn is_valid_yaml(yaml: &str) -> bool {
    serde_yaml::from_str::<Value>(yaml).is_ok()
}
