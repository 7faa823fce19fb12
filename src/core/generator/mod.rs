use crate::core::block::{self, BlockRegistry};
use crate::core::error::GeneratorError;
use crate::core::recipe::{Concurrency, JobConfig, Recipe, TriggerConfig};
use crate::core::types::{
    ConstraintKind, PermissionDef, PermissionLevel, PermissionScope, SecretDef, Step,
};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// Note attached to any recipe using a docker-constrained block.
const DOCKER_NOTE: &str = "This workflow requires Docker to be available";

/// Serialized form of a single workflow job. Optional keys are omitted from
/// the document entirely, never emitted as null or empty.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowJob {
    pub name: String,
    #[serde(rename = "runs-on")]
    pub runs_on: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs: Option<Vec<String>>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub env: IndexMap<String, String>,
    pub steps: Vec<Step>,
}

/// Complete workflow document in serialization order. The `permissions` key
/// disappears when no block declared any, which means the workflow inherits
/// GitHub's default permissions; the validator surfaces that as-is.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowDocument {
    pub name: String,
    pub on: TriggerConfig,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub permissions: IndexMap<PermissionScope, PermissionLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<Concurrency>,
    pub jobs: IndexMap<String, WorkflowJob>,
}

/// Everything a caller needs from one generation pass: the serialized YAML,
/// the merged secret and permission requirements, advisory notes, and the
/// source recipe. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorOutput {
    pub yaml: String,
    pub secrets: Vec<SecretDef>,
    pub permissions: Vec<PermissionDef>,
    pub notes: Vec<String>,
    pub recipe: Recipe,
}

/// Result of compiling one job before cross-job merging.
#[derive(Debug, Clone)]
pub struct CompiledJob {
    pub job: WorkflowJob,
    pub secrets: Vec<SecretDef>,
    pub permissions: Vec<PermissionDef>,
    pub notes: Vec<String>,
}

/// Flatten secret lists in encounter order; the first definition of a given
/// name wins and is kept verbatim, later duplicates are discarded silently.
pub fn merge_secrets(lists: &[Vec<SecretDef>]) -> Vec<SecretDef> {
    let mut merged: IndexMap<&str, &SecretDef> = IndexMap::new();
    for list in lists {
        for secret in list {
            merged.entry(secret.name.as_str()).or_insert(secret);
        }
    }
    merged.into_values().cloned().collect()
}

/// Flatten permission lists in encounter order; for each scope the entry with
/// the highest level is retained. Ties at the maximal level keep the first
/// entry encountered, including its reason text.
pub fn merge_permissions(lists: &[Vec<PermissionDef>]) -> Vec<PermissionDef> {
    let mut merged: IndexMap<PermissionScope, PermissionDef> = IndexMap::new();
    for list in lists {
        for permission in list {
            match merged.get(&permission.scope) {
                Some(existing) if permission.level.rank() <= existing.level.rank() => {}
                // IndexMap keeps the original insertion position on overwrite,
                // so scope ordering stays first-seen.
                _ => {
                    merged.insert(permission.scope, permission.clone());
                }
            }
        }
    }
    merged.into_values().collect()
}

fn dedup_notes(notes: Vec<String>) -> Vec<String> {
    notes
        .into_iter()
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

/// Compile one job: expand its block references in declared order, merge env
/// maps, and collect per-job secret/permission/note metadata.
pub fn compile_job(
    registry: &BlockRegistry,
    job_config: &JobConfig,
) -> Result<CompiledJob, GeneratorError> {
    let mut steps = Vec::new();
    let mut job_env: IndexMap<String, String> = IndexMap::new();
    let mut secret_lists: Vec<Vec<SecretDef>> = Vec::new();
    let mut permission_lists: Vec<Vec<PermissionDef>> = Vec::new();
    let mut notes = Vec::new();

    for block_ref in &job_config.blocks {
        let block = registry
            .get(&block_ref.block_id)
            .ok_or_else(|| GeneratorError::UnknownBlock(block_ref.block_id.clone()))?;

        let config = block_ref.config.clone().unwrap_or_default();
        let fragment = block.emit(&config);

        // Steps are appended exactly as emitted, never reordered or deduplicated.
        steps.extend(fragment.steps);

        // Shallow merge: later blocks overwrite earlier keys.
        for (key, value) in fragment.env {
            job_env.insert(key, value);
        }

        secret_lists.push(block.secrets());
        permission_lists.push(block.permissions());

        for constraint in block.constraints() {
            match constraint.kind {
                ConstraintKind::RequiresSecrets => {
                    let value = constraint.value.as_deref().unwrap_or_default();
                    notes.push(format!("Requires secrets: {value}"));
                }
                ConstraintKind::RequiresDocker => notes.push(DOCKER_NOTE.to_string()),
                // Reserved: no note yet for tag-trigger/subdirectory constraints.
                ConstraintKind::RequiresTagTrigger | ConstraintKind::RequiresSubdirectory => {}
            }
        }
    }

    let job = WorkflowJob {
        name: job_config.name.clone(),
        runs_on: job_config.runs_on.clone(),
        needs: if job_config.needs.is_empty() {
            None
        } else {
            Some(job_config.needs.clone())
        },
        condition: job_config.condition.clone(),
        environment: job_config.environment.clone(),
        env: job_env,
        steps,
    };

    Ok(CompiledJob {
        job,
        secrets: merge_secrets(&secret_lists),
        permissions: merge_permissions(&permission_lists),
        notes: dedup_notes(notes),
    })
}

/// Compile a recipe into a complete, serialized workflow document.
///
/// The only fatal condition is an unresolvable block id; everything optional
/// degrades through per-block defaults. Serialization goes through serde_yaml,
/// which emits no anchors, no forced line wrapping, and quotes scalars only
/// when syntax requires it -- the validator's secret scanner depends on the
/// literal `${{ secrets.NAME }}` text surviving unescaped.
pub fn generate_workflow(recipe: &Recipe) -> Result<GeneratorOutput, GeneratorError> {
    let registry = block::built_in();

    let mut jobs: IndexMap<String, WorkflowJob> = IndexMap::new();
    let mut secret_lists: Vec<Vec<SecretDef>> = Vec::new();
    let mut permission_lists: Vec<Vec<PermissionDef>> = Vec::new();
    let mut notes = Vec::new();

    for job_config in &recipe.jobs {
        let compiled = compile_job(registry, job_config)?;
        jobs.insert(job_config.id.clone(), compiled.job);
        secret_lists.push(compiled.secrets);
        permission_lists.push(compiled.permissions);
        notes.extend(compiled.notes);
    }

    // Second merge pass over the per-job results, same semantics.
    let merged_secrets = merge_secrets(&secret_lists);
    let merged_permissions = merge_permissions(&permission_lists);

    let document = WorkflowDocument {
        name: recipe.name.clone(),
        on: recipe.triggers.clone(),
        permissions: merged_permissions
            .iter()
            .map(|permission| (permission.scope, permission.level))
            .collect(),
        concurrency: recipe.concurrency.clone(),
        jobs,
    };

    let yaml = serde_yaml::to_string(&document)?;
    tracing::debug!(recipe = %recipe.id, bytes = yaml.len(), "compiled workflow document");

    Ok(GeneratorOutput {
        yaml,
        secrets: merged_secrets,
        permissions: merged_permissions,
        notes: dedup_notes(notes),
        recipe: recipe.clone(),
    })
}
