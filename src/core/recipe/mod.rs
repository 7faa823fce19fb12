use crate::core::types::BlockConfig;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::OnceLock;

mod nextjs_vercel;
mod node_docker_ghcr;
mod static_gh_pages;

/// Push trigger filters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PushTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,
    #[serde(rename = "paths-ignore", skip_serializing_if = "Option::is_none")]
    pub paths_ignore: Option<Vec<String>>,
}

/// Pull-request trigger filters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PullRequestTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branches: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<Vec<String>>,
    #[serde(rename = "paths-ignore", skip_serializing_if = "Option::is_none")]
    pub paths_ignore: Option<Vec<String>>,
}

/// Manual-dispatch trigger; serializes as `workflow_dispatch: {}` when no
/// inputs are declared.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkflowDispatchTrigger {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub inputs: IndexMap<String, DispatchInput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchInput {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<DispatchInputType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchInputType {
    String,
    Boolean,
    Choice,
}

/// Release trigger filters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReleaseTrigger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
}

/// Union of the trigger events a recipe can declare; serialized verbatim as
/// the workflow's `on` mapping.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TriggerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push: Option<PushTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_dispatch: Option<WorkflowDispatchTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<ReleaseTrigger>,
}

/// Workflow concurrency policy, carried through verbatim from the recipe.
#[derive(Debug, Clone, Serialize)]
pub struct Concurrency {
    pub group: String,
    #[serde(rename = "cancel-in-progress", skip_serializing_if = "Option::is_none")]
    pub cancel_in_progress: Option<bool>,
}

/// Reference to a block within a job, with optional configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRef {
    pub block_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BlockConfig>,
}

impl BlockRef {
    pub fn new(block_id: impl Into<String>) -> Self {
        BlockRef {
            block_id: block_id.into(),
            config: None,
        }
    }

    pub fn configured(block_id: impl Into<String>, config: BlockConfig) -> Self {
        BlockRef {
            block_id: block_id.into(),
            config: Some(config),
        }
    }
}

/// Declarative job definition: an ordered list of block references plus the
/// job-level keys carried into the compiled document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfig {
    pub id: String,
    pub name: String,
    pub runs_on: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub needs: Vec<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    pub blocks: Vec<BlockRef>,
}

/// Troubleshooting entry surfaced alongside a generated workflow.
#[derive(Debug, Clone, Serialize)]
pub struct CommonFailure {
    pub title: String,
    pub description: String,
    pub solution: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeMetadata {
    pub seo_title: String,
    pub seo_description: String,
    pub common_failures: Vec<CommonFailure>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_recipes: Vec<String>,
}

/// A complete, named pipeline definition. Static data: loaded once at process
/// start and read-only thereafter.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub stack: Vec<String>,
    pub triggers: TriggerConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<Concurrency>,
    pub jobs: Vec<JobConfig>,
    pub metadata: RecipeMetadata,
}

/// Built-in recipe catalog, constructed once.
pub fn all() -> &'static [Recipe] {
    static CATALOG: OnceLock<Vec<Recipe>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            nextjs_vercel::recipe(),
            node_docker_ghcr::recipe(),
            static_gh_pages::recipe(),
        ]
    })
}

/// Look up a recipe by id or slug.
pub fn find(id_or_slug: &str) -> Option<&'static Recipe> {
    all()
        .iter()
        .find(|recipe| recipe.id == id_or_slug || recipe.slug == id_or_slug)
}
