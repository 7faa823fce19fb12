use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// GitHub Actions permission scopes recognized by the generator and validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionScope {
    Actions,
    Checks,
    Contents,
    Deployments,
    IdToken,
    Issues,
    Packages,
    Pages,
    PullRequests,
    SecurityEvents,
    Statuses,
}

impl PermissionScope {
    pub const ALL: [PermissionScope; 11] = [
        PermissionScope::Actions,
        PermissionScope::Checks,
        PermissionScope::Contents,
        PermissionScope::Deployments,
        PermissionScope::IdToken,
        PermissionScope::Issues,
        PermissionScope::Packages,
        PermissionScope::Pages,
        PermissionScope::PullRequests,
        PermissionScope::SecurityEvents,
        PermissionScope::Statuses,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionScope::Actions => "actions",
            PermissionScope::Checks => "checks",
            PermissionScope::Contents => "contents",
            PermissionScope::Deployments => "deployments",
            PermissionScope::IdToken => "id-token",
            PermissionScope::Issues => "issues",
            PermissionScope::Packages => "packages",
            PermissionScope::Pages => "pages",
            PermissionScope::PullRequests => "pull-requests",
            PermissionScope::SecurityEvents => "security-events",
            PermissionScope::Statuses => "statuses",
        }
    }

    /// Resolve a scope from its workflow-file spelling.
    pub fn parse(value: &str) -> Option<PermissionScope> {
        PermissionScope::ALL
            .iter()
            .copied()
            .find(|scope| scope.as_str() == value)
    }
}

impl fmt::Display for PermissionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permission access levels, ordered `none < read < write`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    None,
    Read,
    Write,
}

impl PermissionLevel {
    /// Ordering rank used when merging duplicate scopes; higher wins.
    pub fn rank(&self) -> u8 {
        match self {
            PermissionLevel::None => 0,
            PermissionLevel::Read => 1,
            PermissionLevel::Write => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionLevel::None => "none",
            PermissionLevel::Read => "read",
            PermissionLevel::Write => "write",
        }
    }

    pub fn parse(value: &str) -> Option<PermissionLevel> {
        match value {
            "none" => Some(PermissionLevel::None),
            "read" => Some(PermissionLevel::Read),
            "write" => Some(PermissionLevel::Write),
            _ => None,
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Package managers supported by the node-oriented blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Prefix used to invoke a package.json script.
    pub fn run_prefix(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm run",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
        }
    }

    /// Lockfile-respecting install command.
    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm ci",
            PackageManager::Pnpm => "pnpm install --frozen-lockfile",
            PackageManager::Yarn => "yarn install --frozen-lockfile",
        }
    }
}

/// Deployment target environment for deploy blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployEnvironment {
    Preview,
    Production,
}

/// A secret a block expects the repository to provide. Identity is the name;
/// duplicates are collapsed first-write-wins at merge time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretDef {
    pub name: String,
    pub description: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// A permission requirement declared by a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDef {
    pub scope: PermissionScope,
    pub level: PermissionLevel,
    pub reason: String,
}

/// Advisory signals a block can declare. These only produce human-readable
/// notes; nothing enforces them structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstraintKind {
    RequiresDocker,
    RequiresTagTrigger,
    RequiresSubdirectory,
    RequiresSecrets,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    #[serde(rename = "type")]
    pub kind: ConstraintKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Constraint {
    pub fn new(kind: ConstraintKind) -> Self {
        Self { kind, value: None }
    }

    pub fn with_value(kind: ConstraintKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: Some(value.into()),
        }
    }
}

/// Scalar value accepted in a step's `with` map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WithValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl From<bool> for WithValue {
    fn from(value: bool) -> Self {
        WithValue::Bool(value)
    }
}

impl From<i64> for WithValue {
    fn from(value: i64) -> Self {
        WithValue::Int(value)
    }
}

impl From<&str> for WithValue {
    fn from(value: &str) -> Self {
        WithValue::Str(value.to_string())
    }
}

impl From<String> for WithValue {
    fn from(value: String) -> Self {
        WithValue::Str(value)
    }
}

/// One executable unit within a job. Either `uses` or `run` must be present;
/// the validator flags steps that carry neither.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub with: IndexMap<String, WithValue>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub env: IndexMap<String, String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(
        rename = "working-directory",
        skip_serializing_if = "Option::is_none"
    )]
    pub working_directory: Option<String>,
}

impl Step {
    /// Step that invokes an external action.
    pub fn action(name: impl Into<String>, uses: impl Into<String>) -> Self {
        Step {
            name: Some(name.into()),
            uses: Some(uses.into()),
            ..Step::default()
        }
    }

    /// Step that runs a shell command.
    pub fn command(name: impl Into<String>, run: impl Into<String>) -> Self {
        Step {
            name: Some(name.into()),
            run: Some(run.into()),
            ..Step::default()
        }
    }

    pub fn input(mut self, key: impl Into<String>, value: impl Into<WithValue>) -> Self {
        self.with.insert(key.into(), value.into());
        self
    }

    pub fn step_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set working-directory when a directory is configured.
    pub fn in_dir(mut self, dir: Option<&String>) -> Self {
        self.working_directory = dir.cloned();
        self
    }
}

/// Output of a single block invocation: steps plus an optional env overlay,
/// not yet merged into a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub env: IndexMap<String, String>,
}

impl Fragment {
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Fragment {
            steps,
            env: IndexMap::new(),
        }
    }
}

/// Sparse per-block configuration. Every field is optional; each block applies
/// its own named defaults inside `emit`, so emitting with `BlockConfig::default()`
/// never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockConfig {
    // Common options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    // Node-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<PackageManager>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_enabled: Option<bool>,

    // Docker-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dockerfile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_enabled: Option<bool>,

    // Deploy-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<DeployEnvironment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    // Script-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lint_command: Option<String>,
}
