use crate::core::types::{BlockConfig, Constraint, Fragment, PermissionDef, SecretDef};
use indexmap::IndexMap;
use std::sync::OnceLock;

pub mod checkout;
pub mod deploy_gh_pages;
pub mod deploy_vercel;
pub mod docker_buildx;
pub mod install_deps;
pub mod run_script;
pub mod setup_node;

pub use checkout::Checkout;
pub use deploy_gh_pages::DeployGhPages;
pub use deploy_vercel::DeployVercel;
pub use docker_buildx::DockerBuildx;
pub use install_deps::InstallDeps;
pub use run_script::{Build, Lint, Test};
pub use setup_node::SetupNode;

/// Contract implemented by every pipeline block.
///
/// A block is a stateless, pure function of configuration to a YAML fragment
/// plus declared side-effect metadata. The same instance is reused across all
/// recipes; the registry owns it for the process lifetime.
pub trait Block: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Produce this block's steps for the given configuration. Every
    /// configuration field is optional and defaults are applied here, so
    /// emitting with `BlockConfig::default()` always succeeds.
    fn emit(&self, config: &BlockConfig) -> Fragment;

    /// Secrets the emitted steps reference.
    fn secrets(&self) -> Vec<SecretDef> {
        Vec::new()
    }

    /// Permissions the emitted steps need.
    fn permissions(&self) -> Vec<PermissionDef> {
        Vec::new()
    }

    /// Advisory constraints, surfaced to users as notes.
    fn constraints(&self) -> Vec<Constraint> {
        Vec::new()
    }
}

/// Immutable lookup table from block id to implementation. Built once at
/// startup; no mutation after registration.
pub struct BlockRegistry {
    blocks: IndexMap<&'static str, Box<dyn Block>>,
}

impl BlockRegistry {
    /// Registry populated with every built-in block.
    pub fn with_built_ins() -> Self {
        let mut registry = BlockRegistry {
            blocks: IndexMap::new(),
        };
        registry.register(Box::new(Checkout));
        registry.register(Box::new(SetupNode));
        registry.register(Box::new(InstallDeps));
        registry.register(Box::new(Build));
        registry.register(Box::new(Lint));
        registry.register(Box::new(Test));
        registry.register(Box::new(DeployVercel));
        registry.register(Box::new(DockerBuildx));
        registry.register(Box::new(DeployGhPages));
        registry
    }

    fn register(&mut self, block: Box<dyn Block>) {
        self.blocks.insert(block.id(), block);
    }

    pub fn get(&self, id: &str) -> Option<&dyn Block> {
        self.blocks.get(id).map(Box::as_ref)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.blocks.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Process-wide registry of built-in blocks.
pub fn built_in() -> &'static BlockRegistry {
    static REGISTRY: OnceLock<BlockRegistry> = OnceLock::new();
    REGISTRY.get_or_init(BlockRegistry::with_built_ins)
}
