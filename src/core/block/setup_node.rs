use super::Block;
use crate::core::types::{BlockConfig, Fragment, PackageManager, Step};

pub const NODE_SETUP_ACTION: &str = "actions/setup-node@v4";
pub const PNPM_SETUP_ACTION: &str = "pnpm/action-setup@v3";
pub const DEFAULT_NODE_VERSION: &str = "20";
const PNPM_VERSION: i64 = 9;

fn pnpm_setup_step() -> Step {
    Step::action("Install pnpm", PNPM_SETUP_ACTION).input("version", PNPM_VERSION)
}

fn node_setup_step(node_version: &str, package_manager: PackageManager, cache: bool) -> Step {
    let mut step =
        Step::action("Set up Node.js", NODE_SETUP_ACTION).input("node-version", node_version);
    if cache {
        step = step.input("cache", package_manager.as_str());
    }
    step
}

/// Set up Node.js with optional dependency caching for npm/pnpm/yarn.
pub struct SetupNode;

impl Block for SetupNode {
    fn id(&self) -> &'static str {
        "setup-node"
    }

    fn name(&self) -> &'static str {
        "Setup Node.js"
    }

    fn description(&self) -> &'static str {
        "Set up Node.js with optional caching for npm/pnpm/yarn"
    }

    fn emit(&self, config: &BlockConfig) -> Fragment {
        let node_version = config
            .node_version
            .as_deref()
            .unwrap_or(DEFAULT_NODE_VERSION);
        let package_manager = config.package_manager.unwrap_or_default();
        let cache_enabled = config.cache_enabled.unwrap_or(true);

        let mut steps = Vec::new();

        // pnpm's own setup action must run before setup-node for cache
        // resolution to succeed.
        if package_manager == PackageManager::Pnpm {
            steps.push(pnpm_setup_step());
        }

        steps.push(node_setup_step(node_version, package_manager, cache_enabled));

        Fragment::from_steps(steps)
    }
}
