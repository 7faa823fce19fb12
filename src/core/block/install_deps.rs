use super::Block;
use crate::core::types::{BlockConfig, Fragment, Step};

/// Install project dependencies with the configured package manager's
/// lockfile-respecting command.
pub struct InstallDeps;

impl Block for InstallDeps {
    fn id(&self) -> &'static str {
        "install-deps"
    }

    fn name(&self) -> &'static str {
        "Install Dependencies"
    }

    fn description(&self) -> &'static str {
        "Install project dependencies using the detected package manager"
    }

    fn emit(&self, config: &BlockConfig) -> Fragment {
        let package_manager = config.package_manager.unwrap_or_default();
        let step = Step::command("Install dependencies", package_manager.install_command())
            .in_dir(config.working_directory.as_ref());
        Fragment::from_steps(vec![step])
    }
}
