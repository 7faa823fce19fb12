use super::Block;
use crate::core::types::{BlockConfig, Fragment, PackageManager, Step};

pub const DEFAULT_BUILD_SCRIPT: &str = "build";
pub const DEFAULT_LINT_SCRIPT: &str = "lint";
pub const DEFAULT_TEST_SCRIPT: &str = "test";

/// Resolve the command for a script-running step. A configured command that
/// contains a space is treated as already complete and used verbatim;
/// otherwise it is a script name invoked through the package manager's run
/// prefix. Recipes depend on this exact heuristic.
fn script_command(
    configured: Option<&str>,
    default_script: &str,
    package_manager: PackageManager,
) -> String {
    let script = configured.unwrap_or(default_script);
    if script.contains(' ') {
        script.to_string()
    } else {
        format!("{} {}", package_manager.run_prefix(), script)
    }
}

fn script_step(name: &str, command: String, config: &BlockConfig) -> Fragment {
    let step = Step::command(name, command).in_dir(config.working_directory.as_ref());
    Fragment::from_steps(vec![step])
}

/// Run the project's build command.
pub struct Build;

impl Block for Build {
    fn id(&self) -> &'static str {
        "build"
    }

    fn name(&self) -> &'static str {
        "Build"
    }

    fn description(&self) -> &'static str {
        "Run the build command"
    }

    fn emit(&self, config: &BlockConfig) -> Fragment {
        let command = script_command(
            config.build_command.as_deref(),
            DEFAULT_BUILD_SCRIPT,
            config.package_manager.unwrap_or_default(),
        );
        script_step("Build", command, config)
    }
}

/// Run the project's lint command.
pub struct Lint;

impl Block for Lint {
    fn id(&self) -> &'static str {
        "lint"
    }

    fn name(&self) -> &'static str {
        "Lint"
    }

    fn description(&self) -> &'static str {
        "Run the lint command"
    }

    fn emit(&self, config: &BlockConfig) -> Fragment {
        let command = script_command(
            config.lint_command.as_deref(),
            DEFAULT_LINT_SCRIPT,
            config.package_manager.unwrap_or_default(),
        );
        script_step("Lint", command, config)
    }
}

/// Run the project's test command.
pub struct Test;

impl Block for Test {
    fn id(&self) -> &'static str {
        "test"
    }

    fn name(&self) -> &'static str {
        "Test"
    }

    fn description(&self) -> &'static str {
        "Run the test command"
    }

    fn emit(&self, config: &BlockConfig) -> Fragment {
        let command = script_command(
            config.test_command.as_deref(),
            DEFAULT_TEST_SCRIPT,
            config.package_manager.unwrap_or_default(),
        );
        script_step("Test", command, config)
    }
}
