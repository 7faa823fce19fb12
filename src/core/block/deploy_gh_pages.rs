use super::Block;
use crate::core::types::{
    BlockConfig, Fragment, PermissionDef, PermissionLevel, PermissionScope, Step,
};

pub const DEFAULT_ARTIFACT_PATH: &str = "./dist";

/// Deploy static files to GitHub Pages: configure, upload artifact, deploy.
pub struct DeployGhPages;

impl Block for DeployGhPages {
    fn id(&self) -> &'static str {
        "deploy-gh-pages"
    }

    fn name(&self) -> &'static str {
        "Deploy to GitHub Pages"
    }

    fn description(&self) -> &'static str {
        "Deploy static files to GitHub Pages"
    }

    fn emit(&self, config: &BlockConfig) -> Fragment {
        let artifact_path = config
            .working_directory
            .as_deref()
            .unwrap_or(DEFAULT_ARTIFACT_PATH);

        let steps = vec![
            Step::action("Setup Pages", "actions/configure-pages@v4"),
            Step::action("Upload artifact", "actions/upload-pages-artifact@v3")
                .input("path", artifact_path),
            Step::action("Deploy to GitHub Pages", "actions/deploy-pages@v4")
                .step_id("deployment"),
        ];

        Fragment::from_steps(steps)
    }

    fn permissions(&self) -> Vec<PermissionDef> {
        vec![
            PermissionDef {
                scope: PermissionScope::Contents,
                level: PermissionLevel::Read,
                reason: "Required to checkout repository".to_string(),
            },
            PermissionDef {
                scope: PermissionScope::Pages,
                level: PermissionLevel::Write,
                reason: "Required to deploy to GitHub Pages".to_string(),
            },
            PermissionDef {
                scope: PermissionScope::IdToken,
                level: PermissionLevel::Write,
                reason: "Required for GitHub Pages deployment verification".to_string(),
            },
        ]
    }
}
