use super::{
    BlockRef, CommonFailure, Concurrency, JobConfig, PullRequestTrigger, PushTrigger, Recipe,
    RecipeMetadata, TriggerConfig,
};
use crate::core::types::{BlockConfig, DeployEnvironment, PackageManager};

fn node_setup_config() -> BlockConfig {
    BlockConfig {
        node_version: Some("20".into()),
        package_manager: Some(PackageManager::Npm),
        ..BlockConfig::default()
    }
}

/// Next.js to Vercel: PR preview deployments plus production deploys on main.
pub fn recipe() -> Recipe {
    Recipe {
        id: "nextjs-vercel".into(),
        slug: "nextjs-vercel".into(),
        name: "Next.js to Vercel".into(),
        description:
            "Deploy Next.js applications to Vercel with PR previews and production deployments"
                .into(),
        stack: vec!["nextjs".into(), "vercel".into(), "node".into()],
        triggers: TriggerConfig {
            push: Some(PushTrigger {
                branches: Some(vec!["main".into()]),
                ..PushTrigger::default()
            }),
            pull_request: Some(PullRequestTrigger {
                branches: Some(vec!["main".into()]),
                ..PullRequestTrigger::default()
            }),
            ..TriggerConfig::default()
        },
        concurrency: Some(Concurrency {
            group: "${{ github.workflow }}-${{ github.ref }}".into(),
            cancel_in_progress: Some(true),
        }),
        jobs: vec![
            JobConfig {
                id: "deploy-preview".into(),
                name: "Deploy Preview".into(),
                runs_on: "ubuntu-latest".into(),
                needs: Vec::new(),
                condition: Some("github.event_name == 'pull_request'".into()),
                environment: None,
                blocks: vec![
                    BlockRef::new("checkout"),
                    BlockRef::configured("setup-node", node_setup_config()),
                    BlockRef::configured(
                        "install-deps",
                        BlockConfig {
                            package_manager: Some(PackageManager::Npm),
                            ..BlockConfig::default()
                        },
                    ),
                    BlockRef::configured(
                        "deploy-vercel",
                        BlockConfig {
                            environment: Some(DeployEnvironment::Preview),
                            ..BlockConfig::default()
                        },
                    ),
                ],
            },
            JobConfig {
                id: "deploy-production".into(),
                name: "Deploy Production".into(),
                runs_on: "ubuntu-latest".into(),
                needs: Vec::new(),
                condition: Some(
                    "github.event_name == 'push' && github.ref == 'refs/heads/main'".into(),
                ),
                environment: Some("production".into()),
                blocks: vec![
                    BlockRef::new("checkout"),
                    BlockRef::configured("setup-node", node_setup_config()),
                    BlockRef::configured(
                        "install-deps",
                        BlockConfig {
                            package_manager: Some(PackageManager::Npm),
                            ..BlockConfig::default()
                        },
                    ),
                    BlockRef::configured(
                        "deploy-vercel",
                        BlockConfig {
                            environment: Some(DeployEnvironment::Production),
                            ..BlockConfig::default()
                        },
                    ),
                ],
            },
        ],
        metadata: RecipeMetadata {
            seo_title: "Deploy Next.js to Vercel with GitHub Actions".into(),
            seo_description:
                "Complete GitHub Actions workflow for deploying Next.js applications to Vercel with automatic PR previews and production deployments."
                    .into(),
            common_failures: vec![
                CommonFailure {
                    title: "VERCEL_TOKEN not set".into(),
                    description:
                        "The workflow fails with authentication error during deployment.".into(),
                    solution:
                        "Create a Vercel token at vercel.com/account/tokens and add it as a repository secret named VERCEL_TOKEN."
                            .into(),
                },
                CommonFailure {
                    title: "Missing VERCEL_ORG_ID or VERCEL_PROJECT_ID".into(),
                    description:
                        "Deployment fails with \"Project not found\" or similar error.".into(),
                    solution:
                        "Run `vercel link` locally to generate .vercel/project.json, then add the orgId and projectId as secrets."
                            .into(),
                },
                CommonFailure {
                    title: "Build fails with missing dependencies".into(),
                    description: "Next.js build fails due to missing packages.".into(),
                    solution:
                        "Ensure package-lock.json is committed and all dependencies are listed correctly in package.json."
                            .into(),
                },
            ],
            related_recipes: vec!["nextjs-cloudflare".into(), "react-vite-netlify".into()],
        },
    }
}
