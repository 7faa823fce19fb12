use super::{
    BlockRef, CommonFailure, Concurrency, JobConfig, PushTrigger, Recipe, RecipeMetadata,
    TriggerConfig, WorkflowDispatchTrigger,
};
use crate::core::types::{BlockConfig, PackageManager};

/// Static site to GitHub Pages: build on push, deploy via the Pages actions.
pub fn recipe() -> Recipe {
    Recipe {
        id: "static-gh-pages".into(),
        slug: "static-gh-pages".into(),
        name: "Static Site to GitHub Pages".into(),
        description:
            "Deploy static HTML/CSS/JS files to GitHub Pages with automatic deployment on push"
                .into(),
        stack: vec!["static".into(), "github-pages".into()],
        triggers: TriggerConfig {
            push: Some(PushTrigger {
                branches: Some(vec!["main".into()]),
                ..PushTrigger::default()
            }),
            workflow_dispatch: Some(WorkflowDispatchTrigger::default()),
            ..TriggerConfig::default()
        },
        concurrency: Some(Concurrency {
            group: "pages".into(),
            cancel_in_progress: Some(false),
        }),
        jobs: vec![
            JobConfig {
                id: "build".into(),
                name: "Build".into(),
                runs_on: "ubuntu-latest".into(),
                needs: Vec::new(),
                condition: None,
                environment: None,
                blocks: vec![
                    BlockRef::new("checkout"),
                    BlockRef::configured(
                        "setup-node",
                        BlockConfig {
                            node_version: Some("20".into()),
                            package_manager: Some(PackageManager::Npm),
                            ..BlockConfig::default()
                        },
                    ),
                    BlockRef::configured(
                        "install-deps",
                        BlockConfig {
                            package_manager: Some(PackageManager::Npm),
                            ..BlockConfig::default()
                        },
                    ),
                    BlockRef::configured(
                        "build",
                        BlockConfig {
                            package_manager: Some(PackageManager::Npm),
                            ..BlockConfig::default()
                        },
                    ),
                ],
            },
            JobConfig {
                id: "deploy".into(),
                name: "Deploy".into(),
                runs_on: "ubuntu-latest".into(),
                needs: vec!["build".into()],
                condition: None,
                environment: Some("github-pages".into()),
                blocks: vec![BlockRef::configured(
                    "deploy-gh-pages",
                    BlockConfig {
                        working_directory: Some("./dist".into()),
                        ..BlockConfig::default()
                    },
                )],
            },
        ],
        metadata: RecipeMetadata {
            seo_title: "Deploy Static Site to GitHub Pages with GitHub Actions".into(),
            seo_description:
                "Complete GitHub Actions workflow for deploying static HTML, CSS, and JavaScript sites to GitHub Pages with automatic deployments."
                    .into(),
            common_failures: vec![
                CommonFailure {
                    title: "Pages not enabled".into(),
                    description:
                        "Deployment fails because GitHub Pages is not enabled for the repository."
                            .into(),
                    solution:
                        "Go to repository Settings > Pages and enable GitHub Pages. Select \"GitHub Actions\" as the source."
                            .into(),
                },
                CommonFailure {
                    title: "Permission denied".into(),
                    description:
                        "The workflow fails with permission errors during deployment.".into(),
                    solution:
                        "Ensure the workflow has `pages: write` and `id-token: write` permissions."
                            .into(),
                },
                CommonFailure {
                    title: "Wrong output directory".into(),
                    description: "The deployed site shows 404 or wrong content.".into(),
                    solution:
                        "Verify that your build outputs to the directory specified in the upload-pages-artifact step (default: ./dist)."
                            .into(),
                },
                CommonFailure {
                    title: "Build artifacts not found".into(),
                    description:
                        "Deploy job fails because it cannot find build artifacts.".into(),
                    solution:
                        "Ensure the build job completes successfully and the artifact path is correct."
                            .into(),
                },
            ],
            related_recipes: vec!["react-vite-netlify".into(), "nextjs-vercel".into()],
        },
    }
}
