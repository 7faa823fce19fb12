use super::{
    BlockRef, CommonFailure, Concurrency, JobConfig, PullRequestTrigger, PushTrigger, Recipe,
    RecipeMetadata, TriggerConfig,
};
use crate::core::types::BlockConfig;

/// Node.js Docker to GHCR: multi-platform buildx image push on main and tags.
pub fn recipe() -> Recipe {
    Recipe {
        id: "node-docker-ghcr".into(),
        slug: "node-docker-ghcr".into(),
        name: "Node.js Docker to GHCR".into(),
        description:
            "Build and push Node.js Docker images to GitHub Container Registry using buildx"
                .into(),
        stack: vec!["node".into(), "docker".into(), "ghcr".into()],
        triggers: TriggerConfig {
            push: Some(PushTrigger {
                branches: Some(vec!["main".into()]),
                tags: Some(vec!["v*.*.*".into()]),
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
        jobs: vec![JobConfig {
            id: "build-and-push".into(),
            name: "Build and Push Docker Image".into(),
            runs_on: "ubuntu-latest".into(),
            needs: Vec::new(),
            condition: None,
            environment: None,
            blocks: vec![
                BlockRef::new("checkout"),
                BlockRef::configured(
                    "docker-buildx",
                    BlockConfig {
                        registry: Some("ghcr.io".into()),
                        image_name: Some("${{ github.repository }}".into()),
                        platforms: Some(vec!["linux/amd64".into(), "linux/arm64".into()]),
                        push_enabled: Some(true),
                        ..BlockConfig::default()
                    },
                ),
            ],
        }],
        metadata: RecipeMetadata {
            seo_title: "Build Node.js Docker Images and Push to GHCR with GitHub Actions".into(),
            seo_description:
                "Complete GitHub Actions workflow for building multi-platform Node.js Docker images with buildx and pushing to GitHub Container Registry (GHCR)."
                    .into(),
            common_failures: vec![
                CommonFailure {
                    title: "Permission denied pushing to GHCR".into(),
                    description:
                        "The workflow fails with 403 or permission denied when pushing the image."
                            .into(),
                    solution:
                        "Ensure the workflow has `packages: write` permission. Check that GITHUB_TOKEN has access to the container registry."
                            .into(),
                },
                CommonFailure {
                    title: "Build fails with Dockerfile not found".into(),
                    description: "Docker build cannot find the Dockerfile.".into(),
                    solution:
                        "Ensure Dockerfile exists in the repository root, or update the `file` parameter to point to the correct location."
                            .into(),
                },
                CommonFailure {
                    title: "Multi-platform build is slow".into(),
                    description: "ARM64 builds take a long time due to emulation.".into(),
                    solution:
                        "Consider using self-hosted ARM runners for native builds, or remove arm64 platform if not needed."
                            .into(),
                },
                CommonFailure {
                    title: "Image tag is \"unknown\"".into(),
                    description: "The pushed image has an unknown or empty tag.".into(),
                    solution:
                        "Ensure you are pushing on a branch or tag that matches the metadata-action patterns. Check the git ref being used."
                            .into(),
                },
            ],
            related_recipes: vec!["go-docker-ghcr".into(), "node-aws-ecs".into()],
        },
    }
}
