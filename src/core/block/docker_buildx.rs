use super::Block;
use crate::core::types::{
    BlockConfig, Constraint, ConstraintKind, Fragment, PermissionDef, PermissionLevel,
    PermissionScope, SecretDef, Step,
};

pub const DEFAULT_REGISTRY: &str = "ghcr.io";
pub const DEFAULT_IMAGE_NAME: &str = "${{ github.repository }}";
pub const DEFAULT_DOCKERFILE: &str = "Dockerfile";
pub const DEFAULT_CONTEXT: &str = ".";
pub const DEFAULT_PLATFORM: &str = "linux/amd64";

/// Tag patterns fed to docker/metadata-action, newline-joined: branch, PR,
/// semver (full and major.minor) and commit sha.
const METADATA_TAG_PATTERNS: [&str; 5] = [
    "type=ref,event=branch",
    "type=ref,event=pr",
    "type=semver,pattern={{version}}",
    "type=semver,pattern={{major}}.{{minor}}",
    "type=sha",
];

/// Build and push a multi-platform Docker image with buildx, logging in to
/// the registry with the platform-provided GITHUB_TOKEN.
pub struct DockerBuildx;

impl Block for DockerBuildx {
    fn id(&self) -> &'static str {
        "docker-buildx"
    }

    fn name(&self) -> &'static str {
        "Docker Buildx"
    }

    fn description(&self) -> &'static str {
        "Build and push Docker image using buildx with GHCR login"
    }

    fn emit(&self, config: &BlockConfig) -> Fragment {
        let registry = config.registry.as_deref().unwrap_or(DEFAULT_REGISTRY);
        let image_name = config.image_name.as_deref().unwrap_or(DEFAULT_IMAGE_NAME);
        let dockerfile = config.dockerfile.as_deref().unwrap_or(DEFAULT_DOCKERFILE);
        let context = config.context.as_deref().unwrap_or(DEFAULT_CONTEXT);
        let platforms = config
            .platforms
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_PLATFORM.to_string()]);
        let push_enabled = config.push_enabled.unwrap_or(true);

        let steps = vec![
            Step::action("Set up QEMU", "docker/setup-qemu-action@v3"),
            Step::action("Set up Docker Buildx", "docker/setup-buildx-action@v3"),
            Step::action("Log in to Container Registry", "docker/login-action@v3")
                .input("registry", registry)
                .input("username", "${{ github.actor }}")
                .input("password", "${{ secrets.GITHUB_TOKEN }}"),
            Step::action("Extract metadata (tags, labels)", "docker/metadata-action@v5")
                .step_id("meta")
                .input("images", format!("{registry}/{image_name}"))
                .input("tags", METADATA_TAG_PATTERNS.join("\n")),
            Step::action("Build and push Docker image", "docker/build-push-action@v5")
                .input("context", context)
                .input("file", dockerfile)
                .input("platforms", platforms.join(","))
                .input("push", push_enabled)
                .input("tags", "${{ steps.meta.outputs.tags }}")
                .input("labels", "${{ steps.meta.outputs.labels }}")
                .input("cache_from", "type=gha")
                .input("cache_to", "type=gha,mode=max"),
        ];

        Fragment::from_steps(steps)
    }

    fn secrets(&self) -> Vec<SecretDef> {
        vec![SecretDef {
            name: "GITHUB_TOKEN".to_string(),
            description: "GitHub token for GHCR authentication (automatically provided)"
                .to_string(),
            required: true,
            example: Some("Automatically provided by GitHub Actions".to_string()),
        }]
    }

    fn permissions(&self) -> Vec<PermissionDef> {
        vec![
            PermissionDef {
                scope: PermissionScope::Contents,
                level: PermissionLevel::Read,
                reason: "Required to checkout repository".to_string(),
            },
            PermissionDef {
                scope: PermissionScope::Packages,
                level: PermissionLevel::Write,
                reason: "Required to push images to GHCR".to_string(),
            },
        ]
    }

    fn constraints(&self) -> Vec<Constraint> {
        vec![Constraint::new(ConstraintKind::RequiresDocker)]
    }
}
