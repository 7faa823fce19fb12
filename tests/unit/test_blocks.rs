use workflow_factory::core::block::{self, Block, Build, Checkout, DeployGhPages, DeployVercel, DockerBuildx, SetupNode};
use workflow_factory::core::types::{
    BlockConfig, ConstraintKind, DeployEnvironment, PackageManager, PermissionLevel,
    PermissionScope,
};

fn config() -> BlockConfig {
    BlockConfig::default()
}

#[test]
fn every_built_in_block_emits_with_default_config() {
    let registry = block::built_in();
    for id in registry.ids() {
        let block = registry.get(id).expect("registered block");
        let fragment = block.emit(&config());
        assert!(!fragment.steps.is_empty(), "block {id} emitted no steps");
        for step in &fragment.steps {
            assert!(
                step.uses.is_some() || step.run.is_some(),
                "block {id} emitted a step with neither uses nor run"
            );
        }
    }
}

#[test]
fn checkout_emits_pinned_action_and_contents_read() {
    let fragment = Checkout.emit(&config());
    assert_eq!(fragment.steps.len(), 1);
    assert_eq!(
        fragment.steps[0].uses.as_deref(),
        Some("actions/checkout@v4")
    );

    let permissions = Checkout.permissions();
    assert_eq!(permissions.len(), 1);
    assert_eq!(permissions[0].scope, PermissionScope::Contents);
    assert_eq!(permissions[0].level, PermissionLevel::Read);
    assert!(Checkout.secrets().is_empty());
}

#[test]
fn setup_node_defaults_to_node_20_npm_with_cache() {
    let fragment = SetupNode.emit(&config());
    assert_eq!(fragment.steps.len(), 1);
    let step = &fragment.steps[0];
    assert_eq!(step.uses.as_deref(), Some("actions/setup-node@v4"));
    assert_eq!(step.with.get("node-version"), Some(&"20".into()));
    assert_eq!(step.with.get("cache"), Some(&"npm".into()));
}

#[test]
fn setup_node_emits_pnpm_setup_before_node_setup() {
    let fragment = SetupNode.emit(&BlockConfig {
        package_manager: Some(PackageManager::Pnpm),
        ..config()
    });
    assert_eq!(fragment.steps.len(), 2);
    assert_eq!(
        fragment.steps[0].uses.as_deref(),
        Some("pnpm/action-setup@v3")
    );
    assert_eq!(
        fragment.steps[1].uses.as_deref(),
        Some("actions/setup-node@v4")
    );
    assert_eq!(fragment.steps[1].with.get("cache"), Some(&"pnpm".into()));
}

#[test]
fn install_deps_command_follows_package_manager() {
    use workflow_factory::core::block::InstallDeps;

    let npm = InstallDeps.emit(&config());
    assert_eq!(npm.steps[0].run.as_deref(), Some("npm ci"));

    let pnpm = InstallDeps.emit(&BlockConfig {
        package_manager: Some(PackageManager::Pnpm),
        ..config()
    });
    assert_eq!(
        pnpm.steps[0].run.as_deref(),
        Some("pnpm install --frozen-lockfile")
    );

    let yarn = InstallDeps.emit(&BlockConfig {
        package_manager: Some(PackageManager::Yarn),
        ..config()
    });
    assert_eq!(
        yarn.steps[0].run.as_deref(),
        Some("yarn install --frozen-lockfile")
    );
}

#[test]
fn build_defaults_to_npm_run_build() {
    let fragment = Build.emit(&config());
    assert_eq!(fragment.steps[0].run.as_deref(), Some("npm run build"));
}

#[test]
fn build_uses_pnpm_prefix() {
    let fragment = Build.emit(&BlockConfig {
        package_manager: Some(PackageManager::Pnpm),
        ..config()
    });
    assert_eq!(fragment.steps[0].run.as_deref(), Some("pnpm build"));
}

#[test]
fn build_command_with_space_is_verbatim() {
    let fragment = Build.emit(&BlockConfig {
        build_command: Some("next build".to_string()),
        ..config()
    });
    assert_eq!(fragment.steps[0].run.as_deref(), Some("next build"));
}

#[test]
fn deploy_vercel_declares_three_required_secrets() {
    let secrets = DeployVercel.secrets();
    assert_eq!(secrets.len(), 3);
    let names: Vec<&str> = secrets.iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains(&"VERCEL_TOKEN"));
    assert!(names.contains(&"VERCEL_ORG_ID"));
    assert!(names.contains(&"VERCEL_PROJECT_ID"));
    assert!(secrets.iter().all(|s| s.required));
}

#[test]
fn deploy_vercel_constraint_lists_its_secrets() {
    let constraints = DeployVercel.constraints();
    assert_eq!(constraints.len(), 1);
    assert_eq!(constraints[0].kind, ConstraintKind::RequiresSecrets);
    assert_eq!(
        constraints[0].value.as_deref(),
        Some("VERCEL_TOKEN,VERCEL_ORG_ID,VERCEL_PROJECT_ID")
    );
}

#[test]
fn deploy_vercel_production_adds_prod_flag() {
    let fragment = DeployVercel.emit(&BlockConfig {
        environment: Some(DeployEnvironment::Production),
        ..config()
    });
    let build_step = fragment
        .steps
        .iter()
        .find(|s| s.name.as_deref() == Some("Build Project Artifacts"))
        .expect("build step");
    assert!(build_step.run.as_deref().expect("run").contains("--prod"));

    let env_keys: Vec<&str> = fragment.env.keys().map(String::as_str).collect();
    assert_eq!(env_keys, vec!["VERCEL_ORG_ID", "VERCEL_PROJECT_ID"]);
}

#[test]
fn docker_buildx_requires_packages_write() {
    let permissions = DockerBuildx.permissions();
    assert!(permissions
        .iter()
        .any(|p| p.scope == PermissionScope::Packages && p.level == PermissionLevel::Write));
    assert!(permissions
        .iter()
        .any(|p| p.scope == PermissionScope::Contents && p.level == PermissionLevel::Read));
}

#[test]
fn docker_buildx_emits_setup_login_metadata_and_build() {
    let fragment = DockerBuildx.emit(&config());
    let uses: Vec<&str> = fragment
        .steps
        .iter()
        .filter_map(|s| s.uses.as_deref())
        .collect();
    assert_eq!(
        uses,
        vec![
            "docker/setup-qemu-action@v3",
            "docker/setup-buildx-action@v3",
            "docker/login-action@v3",
            "docker/metadata-action@v5",
            "docker/build-push-action@v5",
        ]
    );

    let constraints = DockerBuildx.constraints();
    assert_eq!(constraints[0].kind, ConstraintKind::RequiresDocker);
}

#[test]
fn deploy_gh_pages_requires_pages_and_id_token_write() {
    let permissions = DeployGhPages.permissions();
    assert!(permissions
        .iter()
        .any(|p| p.scope == PermissionScope::Pages && p.level == PermissionLevel::Write));
    assert!(permissions
        .iter()
        .any(|p| p.scope == PermissionScope::IdToken && p.level == PermissionLevel::Write));
}

#[test]
fn deploy_gh_pages_emits_configure_upload_deploy() {
    let fragment = DeployGhPages.emit(&config());
    let uses: Vec<&str> = fragment
        .steps
        .iter()
        .filter_map(|s| s.uses.as_deref())
        .collect();
    assert_eq!(
        uses,
        vec![
            "actions/configure-pages@v4",
            "actions/upload-pages-artifact@v3",
            "actions/deploy-pages@v4",
        ]
    );
}
