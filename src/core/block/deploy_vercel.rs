use super::Block;
use crate::core::types::{
    BlockConfig, Constraint, ConstraintKind, DeployEnvironment, Fragment, SecretDef, Step,
};
use indexmap::IndexMap;

pub const VERCEL_TOKEN: &str = "VERCEL_TOKEN";
pub const VERCEL_ORG_ID: &str = "VERCEL_ORG_ID";
pub const VERCEL_PROJECT_ID: &str = "VERCEL_PROJECT_ID";

const TOKEN_REF: &str = "${{ secrets.VERCEL_TOKEN }}";

/// Deploy to Vercel with the Vercel CLI: install, pull environment, build,
/// then deploy prebuilt artifacts.
pub struct DeployVercel;

impl Block for DeployVercel {
    fn id(&self) -> &'static str {
        "deploy-vercel"
    }

    fn name(&self) -> &'static str {
        "Deploy to Vercel"
    }

    fn description(&self) -> &'static str {
        "Deploy to Vercel using the Vercel CLI"
    }

    fn emit(&self, config: &BlockConfig) -> Fragment {
        let is_production = config.environment == Some(DeployEnvironment::Production);
        let vercel_env = if is_production { "production" } else { "preview" };
        let prod_flag = if is_production { " --prod" } else { "" };
        let dir = config.working_directory.as_ref();

        let steps = vec![
            Step::command("Install Vercel CLI", "npm install --global vercel@latest"),
            Step::command(
                "Pull Vercel Environment Information",
                format!("vercel pull --yes --environment={vercel_env} --token={TOKEN_REF}"),
            )
            .in_dir(dir),
            Step::command(
                "Build Project Artifacts",
                format!("vercel build{prod_flag} --token={TOKEN_REF}"),
            )
            .in_dir(dir),
            Step::command(
                "Deploy Project Artifacts to Vercel",
                format!("vercel deploy --prebuilt{prod_flag} --token={TOKEN_REF}"),
            )
            .step_id("deploy")
            .in_dir(dir),
        ];

        let mut env = IndexMap::new();
        env.insert(
            VERCEL_ORG_ID.to_string(),
            "${{ secrets.VERCEL_ORG_ID }}".to_string(),
        );
        env.insert(
            VERCEL_PROJECT_ID.to_string(),
            "${{ secrets.VERCEL_PROJECT_ID }}".to_string(),
        );

        Fragment { steps, env }
    }

    fn secrets(&self) -> Vec<SecretDef> {
        vec![
            SecretDef {
                name: VERCEL_TOKEN.to_string(),
                description: "Vercel API token for deployment".to_string(),
                required: true,
                example: Some("Go to Vercel > Settings > Tokens to create one".to_string()),
            },
            SecretDef {
                name: VERCEL_ORG_ID.to_string(),
                description: "Vercel Organization/Team ID".to_string(),
                required: true,
                example: Some(
                    "Found in .vercel/project.json after running vercel link".to_string(),
                ),
            },
            SecretDef {
                name: VERCEL_PROJECT_ID.to_string(),
                description: "Vercel Project ID".to_string(),
                required: true,
                example: Some(
                    "Found in .vercel/project.json after running vercel link".to_string(),
                ),
            },
        ]
    }

    fn constraints(&self) -> Vec<Constraint> {
        vec![Constraint::with_value(
            ConstraintKind::RequiresSecrets,
            format!("{VERCEL_TOKEN},{VERCEL_ORG_ID},{VERCEL_PROJECT_ID}"),
        )]
    }
}
