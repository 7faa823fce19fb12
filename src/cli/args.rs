use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ListArgs {
    /// Emit the recipe catalog as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Recipe id or slug to compile (see `list`)
    #[arg(value_name = "RECIPE")]
    pub recipe: String,

    /// Write the workflow YAML to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Emit the full generator output (yaml, secrets, permissions, notes) as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the post-generation validation pass
    #[arg(long)]
    pub no_validate: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Recipe id or slug to generate and validate
    #[arg(value_name = "RECIPE")]
    pub recipe: String,

    /// Emit the validation result as JSON
    #[arg(long)]
    pub json: bool,
}
