pub mod args;
pub mod commands;

pub use args::{GenerateArgs, ListArgs, ValidateArgs};
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
WORKFLOW COMMANDS:\n{subcommands}\n";

#[derive(Parser)]
#[command(name = "workflow-factory")]
#[command(version = crate::VERSION)]
#[command(about = "Generate and validate GitHub Actions workflows from typed recipes")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: list the recipe catalog, generate a workflow, then commit the YAML once validation passes."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "List the built-in recipe catalog",
        after_help = "Example:\n    workflow-factory list"
    )]
    List(ListArgs),
    #[command(
        about = "Compile a recipe into workflow YAML",
        long_about = "Generate resolves every block the recipe references, merges their fragments, secrets, and permissions, and prints the resulting workflow document.",
        after_help = "Example:\n    workflow-factory generate nextjs-vercel --output .github/workflows/deploy.yml"
    )]
    Generate(GenerateArgs),
    #[command(
        about = "Generate a recipe and report validation findings",
        long_about = "Validate re-parses the generated YAML and runs the structural, secrets, permissions, and trigger audits, exiting non-zero when any error is found.",
        after_help = "Example:\n    workflow-factory validate node-docker-ghcr"
    )]
    Validate(ValidateArgs),
}

pub fn run(args: Args) -> crate::Result<()> {
    match args.command {
        Command::List(list_args) => commands::list(list_args),
        Command::Generate(generate_args) => commands::generate(generate_args),
        Command::Validate(validate_args) => commands::validate(validate_args),
    }
}
