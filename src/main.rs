use clap::Parser;
use workflow_factory::{cli, logging};

fn main() -> workflow_factory::Result<()> {
    let args = cli::Args::parse();
    logging::init()?;
    cli::run(args)
}
