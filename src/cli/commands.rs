use crate::cli::args::{GenerateArgs, ListArgs, ValidateArgs};
use crate::core::generator::{generate_workflow, GeneratorOutput};
use crate::core::recipe::{self, Recipe};
use crate::core::validator::{validate_workflow, ValidationResult};
use crate::Result;
use anyhow::{anyhow, bail};
use std::fs;

fn resolve_recipe(id_or_slug: &str) -> Result<&'static Recipe> {
    recipe::find(id_or_slug).ok_or_else(|| {
        let available: Vec<&str> = recipe::all().iter().map(|r| r.id.as_str()).collect();
        anyhow!(
            "unknown recipe '{}' (available: {})",
            id_or_slug,
            available.join(", ")
        )
    })
}

pub fn list(args: ListArgs) -> Result<()> {
    let recipes = recipe::all();

    if args.json {
        println!("{}", serde_json::to_string_pretty(recipes)?);
        return Ok(());
    }

    for recipe in recipes {
        println!("{:<20} {}", recipe.id, recipe.name);
        println!("{:<20} stack: {}", "", recipe.stack.join(", "));
        println!("{:<20} {}", "", recipe.description);
        println!();
    }
    Ok(())
}

fn print_findings(result: &ValidationResult) {
    for error in &result.errors {
        match &error.path {
            Some(path) => eprintln!("error[{}] {} ({})", error.code, error.message, path),
            None => eprintln!("error[{}] {}", error.code, error.message),
        }
    }
    for warning in &result.warnings {
        match &warning.path {
            Some(path) => eprintln!("warning[{}] {} ({})", warning.code, warning.message, path),
            None => eprintln!("warning[{}] {}", warning.code, warning.message),
        }
    }
}

fn print_requirements(output: &GeneratorOutput) {
    if !output.secrets.is_empty() {
        eprintln!("Required secrets:");
        for secret in &output.secrets {
            eprintln!("  {} - {}", secret.name, secret.description);
        }
    }
    if !output.permissions.is_empty() {
        eprintln!("Required permissions:");
        for permission in &output.permissions {
            eprintln!(
                "  {}: {} ({})",
                permission.scope, permission.level, permission.reason
            );
        }
    }
    for note in &output.notes {
        eprintln!("Note: {note}");
    }
}

pub fn generate(args: GenerateArgs) -> Result<()> {
    let recipe = resolve_recipe(&args.recipe)?;
    let output = generate_workflow(recipe)?;

    if !args.no_validate {
        let result = validate_workflow(&output);
        print_findings(&result);
        if !result.valid {
            bail!(
                "generated workflow failed validation with {} error(s)",
                result.errors.len()
            );
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &output.yaml)?;
            eprintln!("Wrote workflow to {}", path.display());
            print_requirements(&output);
        }
        None => {
            print!("{}", output.yaml);
            print_requirements(&output);
        }
    }

    Ok(())
}

pub fn validate(args: ValidateArgs) -> Result<()> {
    let recipe = resolve_recipe(&args.recipe)?;
    let output = generate_workflow(recipe)?;
    let result = validate_workflow(&output);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_findings(&result);
        if result.valid {
            println!(
                "{}: valid ({} warning(s))",
                recipe.id,
                result.warnings.len()
            );
        }
    }

    if !result.valid {
        bail!(
            "workflow for '{}' is invalid: {} error(s)",
            recipe.id,
            result.errors.len()
        );
    }

    Ok(())
}
