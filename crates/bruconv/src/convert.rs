use bruconv_core::convert::plan_conversion;
use colored::Colorize;

use crate::config::Config;
use crate::loader::load_document;
use crate::output::{ensure_dir, write_artifacts};
use crate::prelude::{println, *};

fn print_options(config: &Config) {
    println!("{}", "[ Command options ]".bold());
    for (name, value, description) in config.describe() {
        println!("  -{:<30} {}", format!("{name} {value}"), description);
    }
    println!("\n");
}

/// Convert the export named by `config` into a Bruno collection
///
/// Loading, parsing and planning errors abort before anything below the output
/// root is written. File write failures are reported as they happen and turn
/// into an error once the rest of the collection has been written.
pub fn run(config: &Config) -> Result<()> {
    print_options(config);

    if !config.output_dir.exists() {
        ensure_dir(&config.output_dir)?;
        println!("Created output directory: {}", config.output_dir.display());
    }

    let document = load_document(&config.input)?;
    log::info!("Loaded {}", config.input.display());

    let plan = plan_conversion(&document, &config.collection_name)
        .with_context(|| format!("Failed to convert {}", config.input.display()))?;

    for notice in &plan.notices {
        println!("{notice}");
    }

    let report = write_artifacts(&config.output_dir, &plan.artifacts)?;

    if !report.failures.is_empty() {
        return Err(Error::IncompleteOutput(report.failures.len()).into());
    }

    println!(
        "{} {} request(s) into {} ({} directories, {} files)",
        "Converted".green().bold(),
        plan.requests,
        config.output_dir.display(),
        report.directories.len(),
        report.files.len()
    );

    Ok(())
}
