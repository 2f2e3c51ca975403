use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use log::warn;

use sheetgen::generate::generate_all;
use sheetgen::{to_view_model, GeneratorConfig, SchemaExtractor, Workbook};

#[derive(Parser)]
#[command(name = "sheetgen")]
#[command(version)]
#[command(about = "Generates application source files from spreadsheet entity definitions")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "sheetgen.toml", env = "SHEETGEN_CONFIG")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the worksheets that can be generated from
    List,

    /// Extract entities and write every generation target
    Generate {
        /// Only process sheets whose name contains one of these substrings
        /// (case-insensitive). Defaults to every parsable sheet.
        #[arg(long = "sheet")]
        sheets: Vec<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = GeneratorConfig::load(&cli.config)
        .with_context(|| format!("cannot load '{}'", cli.config.display()))?;

    let mut workbook = Workbook::open(&config.source.path)
        .with_context(|| format!("cannot open '{}'", config.source.path.display()))?;

    match cli.command {
        Commands::List => list_sheets(&config, &mut workbook),
        Commands::Generate { sheets } => generate(&config, &mut workbook, &sheets),
    }
}

fn list_sheets(config: &GeneratorConfig, workbook: &mut Workbook) -> Result<()> {
    let names = workbook.parsable_sheets(&config.source.include_keywords)?;
    if names.is_empty() {
        println!("{}", "No parsable sheets found.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![Cell::new("Sheet")]);
    for name in &names {
        table.add_row(vec![Cell::new(name)]);
    }
    println!("{table}");
    Ok(())
}

fn generate(config: &GeneratorConfig, workbook: &mut Workbook, filters: &[String]) -> Result<()> {
    let names = workbook.parsable_sheets(&config.source.include_keywords)?;
    let selected: Vec<&String> = names
        .iter()
        .filter(|name| {
            filters.is_empty() || {
                let lower = name.to_lowercase();
                filters.iter().any(|f| lower.contains(&f.to_lowercase()))
            }
        })
        .collect();

    anyhow::ensure!(!selected.is_empty(), "no sheet matched the selection");

    let extractor = SchemaExtractor::new(config);
    let mut failures = 0usize;

    for name in selected {
        let sheet = workbook.sheet(name)?;
        // A structural error aborts this sheet only; remaining sheets still run.
        let entity = match extractor.build_entity(&sheet) {
            Ok(entity) => entity,
            Err(err) => {
                failures += 1;
                warn!("sheet '{name}' failed: {err}");
                eprintln!("{} sheet '{name}': {err}", "skipped".yellow().bold());
                continue;
            }
        };

        let view = to_view_model(&entity, config);
        let written = generate_all(&view, config)
            .with_context(|| format!("failed writing output for sheet '{name}'"))?;

        let created = written.iter().filter(|w| w.created).count();
        let skipped = written.len() - created;
        println!(
            "{} {name}: {created} file(s) written, {skipped} already present",
            "generated".green().bold()
        );
    }

    anyhow::ensure!(failures == 0, "{failures} sheet(s) failed");
    Ok(())
}
