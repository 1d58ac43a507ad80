mod check;

use anyhow::{Context, Result};
use check::{CheckOutcome, Checker, DEFAULT_CHECKER};
use clap::Parser;
use colored::*;
use gentle::core::load_module;
use gentle::emit::IndentStyle;
use gentle::{translate_module, EmitterConfig, Module};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser)]
#[command(name = "gentle")]
#[command(about = "Translate annotated numeric Python routines into C")]
#[command(version = "0.1.0")]
struct Cli {
    /// Source module as JSON, produced by the Python front end.
    input: PathBuf,

    /// Run the type checker over the original source before translating.
    #[arg(short, long)]
    check: bool,

    #[arg(long, default_value = DEFAULT_CHECKER)]
    checker: String,

    /// Original Python source to check. Defaults to the module's filename.
    #[arg(long)]
    source: Option<PathBuf>,

    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit without line breaks or indentation.
    #[arg(long, conflicts_with = "indent")]
    compact: bool,

    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// Print the lowered target IR as JSON instead of C.
    #[arg(long)]
    dump_ir: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(enabled: bool) {
    if !enabled {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::DEBUG)
        .try_init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let module = load_module(&cli.input)?;

    if cli.check {
        let source = source_path(cli, &module)?;
        match Checker::parse(&cli.checker)?.run(&source)? {
            CheckOutcome::Passed => {}
            CheckOutcome::Failed { report } => {
                print!("{}", report);
                eprintln!(
                    "{} type check of {} failed",
                    "error:".bright_red().bold(),
                    source.display()
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    let translation = translate_module(&module, &emitter_config(cli));

    let rendered = if cli.dump_ir {
        let functions: Vec<_> = translation.functions.iter().map(|f| &f.ir).collect();
        let mut json = serde_json::to_string_pretty(&functions)?;
        json.push('\n');
        json
    } else {
        translation.text()
    };

    match &cli.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", rendered),
    }

    for diagnostic in &translation.diagnostics {
        eprintln!("{} {}", "error:".bright_red().bold(), diagnostic);
    }

    if translation.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "{} {} of {} function(s) not translated",
            "warning:".yellow().bold(),
            translation.diagnostics.len(),
            translation.diagnostics.len() + translation.functions.len()
        );
        Ok(ExitCode::FAILURE)
    }
}

fn emitter_config(cli: &Cli) -> EmitterConfig {
    if cli.compact {
        EmitterConfig::compact()
    } else {
        EmitterConfig {
            indent_style: IndentStyle::Spaces(cli.indent),
            line_breaks: true,
        }
    }
}

/// `--source` wins; otherwise the module's filename, taken relative to the input's directory.
fn source_path(cli: &Cli, module: &Module) -> Result<PathBuf> {
    if let Some(source) = &cli.source {
        return Ok(source.clone());
    }
    let filename = module
        .filename
        .as_deref()
        .context("module has no filename to check; pass --source")?;
    let base = cli.input.parent().unwrap_or_else(|| Path::new(""));
    Ok(base.join(filename))
}
