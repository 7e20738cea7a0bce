use crate::cli::Cli;
use crate::config::Config;
use anyhow::{bail, Context};
use serde::Serialize;
use sortdiff_core::{
    compare_files, resolve_path, write_result, ComparisonStats, MergeDiffEngine, OutputPaths,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const FIRST_PROMPT: &str = "Please enter the path for input file 1: ";
const SECOND_PROMPT: &str = "Please enter the path for input file 2: ";

#[derive(Serialize)]
struct Summary {
    first_input: PathBuf,
    second_input: PathBuf,
    outputs: OutputPaths,
    stats: ComparisonStats,
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run(cli, &mut input, &mut out)
}

/// Prompt for missing paths, compare, write results, and report to `out`
pub fn run<R: BufRead, W: Write>(cli: Cli, input: &mut R, out: &mut W) -> anyhow::Result<()> {
    let config = Config::resolve(&cli)?;
    let spec = config.output_spec(&cli);

    let first = match &cli.first {
        Some(path) => path.clone(),
        None => prompt(input, out, FIRST_PROMPT)?,
    };
    let first = resolve_path(&first)?;

    let second = match &cli.second {
        Some(path) => path.clone(),
        None => prompt(input, out, SECOND_PROMPT)?,
    };
    let second = resolve_path(&second)?;

    let result = compare_files(&MergeDiffEngine::new(), &first, &second)?;
    let outputs = write_result(&result, &spec)?;

    if cli.json {
        let summary = Summary {
            first_input: first,
            second_input: second,
            outputs,
            stats: result.stats(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        writeln!(out, "Processing complete!")?;
        writeln!(
            out,
            "Unique entries have been saved in the '{}' directory.",
            spec.dir.display()
        )?;
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> anyhow::Result<String> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read file path")?;
    if read == 0 {
        bail!("No file path entered");
    }
    Ok(line)
}
