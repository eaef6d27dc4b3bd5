use std::collections::BTreeSet;
use std::path::Path;

use colored::Colorize;

use crate::cli::read_edge_list;
use crate::config::Config;
use crate::grid::GridSpec;
use crate::parser::{self, ParseResult, Report};

pub fn run(file: &Path, size: Option<GridSpec>, json: bool, quiet: bool) -> anyhow::Result<()> {
    let text = read_edge_list(file)?;
    let grid = Config::load_or_default().resolve(size, None).grid;
    let result = parser::parse(&text, grid);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        if !quiet {
            println!("{}", summary(&result, grid).bold());
        }
        if let Some(report) = result.report() {
            eprintln!("{}", colorize(&report));
        }
    }

    let bad_lines = invalid_lines(&result);
    if bad_lines > 0 {
        anyhow::bail!("{bad_lines} invalid line(s) in {}", file.display());
    }
    Ok(())
}

fn summary(result: &ParseResult, grid: GridSpec) -> String {
    format!(
        "{} drawable edge(s) on a {grid}x{grid} grid",
        result.edges.len()
    )
}

/// Number of distinct source lines with at least one error.
fn invalid_lines(result: &ParseResult) -> usize {
    result
        .errors
        .iter()
        .map(|e| e.line)
        .collect::<BTreeSet<_>>()
        .len()
}

fn colorize(report: &Report) -> String {
    let mut out = format!("{}\n", parser::report::PREAMBLE.yellow());
    for error in report.errors() {
        out.push_str(&format!(
            "\n{} {}",
            format!("Line {}:", error.line).red().bold(),
            error.kind
        ));
    }
    out
}
