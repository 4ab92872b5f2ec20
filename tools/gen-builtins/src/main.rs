//! Regenerates the grammar name tables used by superlsp
//!
//! Reads the upstream SuperSQL PEG grammar and writes
//! `superlsp/src/registry/grammar.rs`. Given the upstream `function.go` and
//! `agg.go`, it also prints how the curated function table has drifted.

mod codegen;
mod error;
mod peg;
mod report;
mod upstream;

use std::path::{Path, PathBuf};

use clap::Parser;

use error::{GenError, Result};
use peg::GrammarTables;
use report::DiffReport;

#[derive(Parser)]
#[command(name = "gen-builtins", version, about = "Generate superlsp grammar tables")]
struct Cli {
    /// Upstream PEG grammar (compiler/parser/parser.peg)
    #[arg(long)]
    grammar: PathBuf,

    /// Output Rust file
    #[arg(long, default_value = "superlsp/src/registry/grammar.rs")]
    out: PathBuf,

    /// Upstream module version recorded in the header
    #[arg(long, default_value = "unknown")]
    upstream_version: String,

    /// Upstream runtime/sam/expr/function/function.go
    #[arg(long, requires = "aggregates")]
    functions: Option<PathBuf>,

    /// Upstream runtime/sam/expr/agg/agg.go
    #[arg(long, requires = "functions")]
    aggregates: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("gen-builtins: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let peg = read(&cli.grammar)?;
    let tables = GrammarTables::extract(&peg);

    let source = codegen::render(&tables, &cli.upstream_version, chrono::Utc::now());
    std::fs::write(&cli.out, source).map_err(|e| GenError::write(&cli.out, e))?;
    println!(
        "✓ wrote {} ({} keywords, {} operators, {} types)",
        cli.out.display(),
        tables.keywords.len(),
        tables.operators.len(),
        tables.primitive_types.len() + tables.sql_types.len()
    );

    if let (Some(functions), Some(aggregates)) = (&cli.functions, &cli.aggregates) {
        let funcs = upstream::extract_functions(&file_name(functions), &read(functions)?)?;
        let aggs = upstream::extract_aggregates(&file_name(aggregates), &read(aggregates)?)?;
        let report = DiffReport::compare(
            &cli.upstream_version,
            &funcs,
            &aggs,
            &superlsp::registry::curated_elements(),
        );
        println!();
        print!("{report}");
        if !report.is_clean() {
            println!("Update superlsp/src/registry/curated.rs by hand for the changes above.");
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| GenError::read(path, e))
}

fn file_name(path: &Path) -> String {
    path.display().to_string()
}
