//! SuperSQL language server CLI

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tower_lsp::lsp_types::Position;

use superlsp::config::{ConfigOverrides, ServerConfig};
use superlsp::error::{LspError, Result};
use superlsp::registry::{ElementKind, Registry};
use superlsp::signature::ParamScan;
use superlsp::{completion, hover, logging, lsp, signature, version};

#[derive(Parser)]
#[command(name = "superlsp", version, about = "SuperSQL Language Server")]
struct Cli {
    /// Log filter directive, e.g. `superlsp=debug` (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Disable ANSI colors in log output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the language server over stdio
    Serve {
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Active-parameter comma scan: cursor or document
        #[arg(long)]
        param_scan: Option<ParamScan>,
    },
    #[command(flatten)]
    Tool(ToolCommand),
}

/// One-shot commands that run an engine or inspect the registry
#[derive(Subcommand)]
enum ToolCommand {
    /// Print completion candidates at a position as JSON (debug)
    Complete(At),
    /// Print hover content at a position as JSON (debug)
    Hover(At),
    /// Print signature help at a position as JSON (debug)
    Signature {
        #[command(flatten)]
        at: At,
        /// Active-parameter comma scan: cursor or document
        #[arg(long, default_value = "cursor")]
        param_scan: ParamScan,
    },
    /// Dump registry entries as JSON
    Registry {
        /// Only this kind (keyword, operator, function, aggregate, type)
        #[arg(long)]
        kind: Option<ElementKind>,
    },
    /// Check the registry for signature/parameter inconsistencies
    Check,
    /// Print the full server version
    Version,
}

/// A document and a zero-based cursor position
#[derive(Args)]
struct At {
    /// Query file
    file: PathBuf,
    /// Zero-based line
    line: u32,
    /// Zero-based column in UTF-16 code units
    character: u32,
}

impl At {
    fn load(&self) -> Result<(String, Position)> {
        let text = read_file(&self.file)?;
        Ok((text, Position::new(self.line, self.character)))
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Serve { config, param_scan } => {
            serve(config, param_scan, cli.log_level, cli.no_color).await
        }
        Command::Tool(command) => logging::init_logger(cli.log_level.as_deref(), cli.no_color)
            .and_then(|()| run_tool(command)),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn serve(
    config_path: Option<PathBuf>,
    param_scan: Option<ParamScan>,
    log_level: Option<String>,
    no_color: bool,
) -> Result<()> {
    let config = match &config_path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    let config = config.with_overrides(ConfigOverrides {
        active_parameter_scan: param_scan,
        log_level,
    });

    logging::init_logger(config.log_level.as_deref(), no_color)?;

    // Built once; shared read-only by every request
    let registry = Arc::new(Registry::builtin());
    lsp::run_server(registry, config).await;
    Ok(())
}

fn run_tool(command: ToolCommand) -> Result<()> {
    let registry = Registry::builtin();

    match command {
        ToolCommand::Complete(at) => {
            let (text, position) = at.load()?;
            print_json(&completion::complete(&registry, &text, position))
        }
        ToolCommand::Hover(at) => {
            let (text, position) = at.load()?;
            print_json(&hover::hover(&registry, &text, position))
        }
        ToolCommand::Signature { at, param_scan } => {
            let (text, position) = at.load()?;
            print_json(&signature::signature_help_with(&registry, &text, position, param_scan))
        }
        ToolCommand::Registry { kind } => {
            let elements: Vec<_> = match kind {
                Some(kind) => registry.by_kind(kind).collect(),
                None => registry.iter().collect(),
            };
            print_json(&elements)
        }
        ToolCommand::Check => check_registry(&registry),
        ToolCommand::Version => {
            println!("superlsp {}", version::full_version());
            Ok(())
        }
    }
}

fn check_registry(registry: &Registry) -> Result<()> {
    let violations = registry.violations();
    for violation in &violations {
        eprintln!("  {violation}");
    }
    match violations.into_iter().next() {
        Some(first) => Err(first),
        None => {
            println!("✓ registry is consistent ({} elements)", registry.len());
            Ok(())
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| LspError::io(path.display().to_string(), e))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
