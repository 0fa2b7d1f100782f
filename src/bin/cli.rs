//! toc-builder CLI
//!
//! Loads a document tree from JSON, mounts a table of contents into it and
//! prints the result. Operations go through the tool registry, the same way
//! library callers drive them.

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use toc_builder::dom::load_dom;
use toc_builder::tools::RenderFormat;
use toc_builder::{AnchorStrategy, NestingPolicy, TocConfig, ToolContext, ToolRegistry, ToolResult};

#[derive(Parser)]
#[command(name = "toc-builder", version, about = "Build a collapsible table of contents from document headings")]
struct Cli {
    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the TOC and print the resulting document
    Build(BuildArgs),

    /// Build the TOC, then click one or more TOC links in order
    Click(ClickArgs),

    /// Print the JSON schema of the configuration file, or of a tool's parameters
    Schema {
        /// Tool whose parameter schema to print
        #[arg(long)]
        tool: Option<String>,
    },
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Document tree as JSON
    input: PathBuf,

    /// Configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Id of the container element
    #[arg(long)]
    container: Option<String>,

    /// How headings get link targets
    #[arg(long, value_enum)]
    strategy: Option<AnchorStrategy>,

    /// Deepest heading level to include
    #[arg(long)]
    max_level: Option<u8>,

    /// Handling of headings with no heading to nest under
    #[arg(long, value_enum)]
    nesting: Option<NestingPolicy>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    format: RenderFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the build report to stderr
    #[arg(long)]
    report: bool,
}

#[derive(clap::Args)]
struct ClickArgs {
    #[command(flatten)]
    build: BuildArgs,

    /// Link target to click (e.g. toc0); repeat to click several in order
    #[arg(short, long, required = true)]
    target: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Build(args) => run(&args, &[]),
        Command::Click(args) => run(&args.build, &args.target),
        Command::Schema { tool } => {
            let schema = match tool {
                Some(name) => ToolRegistry::with_defaults()
                    .get(&name)
                    .map(|t| t.schema())
                    .with_context(|| format!("Unknown tool '{}'", name))?,
                None => TocConfig::json_schema(),
            };
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(())
        }
    }
}

fn load_config(args: &BuildArgs) -> anyhow::Result<TocConfig> {
    let mut config = match &args.config {
        Some(path) => TocConfig::from_file(path).with_context(|| format!("Failed to load config {}", path.display()))?,
        None => TocConfig::default(),
    };

    if let Some(container) = &args.container {
        config.container_id = container.clone();
    }
    if let Some(strategy) = args.strategy {
        config.anchor_strategy = strategy;
    }
    if let Some(level) = args.max_level {
        config.max_level = level;
    }
    if let Some(nesting) = args.nesting {
        config.nesting = nesting;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &BuildArgs, targets: &[String]) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let mut document =
        load_dom(&args.input).with_context(|| format!("Failed to load document {}", args.input.display()))?;

    let registry = ToolRegistry::with_defaults();
    let mut context = ToolContext::with_config(&mut document, config);

    let report = expect_success(registry.execute("build_toc", json!({}), &mut context)?)?;
    if args.report {
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }

    for target in targets {
        expect_success(registry.execute("toc_click", json!({ "target": target }), &mut context)?)?;
    }

    let rendered = expect_success(registry.execute("render", json!({ "format": args.format }), &mut context)?)?;
    let content = rendered["content"].as_str().unwrap_or_default();

    match &args.output {
        Some(path) => std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", content),
    }

    Ok(())
}

fn expect_success(result: ToolResult) -> anyhow::Result<serde_json::Value> {
    if !result.success {
        bail!(result.error.unwrap_or_else(|| "Unknown error".to_string()));
    }
    Ok(result.data.unwrap_or_default())
}
