//! Frame nodes command line runner
//!
//! Runs one batch of host items through a builder node, the way the workflow
//! host would, and prints the output items.
//!
//! # Usage
//!
//! ```bash
//! # Build frame HTML for every item in a file
//! frame-nodes frame --input items.json
//!
//! # Build a transaction request from stdin, writing the immediate response to stderr
//! echo '{"recipient":"0xabc","respondNow":true}' | frame-nodes --respond-to - tx
//!
//! # Show the parameter form of a node
//! frame-nodes describe frame --pretty
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use frame_nodes_core::{
    frame_builder_description, tx_builder_description, BatchExecutor, BatchOutcome,
    CollectingResponder, ConfigLoader, FrameBuilderNode, Node, Responder, TxBuilderNode,
    WriterResponder,
};
use serde_json::Value;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "frame-nodes")]
#[command(version)]
#[command(about = "Run frame and transaction builder nodes over a batch of items")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Node configuration file (defaults to FRAME_NODES_CONFIG, then ./frame-nodes.yaml)
    #[arg(long, global = true, env = "FRAME_NODES_CONFIG")]
    config: Option<PathBuf>,

    /// Where the immediate response is written; `-` for stderr
    #[arg(long, global = true)]
    respond_to: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build frame HTML for each input item
    Frame {
        /// JSON file holding one item or an array of items; `-` for stdin
        #[arg(long, short, default_value = "-")]
        input: PathBuf,
    },

    /// Build a transaction request for each input item
    Tx {
        /// JSON file holding one item or an array of items; `-` for stdin
        #[arg(long, short, default_value = "-")]
        input: PathBuf,
    },

    /// Print a node's parameter description
    Describe {
        #[arg(value_enum)]
        node: NodeKind,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NodeKind {
    Frame,
    Tx,
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new(path),
        None => ConfigLoader::from_env(),
    };

    match cli.command {
        Commands::Frame { ref input } => {
            let config = loader.load()?;
            let node = FrameBuilderNode::new(config.frame);
            let outcome = run_batch(&node, input, cli.respond_to.as_deref())?;
            print_json(&Value::Array(outcome.items), cli.pretty)
        }
        Commands::Tx { ref input } => {
            let config = loader.load()?;
            let node = TxBuilderNode::new(config.transaction);
            let outcome = run_batch(&node, input, cli.respond_to.as_deref())?;
            print_json(&Value::Array(outcome.items), cli.pretty)
        }
        Commands::Describe { node } => {
            let description = match node {
                NodeKind::Frame => frame_builder_description(),
                NodeKind::Tx => tx_builder_description(),
            };
            print_json(&serde_json::to_value(description)?, cli.pretty)
        }
    }
}

fn run_batch<N: Node>(node: &N, input: &Path, respond_to: Option<&Path>) -> Result<BatchOutcome> {
    let items = read_items(input)?;
    let mut responder = open_responder(respond_to)?;

    let outcome = BatchExecutor::new(node).run_host_items(&items, responder.as_mut())?;
    info!(
        execution_id = %outcome.execution_id,
        items = outcome.items.len(),
        responded = outcome.responded,
        "Batch finished"
    );
    Ok(outcome)
}

/// Read a batch: a JSON array of items, or a single item object.
fn read_items(input: &Path) -> Result<Vec<Value>> {
    let content = if input == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read '{}'", input.display()))?
    };

    match serde_json::from_str::<Value>(&content).context("Input is not valid JSON")? {
        Value::Array(items) => Ok(items),
        item @ Value::Object(_) => Ok(vec![item]),
        other => bail!("Expected an item object or an array of items, got {}", other),
    }
}

fn open_responder(respond_to: Option<&Path>) -> Result<Box<dyn Responder>> {
    match respond_to {
        None => Ok(Box::new(CollectingResponder::new())),
        Some(path) if path == Path::new("-") => Ok(Box::new(WriterResponder::new(io::stderr()))),
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            Ok(Box::new(WriterResponder::new(file)))
        }
    }
}

fn print_json(value: &Value, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", text)?;
    Ok(())
}
