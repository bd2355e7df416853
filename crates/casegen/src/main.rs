//! Compose the test-generation prompts from the command line and print them.
//!
//! # Examples
//!
//! ```sh
//! # Both prompts with every feature on
//! casegen
//!
//! # System prompt only, without the dataset block, ATDD disallowed
//! casegen --no-dataset --disable nature:ATDD --output system
//!
//! # Reword a category and emit JSON for another tool
//! casegen --describe "category:ergonomic=UI and accessibility" --json
//!
//! # The classic templates: static type block and user prompt
//! casegen --variant classic
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=casegen=debug` to see every mutation.

use anyhow::{Context, Result, anyhow};
use casegen::prelude::*;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Compose the system and user prompts for LLM test case generation.
#[derive(Parser)]
#[command(name = "casegen")]
struct Cli {
    // ── Template selection ─────────────────────────────────────
    /// Template variant: `full` (every toggle honoured) or `classic`
    #[arg(long, default_value = "full")]
    variant: Variant,

    // ── Toggles (all on by default) ────────────────────────────
    /// Omit the dataset parameterization instructions and example
    #[arg(long)]
    no_dataset: bool,

    /// Omit the "nature" field, its explanation and Nature: lines
    #[arg(long)]
    no_nature: bool,

    /// Omit the "type" field and its explanation
    #[arg(long)]
    no_type: bool,

    /// Omit Category: lines and the category definitions
    #[arg(long)]
    no_category: bool,

    /// Omit Reference: lines
    #[arg(long)]
    no_references: bool,

    // ── Enumeration edits ──────────────────────────────────────
    /// Disable an enumeration value, as LIST:KEY (e.g. nature:ATDD)
    #[arg(long = "disable", value_name = "LIST:KEY")]
    disable: Vec<String>,

    /// Replace a value's description, as LIST:KEY=TEXT
    #[arg(long = "describe", value_name = "LIST:KEY=TEXT")]
    describe: Vec<String>,

    // ── Output ─────────────────────────────────────────────────
    /// Which prompt(s) to print
    #[arg(long, value_enum, default_value_t = Output::Both)]
    output: Output,

    /// Print the prompts as a JSON object
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Output {
    System,
    User,
    Both,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let toggles = ToggleState::all_on()
        .with(Toggle::Dataset, !cli.no_dataset)
        .with(Toggle::Nature, !cli.no_nature)
        .with(Toggle::Type, !cli.no_type)
        .with(Toggle::Category, !cli.no_category)
        .with(Toggle::References, !cli.no_references);

    let mut configurator = Configurator::new(ConfiguratorState::new(cli.variant, toggles))
        .with_event_handler(LoggingHandler);

    for spec in &cli.disable {
        let (list, key) = parse_entry_ref(spec)?;
        let index = resolve(&configurator, list, key)?;
        configurator
            .set_enabled(list, index, false)
            .with_context(|| format!("--disable {spec}"))?;
    }

    for spec in &cli.describe {
        let (target, text) = spec
            .split_once('=')
            .ok_or_else(|| anyhow!("--describe expects LIST:KEY=TEXT, got {spec:?}"))?;
        let (list, key) = parse_entry_ref(target)?;
        let index = resolve(&configurator, list, key)?;
        configurator
            .set_description(list, index, text)
            .with_context(|| format!("--describe {spec}"))?;
    }

    print_prompts(configurator.prompts(), cli.output, cli.json)
}

// ── Helpers ────────────────────────────────────────────────────────

/// Split `LIST:KEY`. Keys may contain spaces (`nature:non functional`).
fn parse_entry_ref(spec: &str) -> Result<(ListName, &str)> {
    let (list, key) = spec
        .split_once(':')
        .ok_or_else(|| anyhow!("expected LIST:KEY, got {spec:?}"))?;
    let list: ListName = list.parse()?;
    Ok((list, key.trim()))
}

fn resolve(configurator: &Configurator, list: ListName, key: &str) -> Result<usize> {
    configurator
        .state()
        .lists
        .find(list, key)
        .ok_or_else(|| {
            Error::UnknownKey {
                list,
                key: key.to_string(),
            }
            .into()
        })
}

fn print_prompts(prompts: &ComposedPrompts, output: Output, json: bool) -> Result<()> {
    if json {
        let value = match output {
            Output::Both => serde_json::to_value(prompts)?,
            Output::System => serde_json::json!({ "system_prompt": prompts.system_prompt }),
            Output::User => serde_json::json!({ "user_prompt": prompts.user_prompt }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match output {
        Output::System => println!("{}", prompts.system_prompt),
        Output::User => println!("{}", prompts.user_prompt),
        Output::Both => {
            println!("=== System prompt ===\n\n{}\n", prompts.system_prompt);
            println!("=== User prompt ===\n\n{}", prompts.user_prompt);
        }
    }
    Ok(())
}
