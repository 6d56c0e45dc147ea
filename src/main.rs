// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};
use opsmsg::catalog::Catalog;
use opsmsg::config::{load_config, Config, FormatterStyle};
use opsmsg::dispatcher::formatters::build_formatter;
use opsmsg::dispatcher::{Dispatcher, Logger, LoggerDispatcher};
use opsmsg::message::Context;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const SUCCESS_EXIT_CODE: u8 = 0;
/// Exit status after a CRITICAL message has been written
const CRITICAL_EXIT_CODE: u8 = 2;

/// Render catalog-driven operational messages.
#[derive(Parser, Debug)]
#[command(name = "opsmsg", version)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Extra catalog file, merged after the builtin one (repeatable)
    #[arg(long = "catalog", global = true, value_name = "FILE")]
    catalogs: Vec<PathBuf>,

    /// Skip the bundled catalog
    #[arg(long, global = true)]
    no_builtin: bool,

    /// Box width in columns
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    /// Output style
    #[arg(long, global = true, value_enum)]
    style: Option<FormatterStyle>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every message in the merged catalog
    List,
    /// Render one message
    Render {
        /// Message id, e.g. SRV001
        id: String,
        /// Placeholder values as key=value
        #[arg(value_parser = parse_key_value)]
        context: Vec<(String, String)>,
    },
    /// Render every message in the catalog with an empty context
    Show,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

fn main() -> ExitCode {
    // Diagnostics go to stderr so they never interleave with rendered output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli, Box::new(io::stdout())) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Executes one command, writing rendered output to `out`, and returns the exit status.
fn run(cli: Cli, mut out: Box<dyn Write + Send>) -> Result<u8> {
    let config = resolve_config(&cli)?;
    let catalog = config.load_catalog().context("failed to load message catalogs")?;

    match cli.command {
        Commands::List => {
            for entry in &catalog {
                writeln!(out, "{:<10} {:<8} {}", entry.id, entry.severity, entry.text)?;
            }
            out.flush()?;
            Ok(SUCCESS_EXIT_CODE)
        }
        Commands::Render { id, context } => {
            let dispatcher = build_dispatcher(&config, out);
            let context: Context = context.into_iter().collect();
            let msg = catalog
                .new_message(&id, context)
                .with_context(|| format!("cannot render '{id}'"))?;

            dispatcher.dispatch(&msg)?;
            if msg.severity.is_critical() {
                return Ok(CRITICAL_EXIT_CODE);
            }
            Ok(SUCCESS_EXIT_CODE)
        }
        Commands::Show => {
            if catalog.is_empty() {
                bail!("no messages to show; the catalog is empty");
            }
            show_all(&catalog, &build_dispatcher(&config, out))?;
            Ok(SUCCESS_EXIT_CODE)
        }
    }
}

/// Load the config file if one was given, then apply command line overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => Config::default(),
    };

    config.catalogs.extend(cli.catalogs.iter().cloned());
    if cli.no_builtin {
        config.include_builtin = Some(false);
    }
    if cli.width.is_some() {
        config.formatter.width = cli.width;
    }
    if cli.no_color {
        config.formatter.disable_colors = true;
    }
    if cli.style.is_some() {
        config.formatter.style = cli.style;
    }
    Ok(config)
}

fn build_dispatcher(config: &Config, out: Box<dyn Write + Send>) -> LoggerDispatcher {
    let logger = Logger::from_boxed(build_formatter(&config.formatter), out)
        .with_level(config.get_min_level());
    LoggerDispatcher::new(logger)
}

/// Every entry is rendered even when one is CRITICAL; `show` is a preview.
fn show_all(catalog: &Catalog, dispatcher: &dyn Dispatcher) -> Result<()> {
    for id in catalog.ids() {
        let msg = catalog.new_message(id, Context::new())?;
        dispatcher.dispatch(&msg)?;
    }
    Ok(())
}
