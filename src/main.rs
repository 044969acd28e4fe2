//! wasm-harness CLI entry point.
//!
//! Resolves the backend selection token for this build, constructs an engine
//! handle, and reports the resolved pair. Any selection failure exits
//! non-zero so a test matrix never proceeds on a misconfigured backend.

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wasm_harness_common::{CompilerKind, EngineKind};
use wasm_harness_core::{AvailabilityTable, BackendResolver, EngineHandle};

/// Select and validate the compiler/engine pair for this runtime build.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Backend selection token, "<compiler>-<engine>" (e.g. "cranelift-jit").
    #[arg(long, env = "WASM_HARNESS_CONFIG")]
    config: Option<String>,

    /// Print the backends compiled into this binary and exit.
    #[arg(long)]
    list: bool,

    /// Emit the report as JSON.
    #[arg(long)]
    json: bool,
}

/// The resolved selection, as reported to the caller.
#[derive(Serialize)]
struct SelectionReport {
    compiler: CompilerKind,
    engine: EngineKind,
}

/// The backends compiled into this binary, for `--list`.
#[derive(Serialize)]
struct AvailabilityReport<'a> {
    compilers: &'a [CompilerKind],
    engines: &'a [EngineKind],
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,wasm_harness=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let table = AvailabilityTable::from_build();

    if cli.list {
        return print_availability(&table, cli.json);
    }

    info!("Starting backend selection");

    let resolver = BackendResolver::new(&table);
    let config = resolver
        .resolve(cli.config.as_deref())
        .context("Backend selection failed")?;
    let handle = EngineHandle::build(config, &table).context("Engine construction failed")?;

    let report = SelectionReport {
        compiler: handle.compiler(),
        engine: handle.engine(),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("compiler: {}", report.compiler);
        println!("engine: {}", report.engine);
    }

    Ok(())
}

/// Print the availability table and exit successfully.
fn print_availability(table: &AvailabilityTable, json: bool) -> anyhow::Result<()> {
    if json {
        let report = AvailabilityReport {
            compilers: table.compilers(),
            engines: table.engines(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for kind in table.compilers() {
            println!("compiler: {kind}");
        }
        for kind in table.engines() {
            println!("engine: {kind}");
        }
    }

    Ok(())
}
