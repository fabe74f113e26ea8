// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod report;
mod sample_data;

use clap::{Parser, ValueEnum};
use painel::{DEFAULT_YEAR, FilterCommand, FilterUpdate};
use painel_api::{
    ApiError, Dashboard, DashboardSnapshot, OrdersTableQuery, RecordStore, TablePage,
    parse_facet_toggle, parse_on_time_status, validate_year,
};
use painel_domain::Order;
use serde::Serialize;
use tracing::{error, info};

use crate::report::render_text;
use crate::sample_data::{DEFAULT_ORDER_COUNT, SampleData, generate};

/// Painel de Pedidos - order dashboard over generated sample records
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the sample record generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of sample orders to generate
    #[arg(long, default_value_t = DEFAULT_ORDER_COUNT)]
    orders: usize,

    /// Selected year (2020-2030)
    #[arg(long, default_value_t = DEFAULT_YEAR)]
    year: u16,

    /// Delivery month to toggle, e.g. `março` (repeatable)
    #[arg(long = "month")]
    months: Vec<String>,

    /// Region to toggle, e.g. `Sul` (repeatable)
    #[arg(long = "region")]
    regions: Vec<String>,

    /// State code to toggle, e.g. `PR` (repeatable)
    #[arg(long = "state")]
    states: Vec<String>,

    /// Modality to toggle, e.g. `AÉREO` (repeatable)
    #[arg(long = "modality")]
    modalities: Vec<String>,

    /// Service type to toggle, e.g. `COLETA` (repeatable)
    #[arg(long = "service-type")]
    service_types: Vec<String>,

    /// On-time selector: all, noPrazo or foraPrazo
    #[arg(long, default_value = "all")]
    prazo: String,

    /// Search text for the orders table
    #[arg(long, default_value = "")]
    search: String,

    /// Orders table page (1-based)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// How the report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// JSON report: the snapshot plus the requested orders table page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    snapshot: DashboardSnapshot,
    orders_table: TablePage<&'a Order>,
}

/// Translates the filter arguments into commands, in argument order.
///
/// # Errors
///
/// Returns an `ApiError` for an out-of-range year or any value outside its
/// facet's enumeration.
fn build_commands(args: &Args) -> Result<Vec<FilterCommand>, ApiError> {
    let mut commands: Vec<FilterCommand> = vec![
        FilterUpdate::Year(validate_year(args.year)?).into(),
        FilterUpdate::OnTimeStatus(parse_on_time_status(&args.prazo)?).into(),
    ];

    let facets: [(&str, &Vec<String>); 5] = [
        ("months", &args.months),
        ("regions", &args.regions),
        ("states", &args.states),
        ("modalities", &args.modalities),
        ("serviceTypes", &args.service_types),
    ];
    for (facet, values) in facets {
        for value in values {
            commands.push(parse_facet_toggle(facet, value)?.into());
        }
    }

    Ok(commands)
}

/// Generates the sample records and loads them into a validated store.
///
/// # Errors
///
/// Returns an error if a sample delivery date cannot be built or the records
/// fail validation. Either failure is logged before it is returned.
fn load_records(seed: u64, order_count: usize) -> Result<RecordStore, Box<dyn std::error::Error>> {
    info!(seed, orders = order_count, "Generating sample records");
    let sample: SampleData = generate(seed, order_count).inspect_err(|err| {
        error!(error = %err, "Failed to generate sample records");
    })?;
    Ok(RecordStore::new(sample.orders, sample.items).inspect_err(|err| {
        error!(error = %err, "Rejected sample records");
    })?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut dashboard: Dashboard = Dashboard::new(load_records(args.seed, args.orders)?);

    let commands: Vec<FilterCommand> = build_commands(&args).inspect_err(|err| {
        error!(error = %err, "Rejected filter arguments");
    })?;
    for command in commands {
        dashboard.dispatch(command);
    }

    let query: OrdersTableQuery = OrdersTableQuery {
        search: args.search.clone(),
        page: args.page,
        ..OrdersTableQuery::default()
    };
    let snapshot: DashboardSnapshot = dashboard.snapshot();
    let orders_table: TablePage<&Order> = dashboard.orders_table(&query);

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&snapshot, &orders_table)?),
        OutputFormat::Json => {
            let report: Report<'_> = Report {
                snapshot,
                orders_table,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
