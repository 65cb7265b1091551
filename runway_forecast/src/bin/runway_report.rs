//! Runway report - print a cash-flow forecast
//!
//! Usage:
//!   runway-report                          Forecast the seed history
//!   runway-report --history data.csv       Forecast a CSV history
//!   runway-report --new-hires 2 --json     Apply a scenario, print JSON

use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use runway_forecast::display::{chart_rows, format_confidence, format_currency, SeriesSummary};
use runway_forecast::{
    seed_history, ForecastEngine, HistoryLoader, Result, RunwayConfig, ScenarioAdjuster,
    ScenarioParams,
};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "runway-report", version, about = "Cash-flow forecast report")]
struct Cli {
    /// Months to forecast (defaults to the configured horizon)
    #[arg(short, long)]
    months: Option<usize>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV history with date,revenue,expenses columns
    #[arg(long)]
    history: Option<PathBuf>,

    /// Number of new hires in the scenario
    #[arg(long)]
    new_hires: Option<f64>,

    /// Capital investment in the scenario
    #[arg(long)]
    capital_investment: Option<f64>,

    /// Marketing budget in the scenario
    #[arg(long)]
    marketing_budget: Option<f64>,

    /// Scenario includes expansion plans
    #[arg(long)]
    expansion_plans: bool,

    /// Print the series as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn scenario(&self) -> Option<ScenarioParams> {
        let params = ScenarioParams {
            new_hires: self.new_hires,
            capital_investment: self.capital_investment,
            marketing_budget: self.marketing_budget,
            expansion_plans: self.expansion_plans.then_some(true),
        };
        (params != ScenarioParams::default()).then_some(params)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact().with_writer(std::io::stderr))
        .init();

    let config = RunwayConfig::load(cli.config.as_deref())?;
    let history = match &cli.history {
        Some(path) => HistoryLoader::from_csv(path)?,
        None => seed_history(),
    };

    let engine = ForecastEngine::new(config.forecast.clone())?;
    let months = cli.months.unwrap_or(config.forecast.default_months);
    let origin = Utc::now().date_naive();

    let mut series = engine.forecast(&history, months, origin)?;
    info!(months, history_len = history.len(), "Generated forecast");

    if let Some(params) = cli.scenario() {
        series = ScenarioAdjuster::new(config.scenario.clone())?.apply(&series, &params)?;
    }

    if cli.json {
        println!("{}", series.to_json()?);
        return Ok(());
    }

    println!(
        "{:<10} {:>14} {:>14} {:>14} {:>11}",
        "Month", "Revenue", "Expenses", "Cash Flow", "Confidence"
    );
    for row in chart_rows(&series) {
        println!(
            "{:<10} {:>14} {:>14} {:>14} {:>11}",
            row.label, row.revenue, row.expenses, row.cash_flow, row.confidence
        );
    }

    let summary = SeriesSummary::from_series(&series, config.forecast.confidence_threshold);
    println!();
    println!("Total revenue:   {}", format_currency(summary.total_revenue));
    println!("Total expenses:  {}", format_currency(summary.total_expenses));
    println!("Net cash flow:   {}", format_currency(summary.total_cash_flow));
    println!(
        "Mean confidence: {} ({} of {} months reliable)",
        format_confidence(summary.mean_confidence),
        summary.reliable_months,
        summary.months
    );
    if let Some(date) = summary.first_negative_month {
        println!("Cash flow turns negative in {}", date.format("%b %Y"));
    }

    Ok(())
}
