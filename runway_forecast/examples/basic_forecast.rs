use chrono::Utc;
use runway_forecast::display::{chart_rows, format_currency, SeriesSummary};
use runway_forecast::{seed_history, PredictionStore, ScenarioParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Runway: Basic Forecasting Example");
    println!("=================================\n");

    let history = seed_history();
    println!("Seed history: {} months", history.len());
    for record in &history {
        println!(
            "  {}  revenue {}  expenses {}",
            record.date,
            format_currency(record.revenue),
            format_currency(record.expenses)
        );
    }

    // The store forecasts from today's date
    let mut store = PredictionStore::seeded()?;
    println!("\nBaseline forecast from {}:", Utc::now().date_naive());
    print_series(&store);

    // Hire two people and invest 20k
    let params = ScenarioParams::default()
        .with_new_hires(2.0)
        .with_capital_investment(20_000.0);
    store.simulate_scenario(&params)?;
    println!("\nWith 2 new hires and $20,000 invested:");
    print_series(&store);

    store.reset_predictions()?;
    let summary = SeriesSummary::from_series(store.predictions(), 0.8);
    println!(
        "\nAfter reset: net cash flow over {} months is {}",
        summary.months,
        format_currency(summary.total_cash_flow)
    );

    Ok(())
}

fn print_series(store: &PredictionStore) {
    for row in chart_rows(store.predictions()) {
        println!(
            "  {:<9} {:>12} {:>12} {:>12} {:>7}",
            row.label, row.revenue, row.expenses, row.cash_flow, row.confidence
        );
    }
}
