use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::api::build_inputs;
use crate::core::{
    FinancialInputs, RandomVariance, ResultSummary, chart_bundle_from_series, run_projection,
};
use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "roi",
    about = "Business venture ROI estimator (monthly projection, payback period, chart data)"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Enable debug logging")]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Compute a projection and print it as JSON
    Project(ProjectArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    #[arg(long)]
    pub initial_investment: i64,
    #[arg(long)]
    pub expected_monthly_revenue: i64,
    #[arg(long)]
    pub monthly_operating_cost: i64,
    #[arg(long, help = "Projection horizon in months")]
    pub timeframe_months: i64,
    #[arg(
        long,
        help = "Business model label, e.g. \"Subscription service\"; unknown labels use default growth"
    )]
    pub business_model: Option<String>,
    #[arg(long, help = "Seed for the growth and cost variance draws")]
    pub seed: Option<u64>,
    #[arg(long, help = "Print the chart bundle instead of the projection")]
    pub charts: bool,
}

impl ProjectArgs {
    pub fn to_inputs(&self) -> Result<FinancialInputs, CliError> {
        Ok(build_inputs(
            self.initial_investment,
            self.expected_monthly_revenue,
            self.monthly_operating_cost,
            self.timeframe_months,
            self.business_model.clone(),
        )?)
    }
}

/// Runs `project` and returns the pretty-printed JSON document.
pub fn run_project(args: &ProjectArgs) -> Result<String, CliError> {
    let inputs = args.to_inputs()?;
    let mut variance = match args.seed {
        Some(seed) => RandomVariance::seeded(seed),
        None => RandomVariance::from_entropy(),
    };

    let result = run_projection(&inputs, &mut variance);
    tracing::debug!(
        months = inputs.timeframe_months,
        net_profit = result.net_profit,
        roi_percentage = result.roi_percentage,
        "projection computed"
    );

    if args.charts {
        let summary = ResultSummary::from(&result);
        let bundle = chart_bundle_from_series(&inputs, &summary, result.monthly_data);
        render(&bundle)
    } else {
        render(&result)
    }
}

fn render<T: Serialize>(value: &T) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(value)?)
}
