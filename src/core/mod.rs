mod charts;
mod engine;
mod metrics;
mod models;
mod types;
mod variance;

pub use charts::{build_revenue_cost_chart, build_roi_growth_chart};
pub use engine::{generate_monthly_data, payback_period_years, run_projection};
pub use metrics::compute_metrics;
pub use models::{growth_factors, seasonal_multiplier};
pub use types::{
    BusinessModel, ChartBundle, ChartDataset, ChartSeries, FinancialInputs, GrowthFactors,
    MetricsAverages, MetricsEfficiency, MetricsSummary, MonthlyDataPoint, PerformanceMetrics,
    ProjectionResult, ResultSummary,
};
pub use variance::{FixedVariance, RandomVariance, VarianceSource, ZeroVariance};

/// Regenerates the monthly series for `inputs` and derives the chart payload
/// against a previously reported result. Used when only the scalar result was
/// kept.
pub fn build_chart_bundle<V: VarianceSource + ?Sized>(
    inputs: &FinancialInputs,
    result: &ResultSummary,
    variance: &mut V,
) -> ChartBundle {
    let monthly_data = generate_monthly_data(inputs, variance);
    chart_bundle_from_series(inputs, result, monthly_data)
}

/// Derives the chart payload from the series that produced `result`.
pub fn chart_bundle_from_series(
    inputs: &FinancialInputs,
    result: &ResultSummary,
    monthly_data: Vec<MonthlyDataPoint>,
) -> ChartBundle {
    ChartBundle {
        revenue_cost: build_revenue_cost_chart(&monthly_data),
        roi_growth: build_roi_growth_chart(
            &monthly_data,
            result.roi_percentage,
            inputs.initial_investment,
        ),
        performance_metrics: compute_metrics(inputs, result),
        monthly_data,
    }
}
