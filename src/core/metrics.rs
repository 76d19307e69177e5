use super::engine::round2;
use super::types::{
    FinancialInputs, MetricsAverages, MetricsEfficiency, MetricsSummary, PerformanceMetrics,
    ResultSummary,
};

/// Derives the headline metrics from a stored result.
///
/// Only the persisted scalar fields are read, so the metrics stay consistent
/// with the stored ROI even when the monthly series is regenerated.
pub fn compute_metrics(inputs: &FinancialInputs, result: &ResultSummary) -> PerformanceMetrics {
    let timeframe = inputs.timeframe_months;
    let net_profit = result.net_profit as f64;
    let expected_revenue = inputs.expected_monthly_revenue as f64;

    let monthly_profit = ratio_or_zero(net_profit, f64::from(timeframe));
    let profit_margin = ratio_or_zero(net_profit, expected_revenue * f64::from(timeframe)) * 100.0;
    let investment_efficiency = net_profit / inputs.initial_investment as f64 * 100.0;
    let cost_to_revenue_ratio =
        ratio_or_zero(inputs.monthly_operating_cost as f64, expected_revenue) * 100.0;

    PerformanceMetrics {
        summary: MetricsSummary {
            roi_percentage: result.roi_percentage,
            net_profit: result.net_profit,
            payback_period_years: result.payback_period_years,
            timeframe_months: timeframe,
            initial_investment: inputs.initial_investment,
        },
        averages: MetricsAverages {
            monthly_revenue: inputs.expected_monthly_revenue,
            monthly_operating_cost: inputs.monthly_operating_cost,
            monthly_profit: round2(monthly_profit),
        },
        efficiency: MetricsEfficiency {
            profit_margin: round2(profit_margin),
            investment_efficiency: round2(investment_efficiency),
            cost_to_revenue_ratio: round2(cost_to_revenue_ratio),
        },
    }
}

fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
