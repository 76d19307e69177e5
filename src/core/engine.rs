use super::models::{growth_factors, seasonal_multiplier};
use super::types::{FinancialInputs, MonthlyDataPoint, ProjectionResult};
use super::variance::VarianceSource;

/// Share of the expected monthly revenue a venture earns in its first month.
const RAMP_UP_SHARE: f64 = 0.6;
/// Half-width of the uniform perturbation applied to growth and cost.
const VARIANCE_BAND: f64 = 0.05;

#[derive(Debug)]
struct ProjectionState {
    current_revenue: f64,
    prev_adjusted_revenue: Option<f64>,
    cumulative_profit: i64,
}

pub fn run_projection<V: VarianceSource + ?Sized>(
    inputs: &FinancialInputs,
    variance: &mut V,
) -> ProjectionResult {
    let monthly_data = generate_monthly_data(inputs, variance);

    let total_revenue = saturating_total(monthly_data.iter().map(|p| p.revenue));
    let total_operating_cost = saturating_total(monthly_data.iter().map(|p| p.cost));
    let net_profit = total_revenue.saturating_sub(total_operating_cost);
    let roi_percentage = net_profit as f64 / inputs.initial_investment as f64 * 100.0;
    let payback_period_years = payback_period_years(&monthly_data);

    ProjectionResult {
        total_revenue,
        total_operating_cost,
        net_profit,
        roi_percentage: round2(roi_percentage),
        payback_period_years: round2(payback_period_years),
        monthly_data,
    }
}

/// Builds one data point per month of the timeframe.
///
/// Revenue starts at 60% of the expected figure and compounds by the business
/// model's growth rate, capped at its capacity ceiling. Operating cost is
/// redrawn around the base cost every month and never compounds. Both are
/// perturbed by draws from `variance`: the growth draw happens first (from
/// month 2 onwards), then the cost draw.
///
/// Revenue and cost are rounded before the stored profit is taken as their
/// difference. Monetary arithmetic saturates at the `i64` bounds.
pub fn generate_monthly_data<V: VarianceSource + ?Sized>(
    inputs: &FinancialInputs,
    variance: &mut V,
) -> Vec<MonthlyDataPoint> {
    let expected_revenue = inputs.expected_monthly_revenue as f64;
    let base_cost = inputs.monthly_operating_cost as f64;
    let factors = growth_factors(inputs.business_model());
    let revenue_cap = expected_revenue * factors.max_capacity;

    let mut state = ProjectionState {
        current_revenue: expected_revenue * RAMP_UP_SHARE,
        prev_adjusted_revenue: None,
        cumulative_profit: 0_i64.saturating_sub(inputs.initial_investment),
    };
    let mut series = Vec::with_capacity(inputs.timeframe_months as usize);

    for month in 1..=inputs.timeframe_months {
        if month > 1 {
            let growth_rate =
                factors.monthly_growth * (1.0 + variance.uniform(-VARIANCE_BAND, VARIANCE_BAND));
            state.current_revenue = (state.current_revenue * (1.0 + growth_rate)).min(revenue_cap);
        }

        let current_cost = base_cost * (1.0 + variance.uniform(-VARIANCE_BAND, VARIANCE_BAND));
        let adjusted_revenue = state.current_revenue * seasonal_multiplier(month);
        let revenue = round_money(adjusted_revenue);
        let cost = round_money(current_cost);
        let profit = revenue.saturating_sub(cost);
        state.cumulative_profit = state.cumulative_profit.saturating_add(profit);

        let prev_adjusted = state.prev_adjusted_revenue.unwrap_or(adjusted_revenue);
        let revenue_growth_pct = if prev_adjusted > 0.0 {
            ((adjusted_revenue - prev_adjusted) / prev_adjusted * 100.0).round() as i64
        } else {
            0
        };
        let capacity_utilization_pct = if expected_revenue > 0.0 {
            (adjusted_revenue / expected_revenue * 100.0).round() as i64
        } else {
            0
        };
        state.prev_adjusted_revenue = Some(adjusted_revenue);

        series.push(MonthlyDataPoint {
            month,
            revenue,
            cost,
            profit,
            cumulative_profit: state.cumulative_profit,
            revenue_growth_pct,
            capacity_utilization_pct,
        });
    }

    series
}

/// Years until cumulative profit first turns non-negative, or the full
/// horizon when it never does.
pub fn payback_period_years(series: &[MonthlyDataPoint]) -> f64 {
    let months = series
        .iter()
        .position(|point| point.cumulative_profit >= 0)
        .map(|idx| idx + 1)
        .unwrap_or(series.len());
    months as f64 / 12.0
}

/// Float-to-int casts saturate, so oversized amounts pin to the i64 bounds.
fn round_money(value: f64) -> i64 {
    value.round() as i64
}

fn saturating_total(values: impl Iterator<Item = i64>) -> i64 {
    values.fold(0, i64::saturating_add)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
