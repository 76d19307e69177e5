use super::engine::round2;
use super::types::{ChartDataset, ChartSeries, MonthlyDataPoint};

pub const REVENUE_COST_TARGET_POINTS: usize = 24;
pub const ROI_GROWTH_TARGET_POINTS: usize = 12;

pub fn build_revenue_cost_chart(series: &[MonthlyDataPoint]) -> ChartSeries {
    let sampled = downsample(series, REVENUE_COST_TARGET_POINTS);

    ChartSeries {
        labels: month_labels(&sampled),
        datasets: vec![
            dataset("Revenue", sampled.iter().map(|p| p.revenue as f64)),
            dataset("Operating Cost", sampled.iter().map(|p| p.cost as f64)),
            dataset("Profit", sampled.iter().map(|p| p.profit as f64)),
        ],
    }
}

/// ROI trajectory over the sampled months, never drawn above `final_roi_pct`,
/// alongside a flat reference line at `final_roi_pct`.
pub fn build_roi_growth_chart(
    series: &[MonthlyDataPoint],
    final_roi_pct: f64,
    initial_investment: i64,
) -> ChartSeries {
    let sampled = downsample(series, ROI_GROWTH_TARGET_POINTS);
    let investment = initial_investment as f64;

    let roi_values = sampled.iter().map(|p| {
        let roi = (p.cumulative_profit as f64 + investment) / investment * 100.0;
        round2(roi).min(final_roi_pct)
    });

    ChartSeries {
        labels: month_labels(&sampled),
        datasets: vec![
            dataset("ROI Growth", roi_values),
            dataset("Target ROI", sampled.iter().map(|_| final_roi_pct)),
        ],
    }
}

fn downsample(series: &[MonthlyDataPoint], target_points: usize) -> Vec<MonthlyDataPoint> {
    let rate = sample_rate(series.len(), target_points);
    series
        .iter()
        .enumerate()
        .filter(|(idx, _)| idx % rate == 0)
        .map(|(_, p)| *p)
        .collect()
}

fn sample_rate(len: usize, target_points: usize) -> usize {
    len.div_ceil(target_points.max(1)).max(1)
}

fn month_labels(points: &[MonthlyDataPoint]) -> Vec<String> {
    points.iter().map(|p| format!("Month {}", p.month)).collect()
}

fn dataset(label: &str, data: impl Iterator<Item = f64>) -> ChartDataset {
    ChartDataset {
        label: label.to_string(),
        data: data.collect(),
    }
}
