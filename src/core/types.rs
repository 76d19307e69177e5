use serde::{Deserialize, Serialize};

/// Business model labels with dedicated growth assumptions.
///
/// Any label outside the known set maps to [`BusinessModel::Other`], which
/// carries the default growth factors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BusinessModel {
    B2bManufacturing,
    DirectToConsumer,
    Subscription,
    Franchise,
    ProductionB2b,
    Other,
}

impl BusinessModel {
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("B2B Manufacturing") => BusinessModel::B2bManufacturing,
            Some("Direct-to-consumer sales") => BusinessModel::DirectToConsumer,
            Some("Subscription service") => BusinessModel::Subscription,
            Some("Franchise") => BusinessModel::Franchise,
            Some("Production (B2B)") => BusinessModel::ProductionB2b,
            _ => BusinessModel::Other,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GrowthFactors {
    pub monthly_growth: f64,
    pub max_capacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInputs {
    pub initial_investment: i64,
    pub expected_monthly_revenue: i64,
    pub monthly_operating_cost: i64,
    pub timeframe_months: u32,
    pub business_model: Option<String>,
}

impl FinancialInputs {
    pub fn business_model(&self) -> BusinessModel {
        BusinessModel::from_label(self.business_model.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyDataPoint {
    pub month: u32,
    pub revenue: i64,
    pub cost: i64,
    pub profit: i64,
    pub cumulative_profit: i64,
    pub revenue_growth_pct: i64,
    pub capacity_utilization_pct: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub total_revenue: i64,
    pub total_operating_cost: i64,
    pub net_profit: i64,
    pub roi_percentage: f64,
    pub payback_period_years: f64,
    pub monthly_data: Vec<MonthlyDataPoint>,
}

/// The flat scalar fields kept once a projection has been computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub total_revenue: i64,
    pub total_operating_cost: i64,
    pub net_profit: i64,
    pub roi_percentage: f64,
    pub payback_period_years: f64,
}

impl From<&ProjectionResult> for ResultSummary {
    fn from(value: &ProjectionResult) -> Self {
        Self {
            total_revenue: value.total_revenue,
            total_operating_cost: value.total_operating_cost,
            net_profit: value.net_profit,
            roi_percentage: value.roi_percentage,
            payback_period_years: value.payback_period_years,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSummary {
    pub roi_percentage: f64,
    pub net_profit: i64,
    pub payback_period_years: f64,
    pub timeframe_months: u32,
    pub initial_investment: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsAverages {
    pub monthly_revenue: i64,
    pub monthly_operating_cost: i64,
    pub monthly_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsEfficiency {
    pub profit_margin: f64,
    pub investment_efficiency: f64,
    pub cost_to_revenue_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceMetrics {
    pub summary: MetricsSummary,
    pub averages: MetricsAverages,
    pub efficiency: MetricsEfficiency,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartBundle {
    pub revenue_cost: ChartSeries,
    pub roi_growth: ChartSeries,
    pub performance_metrics: PerformanceMetrics,
    pub monthly_data: Vec<MonthlyDataPoint>,
}
