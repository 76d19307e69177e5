use super::types::{BusinessModel, GrowthFactors};

const DEFAULT_GROWTH: GrowthFactors = GrowthFactors {
    monthly_growth: 0.08,
    max_capacity: 1.20,
};

const SEASONAL_MULTIPLIERS: [f64; 12] = [
    0.90, 0.95, 1.00, 1.00, 1.05, 1.10, 1.15, 1.10, 1.05, 1.00, 0.95, 0.90,
];

pub fn growth_factors(model: BusinessModel) -> GrowthFactors {
    match model {
        BusinessModel::B2bManufacturing | BusinessModel::Other => DEFAULT_GROWTH,
        BusinessModel::DirectToConsumer => GrowthFactors {
            monthly_growth: 0.12,
            max_capacity: 1.50,
        },
        BusinessModel::Subscription => GrowthFactors {
            monthly_growth: 0.05,
            max_capacity: 1.10,
        },
        BusinessModel::Franchise => GrowthFactors {
            monthly_growth: 0.06,
            max_capacity: 1.30,
        },
        BusinessModel::ProductionB2b => GrowthFactors {
            monthly_growth: 0.07,
            max_capacity: 1.15,
        },
    }
}

/// Seasonal revenue multiplier for a 1-based month, repeating every 12 months.
pub fn seasonal_multiplier(month: u32) -> f64 {
    // Month 0 has no calendar slot and keeps the neutral multiplier.
    let Some(offset) = month.checked_sub(1) else {
        return 1.0;
    };
    let month_in_year = (offset % 12) + 1;
    SEASONAL_MULTIPLIERS
        .get(month_in_year as usize - 1)
        .copied()
        .unwrap_or(1.0)
}
