use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::core::{FinancialInputs, ResultSummary};
use crate::error::StoreError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResult {
    pub id: u64,
    pub inputs: FinancialInputs,
    pub result: ResultSummary,
}

/// Where computed results are kept between the calculate and chart requests.
pub trait ResultStore: Send + Sync {
    fn save(
        &self,
        inputs: FinancialInputs,
        result: ResultSummary,
    ) -> Result<StoredResult, StoreError>;

    fn get(&self, id: u64) -> Result<Option<StoredResult>, StoreError>;
}

#[derive(Debug)]
pub struct InMemoryResultStore {
    next_id: AtomicU64,
    results: RwLock<HashMap<u64, StoredResult>>,
}

impl InMemoryResultStore {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            results: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore for InMemoryResultStore {
    fn save(
        &self,
        inputs: FinancialInputs,
        result: ResultSummary,
    ) -> Result<StoredResult, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let stored = StoredResult { id, inputs, result };
        self.results
            .write()
            .map_err(|_| StoreError::Poisoned)?
            .insert(id, stored.clone());
        Ok(stored)
    }

    fn get(&self, id: u64) -> Result<Option<StoredResult>, StoreError> {
        let results = self.results.read().map_err(|_| StoreError::Poisoned)?;
        Ok(results.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> FinancialInputs {
        FinancialInputs {
            initial_investment: 50_000,
            expected_monthly_revenue: 8_000,
            monthly_operating_cost: 5_000,
            timeframe_months: 24,
            business_model: Some("Franchise".to_string()),
        }
    }

    fn sample_summary() -> ResultSummary {
        ResultSummary {
            total_revenue: 200_000,
            total_operating_cost: 120_000,
            net_profit: 80_000,
            roi_percentage: 160.0,
            payback_period_years: 1.25,
        }
    }

    #[test]
    fn save_assigns_increasing_ids() {
        let store = InMemoryResultStore::new();
        let first = store.save(sample_inputs(), sample_summary()).expect("save");
        let second = store.save(sample_inputs(), sample_summary()).expect("save");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn get_returns_saved_result() {
        let store = InMemoryResultStore::new();
        let saved = store.save(sample_inputs(), sample_summary()).expect("save");

        let loaded = store.get(saved.id).expect("get").expect("present");
        assert_eq!(loaded.inputs, sample_inputs());
        assert_eq!(loaded.result, sample_summary());
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = InMemoryResultStore::new();
        assert!(store.get(99).expect("get").is_none());
    }
}
