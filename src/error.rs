use thiserror::Error;

/// Rejections raised while turning caller-supplied values into
/// [`FinancialInputs`](crate::core::FinancialInputs).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be numeric")]
    NotNumeric { field: &'static str },

    #[error("{field} must be greater than 0")]
    NotPositive { field: &'static str },

    #[error("{field} must be at most {max}")]
    TooLarge { field: &'static str, max: i64 },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("result store lock poisoned")]
    Poisoned,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("ROI result {0} not found")]
    NotFound(u64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
