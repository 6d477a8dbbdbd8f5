use thiserror::Error;

#[derive(Error, Debug)]
pub enum SalesSummaryError {
    #[error("No branch selected: the summary requires at least one branch")]
    EmptyBranchSelection,

    #[error("Invalid date '{value}' in ledger row {row}: expected DD/MM/YYYY")]
    InvalidDate { row: usize, value: String },

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SalesSummaryError>;
