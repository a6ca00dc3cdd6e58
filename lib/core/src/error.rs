use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Required column not found: {0}")]
    MissingColumn(String),

    #[error("Table is empty: no rows were loaded")]
    EmptyTable,

    #[error("Vector space has not been fitted yet")]
    NotFitted,

    #[error("Invalid product count: {0} (must be a positive integer)")]
    InvalidProductCount(String),

    #[error("Amount {amount} is out of range (0 to {max})")]
    AmountOutOfRange { amount: f64, max: f64 },

    #[error("Requested {requested} products but only {available} slots are available")]
    TooManyProducts { requested: usize, available: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
