use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Hotel '{hotel_id}' not found")]
    HotelNotFound { hotel_id: String },

    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("No hotels loaded")]
    NoHotels,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type OptimizerResult<T> = Result<T, OptimizerError>;
