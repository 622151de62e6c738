use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unable to fetch news analysis data")]
    AnalysisUnavailable,

    #[error("No data source attempted for {0}")]
    NoDataSource(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type NewsResult<T> = Result<T, NewsError>;
