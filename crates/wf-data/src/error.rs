use thiserror::Error;

use wf_graph::GraphError;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset parse error: {0}")]
    Parse(String),

    #[error("invalid dataset: {0}")]
    Graph(#[from] GraphError),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DataResult<T> = Result<T, DataError>;
