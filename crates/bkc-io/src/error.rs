use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed point matrix: {0}")]
    MalformedMatrix(String),
}

pub type IoResult<T> = Result<T, IoError>;
