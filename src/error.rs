use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
/// CSV error
pub enum CsvError {
    #[error("ItemWriter from: {0}")]
    ItemWriter(String),

    #[error("Unknown quoter: {0}")]
    UnknownQuoter(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Unsupported cell value: {0}")]
    UnsupportedCell(String),

    #[error("Invalid document: {0}")]
    Document(String),
}
