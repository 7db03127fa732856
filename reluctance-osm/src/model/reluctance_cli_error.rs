use reluctance_core::model::{reluctance::ReluctanceError, tag::TagError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReluctanceCliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid edge '{edge_id}': {message}")]
    InvalidEdge { edge_id: String, message: String },
    #[error("failure parsing OSM tag: {source}")]
    TagError {
        #[from]
        source: TagError,
    },
    #[error("failure computing reluctance: {source}")]
    ReluctanceError {
        #[from]
        source: ReluctanceError,
    },
    #[error("failure reading or writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure reading configuration: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
