use super::TagShape;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TagError {
    #[error("failure parsing {shape} tag value '{token}': {message}")]
    ParseError {
        shape: TagShape,
        token: String,
        message: String,
    },
    #[error("'{token}' is not a known {category} category")]
    UnknownCategory {
        category: &'static str,
        token: String,
    },
    #[error("unknown accessibility property '{0}'")]
    UnknownProperty(String),
    #[error("No value present")]
    NoValuePresent,
}
