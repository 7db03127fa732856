use super::TraverseMode;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ReluctanceError {
    #[error("no street reluctance is defined for traverse mode '{0}'")]
    InvalidMode(TraverseMode),
    #[error("unknown traverse mode '{0}'")]
    UnknownMode(String),
}
