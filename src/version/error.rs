use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Invalid component: {0}")]
    InvalidComponent(String),
}
