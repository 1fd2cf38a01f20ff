use thiserror::Error;

/// Errors raised while interpreting identifiers coming from the CLI or
/// the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("unknown project status '{0}' (expected on-track, at-risk or delayed)")]
    UnknownStatus(String),

    #[error("unknown filter '{0}' (expected all, on-track, at-risk or delayed)")]
    UnknownFilter(String),

    #[error("unknown view '{0}'")]
    UnknownView(String),

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
