use std::fmt::{Display, Formatter};

/// Failures raised by the season core. Nothing is logged and swallowed:
/// a half-built schedule or half-applied result is returned as one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeasonError {
    InvalidInput(String),
    Precondition(String),
}

impl SeasonError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        SeasonError::InvalidInput(message.into())
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        SeasonError::Precondition(message.into())
    }
}

impl Display for SeasonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SeasonError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            SeasonError::Precondition(msg) => write!(f, "precondition failed: {}", msg),
        }
    }
}

impl std::error::Error for SeasonError {}

pub type SeasonResult<T> = Result<T, SeasonError>;
