//! Greeter error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GreetError {
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },
}

impl GreetError {
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        GreetError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    pub(crate) fn empty_name() -> Self {
        Self::invalid_argument("name", "must not be empty")
    }
}

pub type Result<T> = std::result::Result<T, GreetError>;
