//! Validated caller-supplied names

use std::fmt;

use super::error::{GreetError, Result};

/// A name that has passed validation.
///
/// The only invariant is that the text is non-empty. Whitespace-only names
/// are accepted and nothing is trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Name<'a>(&'a str);

impl<'a> Name<'a> {
    pub fn new(name: &'a str) -> Result<Self> {
        if name.is_empty() {
            return Err(GreetError::empty_name());
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl<'a> TryFrom<&'a str> for Name<'a> {
    type Error = GreetError;

    fn try_from(name: &'a str) -> Result<Self> {
        Name::new(name)
    }
}

impl AsRef<str> for Name<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for Name<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
