//! Greeting values

use std::fmt;

use serde::Serialize;

use super::error::Result;
use super::name::Name;

pub const GREETING_PREFIX: &str = "Hello, ";
pub const GREETING_SUFFIX: &str = "!";

/// A formatted greeting, always `GREETING_PREFIX + name + GREETING_SUFFIX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Greeting(String);

impl Greeting {
    pub fn from_name(name: Name<'_>) -> Self {
        let name = name.as_str();
        let mut text =
            String::with_capacity(GREETING_PREFIX.len() + name.len() + GREETING_SUFFIX.len());
        text.push_str(GREETING_PREFIX);
        text.push_str(name);
        text.push_str(GREETING_SUFFIX);
        Self(text)
    }

    /// Validate `name` and build its greeting.
    pub fn for_name(name: &str) -> Result<Self> {
        Name::new(name).map(Self::from_name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The greeted name, without prefix and suffix.
    pub fn name(&self) -> &str {
        &self.0[GREETING_PREFIX.len()..self.0.len() - GREETING_SUFFIX.len()]
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Greeting {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Greeting> for String {
    fn from(greeting: Greeting) -> Self {
        greeting.0
    }
}

impl PartialEq<str> for Greeting {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Greeting {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::greeter::GreetError;

    #[test]
    fn test_for_name() {
        let greeting = Greeting::for_name("World").unwrap();
        assert_eq!(greeting, "Hello, World!");
        assert_eq!(greeting.name(), "World");
    }

    #[test]
    fn test_for_name_empty() {
        assert!(matches!(
            Greeting::for_name(""),
            Err(GreetError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_name_roundtrip_with_separators_in_name() {
        let greeting = Greeting::for_name("Hello, !").unwrap();
        assert_eq!(greeting.as_str(), "Hello, Hello, !!");
        assert_eq!(greeting.name(), "Hello, !");
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let greeting = Greeting::for_name("Alice").unwrap();
        let json = serde_json::to_string(&greeting).unwrap();
        assert_eq!(json, "\"Hello, Alice!\"");
    }

    #[test]
    fn test_into_string() {
        let text: String = Greeting::for_name("Alice").unwrap().into();
        assert_eq!(text, "Hello, Alice!");
    }
}
