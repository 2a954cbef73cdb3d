//! Greeter module
//!
//! Turns a non-empty name into `"Hello, <name>!"`.

pub mod error;
pub mod greeting;
pub mod name;

pub use error::{GreetError, Result};
pub use greeting::{Greeting, GREETING_PREFIX, GREETING_SUFFIX};
pub use name::Name;

use tracing::{debug, trace};

/// Return the greeting for `name`.
///
/// The name is used verbatim: no trimming, case folding or escaping.
/// Fails with [`GreetError::InvalidArgument`] when `name` is empty.
pub fn greet(name: &str) -> Result<String> {
    let name = Name::new(name).inspect_err(|_| {
        debug!(len = name.len(), "Rejected name for greeting");
    })?;
    let greeting = greeting_for(name);
    trace!(greeting = %greeting, "Formatted greeting");
    Ok(greeting.into_string())
}

/// Format the greeting for an already validated name.
pub fn greeting_for(name: Name<'_>) -> Greeting {
    Greeting::from_name(name)
}
