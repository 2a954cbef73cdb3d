//! copilot-super Core Library
//!
//! Validates a caller-supplied name and formats a greeting for it:
//! - `greet` returns the greeting text or an `InvalidArgument` error
//! - `Name` / `Greeting` carry the same contract in the type system

pub mod greeter;

pub use greeter::{
    greet, greeting_for, GreetError, Greeting, Name, Result, GREETING_PREFIX, GREETING_SUFFIX,
};
