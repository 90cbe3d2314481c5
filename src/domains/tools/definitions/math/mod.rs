//! Arithmetic tool definitions.

pub mod add;

pub use add::{AddNumbersParams, AddNumbersTool};
