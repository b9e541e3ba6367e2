pub mod error;
pub mod resolver;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use resolver::{EnvResolver, FnResolver, Layered, Lookup, Resolver};
