//! Text primitives with zero knowledge of where their input comes from.
//!
//! - `io` - Input reading with consistent error handling
//! - `shell` - Command-line splitting and quoting
//! - `template` - `%name%` parameter substitution

pub mod io;
pub mod shell;
pub mod template;
