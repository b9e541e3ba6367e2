//! Input reading with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::{IsTerminal, Read};
use std::path::Path;

/// Read file contents with standardized error handling.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Read a value given inline, from a file (`@path`), or from stdin (`-`).
///
/// File paths go through `shellexpand`, so `@~/vars.json` and
/// `@$PROJECT/vars.json` work without a shell.
pub fn read_spec(spec: &str, field: &str) -> Result<String> {
    if spec.trim() == "-" {
        let mut stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(Error::validation_invalid_argument(
                field,
                "Cannot read from stdin when stdin is a TTY",
                None,
            ));
        }
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .map_err(|e| Error::internal_io(e.to_string(), Some("read stdin".to_string())))?;
        return Ok(buf);
    }

    if let Some(path) = spec.strip_prefix('@') {
        if path.trim().is_empty() {
            return Err(Error::validation_invalid_argument(
                field,
                "Missing file path after '@'",
                Some(spec.to_string()),
            ));
        }
        let expanded = shellexpand::full(path).map_err(|e| {
            Error::validation_invalid_argument(field, e.to_string(), Some(path.to_string()))
        })?;
        return read_file(Path::new(&*expanded), &format!("read {}", path));
    }

    Ok(spec.to_string())
}
