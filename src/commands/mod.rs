use serde_json::Value;
use std::collections::HashMap;

use paramline::io::read_spec;
use paramline::Error;

pub type CmdResult<T> = paramline::Result<(T, i32)>;

// ============================================================================
// Variable Input Parsing (CLI layer)
// ============================================================================

/// Parse `KEY=VALUE` flags into pairs. The first `=` separates key from value.
fn parse_var_flags(flags: &[String]) -> paramline::Result<Vec<(String, String)>> {
    flags
        .iter()
        .map(|flag| -> paramline::Result<(String, String)> {
            let (key, value) = flag.split_once('=').ok_or_else(|| {
                Error::validation_invalid_argument(
                    "var",
                    "Expected KEY=VALUE",
                    Some(flag.clone()),
                )
            })?;
            if key.is_empty() {
                return Err(Error::validation_invalid_argument(
                    "var",
                    "Variable name must not be empty",
                    Some(flag.clone()),
                ));
            }
            Ok((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Convert a JSON scalar into the string a template will see.
fn value_to_param(key: &str, value: Value) -> paramline::Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::validation_invalid_argument(
            "vars",
            format!("Value for '{}' must be a string, number or boolean", key),
            Some(other.to_string()),
        )),
    }
}

/// Build the variable map from a JSON object spec and `--var` flags.
/// Flags override spec values.
pub fn load_variables(
    spec: Option<&str>,
    flags: &[String],
) -> paramline::Result<HashMap<String, String>> {
    let mut variables = HashMap::new();

    if let Some(spec) = spec {
        let raw = read_spec(spec, "vars")?;
        let parsed: Value = serde_json::from_str(&raw).map_err(|e| {
            Error::validation_invalid_json(
                e,
                Some("parse --vars".to_string()),
                Some(raw.chars().take(200).collect::<String>()),
            )
        })?;

        let Value::Object(object) = parsed else {
            return Err(Error::validation_invalid_argument(
                "vars",
                "Expected a JSON object of variables",
                Some(raw.chars().take(200).collect::<String>()),
            ));
        };

        for (key, value) in object {
            let param = value_to_param(&key, value)?;
            variables.insert(key, param);
        }
    }

    for (key, value) in parse_var_flags(flags)? {
        variables.insert(key, value);
    }

    Ok(variables)
}

pub mod error;
pub mod quote;
pub mod render;
pub mod split;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args))
    };
}

pub(crate) fn run_json(command: crate::Commands) -> (paramline::Result<Value>, i32) {
    match command {
        crate::Commands::Render(args) => dispatch!(args, render),
        crate::Commands::Split(args) => dispatch!(args, split),
        crate::Commands::Quote(args) => dispatch!(args, quote),
        crate::Commands::Unquote(args) => {
            crate::output::map_cmd_result_to_json(quote::run_unquote(args))
        }
        crate::Commands::Error(args) => dispatch!(args, error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramline::ErrorCode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn flags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn load_variables_from_inline_json() {
        let vars = load_variables(Some(r#"{"tool":"gcc","jobs":4,"debug":false}"#), &[]).unwrap();

        assert_eq!(vars["tool"], "gcc");
        assert_eq!(vars["jobs"], "4");
        assert_eq!(vars["debug"], "false");
    }

    #[test]
    fn load_variables_flags_override_spec() {
        let vars = load_variables(
            Some(r#"{"tool":"gcc"}"#),
            &flags(&["tool=clang", "flags=-O2 -g"]),
        )
        .unwrap();

        assert_eq!(vars["tool"], "clang");
        assert_eq!(vars["flags"], "-O2 -g");
    }

    #[test]
    fn load_variables_from_file() {
        let mut temp = NamedTempFile::new().unwrap();
        write!(temp, r#"{{"root":"/opt/sdk"}}"#).unwrap();

        let spec = format!("@{}", temp.path().display());
        let vars = load_variables(Some(&spec), &[]).unwrap();
        assert_eq!(vars["root"], "/opt/sdk");
    }

    #[test]
    fn var_flag_keeps_equals_in_value() {
        let vars = load_variables(None, &flags(&["define=A=1"])).unwrap();
        assert_eq!(vars["define"], "A=1");
    }

    #[test]
    fn var_flag_without_equals_is_rejected() {
        let err = load_variables(None, &flags(&["novalue"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
        assert_eq!(err.details["value"], "novalue");
    }

    #[test]
    fn var_flag_with_empty_key_is_rejected() {
        let err = load_variables(None, &flags(&["=x"])).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn non_object_spec_is_rejected() {
        let err = load_variables(Some("[1,2]"), &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn nested_value_is_rejected() {
        let err = load_variables(Some(r#"{"a":{"b":1}}"#), &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidArgument);
    }

    #[test]
    fn malformed_json_is_invalid_json() {
        let err = load_variables(Some("{not json"), &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationInvalidJson);
    }
}
