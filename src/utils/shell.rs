//! Command-line splitting and quoting.
//!
//! Only double quotes are understood. They group words containing spaces and
//! are dropped from the result; there is no escaping. [`quote_if_needed`] and
//! [`strip_quotes`] are the inverse for values that contain no quotes.

const QUOTE: char = '"';

/// Split a command line into arguments.
///
/// An unquoted space ends the current argument. Arguments that are blank
/// after trimming are dropped. An unbalanced quote keeps the remainder of
/// the input quoted.
pub fn tokenize(command: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;

    for ch in command.chars() {
        match ch {
            QUOTE => in_quote = !in_quote,
            ' ' if !in_quote => push_if_not_blank(&mut args, &mut current),
            _ => current.push(ch),
        }
    }

    push_if_not_blank(&mut args, &mut current);
    args
}

fn push_if_not_blank(args: &mut Vec<String>, current: &mut String) {
    let token = std::mem::take(current);
    if !token.trim().is_empty() {
        args.push(token);
    }
}

/// Wrap `value` in double quotes when it contains a space or tab.
pub fn quote_if_needed(value: &str) -> String {
    if value.contains([' ', '\t']) {
        format!("{QUOTE}{value}{QUOTE}")
    } else {
        value.to_string()
    }
}

/// Remove at most one leading and one trailing double quote.
pub fn strip_quotes(value: &str) -> String {
    let value = value.strip_prefix(QUOTE).unwrap_or(value);
    value.strip_suffix(QUOTE).unwrap_or(value).to_string()
}

/// Quote each value as needed.
pub fn quote_all<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .map(|value| quote_if_needed(value.as_ref()))
        .collect()
}

/// Quote and join values into a single command line.
pub fn join_args<S: AsRef<str>>(values: &[S]) -> String {
    quote_all(values).join(" ")
}
