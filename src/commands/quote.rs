use clap::Args;
use serde::Serialize;

use paramline::shell;

use super::CmdResult;

#[derive(Args)]
pub struct QuoteArgs {
    /// Values to quote, one argument each
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

#[derive(Args)]
pub struct UnquoteArgs {
    /// Value to strip one pair of surrounding double quotes from
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutput {
    pub command: String,
    pub quoted: Vec<String>,
    pub command_line: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnquoteOutput {
    pub command: String,
    pub input: String,
    pub value: String,
}

pub fn run(args: QuoteArgs) -> CmdResult<QuoteOutput> {
    let quoted = shell::quote_all(&args.values);
    let command_line = shell::join_args(&args.values);

    Ok((
        QuoteOutput {
            command: "quote".to_string(),
            quoted,
            command_line,
        },
        0,
    ))
}

pub fn run_unquote(args: UnquoteArgs) -> CmdResult<UnquoteOutput> {
    let value = shell::strip_quotes(&args.value);

    Ok((
        UnquoteOutput {
            command: "unquote".to_string(),
            input: args.value,
            value,
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_builds_command_line() {
        let (output, _) = run(QuoteArgs {
            values: vec!["cp".to_string(), "my file.txt".to_string(), "/tmp".to_string()],
        })
        .unwrap();

        assert_eq!(output.quoted[1], "\"my file.txt\"");
        assert_eq!(output.command_line, "cp \"my file.txt\" /tmp");
    }

    #[test]
    fn unquote_strips_surrounding_quotes() {
        let (output, _) = run_unquote(UnquoteArgs {
            value: "\"C:\\Program Files\"".to_string(),
        })
        .unwrap();

        assert_eq!(output.value, "C:\\Program Files");
    }
}
