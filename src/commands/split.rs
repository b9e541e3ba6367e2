use clap::Args;
use serde::Serialize;

use paramline::shell;

use super::CmdResult;

#[derive(Args)]
pub struct SplitArgs {
    /// Command line to split (quote it once for your own shell)
    pub command_line: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitOutput {
    pub command: String,
    pub command_line: String,
    pub args: Vec<String>,
}

pub fn run(args: SplitArgs) -> CmdResult<SplitOutput> {
    let tokens = shell::tokenize(&args.command_line);

    Ok((
        SplitOutput {
            command: "split".to_string(),
            command_line: args.command_line,
            args: tokens,
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_returns_tokens() {
        let (output, code) = run(SplitArgs {
            command_line: "make \"CFLAGS=-O2 -g\" all".to_string(),
        })
        .unwrap();

        assert_eq!(code, 0);
        assert_eq!(output.args, vec!["make", "CFLAGS=-O2 -g", "all"]);
    }

    #[test]
    fn output_serializes_documented_keys() {
        let (output, _) = run(SplitArgs {
            command_line: "a b".to_string(),
        })
        .unwrap();

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            serde_json::json!({
                "command": "split",
                "commandLine": "a b",
                "args": ["a", "b"],
            })
        );
    }
}
