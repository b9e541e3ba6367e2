use clap::{Args, Subcommand};
use serde::Serialize;

use paramline::error::{codes, help};
use paramline::Error;

use super::CmdResult;

#[derive(Args)]
pub struct ErrorArgs {
    #[command(subcommand)]
    command: ErrorCommand,
}

#[derive(Subcommand)]
enum ErrorCommand {
    /// List available error codes
    Codes,
    /// Explain an error code
    Explain {
        /// Error code (example: `template.cyclic_parameters`)
        code: String,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorCodesOutput {
    pub command: String,
    pub codes: Vec<help::ErrorHelpSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorExplainOutput {
    pub command: String,
    pub help: help::ErrorHelp,
}

pub fn run(args: ErrorArgs) -> CmdResult<serde_json::Value> {
    let value = match args.command {
        ErrorCommand::Codes => serde_json::to_value(ErrorCodesOutput {
            command: "error.codes".to_string(),
            codes: help::list(),
        }),
        ErrorCommand::Explain { code } => {
            let Some(code_enum) = codes::parse_code(&code) else {
                return Err(Error::validation_unknown_error_code(code));
            };

            serde_json::to_value(ErrorExplainOutput {
                command: "error.explain".to_string(),
                help: help::explain(code_enum),
            })
        }
    }
    .map_err(|e| Error::internal_json(e.to_string(), Some("serialize help".to_string())))?;

    Ok((value, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramline::ErrorCode;

    #[test]
    fn explain_known_code() {
        let (value, _) = run(ErrorArgs {
            command: ErrorCommand::Explain {
                code: "template.cyclic_parameters".to_string(),
            },
        })
        .unwrap();

        assert_eq!(value["help"]["code"], "template.cyclic_parameters");
    }

    #[test]
    fn explain_unknown_code_fails() {
        let err = run(ErrorArgs {
            command: ErrorCommand::Explain {
                code: "nope".to_string(),
            },
        })
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationUnknownErrorCode);
    }
}
