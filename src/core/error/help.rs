use super::{codes, ErrorCode, Hint};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHelpSummary {
    pub code: String,
    pub summary: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHelp {
    pub code: String,
    pub summary: String,
    pub details_schema: serde_json::Value,
    pub hints: Vec<Hint>,
}

pub fn list() -> Vec<ErrorHelpSummary> {
    codes::all_codes()
        .iter()
        .copied()
        .map(|code| {
            let help = explain(code);
            ErrorHelpSummary {
                code: help.code,
                summary: help.summary,
            }
        })
        .collect()
}

fn help(
    code: ErrorCode,
    summary: &str,
    details_schema: serde_json::Value,
    hint: &str,
) -> ErrorHelp {
    ErrorHelp {
        code: code.as_str().to_string(),
        summary: summary.to_string(),
        details_schema,
        hints: vec![Hint {
            message: hint.to_string(),
        }],
    }
}

pub fn explain(code: ErrorCode) -> ErrorHelp {
    match code {
        ErrorCode::ValidationInvalidArgument => help(
            code,
            "Invalid CLI argument",
            serde_json::json!({"field":"string","problem":"string","value":"string?"}),
            "Verify the argument value and try again",
        ),
        ErrorCode::ValidationInvalidJson => help(
            code,
            "Invalid JSON input",
            serde_json::json!({"error":"string","context":"string?","excerpt":"string?"}),
            "Validate the JSON passed to --vars",
        ),
        ErrorCode::ValidationUnknownErrorCode => help(
            code,
            "Unknown error code",
            serde_json::json!({"code":"string"}),
            "Run `paramline error codes` to list available codes",
        ),
        ErrorCode::TemplateCyclicParameters => help(
            code,
            "Parameter expansion nested too deeply",
            serde_json::json!({"maxDepth":"number","chain":"string[]"}),
            "Look for a parameter whose value refers back to itself, directly or through others",
        ),
        ErrorCode::TemplateResolutionFailed => help(
            code,
            "A parameter source failed to produce a value",
            serde_json::json!({"key":"string","reason":"string"}),
            "Inspect error.details.reason for the underlying failure",
        ),
        ErrorCode::InternalResolverFault => help(
            code,
            "A resolver that cannot fail reported a failure",
            serde_json::json!({"sourceCode":"string","sourceMessage":"string"}),
            "Report as a paramline bug with the template and variables used",
        ),
        ErrorCode::InternalIoError => help(
            code,
            "Internal IO error",
            serde_json::json!({"error":"string","context":"string?"}),
            "Check that the referenced file exists and is readable",
        ),
        ErrorCode::InternalJsonError => help(
            code,
            "Internal JSON error",
            serde_json::json!({"error":"string","context":"string?"}),
            "Report as a paramline bug if persistent",
        ),
    }
}
