use serde::Serialize;
use serde_json::Value;

pub mod codes;
pub mod help;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidArgument,
    ValidationInvalidJson,
    ValidationUnknownErrorCode,

    TemplateCyclicParameters,
    TemplateResolutionFailed,

    InternalResolverFault,
    InternalIoError,
    InternalJsonError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidArgument => "validation.invalid_argument",
            ErrorCode::ValidationInvalidJson => "validation.invalid_json",
            ErrorCode::ValidationUnknownErrorCode => "validation.unknown_error_code",

            ErrorCode::TemplateCyclicParameters => "template.cyclic_parameters",
            ErrorCode::TemplateResolutionFailed => "template.resolution_failed",

            ErrorCode::InternalResolverFault => "internal.resolver_fault",
            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
    pub retryable: Option<bool>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidArgumentDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CyclicParametersDetails {
    pub max_depth: usize,
    /// Keys expanded on the way down, outermost first.
    pub chain: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionFailedDetails {
    pub key: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverFaultDetails {
    pub source_code: String,
    pub source_message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

fn to_details<T: Serialize>(details: T) -> Value {
    serde_json::to_value(details).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
            retryable: None,
        }
    }

    pub fn validation_invalid_argument(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let details = to_details(InvalidArgumentDetails {
            field: field.into(),
            problem: problem.into(),
            value,
        });

        Self::new(
            ErrorCode::ValidationInvalidArgument,
            "Invalid argument",
            details,
        )
    }

    pub fn validation_invalid_json(
        err: serde_json::Error,
        context: Option<String>,
        excerpt: Option<String>,
    ) -> Self {
        let details = serde_json::json!({
            "error": err.to_string(),
            "context": context,
            "excerpt": excerpt,
        });

        Self::new(ErrorCode::ValidationInvalidJson, "Invalid JSON", details)
    }

    pub fn validation_unknown_error_code(code: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ValidationUnknownErrorCode,
            "Unknown error code",
            serde_json::json!({ "code": code.into() }),
        )
        .with_hint("Run 'paramline error codes' to list available codes")
    }

    pub fn template_cyclic_parameters(max_depth: usize, chain: Vec<String>) -> Self {
        let message = if chain.is_empty() {
            "Cyclic parameters".to_string()
        } else {
            format!("Cyclic parameters: {}", chain.join(" -> "))
        };

        Self::new(
            ErrorCode::TemplateCyclicParameters,
            message,
            to_details(CyclicParametersDetails { max_depth, chain }),
        )
        .with_hint(format!(
            "Parameter values may nest at most {} levels deep; check for a value that refers back to itself",
            max_depth
        ))
    }

    pub fn template_resolution_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        let key = key.into();
        let message = format!("Failed to resolve parameter '{}'", key);
        Self::new(
            ErrorCode::TemplateResolutionFailed,
            message,
            to_details(ResolutionFailedDetails {
                key,
                reason: reason.into(),
            }),
        )
    }

    /// Wraps an error raised by a resolver that is not allowed to fail.
    pub fn internal_resolver_fault(source: &Error) -> Self {
        Self::new(
            ErrorCode::InternalResolverFault,
            "Resolver failed where failure is impossible",
            to_details(ResolverFaultDetails {
                source_code: source.code.as_str().to_string(),
                source_message: source.message.clone(),
            }),
        )
        .with_hint("This is a bug in paramline; please report it with the template that triggered it")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = to_details(InternalIoErrorDetails {
            error: error.into(),
            context,
        });

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        Self::new(
            ErrorCode::InternalJsonError,
            "JSON error",
            serde_json::json!({ "error": error.into(), "context": context }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}
