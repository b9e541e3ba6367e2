use super::ErrorCode;

pub fn all_codes() -> &'static [ErrorCode] {
    &[
        ErrorCode::ValidationInvalidArgument,
        ErrorCode::ValidationInvalidJson,
        ErrorCode::ValidationUnknownErrorCode,
        ErrorCode::TemplateCyclicParameters,
        ErrorCode::TemplateResolutionFailed,
        ErrorCode::InternalResolverFault,
        ErrorCode::InternalIoError,
        ErrorCode::InternalJsonError,
    ]
}

pub fn parse_code(code: &str) -> Option<ErrorCode> {
    all_codes()
        .iter()
        .copied()
        .find(|candidate| candidate.as_str() == code)
}
