//! `%name%` parameter substitution.
//!
//! A single left-to-right pass where `%` toggles between literal text and a
//! placeholder name. Resolved values are themselves expanded, so parameters
//! may reference other parameters; nesting is bounded by [`MAX_DEPTH`].
//!
//! - `%%` is an escaped literal `%`.
//! - `%#...%` is a reserved directive and currently expands to nothing.
//! - `%name%` with no value is kept verbatim.
//! - A trailing `%name` with no closing `%` is dropped.

use std::collections::HashMap;

use crate::error::{Error, ErrorCode, Result};
use crate::resolver::{Lookup, Resolver};

/// Deepest nesting of resolved values before expansion is treated as cyclic.
pub const MAX_DEPTH: usize = 12;

/// Placeholder names starting with this character are reserved.
pub const DIRECTIVE_PREFIX: char = '#';

const DELIMITER: char = '%';

/// A closed `%...%` region found by the scanner.
enum Segment<'a> {
    Literal(char),
    Escape,
    Directive,
    Param(&'a str),
}

/// Walks `input` and reports each literal char and closed placeholder.
///
/// Text after an unmatched trailing `%` is never reported.
fn scan<'a>(input: &'a str, mut visit: impl FnMut(Segment<'a>) -> Result<()>) -> Result<()> {
    let mut param_start: Option<usize> = None;

    for (i, ch) in input.char_indices() {
        if ch != DELIMITER {
            if param_start.is_none() {
                visit(Segment::Literal(ch))?;
            }
            continue;
        }

        match param_start.take() {
            None => param_start = Some(i + DELIMITER.len_utf8()),
            Some(start) => {
                let name = &input[start..i];
                let segment = if name.is_empty() {
                    Segment::Escape
                } else if name.starts_with(DIRECTIVE_PREFIX) {
                    Segment::Directive
                } else {
                    Segment::Param(name)
                };
                visit(segment)?;
            }
        }
    }

    Ok(())
}

/// Expand every placeholder in `input` using `resolver`.
///
/// Fails with the resolver's own error when a lookup fails, or with
/// `template.cyclic_parameters` when values nest deeper than [`MAX_DEPTH`].
/// No partial output is returned on failure.
pub fn resolve<R: Resolver + ?Sized>(input: &str, resolver: &R) -> Result<String> {
    let mut output = String::with_capacity(input.len());
    let mut chain = Vec::new();
    expand_into(&mut output, input, resolver, &mut chain)?;
    Ok(output)
}

fn expand_into<R: Resolver + ?Sized>(
    output: &mut String,
    input: &str,
    resolver: &R,
    chain: &mut Vec<String>,
) -> Result<()> {
    if chain.len() > MAX_DEPTH {
        return Err(Error::template_cyclic_parameters(MAX_DEPTH, chain.clone()));
    }

    scan(input, |segment| {
        match segment {
            Segment::Literal(ch) => output.push(ch),
            Segment::Escape => output.push(DELIMITER),
            Segment::Directive => {}
            Segment::Param(name) => match resolver.lookup(name) {
                Lookup::Found(value) => {
                    chain.push(name.to_string());
                    expand_into(output, &value, resolver, chain)?;
                    chain.pop();
                }
                Lookup::NotFound => {
                    output.push(DELIMITER);
                    output.push_str(name);
                    output.push(DELIMITER);
                }
                Lookup::Failed(err) => return Err(err),
            },
        }
        Ok(())
    })
}

/// Expand placeholders from a plain key/value map.
///
/// Map lookups cannot fail, so the only expected error is
/// `template.cyclic_parameters`. Anything else means a resolver broke its
/// contract and is reported as `internal.resolver_fault`.
pub fn resolve_map(input: &str, variables: &HashMap<String, String>) -> Result<String> {
    resolve(input, variables).map_err(map_resolver_fault)
}

fn map_resolver_fault(err: Error) -> Error {
    match err.code {
        ErrorCode::TemplateCyclicParameters => err,
        _ => Error::internal_resolver_fault(&err),
    }
}

/// Parameter names referenced by `input`, in first-seen order, without
/// duplicates. Escapes and directives are not parameters. Values are not
/// followed.
pub fn placeholders(input: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    // scan only propagates errors from the visitor, which never fails here.
    let _ = scan(input, |segment| {
        if let Segment::Param(name) = segment {
            if !names.iter().any(|existing| existing == name) {
                names.push(name.to_string());
            }
        }
        Ok(())
    });
    names
}

/// Whether `input` references `key` as a placeholder.
pub fn is_present(input: &str, key: &str) -> bool {
    placeholders(input).iter().any(|name| name == key)
}
