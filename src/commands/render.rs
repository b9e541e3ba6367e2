use clap::Args;
use serde::Serialize;

use paramline::log_status;
use paramline::resolver::{EnvResolver, Layered, Resolver};
use paramline::{shell, template};

use super::CmdResult;

#[derive(Args)]
pub struct RenderArgs {
    /// Template containing %name% placeholders
    pub template: String,

    /// Variables as a JSON object (inline, @file, or - for stdin)
    #[arg(long, value_name = "JSON")]
    pub vars: Option<String>,

    /// Set a single variable (repeatable, overrides --vars)
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub var: Vec<String>,

    /// Look up unset variables in the process environment
    #[arg(long)]
    pub env: bool,

    /// Also split the rendered command line into arguments
    #[arg(long)]
    pub split: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput {
    pub command: String,
    pub template: String,
    pub rendered: String,
    pub placeholders: Vec<String>,
    /// Top-level placeholders with no value; they are left as-is in `rendered`.
    pub unresolved: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
}

fn unresolved_keys<R: Resolver>(placeholders: &[String], resolver: &R) -> Vec<String> {
    placeholders
        .iter()
        .filter(|name| !resolver.lookup(name).is_found())
        .cloned()
        .collect()
}

pub fn run(args: RenderArgs) -> CmdResult<RenderOutput> {
    let variables = super::load_variables(args.vars.as_deref(), &args.var)?;
    log_status!("render", "Loaded {} variable(s)", variables.len());

    let placeholders = template::placeholders(&args.template);

    let (rendered, unresolved) = if args.env {
        log_status!("render", "Falling back to environment for unset variables");
        let resolver = Layered::new(&variables, EnvResolver);
        (
            template::resolve(&args.template, &resolver)?,
            unresolved_keys(&placeholders, &resolver),
        )
    } else {
        (
            template::resolve_map(&args.template, &variables)?,
            unresolved_keys(&placeholders, &variables),
        )
    };

    if !unresolved.is_empty() {
        log_status!("render", "No value for: {}", unresolved.join(", "));
    }

    let split = args.split.then(|| shell::tokenize(&rendered));

    Ok((
        RenderOutput {
            command: "render".to_string(),
            template: args.template,
            rendered,
            placeholders,
            unresolved,
            args: split,
        },
        0,
    ))
}
