use crate::environment::Environment;
use crate::error::CommandError;
use crate::model::BuildKind;
use crate::synthesis::accumulator::ArgumentSet;
use crate::synthesis::token::Token;
use crate::synthesis::CommandLine;
use crate::vocabulary::{is_supported_configuration, is_supported_platform, normalize_parameter};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const KIND: BuildKind = BuildKind::Tests;

pub(super) fn synthesize(
    repo: &str,
    tokens: &[&str],
    environment: &Environment,
) -> Result<CommandLine, CommandError> {
    let mut arguments = ArgumentSet::default();
    let mut script_flags: Vec<String> = Vec::default();
    let mut msbuild_flags: Vec<String> = Vec::default();

    for token in tokens.iter().copied() {
        let (name, value) = match Token::classify(token) {
            Token::Property(flag) => {
                msbuild_flags.push(flag.to_string());
                continue;
            }
            Token::Pair { name, value } => (name, value),
            Token::Bare(switch) => {
                // The tests script takes the architecture and configuration as switches (ex: '-x64 -Checked'),
                // so these are tracked as parameters to catch duplicates.
                let value = switch.trim_start_matches('-');

                if is_supported_platform(value) {
                    ("arch".to_string(), value)
                } else if is_supported_configuration(value) {
                    ("clr".to_string(), value)
                } else {
                    script_flags.push(switch.to_string());
                    continue;
                }
            }
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Classified '{token}' as parameter '{name}' with value '{value}'.");
        }

        let (name, is_configuration) = normalize_parameter(&name, KIND);
        arguments.accumulate(&name, value, is_configuration, KIND.duplicate_policy())?;
    }

    arguments.backfill_defaults(environment, KIND);
    Ok(render(
        repo,
        &arguments,
        script_flags,
        msbuild_flags,
        environment,
    ))
}

fn render(
    repo: &str,
    arguments: &ArgumentSet,
    script_flags: Vec<String>,
    mut msbuild_flags: Vec<String>,
    environment: &Environment,
) -> CommandLine {
    let host = environment.host();
    let script_name = format!("build{}", host.script_extension());
    let script = host.join(repo, &["src", "tests", script_name.as_str()]);
    let mut rendered = Vec::default();

    for (name, value) in arguments.iter() {
        match name {
            "arch" | "clr" => {
                // Dashes don't work for these on Windows.
                if value.is_empty() {
                    continue;
                } else if host.space_separated() {
                    rendered.push(value.to_string());
                } else {
                    rendered.push(format!("-{value}"));
                }
            }
            "libs" => msbuild_flags.push(format!("/p:LibrariesConfiguration={value}")),
            _ => {
                if value.is_empty() {
                    rendered.push(format!("-{name}"));
                } else if host.space_separated() || name == "os" {
                    rendered.push(format!("-{name} {value}"));
                } else {
                    rendered.push(format!("-{name}:{value}"));
                }
            }
        }
    }

    #[cfg(feature = "tracing_debug")]
    {
        debug!(
            "Rendering {} parameters, {} script flags, and {} MSBuild flags.",
            rendered.len(),
            script_flags.len(),
            msbuild_flags.len()
        );
    }

    rendered.extend(script_flags);
    rendered.extend(msbuild_flags);
    CommandLine::new(script, rendered)
}
