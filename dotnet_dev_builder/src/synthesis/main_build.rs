use crate::environment::Environment;
use crate::model::BuildKind;
use crate::synthesis::accumulator::ArgumentSet;
use crate::synthesis::token::{looks_like_flag, parameter_name, Token};
use crate::synthesis::CommandLine;
use crate::vocabulary::normalize_parameter;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const KIND: BuildKind = BuildKind::Main;

pub(super) fn synthesize(repo: &str, tokens: &[&str], environment: &Environment) -> CommandLine {
    let mut arguments = ArgumentSet::default();
    let mut msbuild_flags: Vec<String> = Vec::default();
    let mut tokens = tokens.iter().copied().peekable();

    while let Some(token) = tokens.next() {
        let (name, value) = match Token::classify(token) {
            Token::Property(flag) => {
                msbuild_flags.push(flag.to_string());
                continue;
            }
            Token::Pair { name, value } => (name, value),
            Token::Bare(switch) => {
                // A switch takes the next token as its value, unless that one is a flag too.
                let value = tokens.next_if(|next| !looks_like_flag(next)).unwrap_or("");
                (parameter_name(switch), value)
            }
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Classified '{token}' as parameter '{name}' with value '{value}'.");
        }

        let (name, is_configuration) = normalize_parameter(&name, KIND);
        arguments
            .accumulate(&name, value, is_configuration, KIND.duplicate_policy())
            .unwrap_or_else(|_| unreachable!("internal error - the main build merges duplicates"));
    }

    arguments.backfill_defaults(environment, KIND);
    render(repo, &arguments, msbuild_flags, environment)
}

fn render(
    repo: &str,
    arguments: &ArgumentSet,
    msbuild_flags: Vec<String>,
    environment: &Environment,
) -> CommandLine {
    let host = environment.host();
    let script_name = format!("build{}", host.script_extension());
    let script = host.join(repo, &[script_name.as_str()]);
    let mut rendered = Vec::default();

    for (name, value) in arguments.iter() {
        rendered.push(format!("-{name}"));

        if !value.is_empty() {
            rendered.push(value.to_string());
        }
    }

    rendered.extend(msbuild_flags);
    CommandLine::new(script, rendered)
}
