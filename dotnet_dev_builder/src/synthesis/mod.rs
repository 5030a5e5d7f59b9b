mod accumulator;
mod main_build;
mod test_build;
mod token;

pub use accumulator::ArgumentSet;

use crate::environment::Environment;
use crate::error::CommandError;
use crate::model::BuildKind;

/// A synthesized build script invocation.
///
/// Displays as a single line: the script path followed by each argument, separated by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    script: String,
    arguments: Vec<String>,
}

impl CommandLine {
    pub(crate) fn new(script: String, arguments: Vec<String>) -> Self {
        Self { script, arguments }
    }

    /// The path of the build script.
    pub fn script(&self) -> &str {
        &self.script
    }

    /// The script arguments, in rendering order.
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.script)?;

        for argument in &self.arguments {
            write!(f, " {argument}")?;
        }

        Ok(())
    }
}

/// Normalize the user's `tokens` into the command line of the `kind` build script found under `repo`.
///
/// The accepted notations are:
/// * `name=value`, where the name may be any alias of a build script parameter (ex: `config=rel`).
/// * `-name value` or `-name`, the script's own dashed notation.
/// * `-p:Name=Value` or `/p:Name=Value`, passed through to MSBuild.
/// * For the tests, bare platforms and configurations (ex: `x64 Checked`).
///
/// The architecture, OS, and configuration fall back to the `environment` defaults.
/// The main build merges repeated parameters, whereas the tests build rejects them.
///
/// ```
/// use dotnet_dev_builder::{synthesize, BuildKind, Environment, HostPlatform};
///
/// let environment = Environment::empty()
///     .with_arch("x64")
///     .with_os("linux")
///     .with_host(HostPlatform::Unix);
/// let command_line = synthesize(
///     BuildKind::Main,
///     "/r",
///     &["set=clr", "config=rel", "config=dbg", "-subset", "libs"],
///     &environment,
/// )
/// .unwrap();
/// assert_eq!(
///     command_line.to_string(),
///     "/r/build.sh -subset clr+libs -configuration Release,Debug -arch x64 -os linux"
/// );
/// ```
pub fn synthesize(
    kind: BuildKind,
    repo: &str,
    tokens: &[&str],
    environment: &Environment,
) -> Result<CommandLine, CommandError> {
    match kind {
        BuildKind::Main => Ok(main_build::synthesize(repo, tokens, environment)),
        BuildKind::Tests => test_build::synthesize(repo, tokens, environment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HostPlatform;

    #[test]
    fn command_line_display() {
        assert_eq!(
            CommandLine::new("/r/build.sh".to_string(), Vec::default()).to_string(),
            "/r/build.sh"
        );
        assert_eq!(
            CommandLine::new(
                "/r/build.sh".to_string(),
                vec!["-subset".to_string(), "clr".to_string()]
            )
            .to_string(),
            "/r/build.sh -subset clr"
        );
    }

    #[test]
    fn synthesize_dispatches() {
        let environment = Environment::empty()
            .with_arch("x64")
            .with_os("linux")
            .with_configuration("Debug")
            .with_host(HostPlatform::Unix);

        let main = synthesize(BuildKind::Main, "/r", &["x64"], &environment).unwrap();
        assert_eq!(main.script(), "/r/build.sh");

        let tests = synthesize(BuildKind::Tests, "/r", &["x64"], &environment).unwrap();
        assert_eq!(tests.script(), "/r/src/tests/build.sh");
    }

    #[test]
    fn synthesize_tests_duplicate() {
        let environment = Environment::empty().with_host(HostPlatform::Unix);
        assert_matches!(
            synthesize(BuildKind::Tests, "/r", &["x64", "arm64"], &environment),
            Err(CommandError::DuplicateParameter(_))
        );
    }
}
