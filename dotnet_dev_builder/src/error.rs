use thiserror::Error;

/// A failure that abandons the current command.
/// Nothing is written to standard output once one of these is raised.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// No command token was provided.
    #[error("A command is required to run.")]
    MissingCommand,

    /// The command token names no known command.
    #[error("Apologies, but the command '{0}' isn't available yet.")]
    UnknownCommand(String),

    /// `DOTNET_DEV_REPO` is unset or empty.
    #[error("First set the path to where the clone of the runtime repo is located with 'setrepo'.")]
    MissingRepo,

    /// `build` was invoked without `main` or `tests`.
    #[error("A build type is required. The currently supported values are 'main' and 'tests'.")]
    MissingBuildType,

    /// The build type token is neither `main` nor `tests`.
    #[error("The build type '{0}' was not recognized.")]
    UnknownBuildType(String),

    /// A parameter was repeated while building the tests.
    #[error(transparent)]
    DuplicateParameter(#[from] DuplicateParameter),

    /// A setup helper was invoked without its single argument.
    #[error("{command}: {what} is required as argument.")]
    MissingValue {
        /// The helper command, for example `setos`.
        command: &'static str,
        /// A description of the missing argument.
        what: &'static str,
    },

    /// The repo path handed to `setrepo` doesn't exist.
    #[error("The given path '{0}' was unfortunately not found.")]
    RepoNotFound(String),

    /// The OS isn't in the supported operating systems.
    #[error("The OS value '{0}' is not supported.")]
    UnsupportedOs(String),

    /// The architecture isn't in the supported platforms.
    #[error("The architecture value '{0}' is not supported.")]
    UnsupportedArch(String),

    /// The configuration isn't one of Debug, Checked, or Release (or their short forms).
    #[error("The configuration '{0}' is not supported. Pick one of the following three: Debug, Checked, Release.")]
    UnsupportedConfiguration(String),

    /// `getos` ran on a host the runtime repo scripts don't know about.
    #[error("The detected operating system '{0}' was not Linux, Mac, or Windows.")]
    UndetectedOs(String),
}

/// A parameter was received twice while building the tests, which only allow one value per parameter.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Only one '{0}' value should be specified.")]
pub struct DuplicateParameter(pub String);
