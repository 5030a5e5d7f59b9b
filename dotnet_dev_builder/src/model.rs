use std::str::FromStr;

use crate::error::CommandError;

/// Which of the runtime repo build scripts a command line is synthesized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildKind {
    /// The product itself, via `build.sh`/`build.cmd` at the repo root.
    Main,
    /// The coreclr test suite, via `src/tests/build.sh`/`build.cmd`.
    Tests,
}

impl BuildKind {
    /// How repeated parameters are treated for this kind of build.
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        match self {
            BuildKind::Main => DuplicatePolicy::Merge,
            BuildKind::Tests => DuplicatePolicy::Reject,
        }
    }

    /// The canonical parameter under which the general configuration is stored.
    pub(crate) fn configuration_key(&self) -> &'static str {
        match self {
            BuildKind::Main => "configuration",
            BuildKind::Tests => "clr",
        }
    }
}

impl FromStr for BuildKind {
    type Err = CommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "main" => Ok(BuildKind::Main),
            "tests" => Ok(BuildKind::Tests),
            _ => Err(CommandError::UnknownBuildType(value.to_string())),
        }
    }
}

impl std::fmt::Display for BuildKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildKind::Main => write!(f, "main"),
            BuildKind::Tests => write!(f, "tests"),
        }
    }
}

/// What the accumulator does when a parameter is received more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Append the new value to the existing one (`+` for `subset`, `,` otherwise).
    Merge,
    /// Fail the whole synthesis.
    Reject,
}

/// The build flavours understood by the runtime repo scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Configuration {
    /// `dbg`
    Debug,
    /// `chk`
    Checked,
    /// `rel`
    Release,
}

impl FromStr for Configuration {
    type Err = CommandError;

    /// Strict parsing, as used when persisting a default configuration.
    /// Unlike [`crate::normalize_configuration`], nothing is passed through.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "dbg" | "debug" => Ok(Configuration::Debug),
            "chk" | "checked" => Ok(Configuration::Checked),
            "rel" | "release" => Ok(Configuration::Release),
            _ => Err(CommandError::UnsupportedConfiguration(value.to_string())),
        }
    }
}

impl std::fmt::Display for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The platform the synthesized command line will run on.
///
/// This drives the script extension, the path separator, and how switches with values are rendered
/// (space separated on Windows, colon separated elsewhere).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    /// Scripts are `.cmd` files, paths use `\\`.
    Windows,
    /// Linux, macOS, and the other non-Windows hosts.
    Unix,
}

impl HostPlatform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            HostPlatform::Windows
        } else {
            HostPlatform::Unix
        }
    }

    /// The extension of the runtime repo build scripts.
    pub fn script_extension(&self) -> &'static str {
        match self {
            HostPlatform::Windows => ".cmd",
            HostPlatform::Unix => ".sh",
        }
    }

    fn separator(&self) -> char {
        match self {
            HostPlatform::Windows => '\\',
            HostPlatform::Unix => '/',
        }
    }

    /// Join path components with this platform's separator.
    /// A separator is only inserted when the left side doesn't already end with one.
    pub fn join(&self, base: &str, parts: &[&str]) -> String {
        let separator = self.separator();
        let mut path = base.to_string();

        for part in parts {
            if !path.is_empty() && !path.ends_with(['/', '\\']) {
                path.push(separator);
            }

            path.push_str(part);
        }

        path
    }

    /// Whether switches with values are separated by a space (`-key value`), rather than a colon (`-key:value`).
    pub(crate) fn space_separated(&self) -> bool {
        matches!(self, HostPlatform::Windows)
    }
}
