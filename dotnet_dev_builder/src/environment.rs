use std::env;

use crate::model::HostPlatform;

/// Path to the clone of the runtime repo, as set via `setrepo`.
pub const REPO_VARIABLE: &str = "DOTNET_DEV_REPO";
/// Default architecture, as set via `setarch` (or `getarch`).
pub const ARCH_VARIABLE: &str = "DOTNET_DEV_ARCH";
/// Default operating system, as set via `setos` (or `getos`).
pub const OS_VARIABLE: &str = "DOTNET_DEV_OS";
/// Default configuration, as set via `setconfig`.
pub const CONFIG_VARIABLE: &str = "DOTNET_DEV_CONFIG";

/// A snapshot of the settings the wrapping shell session exports for us.
///
/// Nothing here is ever written back; the shell owns the variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    repo: Option<String>,
    arch: Option<String>,
    os: Option<String>,
    configuration: Option<String>,
    host: HostPlatform,
}

impl Environment {
    /// No settings, on the current host platform.
    pub fn empty() -> Self {
        Self {
            repo: None,
            arch: None,
            os: None,
            configuration: None,
            host: HostPlatform::current(),
        }
    }

    /// Read the settings from the process environment.
    pub fn from_process() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Read the settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            repo: lookup(REPO_VARIABLE),
            arch: lookup(ARCH_VARIABLE),
            os: lookup(OS_VARIABLE),
            configuration: lookup(CONFIG_VARIABLE),
            host: HostPlatform::current(),
        }
    }

    #[allow(missing_docs)]
    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    #[allow(missing_docs)]
    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = Some(arch.into());
        self
    }

    #[allow(missing_docs)]
    pub fn with_os(mut self, os: impl Into<String>) -> Self {
        self.os = Some(os.into());
        self
    }

    #[allow(missing_docs)]
    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    /// Render command lines for `host` rather than the platform we were compiled for.
    pub fn with_host(mut self, host: HostPlatform) -> Self {
        self.host = host;
        self
    }

    /// The repo path; an empty value counts as unset.
    pub fn repo(&self) -> Option<&str> {
        self.repo.as_deref().filter(|repo| !repo.is_empty())
    }

    #[allow(missing_docs)]
    pub fn arch(&self) -> Option<&str> {
        self.arch.as_deref()
    }

    #[allow(missing_docs)]
    pub fn os(&self) -> Option<&str> {
        self.os.as_deref()
    }

    #[allow(missing_docs)]
    pub fn configuration(&self) -> Option<&str> {
        self.configuration.as_deref()
    }

    #[allow(missing_docs)]
    pub fn host(&self) -> HostPlatform {
        self.host
    }
}
