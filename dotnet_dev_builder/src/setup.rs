//! Helpers which produce the defaults a shell session persists in its environment.
//! Each returns the single value to print, for the shell to `export`/`set`.
use std::path::{self, Path};
use std::str::FromStr;

use crate::error::CommandError;
use crate::model::Configuration;
use crate::vocabulary::{is_supported_os, is_supported_platform};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The runtime repo name for the operating system `os` (as reported by [`std::env::consts::OS`]).
pub fn operating_system(os: &str) -> Result<&'static str, CommandError> {
    match os {
        "linux" => Ok("linux"),
        "macos" => Ok("osx"),
        "windows" => Ok("windows"),
        _ => Err(CommandError::UndetectedOs(os.to_string())),
    }
}

/// The runtime repo name for the architecture `arch` (as reported by [`std::env::consts::ARCH`]).
/// Architectures without a known counterpart are reported lowercased, as is.
pub fn architecture(arch: &str) -> String {
    match arch {
        "x86" => "x86",
        "x86_64" => "x64",
        "arm" => "arm",
        "aarch64" => "arm64",
        "wasm32" => "wasm",
        "s390x" => "s390x",
        "loongarch64" => "loongarch64",
        "riscv64" => "riscv64",
        "powerpc64" => "ppc64le",
        _ => return arch.to_lowercase(),
    }
    .to_string()
}

fn required<'a>(
    arguments: &[&'a str],
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, CommandError> {
    match arguments.first() {
        Some(argument) if !argument.trim().is_empty() => Ok(*argument),
        _ => Err(CommandError::MissingValue { command, what }),
    }
}

/// Validate the path of the runtime repo clone to work on.
/// Produces the absolute path, without a trailing separator.
pub fn set_repo(arguments: &[&str]) -> Result<String, CommandError> {
    let repo = required(arguments, "setrepo", "A path to the runtime repo")?;
    let path = Path::new(repo);

    if !path.is_dir() {
        return Err(CommandError::RepoNotFound(repo.to_string()));
    }

    let absolute = path::absolute(path).map_err(|_| CommandError::RepoNotFound(repo.to_string()))?;
    let is_root = absolute.parent().is_none();
    let absolute = absolute.display().to_string();

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Resolved repo '{repo}' to '{absolute}'.");
    }

    if is_root {
        // The filesystem root keeps its separator.
        Ok(absolute)
    } else {
        Ok(absolute.trim_end_matches(path::MAIN_SEPARATOR).to_string())
    }
}

/// Validate a default operating system, producing it lowercased.
pub fn set_os(arguments: &[&str]) -> Result<String, CommandError> {
    let os = required(arguments, "setos", "An operating system name")?.to_lowercase();

    if is_supported_os(&os) {
        Ok(os)
    } else {
        Err(CommandError::UnsupportedOs(os))
    }
}

/// Validate a default architecture, producing it lowercased.
pub fn set_arch(arguments: &[&str]) -> Result<String, CommandError> {
    let arch = required(arguments, "setarch", "An architecture name")?.to_lowercase();

    if is_supported_platform(&arch) {
        Ok(arch)
    } else {
        Err(CommandError::UnsupportedArch(arch))
    }
}

/// Validate a default configuration, producing its canonical name (ex: `chk` produces `Checked`).
pub fn set_config(arguments: &[&str]) -> Result<Configuration, CommandError> {
    let configuration = required(arguments, "setconfig", "A configuration name")?;
    Configuration::from_str(configuration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("linux", "linux")]
    #[case("macos", "osx")]
    #[case("windows", "windows")]
    fn operating_system_known(#[case] os: &str, #[case] expected: &str) {
        assert_eq!(operating_system(os).unwrap(), expected);
    }

    #[rstest]
    #[case("freebsd")]
    #[case("ios")]
    #[case("")]
    fn operating_system_unknown(#[case] os: &str) {
        assert_matches!(operating_system(os), Err(CommandError::UndetectedOs(o)) if o == os);
    }

    #[test]
    fn operating_system_current() {
        let result = operating_system(std::env::consts::OS);

        if cfg!(any(target_os = "linux", target_os = "macos", windows)) {
            assert!(result.is_ok());
        } else {
            assert!(result.is_err());
        }
    }

    #[rstest]
    #[case("x86", "x86")]
    #[case("x86_64", "x64")]
    #[case("arm", "arm")]
    #[case("aarch64", "arm64")]
    #[case("wasm32", "wasm")]
    #[case("s390x", "s390x")]
    #[case("loongarch64", "loongarch64")]
    #[case("riscv64", "riscv64")]
    #[case("powerpc64", "ppc64le")]
    #[case("MIPS", "mips")]
    fn architecture_names(#[case] arch: &str, #[case] expected: &str) {
        assert_eq!(architecture(arch), expected);
    }

    #[test]
    fn architecture_known_are_supported() {
        for arch in ["x86", "x86_64", "arm", "aarch64", "wasm32", "powerpc64"] {
            assert!(is_supported_platform(&architecture(arch)));
        }
    }

    #[test]
    fn set_repo_existing() {
        // Setup
        let manifest_dir = env!("CARGO_MANIFEST_DIR");
        let with_separator = format!("{manifest_dir}{}", path::MAIN_SEPARATOR);

        // Execute
        let repo = set_repo(&[with_separator.as_str()]).unwrap();

        // Verify
        assert_eq!(repo, manifest_dir.trim_end_matches(path::MAIN_SEPARATOR));
        assert!(Path::new(&repo).is_absolute());
    }

    #[test]
    fn set_repo_relative() {
        let repo = set_repo(&["."]).unwrap();
        assert!(Path::new(&repo).is_absolute());
        assert!(!repo.ends_with(path::MAIN_SEPARATOR) || repo.len() == 1);
    }

    #[test]
    fn set_repo_missing_path() {
        assert_matches!(
            set_repo(&["/definitely/not/a/runtime/clone"]),
            Err(CommandError::RepoNotFound(p)) if p == "/definitely/not/a/runtime/clone"
        );
    }

    #[test]
    fn set_repo_file() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        assert_matches!(set_repo(&[manifest]), Err(CommandError::RepoNotFound(_)));
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![""])]
    #[case(vec!["  "])]
    fn setters_require_value(#[case] arguments: Vec<&str>) {
        assert_matches!(
            set_repo(&arguments),
            Err(CommandError::MissingValue { command: "setrepo", .. })
        );
        assert_matches!(
            set_os(&arguments),
            Err(CommandError::MissingValue { command: "setos", .. })
        );
        assert_matches!(
            set_arch(&arguments),
            Err(CommandError::MissingValue { command: "setarch", .. })
        );
        assert_matches!(
            set_config(&arguments),
            Err(CommandError::MissingValue { command: "setconfig", .. })
        );
    }

    #[rstest]
    #[case("linux", "linux")]
    #[case("OSX", "osx")]
    #[case("Linux-Musl", "linux-musl")]
    fn set_os_supported(#[case] os: &str, #[case] expected: &str) {
        assert_eq!(set_os(&[os]).unwrap(), expected);
    }

    #[test]
    fn set_os_unsupported() {
        assert_eq!(
            set_os(&["MacOS"]),
            Err(CommandError::UnsupportedOs("macos".to_string()))
        );
    }

    #[rstest]
    #[case("x64", "x64")]
    #[case("ARM64", "arm64")]
    #[case("Wasm", "wasm")]
    fn set_arch_supported(#[case] arch: &str, #[case] expected: &str) {
        assert_eq!(set_arch(&[arch]).unwrap(), expected);
    }

    #[test]
    fn set_arch_unsupported() {
        assert_eq!(
            set_arch(&["AMD64"]),
            Err(CommandError::UnsupportedArch("amd64".to_string()))
        );
    }

    #[rstest]
    #[case("dbg", Configuration::Debug)]
    #[case("debug", Configuration::Debug)]
    #[case("chk", Configuration::Checked)]
    #[case("Checked", Configuration::Checked)]
    #[case("rel", Configuration::Release)]
    #[case("RELEASE", Configuration::Release)]
    fn set_config_supported(#[case] configuration: &str, #[case] expected: Configuration) {
        assert_eq!(set_config(&[configuration]).unwrap(), expected);
    }

    #[rstest]
    #[case("xyz")]
    #[case("rls")]
    #[case("Debugg")]
    fn set_config_unsupported(#[case] configuration: &str) {
        assert_matches!(
            set_config(&[configuration]),
            Err(CommandError::UnsupportedConfiguration(_))
        );
    }

    #[test]
    fn setters_use_first_argument() {
        assert_eq!(set_os(&["linux", "windows"]).unwrap(), "linux");
    }
}
