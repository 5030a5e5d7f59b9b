use crate::model::BuildKind;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

const SUPPORTED_PLATFORMS: &[&str] = &[
    "x86",
    "x64",
    "arm",
    "armv6",
    "armel",
    "arm64",
    "loongarch64",
    "riscv64",
    "s390x",
    "ppc64le",
    "wasm",
];

const SUPPORTED_CONFIGURATIONS: &[&str] = &["debug", "checked", "release"];

const SUPPORTED_OPERATING_SYSTEMS: &[&str] = &[
    "windows",
    "osx",
    "linux",
    "freebsd",
    "maccatalyst",
    "tvos",
    "tvossimulator",
    "ios",
    "iossimulator",
    "android",
    "browser",
    "wasi",
    "netbsd",
    "illumos",
    "solaris",
    "linux-musl",
    "linux-bionic",
    "tizen",
    "haiku",
];

/// One group of interchangeable parameter names, and what the build scripts call it.
struct ParameterAlias {
    aliases: &'static [&'static str],
    main: &'static str,
    tests: &'static str,
    is_configuration: bool,
}

impl ParameterAlias {
    fn canonical(&self, kind: BuildKind) -> &'static str {
        match kind {
            BuildKind::Main => self.main,
            BuildKind::Tests => self.tests,
        }
    }
}

const PARAMETER_ALIASES: &[ParameterAlias] = &[
    ParameterAlias {
        aliases: &["s", "set"],
        main: "subset",
        tests: "subset",
        is_configuration: false,
    },
    ParameterAlias {
        aliases: &["a"],
        main: "arch",
        tests: "arch",
        is_configuration: false,
    },
    ParameterAlias {
        aliases: &["c", "config", "configuration"],
        main: "configuration",
        tests: "clr",
        is_configuration: true,
    },
    ParameterAlias {
        aliases: &["lc", "libs", "libsconfig", "librariesconfiguration"],
        main: "librariesConfiguration",
        tests: "libs",
        is_configuration: true,
    },
    ParameterAlias {
        aliases: &[
            "clr",
            "clrconfig",
            "clrconfiguration",
            "rc",
            "runconfig",
            "runtimeconfiguration",
        ],
        main: "runtimeConfiguration",
        tests: "clr",
        is_configuration: true,
    },
    ParameterAlias {
        aliases: &["hc", "hostconfig", "hostconfiguration"],
        main: "hostConfiguration",
        tests: "hostConfiguration",
        is_configuration: true,
    },
];

fn contains_ignore_case(vocabulary: &[&str], value: &str) -> bool {
    let value = value.to_lowercase();
    vocabulary.iter().any(|v| *v == value)
}

/// Whether `value` names an architecture the runtime repo builds for (case-insensitive).
pub fn is_supported_platform(value: &str) -> bool {
    contains_ignore_case(SUPPORTED_PLATFORMS, value)
}

/// Whether `value` is `debug`, `checked`, or `release` (case-insensitive).
pub fn is_supported_configuration(value: &str) -> bool {
    contains_ignore_case(SUPPORTED_CONFIGURATIONS, value)
}

/// Whether `value` names an operating system the runtime repo builds for (case-insensitive).
pub fn is_supported_os(value: &str) -> bool {
    contains_ignore_case(SUPPORTED_OPERATING_SYSTEMS, value)
}

/// Map any accepted alias of a parameter to the name the build script expects.
///
/// `parameter` must already be dash-trimmed and lowercased.
/// The second element reports whether the parameter carries a configuration value.
/// Unknown parameters come back unchanged, and are never configurations.
pub fn normalize_parameter(parameter: &str, kind: BuildKind) -> (String, bool) {
    match PARAMETER_ALIASES
        .iter()
        .find(|group| group.aliases.iter().any(|alias| *alias == parameter))
    {
        Some(group) => {
            let canonical = group.canonical(kind);
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Normalized parameter '{parameter}' to '{canonical}' for the {kind} build.");
            }
            (canonical.to_string(), group.is_configuration)
        }
        None => (parameter.to_string(), false),
    }
}

/// Expand the short configuration names to those the build scripts expect.
///
/// An empty value means `Debug`.
/// Anything else (including full names in any casing) passes through untouched.
pub fn normalize_configuration(value: &str) -> String {
    match value {
        "" | "dbg" => "Debug".to_string(),
        "chk" => "Checked".to_string(),
        "rel" => "Release".to_string(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn random_casing(value: &str) -> String {
        value
            .chars()
            .map(|c| {
                if thread_rng().gen::<bool>() {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect()
    }

    #[test]
    fn supported_platforms_any_casing() {
        for platform in SUPPORTED_PLATFORMS {
            for _ in 0..20 {
                let value = random_casing(platform);
                assert!(is_supported_platform(&value), "{value}");
                assert!(!is_supported_platform(&format!("{value}x")), "{value}x");
            }
        }
    }

    #[test]
    fn supported_configurations_any_casing() {
        for configuration in SUPPORTED_CONFIGURATIONS {
            for _ in 0..20 {
                let value = random_casing(configuration);
                assert!(is_supported_configuration(&value), "{value}");
                assert!(!is_supported_configuration(&format!("{value}x")));
            }
        }
    }

    #[test]
    fn supported_operating_systems_any_casing() {
        for os in SUPPORTED_OPERATING_SYSTEMS {
            for _ in 0..20 {
                let value = random_casing(os);
                assert!(is_supported_os(&value), "{value}");
                assert!(!is_supported_os(&format!("{value}x")));
            }
        }
    }

    #[rstest]
    #[case("")]
    #[case("x65")]
    #[case("amd64")]
    #[case("dbg")]
    fn unsupported_values(#[case] value: &str) {
        assert!(!is_supported_platform(value));
        assert!(!is_supported_configuration(value));
        assert!(!is_supported_os(value));
    }

    #[rstest]
    #[case("s", "subset", "subset", false)]
    #[case("set", "subset", "subset", false)]
    #[case("a", "arch", "arch", false)]
    #[case("c", "configuration", "clr", true)]
    #[case("config", "configuration", "clr", true)]
    #[case("configuration", "configuration", "clr", true)]
    #[case("lc", "librariesConfiguration", "libs", true)]
    #[case("libs", "librariesConfiguration", "libs", true)]
    #[case("libsconfig", "librariesConfiguration", "libs", true)]
    #[case("librariesconfiguration", "librariesConfiguration", "libs", true)]
    #[case("clr", "runtimeConfiguration", "clr", true)]
    #[case("clrconfig", "runtimeConfiguration", "clr", true)]
    #[case("clrconfiguration", "runtimeConfiguration", "clr", true)]
    #[case("rc", "runtimeConfiguration", "clr", true)]
    #[case("runconfig", "runtimeConfiguration", "clr", true)]
    #[case("runtimeconfiguration", "runtimeConfiguration", "clr", true)]
    #[case("hc", "hostConfiguration", "hostConfiguration", true)]
    #[case("hostconfig", "hostConfiguration", "hostConfiguration", true)]
    #[case("hostconfiguration", "hostConfiguration", "hostConfiguration", true)]
    #[case("os", "os", "os", false)]
    #[case("arch", "arch", "arch", false)]
    #[case("ninja", "ninja", "ninja", false)]
    fn normalize_parameter_aliases(
        #[case] parameter: &str,
        #[case] main: &str,
        #[case] tests: &str,
        #[case] is_configuration: bool,
    ) {
        assert_eq!(
            normalize_parameter(parameter, BuildKind::Main),
            (main.to_string(), is_configuration)
        );
        assert_eq!(
            normalize_parameter(parameter, BuildKind::Tests),
            (tests.to_string(), is_configuration)
        );
    }

    #[test]
    fn normalize_parameter_groups_agree() {
        for group in PARAMETER_ALIASES {
            for kind in [BuildKind::Main, BuildKind::Tests] {
                let expected = normalize_parameter(group.aliases[0], kind);

                for alias in group.aliases {
                    assert_eq!(normalize_parameter(alias, kind), expected);
                }
            }
        }
    }

    #[test]
    fn normalize_parameter_expects_lowercase() {
        // Casing is the caller's job; an un-lowered alias is simply unknown.
        assert_eq!(
            normalize_parameter("Config", BuildKind::Main),
            ("Config".to_string(), false)
        );
    }

    #[rstest]
    #[case("", "Debug")]
    #[case("dbg", "Debug")]
    #[case("chk", "Checked")]
    #[case("rel", "Release")]
    #[case("Debug", "Debug")]
    #[case("release", "release")]
    #[case("DBG", "DBG")]
    #[case("xyz", "xyz")]
    fn normalize_configuration_values(#[case] value: &str, #[case] expected: &str) {
        assert_eq!(normalize_configuration(value), expected);
    }
}
