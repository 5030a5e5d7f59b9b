/// How a single input token participates in the synthesized command line.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// `-p:Name=Value` or `/p:Name=Value`, forwarded verbatim to MSBuild at the end of the command line.
    Property(&'a str),
    /// `name=value`, with the name dash-trimmed and lowercased.
    Pair { name: String, value: &'a str },
    /// Anything else.
    Bare(&'a str),
}

impl<'a> Token<'a> {
    pub(crate) fn classify(token: &'a str) -> Self {
        if token.starts_with("-p:") || token.starts_with("/p:") {
            Token::Property(token)
        } else if let Some((name, value)) = token.split_once('=') {
            // Only the first '=' separates; 'a=b=c' is the parameter 'a' with value 'b=c'.
            Token::Pair {
                name: parameter_name(name),
                value,
            }
        } else {
            Token::Bare(token)
        }
    }
}

/// Strip every leading dash and lowercase.
pub(crate) fn parameter_name(token: &str) -> String {
    token.trim_start_matches('-').to_lowercase()
}

/// Whether `token` is itself a flag, rather than the value of a preceding switch.
pub(crate) fn looks_like_flag(token: &str) -> bool {
    token.starts_with('-') || token.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-p:Foo=bar")]
    #[case("/p:Foo=bar")]
    #[case("-p:")]
    fn classify_property(#[case] token: &str) {
        assert_eq!(Token::classify(token), Token::Property(token));
    }

    #[rstest]
    #[case("set=clr", "set", "clr")]
    #[case("--Config=rel", "config", "rel")]
    #[case("-A=x64", "a", "x64")]
    #[case("a=b=c", "a", "b=c")]
    #[case("os=", "os", "")]
    #[case("=x64", "", "x64")]
    #[case("-P:Foo=bar", "p:foo", "bar")]
    fn classify_pair(#[case] token: &str, #[case] name: &str, #[case] value: &str) {
        assert_eq!(
            Token::classify(token),
            Token::Pair {
                name: name.to_string(),
                value,
            }
        );
    }

    #[rstest]
    #[case("x64")]
    #[case("-subset")]
    #[case("--ninja")]
    #[case("/bl")]
    #[case("")]
    fn classify_bare(#[case] token: &str) {
        assert_eq!(Token::classify(token), Token::Bare(token));
    }

    #[rstest]
    #[case("-subset", "subset")]
    #[case("---Subset", "subset")]
    #[case("Arch", "arch")]
    #[case("-", "")]
    fn parameter_name_trims(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(parameter_name(token), expected);
    }

    #[rstest]
    #[case("-x", true)]
    #[case("/x", true)]
    #[case("x", false)]
    #[case("", false)]
    #[case("a=-b", false)]
    fn looks_like_flag_prefix(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(looks_like_flag(token), expected);
    }
}
