use crate::environment::Environment;
use crate::error::DuplicateParameter;
use crate::model::{BuildKind, DuplicatePolicy};
use crate::vocabulary::normalize_configuration;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The structured parameters of a build command line, keyed by canonical name.
///
/// Iteration follows insertion order, which is the order the parameters are rendered in.
/// An empty value marks a switch that takes no value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgumentSet {
    entries: Vec<(String, String)>,
}

impl ArgumentSet {
    /// The value stored under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name).map(|i| self.entries[i].1.as_str())
    }

    /// Whether `name` has been received.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    #[allow(missing_docs)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    /// Record a value for the canonical parameter `name`.
    ///
    /// Configuration values are expanded first (ex: `rel` becomes `Release`).
    /// The first value for a parameter is always stored.
    /// For a repeated parameter, `DuplicatePolicy::Reject` fails and leaves the stored value alone,
    /// whereas `DuplicatePolicy::Merge` appends the value (joined by `+` for `subset`, `,` otherwise).
    /// A merge is skipped when the stored value already contains the new one.
    ///
    /// Note the containment check is textual: `arm` is considered present in `arm64`.
    pub fn accumulate(
        &mut self,
        name: &str,
        value: &str,
        is_configuration: bool,
        policy: DuplicatePolicy,
    ) -> Result<(), DuplicateParameter> {
        let value = if is_configuration {
            normalize_configuration(value)
        } else {
            value.to_string()
        };

        let index = match self.position(name) {
            Some(index) => index,
            None => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Received parameter '{name}' with value '{value}'.");
                }
                self.entries.push((name.to_string(), value));
                return Ok(());
            }
        };

        if policy == DuplicatePolicy::Reject {
            return Err(DuplicateParameter(name.to_string()));
        }

        let existing = &mut self.entries[index].1;

        if !existing.contains(value.as_str()) {
            let separator = if name == "subset" { '+' } else { ',' };
            existing.push(separator);
            existing.push_str(&value);
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Merged parameter '{name}' into '{existing}'.");
            }
        }

        Ok(())
    }

    /// Fill in the architecture, OS, and configuration from the environment defaults, unless already received.
    ///
    /// The defaults aren't validated, and an absent default is inserted as an empty value.
    pub fn backfill_defaults(&mut self, environment: &Environment, kind: BuildKind) {
        let defaults = [
            ("arch", environment.arch()),
            ("os", environment.os()),
            (kind.configuration_key(), environment.configuration()),
        ];

        for (name, default) in defaults {
            if !self.contains(name) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Using the environment default {default:?} for parameter '{name}'.");
                }
                self.entries
                    .push((name.to_string(), default.unwrap_or_default().to_string()));
            }
        }
    }
}
