//! Package identifier normalization

use std::fmt;

/// A package identifier split into its parts.
///
/// Accepts bare names (`lodash`), scoped names (`@types/node`) and either
/// form with an embedded version (`lodash@4.17.21`, `@types/node@20`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageSpec {
    pub scope: Option<String>,
    pub name: String,
    pub version: Option<String>,
}

impl PackageSpec {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        // A leading '@' belongs to the scope, so the version separator is searched after it
        let (head, version) = match raw.strip_prefix('@') {
            Some(rest) => match rest.split_once('@') {
                Some((scoped, version)) => (format!("@{scoped}"), Some(version)),
                None => (raw.to_string(), None),
            },
            None => match raw.split_once('@') {
                Some((name, version)) => (name.to_string(), Some(version)),
                None => (raw.to_string(), None),
            },
        };

        let version = version.filter(|v| !v.is_empty()).map(str::to_string);

        match head.strip_prefix('@').and_then(|rest| rest.split_once('/')) {
            Some((scope, name)) => Self {
                scope: Some(scope.to_string()),
                name: name.to_string(),
                version,
            },
            None => Self {
                scope: None,
                name: head,
                version,
            },
        }
    }

    /// Name without version, as the registry knows it (`@scope/name` or `name`)
    pub fn bare_name(&self) -> String {
        match &self.scope {
            Some(scope) => format!("@{}/{}", scope, self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bare_name())?;
        if let Some(version) = &self.version {
            write!(f, "@{version}")?;
        }
        Ok(())
    }
}
