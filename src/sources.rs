//! Package-source overrides
//!
//! An ordered list of NuGet package-source locations. When present it
//! replaces the ambient `NuGet.config` sources entirely; absence (an
//! `Option<NuGetSources>` of `None` at the use sites) means "use ambient
//! configuration". The list is kept in the order given and is never
//! deduplicated.

use std::fmt;

/// Ordered set of package-source locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NuGetSources(Vec<String>);

impl NuGetSources {
    /// Create a source list from explicitly supplied locations.
    pub fn new(sources: Vec<String>) -> Self {
        Self(sources)
    }

    /// Build the override from repeated `--source` options.
    ///
    /// No options given means no override, not an empty override.
    pub fn from_options(sources: &[String]) -> Option<Self> {
        if sources.is_empty() {
            None
        } else {
            Some(Self(sources.to_vec()))
        }
    }

    /// The sources in the order they were supplied.
    pub fn items(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for NuGetSources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
