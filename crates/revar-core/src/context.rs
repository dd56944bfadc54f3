//! The request context a resolution runs against.

use std::collections::BTreeMap;

use revar_util::errors::RevarError;

use crate::version::VersionToken;

/// A snapshot of which capabilities (and versions) are active for one
/// resolution attempt.
///
/// Keys are unique by construction; a capability may be present without a
/// version (a plain marker such as a platform tag). The resolver never
/// mutates a context.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    entries: BTreeMap<String, Option<VersionToken>>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a capability present without version information.
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.entries.insert(name.into(), None);
        self
    }

    /// Mark a capability present at a concrete version.
    pub fn with_version(
        mut self,
        name: impl Into<String>,
        version: &str,
    ) -> Result<Self, RevarError> {
        let token = VersionToken::parse(version)?;
        self.entries.insert(name.into(), Some(token));
        Ok(self)
    }

    /// `None` if the capability is absent; `Some(None)` if present without a
    /// version; `Some(Some(v))` if present at `v`.
    pub fn lookup(&self, name: &str) -> Option<Option<&VersionToken>> {
        self.entries.get(name).map(Option::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
