//! Manifest records: the normalized in-memory form of one package version.
//!
//! A manifest arrives as declarative TOML (`ManifestData`), is validated
//! once at load time, and becomes an immutable [`ManifestRecord`]. All
//! structural defects — malformed versions, conflicting constraints — are
//! caught here, never during resolution.

use serde::{Deserialize, Serialize};

use revar_util::errors::RevarError;

use crate::constraint::{Constraint, Variant};
use crate::range::Requirement;
use crate::version::VersionToken;

/// An environment mutation declared by a manifest.
///
/// `value` is a template; `{root}` and `{this.root}` are substituted at
/// composition time, so one loaded manifest can be composed against any
/// install root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EnvOp {
    /// Overwrite the variable.
    Set { var: String, value: String },
    /// Concatenate after the existing value with the path-list separator.
    Append { var: String, value: String },
    /// Concatenate before the existing value with the path-list separator.
    Prepend { var: String, value: String },
}

impl EnvOp {
    pub fn var(&self) -> &str {
        match self {
            EnvOp::Set { var, .. } | EnvOp::Append { var, .. } | EnvOp::Prepend { var, .. } => var,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            EnvOp::Set { value, .. }
            | EnvOp::Append { value, .. }
            | EnvOp::Prepend { value, .. } => value,
        }
    }
}

/// The raw serde form of a package manifest, prior to validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestData {
    pub name: String,
    pub version: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub authors: Vec<String>,

    /// Mandatory, context-independent dependencies.
    #[serde(default)]
    pub requires: Vec<String>,

    /// Build-time-only dependencies, not propagated to consumers.
    #[serde(default, rename = "build-requires")]
    pub build_requires: Vec<String>,

    /// Build-time-only dependencies hidden even from downstream builds.
    #[serde(default, rename = "private-build-requires")]
    pub private_build_requires: Vec<String>,

    /// Alternative build configurations, in priority order.
    #[serde(default)]
    pub variants: Vec<Vec<String>>,

    /// Environment mutations to replay on activation, in order.
    #[serde(default)]
    pub env: Vec<EnvOp>,
}

/// A validated, immutable package manifest.
///
/// `name` and `version` together identify the manifest.
#[derive(Debug, Clone)]
pub struct ManifestRecord {
    pub name: String,
    pub version: VersionToken,
    pub description: Option<String>,
    pub authors: Vec<String>,
    pub requires: Vec<Requirement>,
    pub build_requires: Vec<Requirement>,
    pub private_build_requires: Vec<Requirement>,
    pub variants: Vec<Variant>,
    pub env: Vec<EnvOp>,
}

impl ManifestRecord {
    /// Parse a manifest from its TOML text form.
    pub fn from_str(content: &str) -> Result<Self, RevarError> {
        let data: ManifestData = toml::from_str(content).map_err(|e| RevarError::Manifest {
            message: format!("Failed to parse package manifest: {e}"),
        })?;
        Self::from_data(data)
    }

    /// Validate raw manifest data into a record. Fails closed: any malformed
    /// version or conflicting variant constraint rejects the whole manifest.
    pub fn from_data(data: ManifestData) -> Result<Self, RevarError> {
        let version = VersionToken::parse(&data.version)?;
        let requires = parse_requirements(&data.requires)?;
        let build_requires = parse_requirements(&data.build_requires)?;
        let private_build_requires = parse_requirements(&data.private_build_requires)?;

        let mut variants = Vec::with_capacity(data.variants.len());
        for (index, entries) in data.variants.iter().enumerate() {
            let constraints = entries
                .iter()
                .map(|s| Constraint::parse(s))
                .collect::<Result<Vec<_>, _>>()?;
            variants.push(Variant::new(constraints, index)?);
        }

        Ok(Self {
            name: data.name,
            version,
            description: data.description,
            authors: data.authors,
            requires,
            build_requires,
            private_build_requires,
            variants,
            env: data.env,
        })
    }
}

fn parse_requirements(entries: &[String]) -> Result<Vec<Requirement>, RevarError> {
    entries.iter().map(|s| Requirement::parse(s)).collect()
}
