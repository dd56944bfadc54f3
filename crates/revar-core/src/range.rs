//! Version ranges and named requirements.
//!
//! A requirement is the shorthand form used throughout manifests:
//! - `"boost"` — any version of `boost`, presence is enough
//! - `"boost-1.55"` — pin, matched by segment prefix (`1.55.0`, `1.55.3`, ...)
//! - `"boost-1.80<1.80.0.2"` — bounded range, lower inclusive, upper exclusive

use std::fmt;

use revar_util::errors::RevarError;

use crate::version::VersionToken;

/// The version-matching half of a requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionRange {
    /// Any version, including a version-less presence marker.
    Any,
    /// Exact-or-prefix pin: matches any version the pin is a segment prefix of.
    Prefix(VersionToken),
    /// `lower ≤ v < upper`. A missing lower bound leaves only the upper check.
    Bounded {
        lower: Option<VersionToken>,
        upper: VersionToken,
    },
}

impl VersionRange {
    /// Check whether a version satisfies this range.
    pub fn contains(&self, version: &VersionToken) -> bool {
        match self {
            VersionRange::Any => true,
            VersionRange::Prefix(pin) => pin.is_prefix_of(version),
            VersionRange::Bounded { lower, upper } => {
                if let Some(lower) = lower {
                    if version < lower {
                        return false;
                    }
                }
                version < upper
            }
        }
    }

    /// True for `Any`: no version information is needed to match.
    pub fn is_unversioned(&self) -> bool {
        matches!(self, VersionRange::Any)
    }
}

/// A named capability requirement: `name`, `name-X`, or `name-X<Y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub range: VersionRange,
}

impl Requirement {
    /// Parse a requirement shorthand string.
    ///
    /// The name is everything before the first `-`; the remainder is the
    /// version expression. A trailing `-` with no version, an unparseable
    /// version, or a bounded range with lower > upper all fail with
    /// `MalformedVersion`.
    pub fn parse(text: &str) -> Result<Self, RevarError> {
        let malformed = || RevarError::MalformedVersion {
            text: text.to_string(),
        };

        let Some((name, expr)) = text.split_once('-') else {
            if text.is_empty() {
                return Err(malformed());
            }
            return Ok(Self {
                name: text.to_string(),
                range: VersionRange::Any,
            });
        };

        if name.is_empty() || expr.is_empty() {
            return Err(malformed());
        }

        let range = match expr.split_once('<') {
            None => VersionRange::Prefix(VersionToken::parse(expr)?),
            Some((lower, upper)) => {
                let upper = VersionToken::parse(upper)?;
                let lower = if lower.is_empty() {
                    None
                } else {
                    Some(VersionToken::parse(lower)?)
                };
                if let Some(ref lower) = lower {
                    if lower > &upper {
                        return Err(malformed());
                    }
                }
                VersionRange::Bounded { lower, upper }
            }
        };

        Ok(Self {
            name: name.to_string(),
            range,
        })
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.range {
            VersionRange::Any => write!(f, "{}", self.name),
            VersionRange::Prefix(pin) => write!(f, "{}-{}", self.name, pin),
            VersionRange::Bounded { lower, upper } => match lower {
                Some(lower) => write!(f, "{}-{}<{}", self.name, lower, upper),
                None => write!(f, "{}-<{}", self.name, upper),
            },
        }
    }
}
