//! Variant constraints: positive requirements and `!name` exclusions.

use std::collections::BTreeSet;
use std::fmt;

use revar_util::errors::RevarError;

use crate::range::Requirement;

/// One entry in a variant's constraint list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// The named capability must be present (optionally within a range).
    Requires(Requirement),
    /// The named capability must be absent from the request context,
    /// independent of version.
    Excludes(String),
}

impl Constraint {
    /// Parse a constraint shorthand: `"!name"` excludes, anything else is a
    /// requirement shorthand.
    pub fn parse(text: &str) -> Result<Self, RevarError> {
        if let Some(name) = text.strip_prefix('!') {
            if name.is_empty() || name.contains('-') || name.contains('!') {
                return Err(RevarError::MalformedVersion {
                    text: text.to_string(),
                });
            }
            return Ok(Constraint::Excludes(name.to_string()));
        }
        Ok(Constraint::Requires(Requirement::parse(text)?))
    }

    /// The capability name this constraint is about.
    pub fn name(&self) -> &str {
        match self {
            Constraint::Requires(req) => &req.name,
            Constraint::Excludes(name) => name,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Requires(req) => write!(f, "{req}"),
            Constraint::Excludes(name) => write!(f, "!{name}"),
        }
    }
}

/// One alternative build configuration: an ordered constraint list.
///
/// Variants are declared in priority order; the resolver tries them
/// first-to-last and the first fully satisfied variant wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    constraints: Vec<Constraint>,
}

impl Variant {
    /// Build a variant, rejecting constraint lists where a name appears both
    /// as a requirement and as an exclusion. `index` is the variant's
    /// position in the manifest, used only for the error.
    pub fn new(constraints: Vec<Constraint>, index: usize) -> Result<Self, RevarError> {
        let required: BTreeSet<&str> = constraints
            .iter()
            .filter(|c| matches!(c, Constraint::Requires(_)))
            .map(Constraint::name)
            .collect();
        for c in &constraints {
            if let Constraint::Excludes(name) = c {
                if required.contains(name.as_str()) {
                    return Err(RevarError::ConflictingConstraint {
                        name: name.clone(),
                        variant: index,
                    });
                }
            }
        }
        Ok(Self { constraints })
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// The variant's install subdirectory relative to the package root:
    /// the positive constraints joined with `/`, e.g.
    /// `platform-linux/arch-x86_64`. Exclusions contribute nothing.
    pub fn subpath(&self) -> String {
        let parts: Vec<String> = self
            .constraints
            .iter()
            .filter(|c| matches!(c, Constraint::Requires(_)))
            .map(ToString::to_string)
            .collect();
        parts.join("/")
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.constraints.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_exclusion() {
        let c = Constraint::parse("!katana").unwrap();
        assert_eq!(c, Constraint::Excludes("katana".to_string()));
        assert_eq!(c.name(), "katana");
        assert_eq!(c.to_string(), "!katana");
    }

    #[test]
    fn parse_requirement() {
        let c = Constraint::parse("tbb_katana-2017").unwrap();
        assert!(matches!(c, Constraint::Requires(_)));
        assert_eq!(c.name(), "tbb_katana");
    }

    #[test]
    fn versioned_exclusion_rejected() {
        assert!(Constraint::parse("!katana-4.5").is_err());
        assert!(Constraint::parse("!").is_err());
    }

    #[test]
    fn conflicting_variant_rejected() {
        let constraints = vec![
            Constraint::parse("katana-4").unwrap(),
            Constraint::parse("!katana").unwrap(),
        ];
        let err = Variant::new(constraints, 2).unwrap_err();
        assert!(err.to_string().contains("katana"));
        assert!(err.to_string().contains('2'));
    }

    #[test]
    fn subpath_skips_exclusions() {
        let variant = Variant::new(
            vec![
                Constraint::parse("platform-linux").unwrap(),
                Constraint::parse("!katana").unwrap(),
                Constraint::parse("arch-x86_64").unwrap(),
            ],
            0,
        )
        .unwrap();
        assert_eq!(variant.subpath(), "platform-linux/arch-x86_64");
    }
}
