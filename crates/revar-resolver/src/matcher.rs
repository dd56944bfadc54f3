//! Constraint evaluation against a request context.

use revar_core::constraint::{Constraint, Variant};
use revar_core::context::RequestContext;

/// Outcome of evaluating one constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintEval {
    Satisfied,
    Unsatisfied { reason: String },
}

impl ConstraintEval {
    pub fn is_satisfied(&self) -> bool {
        matches!(self, ConstraintEval::Satisfied)
    }
}

/// The first failing constraint of a rejected variant.
#[derive(Debug, Clone)]
pub struct RejectedConstraint {
    pub constraint: Constraint,
    pub reason: String,
}

/// Evaluate a single constraint.
///
/// - A requirement with no range is satisfied by any presence of the name,
///   versioned or not.
/// - A ranged requirement needs a concrete version inside the range; a
///   version-less presence fails it, since nothing can be range-checked.
/// - An exclusion is satisfied only by absence, independent of version.
pub fn evaluate(constraint: &Constraint, ctx: &RequestContext) -> ConstraintEval {
    let unsatisfied = |reason: String| ConstraintEval::Unsatisfied { reason };

    match constraint {
        Constraint::Excludes(name) => {
            if ctx.contains(name) {
                unsatisfied(format!("{name} is present in the context"))
            } else {
                ConstraintEval::Satisfied
            }
        }
        Constraint::Requires(req) => match ctx.lookup(&req.name) {
            None => unsatisfied(format!("{} is absent from the context", req.name)),
            Some(None) => {
                if req.range.is_unversioned() {
                    ConstraintEval::Satisfied
                } else {
                    unsatisfied(format!(
                        "{} is present without a version; {req} cannot be checked",
                        req.name
                    ))
                }
            }
            Some(Some(version)) => {
                if req.range.contains(version) {
                    ConstraintEval::Satisfied
                } else {
                    unsatisfied(format!("{} {version} does not satisfy {req}", req.name))
                }
            }
        },
    }
}

/// Evaluate a variant's constraints in order, short-circuiting on the first
/// failure.
pub fn evaluate_variant(variant: &Variant, ctx: &RequestContext) -> Result<(), RejectedConstraint> {
    for constraint in variant.constraints() {
        if let ConstraintEval::Unsatisfied { reason } = evaluate(constraint, ctx) {
            return Err(RejectedConstraint {
                constraint: constraint.clone(),
                reason,
            });
        }
    }
    Ok(())
}
