//! Variant selection: declaration order, first-match-wins.

use std::collections::BTreeMap;

use revar_core::context::RequestContext;
use revar_core::manifest::ManifestRecord;

use crate::diagnostics::{RejectionReport, VariantRejection};
use crate::matcher::evaluate_variant;

/// The output of one resolution call.
///
/// `matched` with `variant_index == None` means the manifest declared no
/// variants and resolved trivially. `composed_env` stays empty until the
/// session composes the winning variant's environment.
#[derive(Debug)]
pub struct ResolutionResult {
    pub matched: bool,
    pub variant_index: Option<usize>,
    pub composed_env: BTreeMap<String, String>,
    pub diagnostics: RejectionReport,
}

/// Find the winning variant for a request context.
///
/// Variants are tried in declaration order and the first one whose
/// constraints are all satisfied wins; declaration order is the only
/// priority signal. A failed resolution is data, not an error: the result
/// carries every rejected variant with its first failing constraint.
pub fn resolve(manifest: &ManifestRecord, ctx: &RequestContext) -> ResolutionResult {
    let mut diagnostics = RejectionReport::new();

    if manifest.variants.is_empty() {
        // No variants declared: the implicit unconstrained variant wins.
        return ResolutionResult {
            matched: true,
            variant_index: None,
            composed_env: BTreeMap::new(),
            diagnostics,
        };
    }

    for (index, variant) in manifest.variants.iter().enumerate() {
        match evaluate_variant(variant, ctx) {
            Ok(()) => {
                return ResolutionResult {
                    matched: true,
                    variant_index: Some(index),
                    composed_env: BTreeMap::new(),
                    diagnostics,
                };
            }
            Err(rejected) => {
                diagnostics.add(VariantRejection {
                    variant_index: index,
                    variant: variant.to_string(),
                    constraint: rejected.constraint.to_string(),
                    reason: rejected.reason,
                });
            }
        }
    }

    ResolutionResult {
        matched: false,
        variant_index: None,
        composed_env: BTreeMap::new(),
        diagnostics,
    }
}
