//! Resolution session: the single entry point external callers use.

use std::path::Path;

use revar_core::context::RequestContext;
use revar_core::manifest::ManifestRecord;

use crate::compose::compose;
use crate::resolver::{resolve, ResolutionResult};

/// Resolve a manifest against a context and compose the winning variant's
/// environment.
///
/// On resolution failure the result is returned as-is, diagnostics attached
/// and `composed_env` empty; composition only runs after a definite match.
/// Composition-time defects (undefined template tokens) propagate as errors.
pub fn resolve_and_compose(
    manifest: &ManifestRecord,
    ctx: &RequestContext,
    install_root: &Path,
) -> miette::Result<ResolutionResult> {
    let mut result = resolve(manifest, ctx);

    for rejection in &result.diagnostics.rejections {
        tracing::debug!(
            package = %manifest.name,
            version = %manifest.version,
            "{rejection}"
        );
    }

    if !result.matched {
        tracing::debug!(
            package = %manifest.name,
            version = %manifest.version,
            "no variant matched the request context"
        );
        return Ok(result);
    }

    let winning_variant = result.variant_index.map(|i| &manifest.variants[i]);
    result.composed_env = compose(manifest, winning_variant, install_root)?;

    tracing::info!(
        package = %manifest.name,
        version = %manifest.version,
        variant = ?result.variant_index,
        "resolved"
    );

    Ok(result)
}
