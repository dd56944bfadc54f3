//! Environment composition: ordered replay of a manifest's env ops.
//!
//! Composition never touches the calling process's environment; it returns
//! the final variable mapping and leaves applying it to the caller.

use std::collections::BTreeMap;
use std::path::Path;

use revar_core::constraint::Variant;
use revar_core::manifest::{EnvOp, ManifestRecord};
use revar_util::errors::RevarError;

/// Platform path-list separator used by `Append`/`Prepend`.
pub const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Replay the manifest's env ops in declared order against an empty mapping.
///
/// `{root}` and `{this.root}` are bound to the winning variant's install
/// location: `install_root/<variant subpath>` when a variant won, the
/// install root itself otherwise. Substitution happens here, at replay time,
/// so one loaded manifest composes against any install root.
pub fn compose(
    manifest: &ManifestRecord,
    winning_variant: Option<&Variant>,
    install_root: &Path,
) -> Result<BTreeMap<String, String>, RevarError> {
    let root = variant_root(winning_variant, install_root);

    let mut bindings = BTreeMap::new();
    bindings.insert("root", root.clone());
    bindings.insert("this.root", root);

    let mut env = BTreeMap::new();
    for op in &manifest.env {
        let value = expand(op.value(), &bindings, op.var())?;
        apply(&mut env, op, value);
    }
    Ok(env)
}

/// The concrete install location of the winning variant.
fn variant_root(variant: Option<&Variant>, install_root: &Path) -> String {
    match variant {
        Some(v) if !v.subpath().is_empty() => {
            install_root.join(v.subpath()).display().to_string()
        }
        _ => install_root.display().to_string(),
    }
}

fn apply(env: &mut BTreeMap<String, String>, op: &EnvOp, value: String) {
    match op {
        EnvOp::Set { var, .. } => {
            env.insert(var.clone(), value);
        }
        EnvOp::Append { var, .. } => match env.get_mut(var) {
            Some(existing) => {
                existing.push(PATH_LIST_SEPARATOR);
                existing.push_str(&value);
            }
            None => {
                env.insert(var.clone(), value);
            }
        },
        EnvOp::Prepend { var, .. } => match env.get_mut(var) {
            Some(existing) => {
                let mut combined = value;
                combined.push(PATH_LIST_SEPARATOR);
                combined.push_str(existing);
                *existing = combined;
            }
            None => {
                env.insert(var.clone(), value);
            }
        },
    }
}

/// Replace every `{token}` in `template` with its binding.
///
/// An unknown token fails with `MissingTemplateBinding`; an unterminated
/// `{` is a manifest defect.
fn expand(
    template: &str,
    bindings: &BTreeMap<&str, String>,
    var: &str,
) -> Result<String, RevarError> {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            return Err(RevarError::Manifest {
                message: format!("Unterminated template token in value for {var}: {template:?}"),
            });
        };
        let token = &after[..close];
        match bindings.get(token) {
            Some(value) => result.push_str(value),
            None => {
                return Err(RevarError::MissingTemplateBinding {
                    token: token.to_string(),
                    var: var.to_string(),
                });
            }
        }
        rest = &after[close + 1..];
    }
    result.push_str(rest);
    Ok(result)
}
