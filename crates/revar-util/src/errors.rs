use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all revar operations.
///
/// Resolution failure itself (no variant matched) is not an error: it is
/// returned as data on the resolution result so callers can inspect the
/// per-variant rejection diagnostics.
#[derive(Debug, Error, Diagnostic)]
pub enum RevarError {
    /// Version text that does not fit the dotted alphanumeric-segment grammar.
    /// Raised while loading a manifest or building a request context, never
    /// mid-resolution.
    #[error("Malformed version: {text:?}")]
    #[diagnostic(help(
        "Versions are dot-separated segments of digits, letters, and underscores, e.g. 1.72.0 or x86_64"
    ))]
    MalformedVersion { text: String },

    /// A variant names the same capability as both a requirement and an
    /// exclusion. This is a manifest-authoring defect detected at load time;
    /// the manifest is rejected outright.
    #[error("Variant {variant} requires and excludes {name:?}")]
    #[diagnostic(help("Remove either the requirement or the '!' exclusion for this name"))]
    ConflictingConstraint { name: String, variant: usize },

    /// An environment operation's value template references a substitution
    /// token that has no binding.
    #[error("Undefined template token {{{token}}} in value for {var}")]
    #[diagnostic(help("Only {{root}} and {{this.root}} are bound during composition"))]
    MissingTemplateBinding { token: String, var: String },

    /// Invalid or malformed manifest content.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check the package manifest for syntax errors"))]
    Manifest { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type RevarResult<T> = miette::Result<T>;
