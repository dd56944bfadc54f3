//! Per-variant rejection reporting.

use std::fmt;

/// A report of every variant rejected during one resolution, in declaration
/// order. Empty when the first declared variant matched.
#[derive(Debug, Default)]
pub struct RejectionReport {
    pub rejections: Vec<VariantRejection>,
}

/// A single rejected variant and the first constraint that failed.
#[derive(Debug, Clone)]
pub struct VariantRejection {
    pub variant_index: usize,
    /// Display form of the whole variant, e.g. `[platform-linux, !katana]`.
    pub variant: String,
    /// Display form of the failing constraint.
    pub constraint: String,
    pub reason: String,
}

impl RejectionReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, rejection: VariantRejection) {
        self.rejections.push(rejection);
    }

    pub fn is_empty(&self) -> bool {
        self.rejections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rejections.len()
    }
}

impl fmt::Display for RejectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rejections.is_empty() {
            return write!(f, "No variants rejected.");
        }
        writeln!(f, "Rejected variants ({}):", self.rejections.len())?;
        for r in &self.rejections {
            writeln!(
                f,
                "  variant {} {}: {} ({})",
                r.variant_index, r.variant, r.constraint, r.reason
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for VariantRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "variant {} {}: {} ({})",
            self.variant_index, self.variant, self.constraint, self.reason
        )
    }
}
