//! Version token parsing and comparison.
//!
//! Versions are dot-separated segments. Numeric segments compare as numbers,
//! alphanumeric segments compare lexically, and a numeric segment sorts above
//! an alphanumeric one. Missing trailing segments compare as zero, so `1.80`
//! equals `1.80.0` and precedes `1.80.0.1`.

use std::cmp::Ordering;
use std::fmt;

use revar_util::errors::RevarError;

/// A parsed version with comparable segments.
///
/// Immutable once parsed; `original` preserves the source text for display.
#[derive(Debug, Clone)]
pub struct VersionToken {
    original: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum Segment {
    Numeric(u64),
    Alpha(String),
}

impl VersionToken {
    /// Parse version text into segments.
    ///
    /// Accepts dot-separated runs of `[A-Za-z0-9_]`. Empty text, empty
    /// segments, and any other character fail with `MalformedVersion`.
    pub fn parse(text: &str) -> Result<Self, RevarError> {
        let malformed = || RevarError::MalformedVersion {
            text: text.to_string(),
        };

        if text.is_empty() {
            return Err(malformed());
        }

        let mut segments = Vec::new();
        for part in text.split('.') {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(malformed());
            }
            segments.push(classify(part));
        }

        Ok(Self {
            original: text.to_string(),
            segments,
        })
    }

    /// The source text this token was parsed from.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// True if `self`'s segments are a leading prefix of `other`'s.
    ///
    /// Supports pin matching: `1.55` is a prefix of `1.55.0` and `1.55.3`,
    /// and of `1.55` itself.
    pub fn is_prefix_of(&self, other: &VersionToken) -> bool {
        if self.segments.len() > other.segments.len() {
            return false;
        }
        self.segments
            .iter()
            .zip(&other.segments)
            .all(|(a, b)| a == b)
    }
}

fn classify(part: &str) -> Segment {
    match part.parse::<u64>() {
        Ok(n) => Segment::Numeric(n),
        Err(_) => Segment::Alpha(part.to_string()),
    }
}

impl fmt::Display for VersionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl PartialEq for VersionToken {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionToken {}

impl Ord for VersionToken {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.segments.len().max(other.segments.len());
        for i in 0..max_len {
            let ord = compare_segments(self.segments.get(i), other.segments.get(i));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for VersionToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_segments(a: Option<&Segment>, b: Option<&Segment>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (Some(s), None) => compare_segment_to_empty(s),
        (None, Some(s)) => compare_segment_to_empty(s).reverse(),
        (Some(a), Some(b)) => compare_two_segments(a, b),
    }
}

fn compare_segment_to_empty(seg: &Segment) -> Ordering {
    match seg {
        Segment::Numeric(0) => Ordering::Equal,
        Segment::Numeric(_) => Ordering::Greater,
        // An alphanumeric segment sorts below the implicit zero.
        Segment::Alpha(_) => Ordering::Less,
    }
}

fn compare_two_segments(a: &Segment, b: &Segment) -> Ordering {
    match (a, b) {
        (Segment::Numeric(a), Segment::Numeric(b)) => a.cmp(b),
        (Segment::Alpha(a), Segment::Alpha(b)) => a.cmp(b),
        (Segment::Numeric(_), Segment::Alpha(_)) => Ordering::Greater,
        (Segment::Alpha(_), Segment::Numeric(_)) => Ordering::Less,
    }
}
