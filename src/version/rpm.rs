//! Go module version to RPM version translation
//!
//! Go modules use three version shapes:
//! - Release tag: v1.2.3 -> 1.2.3
//! - +incompatible suffix: v6.8.0+incompatible -> 6.8.0 (pre-go.mod v2+ modules)
//! - Pseudo-versions (https://golang.org/ref/mod#pseudo-versions):
//!   - v0.0.0-20210107192922-496545a6307b -> 0.0.0-0.20210107git496545a6307b
//!   - v1.4.2-0.20191121165722-d1d5f6476656 -> 1.4.2-0.20191121gitd1d5f6476656
//!   - v1.20.0-alpha.0.0.20200922142336-4700daee7399 -> 1.20.0-0.alpha.20200922git4700daee7399
//!
//! Pseudo-versions become RPM snapshot releases: the time of day is dropped
//! and only the commit date and short hash are kept.

use std::fmt;

use regex::Regex;

use crate::version::error::NormalizeError;

const INCOMPATIBLE_SUFFIX: &str = "+incompatible";

/// Commit date and short hash of a pseudo-version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// YYYYMMDD
    pub date: String,
    /// 12 lowercase hex digits
    pub commit: String,
}

/// RPM rendering of a Go module version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalVersion {
    /// MAJOR.MINOR.PATCH without the `v` prefix
    pub base: String,
    /// Pre-release label preceding the pseudo-version timestamp (e.g. "alpha")
    pub label: Option<String>,
    pub snapshot: Option<Snapshot>,
}

impl fmt::Display for CanonicalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base)?;
        if let Some(snapshot) = &self.snapshot {
            write!(f, "-0.")?;
            if let Some(label) = &self.label {
                write!(f, "{label}.")?;
            }
            write!(f, "{}git{}", snapshot.date, snapshot.commit)?;
        }
        Ok(())
    }
}

/// Translates Go module versions into RPM versions
pub struct RpmVersionNormalizer {
    /// Regex for a release tag: `v1.2.3`
    release_re: Regex,
    /// Regex for a release tag of a pre-go.mod module: `v1.2.3+incompatible`
    incompatible_re: Regex,
    /// Regex for the pseudo-version timestamp: `[label.](0.)*YYYYMMDDhhmmss`
    timestamp_re: Regex,
    /// Regex for the short commit hash: `0123456789ab`
    commit_re: Regex,
}

impl RpmVersionNormalizer {
    pub fn new() -> Self {
        Self {
            release_re: Regex::new(r"^v([0-9]+\.[0-9]+\.[0-9]+)$").unwrap(),
            incompatible_re: Regex::new(r"^v([0-9]+\.[0-9]+\.[0-9]+)\+incompatible$").unwrap(),
            // The label must start with a letter so that a bare `0.` filler
            // is never taken for one.
            timestamp_re: Regex::new(r"^(?:([a-z][a-z0-9]*)\.)?(?:0\.)*([0-9]{8})[0-9]{6}$")
                .unwrap(),
            commit_re: Regex::new(r"^[0-9a-f]{12}$").unwrap(),
        }
    }

    /// Translate a Go module version token.
    pub fn normalize(&self, raw_version: &str) -> Result<CanonicalVersion, NormalizeError> {
        let segments: Vec<&str> = raw_version.split('-').collect();
        match segments.as_slice() {
            [tag] => self.release(tag),
            [base, timestamp, commit] => self.pseudo_version(base, timestamp, commit),
            _ => Err(NormalizeError::Malformed(raw_version.to_string())),
        }
    }

    /// Translate a version token straight to its RPM string form.
    pub fn to_rpm_version(&self, raw_version: &str) -> Result<String, NormalizeError> {
        self.normalize(raw_version).map(|version| version.to_string())
    }

    fn release(&self, tag: &str) -> Result<CanonicalVersion, NormalizeError> {
        let caps = self
            .release_re
            .captures(tag)
            .or_else(|| self.incompatible_re.captures(tag))
            .ok_or_else(|| NormalizeError::UnrecognizedVersion(tag.to_string()))?;

        Ok(CanonicalVersion {
            base: caps[1].to_string(),
            label: None,
            snapshot: None,
        })
    }

    fn pseudo_version(
        &self,
        base: &str,
        timestamp: &str,
        commit: &str,
    ) -> Result<CanonicalVersion, NormalizeError> {
        let base = self
            .release_re
            .captures(base)
            .map(|caps| caps[1].to_string())
            .ok_or_else(|| NormalizeError::UnrecognizedVersion(base.to_string()))?;

        let caps = self
            .timestamp_re
            .captures(timestamp)
            .ok_or_else(|| NormalizeError::BadDateSegment(timestamp.to_string()))?;
        let label = caps.get(1).map(|m| m.as_str().to_string());
        let date = caps[2].to_string();

        let hash = commit.strip_suffix(INCOMPATIBLE_SUFFIX).unwrap_or(commit);
        if !self.commit_re.is_match(hash) {
            return Err(NormalizeError::BadCommitSegment(commit.to_string()));
        }

        Ok(CanonicalVersion {
            base,
            label,
            snapshot: Some(Snapshot {
                date,
                commit: hash.to_string(),
            }),
        })
    }
}

impl Default for RpmVersionNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
