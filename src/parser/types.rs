//! Common types for the vendor line parser

/// A vendored module extracted from one line of `go mod vendor -v` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRecord {
    /// Module path (e.g., "github.com/spf13/cobra")
    pub name: String,
    /// Version token exactly as it appeared on the line (e.g., "v1.1.1")
    pub raw_version: String,
}

impl ModuleRecord {
    pub fn new(name: impl Into<String>, raw_version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_version: raw_version.into(),
        }
    }
}

/// Why a line carried no module information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Nothing on the line
    EmptyLine,
    /// `## explicit` style annotations
    Comment,
    /// Package lines and anything else not led by a lone `#`
    NoPrefix,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::EmptyLine => "empty_line",
            SkipReason::Comment => "comment",
            SkipReason::NoPrefix => "no_prefix",
        }
    }
}

/// Successful classification of a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Module(ModuleRecord),
    Skip(SkipReason),
}
