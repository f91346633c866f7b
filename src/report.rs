//! Collection of vendored modules and the RPM Provides report

use std::io::{self, Write};

use tracing::{debug, warn};

use crate::config::DEFAULT_PROVIDES_LANG;
use crate::parser::types::{ModuleRecord, ParsedLine};
use crate::parser::vendor_line::parse_line;
use crate::source::{LineSource, SourceError};
use crate::version::error::NormalizeError;
use crate::version::rpm::RpmVersionNormalizer;

/// Read every line from `source` and keep the modules found.
///
/// Lines with an unexpected shape are reported to `diagnostics` and dropped.
/// Any failure of the source itself ends collection.
pub fn collect<S, D>(source: &mut S, diagnostics: &mut D) -> Result<Vec<ModuleRecord>, SourceError>
where
    S: LineSource + ?Sized,
    D: Write + ?Sized,
{
    let mut modules = Vec::new();

    while let Some(line) = source.next_line() {
        let line = line?;
        match parse_line(&line) {
            Ok(ParsedLine::Module(module)) => {
                debug!("Found module {} {}", module.name, module.raw_version);
                modules.push(module);
            }
            Ok(ParsedLine::Skip(reason)) => {
                debug!("Skipping line ({}): {}", reason.as_str(), line);
            }
            Err(e) => {
                debug!("Dropping line '{}': {}", line, e);
                diagnose(diagnostics, format_args!("failed to parse line: {e} for \"{line}\""));
            }
        }
    }

    source.finish()?;
    Ok(modules)
}

/// Counts of report lines by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub versioned: usize,
    pub unversioned: usize,
}

/// Writes `Provides: bundled(<lang>(<module>)) = <version>` lines
pub struct Reporter {
    normalizer: RpmVersionNormalizer,
    lang: String,
}

impl Reporter {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            normalizer: RpmVersionNormalizer::new(),
            lang: lang.into(),
        }
    }

    /// Build the Provides line for one module.
    ///
    /// When the version cannot be translated the line is unversioned and the
    /// translation error is returned alongside it.
    pub fn provides_line(&self, module: &ModuleRecord) -> (String, Option<NormalizeError>) {
        let provides = format!("Provides: bundled({}({}))", self.lang, module.name);
        match self.normalizer.to_rpm_version(&module.raw_version) {
            Ok(version) => (format!("{provides} = {version}"), None),
            Err(e) => (provides, Some(e)),
        }
    }

    /// Sort `modules` by name and write one Provides line per module.
    ///
    /// Modules with the same name keep their collection order. Failing to
    /// write to `out` aborts the report; failing to write to `diagnostics`
    /// does not.
    pub fn write_report<W, D>(
        &self,
        modules: &mut [ModuleRecord],
        out: &mut W,
        diagnostics: &mut D,
    ) -> io::Result<ReportSummary>
    where
        W: Write + ?Sized,
        D: Write + ?Sized,
    {
        modules.sort_by(|a, b| a.name.cmp(&b.name));

        let mut summary = ReportSummary::default();
        for module in modules.iter() {
            let (line, error) = self.provides_line(module);
            if let Some(e) = error {
                debug!("No RPM version for {} {}: {}", module.name, module.raw_version, e);
                diagnose(
                    diagnostics,
                    format_args!(
                        "failed to parse version {}: {} for module {}",
                        module.raw_version, e, module.name
                    ),
                );
                summary.unversioned += 1;
            } else {
                summary.versioned += 1;
            }
            writeln!(out, "{line}")?;
        }
        out.flush()?;

        Ok(summary)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(DEFAULT_PROVIDES_LANG)
    }
}

fn diagnose<D: Write + ?Sized>(diagnostics: &mut D, message: std::fmt::Arguments<'_>) {
    if let Err(e) = writeln!(diagnostics, "{message}") {
        warn!("Failed to write diagnostic: {}", e);
    }
}
