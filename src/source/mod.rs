//! Sources of vendoring output lines
//!
//! # Modules
//!
//! - [`govendor`]: runs `go mod vendor -v` and reads its report
//! - [`reader`]: reads a saved report from any `BufRead` (file, stdin)

#[cfg(test)]
use mockall::automock;

use std::process::ExitStatus;

use thiserror::Error;

pub mod govendor;
pub mod reader;

pub use govendor::GoVendorSource;
pub use reader::ReaderSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to start '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read vendoring output: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to wait for '{command}': {source}")]
    Wait {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' failed: {status}{}", indented(.output))]
    Exit {
        command: String,
        status: ExitStatus,
        /// Last lines the command printed that were not part of the module report
        output: Vec<String>,
    },
}

fn indented(output: &[String]) -> String {
    output.iter().map(|line| format!("\n\t{line}")).collect()
}

/// Trait for a producer of vendoring output, consumed one line at a time
#[cfg_attr(test, automock)]
pub trait LineSource {
    /// Returns the next line without its terminator, `None` at end of stream
    fn next_line(&mut self) -> Option<Result<String, SourceError>>;

    /// Waits for the producer to complete once the stream is exhausted
    ///
    /// # Returns
    /// * `Ok(())` - The producer finished successfully
    /// * `Err(SourceError)` - The producer could not be awaited or failed
    fn finish(&mut self) -> Result<(), SourceError>;
}
