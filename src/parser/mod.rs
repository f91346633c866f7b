//! Parser layer
//! - types.rs: ModuleRecord and line classification results
//! - error.rs: errors for unexpected `#` lines
//! - vendor_line.rs: `go mod vendor -v` line parser

pub mod error;
pub mod types;
pub mod vendor_line;

pub use error::LineError;
pub use types::{ModuleRecord, ParsedLine, SkipReason};
pub use vendor_line::parse_line;
