//! Version translation layer
//!
//! Turns Go module versions into RPM version strings.
//!
//! # Modules
//!
//! - [`rpm`]: release tag and pseudo-version translation
//! - [`error`]: Error type for unrecognized version tokens

pub mod error;
pub mod rpm;

pub use error::NormalizeError;
pub use rpm::{CanonicalVersion, RpmVersionNormalizer};
