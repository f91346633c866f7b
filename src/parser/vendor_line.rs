//! `go mod vendor -v` line parser
//!
//! The vendoring command reports each vendored module on a line led by a
//! lone `#`, followed by the packages it contributes and `##` annotations.
//!
//! Format examples:
//! - Direct: `# golang.org/x/text v0.14.0`
//! - Replaced: `# github.com/containers/image => github.com/openshift/containers-image v0.0.0-20190130162819-76de87591e9d`
//! - Replaced at version: `# k8s.io/client-go v0.19.0 => github.com/openshift/kubernetes-client-go v1.20.0-alpha.0.0.20200922142336-4700daee7399`
//!
//! For replacements the module that ends up vendored is the replacement, so
//! its name and version are the ones reported.

use crate::parser::error::LineError;
use crate::parser::types::{ModuleRecord, ParsedLine, SkipReason};

const MODULE_MARKER: &str = "#";
const COMMENT_MARKER: &str = "##";
const REPLACE_ARROW: &str = "=>";

/// Classify one line of vendoring output.
///
/// Tokens are separated by single spaces, so repeated spaces yield empty
/// tokens and change the field count.
pub fn parse_line(line: &str) -> Result<ParsedLine, LineError> {
    if line.is_empty() {
        return Ok(ParsedLine::Skip(SkipReason::EmptyLine));
    }

    let fields: Vec<&str> = line.split(' ').collect();
    let marker = fields[0];
    if marker.starts_with(COMMENT_MARKER) {
        return Ok(ParsedLine::Skip(SkipReason::Comment));
    }
    if marker != MODULE_MARKER {
        return Ok(ParsedLine::Skip(SkipReason::NoPrefix));
    }

    let (name_at, version_at) = match fields.len() {
        // # name version
        3 => (1, 2),
        // # old => new version
        5 => {
            expect_arrow(&fields, 2)?;
            (3, 4)
        }
        // # old oldversion => new version
        6 => {
            expect_arrow(&fields, 3)?;
            (4, 5)
        }
        got => return Err(LineError::WrongArity { got }),
    };

    let name = non_empty(&fields, name_at)?;
    let raw_version = non_empty(&fields, version_at)?;
    Ok(ParsedLine::Module(ModuleRecord::new(name, raw_version)))
}

fn expect_arrow(fields: &[&str], position: usize) -> Result<(), LineError> {
    if fields[position] == REPLACE_ARROW {
        Ok(())
    } else {
        Err(LineError::BadSeparatorToken {
            position,
            found: fields[position].to_string(),
        })
    }
}

fn non_empty<'a>(fields: &[&'a str], position: usize) -> Result<&'a str, LineError> {
    match fields[position] {
        "" => Err(LineError::EmptyToken { position }),
        field => Ok(field),
    }
}
