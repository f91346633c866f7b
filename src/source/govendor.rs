//! Line source backed by a running `go mod vendor -v`
//!
//! The vendoring command prints its module report on stderr while it copies
//! packages into `vendor/`, so stderr is read incrementally and stdout is
//! discarded.

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::process::{Child, ChildStderr, Command, Stdio};

use tracing::{debug, info};

use crate::source::{LineSource, SourceError};

/// Number of trailing non-module lines kept to explain a failed run
pub const OUTPUT_TAIL_LINES: usize = 10;

pub struct GoVendorSource {
    /// Command line, kept for error messages
    command: String,
    child: Option<Child>,
    lines: Option<Lines<BufReader<ChildStderr>>>,
    /// Recent lines not starting with `#`, such as `go: ...` errors
    tail: VecDeque<String>,
}

impl GoVendorSource {
    /// Start the vendoring command
    ///
    /// # Arguments
    /// * `program` - The executable to run (e.g., "go")
    /// * `args` - Its arguments (e.g., ["mod", "vendor", "-v"])
    /// * `dir` - Working directory, the module root; current directory if `None`
    pub fn spawn(program: &str, args: &[String], dir: Option<&Path>) -> Result<Self, SourceError> {
        let command = std::iter::once(program)
            .chain(args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ");

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }

        info!("Running: {}", command);
        let mut child = cmd.spawn().map_err(|source| SourceError::Spawn {
            command: command.clone(),
            source,
        })?;
        let lines = child.stderr.take().map(|stderr| BufReader::new(stderr).lines());

        Ok(Self {
            command,
            child: Some(child),
            lines,
            tail: VecDeque::with_capacity(OUTPUT_TAIL_LINES),
        })
    }

    fn remember(&mut self, line: &str) {
        if line.is_empty() || line.starts_with('#') {
            return;
        }
        if self.tail.len() == OUTPUT_TAIL_LINES {
            self.tail.pop_front();
        }
        self.tail.push_back(line.to_string());
    }
}

impl LineSource for GoVendorSource {
    fn next_line(&mut self) -> Option<Result<String, SourceError>> {
        let line = self.lines.as_mut()?.next()?;
        if let Ok(line) = &line {
            self.remember(line);
        }
        Some(line.map_err(SourceError::from))
    }

    fn finish(&mut self) -> Result<(), SourceError> {
        // Close our end of the pipe first so a child still writing gets EPIPE
        // instead of blocking the wait below.
        self.lines = None;

        let Some(mut child) = self.child.take() else {
            return Ok(());
        };
        let status = child.wait().map_err(|source| SourceError::Wait {
            command: self.command.clone(),
            source,
        })?;
        debug!("'{}' exited with {}", self.command, status);

        if status.success() {
            Ok(())
        } else {
            Err(SourceError::Exit {
                command: self.command.clone(),
                status,
                output: self.tail.drain(..).collect(),
            })
        }
    }
}

impl Drop for GoVendorSource {
    fn drop(&mut self) {
        self.lines = None;
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}
