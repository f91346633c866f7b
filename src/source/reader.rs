//! Line source over an already captured vendoring report

use std::io::{BufRead, Lines};

use crate::source::{LineSource, SourceError};

pub struct ReaderSource<R> {
    lines: Lines<R>,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Option<Result<String, SourceError>> {
        self.lines
            .next()
            .map(|line| line.map_err(SourceError::from))
    }

    fn finish(&mut self) -> Result<(), SourceError> {
        Ok(())
    }
}
