//! Report sinks: where rendered text ends up.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report to {target}: {source}")]
    Write {
        target: String,
        #[source]
        source: io::Error,
    },
}

/// Destination for a rendered report.
pub trait ReportSink {
    /// Emit the full report text.
    fn emit(&mut self, report: &str) -> Result<(), ReportError>;
}

/// Console output (stdout in the binary, a buffer in tests).
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print a single status line (warnings, confirmations).
    pub fn line(&mut self, message: &str) -> Result<(), ReportError> {
        writeln!(self.out, "{message}").map_err(console_error)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn emit(&mut self, report: &str) -> Result<(), ReportError> {
        self.out.write_all(report.as_bytes()).map_err(console_error)?;
        self.out.flush().map_err(console_error)
    }
}

fn console_error(source: io::Error) -> ReportError {
    ReportError::Write {
        target: "console".to_string(),
        source,
    }
}

/// Report file, created or truncated on every emit.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, source: io::Error) -> ReportError {
        ReportError::Write {
            target: self.path.display().to_string(),
            source,
        }
    }
}

impl ReportSink for FileSink {
    fn emit(&mut self, report: &str) -> Result<(), ReportError> {
        // The handle is closed when the writer drops, on success and on error.
        let file = File::create(&self.path).map_err(|e| self.error(e))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(report.as_bytes()).map_err(|e| self.error(e))?;
        writer.flush().map_err(|e| self.error(e))?;
        tracing::info!(path = %self.path.display(), bytes = report.len(), "report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn console_sink_writes_report_verbatim() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit("line one\nline two\n").unwrap();
        sink.line("done").unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "line one\nline two\ndone\n");
    }

    #[test]
    fn file_sink_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("resultado.txt");
        fs::write(&path, "stale content that is longer than the new report\n").unwrap();

        let mut sink = FileSink::new(&path);
        sink.emit("fresh\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
        assert_eq!(sink.path(), path.as_path());
    }

    #[test]
    fn file_sink_reports_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(dir.path().join("missing-dir").join("resultado.txt"));

        let err = sink.emit("report\n").unwrap_err();
        match err {
            ReportError::Write { target, .. } => assert!(target.ends_with("resultado.txt")),
        }
    }
}
