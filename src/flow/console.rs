//! Destination for the human-readable pass/fail report
//!
//! With `--json` the human report moves to stderr so stdout carries only
//! the machine-readable summary.

use std::fmt;
use std::io::{self, Write};

/// Where step and banner lines are written
#[derive(Debug)]
pub enum Console {
    Stdout,
    Stderr,
    /// Collects output in memory
    Buffer(Vec<u8>),
}

impl Console {
    /// Console for a run; `json` keeps stdout free for the report
    pub fn for_run(json: bool) -> Self {
        if json {
            Self::Stderr
        } else {
            Self::Stdout
        }
    }

    pub fn buffer() -> Self {
        Self::Buffer(Vec::new())
    }

    /// Write one line; a closed pipe is not worth failing the run over
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        let result = match self {
            Self::Stdout => writeln!(io::stdout(), "{}", args),
            Self::Stderr => writeln!(io::stderr(), "{}", args),
            Self::Buffer(buf) => writeln!(buf, "{}", args),
        };
        if let Err(e) = result {
            tracing::debug!(error = %e, "Dropped console output");
        }
    }

    /// Everything written so far, for buffered consoles
    pub fn captured(&self) -> String {
        match self {
            Self::Buffer(buf) => String::from_utf8_lossy(buf).into_owned(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_runs_report_on_stderr() {
        assert!(matches!(Console::for_run(true), Console::Stderr));
        assert!(matches!(Console::for_run(false), Console::Stdout));
    }

    #[test]
    fn test_buffer_collects_lines() {
        let mut console = Console::buffer();
        say!(console, "step {}", 1);
        say!(console, "done");
        assert_eq!(console.captured(), "step 1\ndone\n");
        assert_eq!(Console::Stdout.captured(), "");
    }
}
