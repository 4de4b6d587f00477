//! Check command implementation.
//!
//! Scans each input file completely and reports the first unrecognized
//! character in every file that has one.

use std::io::Write;
use std::path::PathBuf;

use munch_lex::Lexer;
use tracing::{debug, info};

use crate::commands::common::{read_file, Source};
use crate::commands::traits::Command;
use crate::error::{MunchtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Files to check.
    pub inputs: Vec<PathBuf>,
}

/// Summary of a check run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Files that scanned cleanly.
    pub passed: usize,
    /// Files containing unrecognized characters.
    pub failed: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Check one buffer, writing a diagnostic line to `out` if it fails.
    ///
    /// Returns `true` when the whole buffer tokenizes.
    pub fn check_source(&self, source: &Source, out: &mut dyn Write) -> Result<bool> {
        match Lexer::new(&source.bytes).tokenize() {
            Ok(tokens) => {
                debug!(input = %source.name, tokens = tokens.len(), "ok");
                Ok(true)
            },
            Err(error) => {
                writeln!(out, "{}: {}", source.name, error)?;
                Ok(false)
            },
        }
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckReport;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        if self.args.inputs.is_empty() {
            return Err(MunchtError::Validation("No input files specified".to_string()));
        }

        let mut report = CheckReport::default();
        for path in &self.args.inputs {
            let source = read_file(path)?;
            if self.check_source(&source, out)? {
                report.passed += 1;
            } else {
                report.failed += 1;
            }
        }

        info!(passed = report.passed, failed = report.failed, "check finished");
        Ok(report)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Run the check command, failing if any file contains unrecognized input.
pub fn run_check(args: CheckArgs) -> Result<()> {
    tracing::debug!(command = CheckCommand::name(), files = args.inputs.len(), "running");
    let command = CheckCommand::new(args);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let report = command.execute(&mut out)?;
    out.flush()?;

    if report.failed > 0 {
        return Err(MunchtError::Validation(format!(
            "{} of {} file(s) contain unrecognized characters",
            report.failed,
            report.failed + report.passed
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, text: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_check_reports_each_file() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.txt", "f(x) = x * 2.5");
        let bad = write(&dir, "bad.txt", "x\n  y ; z");

        let command = CheckCommand::new(CheckArgs {
            inputs: vec![good, bad],
        });
        let mut out = Vec::new();
        let report = command.execute(&mut out).unwrap();

        assert_eq!(report, CheckReport { passed: 1, failed: 1 });
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 1);
        assert!(out.ends_with("bad.txt: unrecognized character ';' at 2:5\n"));
    }

    #[test]
    fn test_check_requires_inputs() {
        let command = CheckCommand::new(CheckArgs::default());
        let err = command.execute(&mut Vec::new()).unwrap_err();
        assert!(matches!(err, MunchtError::Validation(_)));
    }

    #[test]
    fn test_check_missing_file() {
        let command = CheckCommand::new(CheckArgs {
            inputs: vec![PathBuf::from("/nonexistent/input.txt")],
        });
        assert!(command.execute(&mut Vec::new()).is_err());
    }
}
