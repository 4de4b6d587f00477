//! Tokenize command implementation.
//!
//! Scans one input and prints its tokens, one per line, as text or JSON.

use std::io::Write;
use std::path::PathBuf;

use munch_lex::{Lexer, ScanError, Token, TokenKind};
use serde::Serialize;
use tracing::{info, warn};

use crate::commands::common::{read_source, Source};
use crate::commands::traits::Command;
use crate::config::{Config, InvalidPolicy, OutputFormat};
use crate::error::{MunchtError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Input file; standard input when `None` or `-`.
    pub input: Option<PathBuf>,
    /// Output format override.
    pub format: Option<OutputFormat>,
    /// Step over unrecognized characters instead of stopping.
    pub skip_invalid: bool,
    /// Effective configuration.
    pub config: Config,
}

/// Summary of a tokenize run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizeReport {
    /// Tokens printed.
    pub tokens: usize,
    /// Unrecognized bytes stepped over.
    pub skipped: usize,
}

/// One token as printed in JSON mode.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
    start: usize,
    end: usize,
    line: u32,
    column: u32,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        Self {
            kind: token.kind.as_str(),
            text: token.as_str(),
            start: token.span.start,
            end: token.span.end,
            line: token.span.line,
            column: token.span.column,
        }
    }
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
}

impl TokenizeCommand {
    fn format(&self) -> OutputFormat {
        self.args.format.unwrap_or(self.args.config.output.format)
    }

    fn policy(&self) -> InvalidPolicy {
        if self.args.skip_invalid {
            InvalidPolicy::Skip
        } else {
            self.args.config.scan.on_invalid
        }
    }

    /// Scan `source` and write every token to `out`.
    pub fn run_on(&self, source: &Source, out: &mut dyn Write) -> Result<TokenizeReport> {
        let mut lexer = Lexer::new(&source.bytes);
        let mut report = TokenizeReport::default();

        loop {
            let token = lexer.next_token();
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Invalid => {
                    let error = ScanError::UnrecognizedCharacter {
                        byte: lexer.remaining().first().copied().unwrap_or_default(),
                        span: token.span,
                    };
                    if self.policy() == InvalidPolicy::Stop {
                        return Err(MunchtError::Scan {
                            path: source.name.clone(),
                            source: error,
                        });
                    }
                    warn!("{}: {}", source.name, error);
                    lexer.skip_invalid();
                    report.skipped += 1;
                },
                _ => {
                    self.write_token(&token, out)?;
                    report.tokens += 1;
                },
            }
        }

        info!(
            input = %source.name,
            tokens = report.tokens,
            skipped = report.skipped,
            "tokenized"
        );
        Ok(report)
    }

    fn write_token(&self, token: &Token<'_>, out: &mut dyn Write) -> Result<()> {
        match self.format() {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &TokenRecord::from(token))?;
                writeln!(out)?;
            },
            OutputFormat::Text if self.args.config.output.show_position => {
                writeln!(out, "{}\t{}\t{}", token.span, token.kind, token.as_str())?;
            },
            OutputFormat::Text => {
                writeln!(out, "{}\t{}", token.kind, token.as_str())?;
            },
        }
        Ok(())
    }
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = TokenizeReport;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<Self::Output> {
        let source = read_source(self.args.input.as_deref())?;
        self.run_on(&source, out)
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

/// Run the tokenize command against standard output.
pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    tracing::debug!(command = TokenizeCommand::name(), input = ?args.input, "running");
    let command = TokenizeCommand::new(args);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    command.execute(&mut out)?;
    out.flush()?;
    Ok(())
}
