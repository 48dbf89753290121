//! descent-drv - Line-oriented driver
//!
//! Runs the calculator and the statement recognizer over a line-oriented
//! input, one independent parse per line, and writes the report for each
//! line to an output stream. Failures on a line are reported and the session
//! moves on; only I/O problems end a session early.

pub mod config;
pub mod error;

use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use tracing::{debug, info};

use descent_lex::{tokenize, ChainScanner, PolishScanner, TokenStream};
use descent_par::{
    ChainParser, EvalError, Evaluator, Formula, FormulaParser, ParseResult, TreeBuilder,
};
use descent_util::{Handler, IntoDiagnostic};

pub use config::{write_default_config, CalculatorConfig, Config, ParserConfig, CONFIG_FILE_NAME};
pub use error::{DriverError, Result};

/// Which scanner `descent tokens` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Grammar {
    /// Operators and operands
    Polish,
    /// Identifiers, punctuation and string literals
    Chain,
}

/// Line counts for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines read.
    pub lines: usize,
    /// Lines that failed to scan, parse or evaluate.
    pub failures: usize,
}

/// A successful calculator line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    /// The formula's value.
    pub value: i64,
    /// The parsed tree, when the session echoes it.
    pub formula: Option<Formula>,
}

/// One run of the driver over an input.
pub struct Session {
    config: Config,
    diagnostics: Handler,
}

impl Session {
    /// Creates a session.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            diagnostics: Handler::new(),
        }
    }

    /// The configuration this session runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Diagnostics for every failed line so far.
    pub fn diagnostics(&self) -> &Handler {
        &self.diagnostics
    }

    /// Evaluates one calculator line. Returns `Ok(None)` for a line with no
    /// tokens.
    pub fn calculate(&self, line: &str) -> std::result::Result<Option<Calculation>, EvalError> {
        let stream = tokenize(PolishScanner::new(line))?;
        if stream.is_exhausted() {
            return Ok(None);
        }

        let limits = self.config.limits();
        let value = FormulaParser::new(Evaluator, limits).parse(&mut stream.clone())?;
        let formula = if self.config.calculator.show_tree {
            Some(FormulaParser::new(TreeBuilder, limits).parse(&mut stream.clone())?)
        } else {
            None
        };
        Ok(Some(Calculation { value, formula }))
    }

    /// Runs the calculator loop until `input` ends.
    ///
    /// Prints the banner, then a prompt before every read, including the one
    /// that finds end of input, and the farewell last. A last line without a
    /// terminator ends the session without another prompt.
    pub fn run_calculator<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<SessionSummary> {
        let calculator = &self.config.calculator;
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        writeln!(output, "{}", calculator.banner)?;
        loop {
            write!(output, "{}", calculator.prompt)?;
            output.flush()?;

            let line = match read_line(&mut input, &mut buf)? {
                Some(line) => line,
                None => break,
            };
            summary.lines += 1;

            match self.calculate(&line.text) {
                Ok(None) => debug!(line = summary.lines, "blank line"),
                Ok(Some(calculation)) => {
                    debug!(line = summary.lines, value = calculation.value, "evaluated");
                    if let Some(formula) = &calculation.formula {
                        writeln!(output, "{}", formula)?;
                    }
                    writeln!(output, "{}", calculation.value)?;
                },
                Err(err) => {
                    summary.failures += 1;
                    writeln!(output, "Error: {}", err)?;
                    self.report(summary.lines, &err);
                },
            }

            if !line.terminated {
                break;
            }
        }
        writeln!(output, "{}", calculator.farewell)?;

        info!(
            lines = summary.lines,
            failures = summary.failures,
            "calculator session finished"
        );
        Ok(summary)
    }

    /// Recognizes one statement line.
    pub fn recognize(&self, line: &str) -> ParseResult {
        ChainParser::new(self.config.limits()).recognize(line)
    }

    /// Runs the recognizer over every line of `input`.
    ///
    /// An accepted line prints its fields, one per line; anything else prints
    /// `invalid input`.
    pub fn run_recognizer<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<SessionSummary> {
        let mut parser = ChainParser::new(self.config.limits());
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        while let Some(line) = read_line(&mut input, &mut buf)? {
            summary.lines += 1;

            let result = parser.recognize(&line.text);
            match &result {
                ParseResult::Accepted { consumed, .. } => {
                    debug!(line = summary.lines, tokens = consumed, "accepted");
                },
                ParseResult::Rejected { reason, .. } => {
                    summary.failures += 1;
                    self.report(summary.lines, reason);
                },
            }
            writeln!(output, "{}", result)?;
        }

        info!(
            lines = summary.lines,
            failures = summary.failures,
            "recognizer session finished"
        );
        Ok(summary)
    }

    /// Prints the tokens of every line of `input` in their debug form, or the
    /// lexical error for lines that do not scan.
    pub fn dump_tokens<R: BufRead, W: Write>(
        &self,
        grammar: Grammar,
        mut input: R,
        mut output: W,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut buf = Vec::new();

        while let Some(line) = read_line(&mut input, &mut buf)? {
            summary.lines += 1;

            let scanned: std::result::Result<TokenStream, _> = match grammar {
                Grammar::Polish => tokenize(PolishScanner::new(&line.text)),
                Grammar::Chain => tokenize(ChainScanner::new(&line.text)),
            };
            match scanned {
                Ok(stream) => {
                    for token in stream {
                        writeln!(output, "{}", token)?;
                    }
                },
                Err(err) => {
                    summary.failures += 1;
                    writeln!(output, "Error: {}", err)?;
                    self.report(summary.lines, &err);
                },
            }
        }

        info!(lines = summary.lines, failures = summary.failures, "token dump finished");
        Ok(summary)
    }

    fn report(&self, line: usize, error: &dyn IntoDiagnostic) {
        let diagnostic = error.to_diagnostic().with_note(format!("input line {}", line));
        debug!(line, "{}", diagnostic);
        self.diagnostics.emit_diagnostic(diagnostic);
    }
}

/// One input line, terminator stripped.
struct Line {
    text: String,
    terminated: bool,
}

/// Reads the next line as raw bytes. Bytes that are not UTF-8 become
/// U+FFFD, which neither scanner accepts, so a bad line fails on its own.
fn read_line<R: BufRead>(input: &mut R, buf: &mut Vec<u8>) -> io::Result<Option<Line>> {
    buf.clear();
    if input.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    let terminated = buf.last() == Some(&b'\n');
    if terminated {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(Line {
        text: String::from_utf8_lossy(buf).into_owned(),
        terminated,
    }))
}
