//! Console boundary for the interactive loop.
//!
//! The session reads and writes whole lines through [`Console`], so the loop
//! can be driven from stdin/stdout or from a script in tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Line-oriented user I/O.
pub trait Console {
    /// Read one line without its trailing newline. `Ok(None)` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Write one line.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

/// Console over the process stdin and stdout.
#[derive(Debug)]
pub struct StdConsole<R = io::StdinLock<'static>, W = io::Stdout> {
    input: R,
    output: W,
}

impl StdConsole {
    /// Console bound to the process stdin and stdout.
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    /// Console over arbitrary reader and writer.
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        self.output.flush()?;
        Ok(())
    }
}

/// Console that replays fixed input and records output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Console that will answer with `lines`, then report end of input.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Lines written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Input lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, line: &str) -> Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}
