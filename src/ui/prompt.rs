//! Line-oriented console prompts with re-prompting on unrecognized answers.

use crate::errors::{AppError, AppResult};
use std::io::{BufRead, Write};

pub const YES_NO_ERROR: &str = "Not a valid input.  Please enter Yes or No";

/// Parse a yes/no answer. Anything else is unrecognized.
pub fn parse_yes_no(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Reads answers from `input` and writes prompts (and everything else the
/// session prints) to `out`.
pub struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Print `prompt` and return the next answer, trimmed and lower-cased.
    pub fn read_answer(&mut self, prompt: &str) -> AppResult<String> {
        writeln!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_lowercase())
    }

    /// Ask until `parse` accepts the answer, printing `error` after each rejection.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        error: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> AppResult<T> {
        loop {
            let answer = self.read_answer(prompt)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            log::debug!("rejected answer {answer:?}");
            writeln!(self.out, "{error}")?;
        }
    }

    pub fn ask_yes_no(&mut self, prompt: &str) -> AppResult<bool> {
        self.ask_until(prompt, YES_NO_ERROR, parse_yes_no)
    }
}
