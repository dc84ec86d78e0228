//! Line-oriented question/answer helper over any reader/writer pair.

use crate::errors::{AppError, AppResult};
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

pub type StdPrompter = Prompter<io::StdinLock<'static>, io::Stdout>;

/// Prompter over the process stdin/stdout.
pub fn stdio() -> StdPrompter {
    Prompter::new(io::stdin().lock(), io::stdout())
}

/// "yes" / "no", any case.
pub fn parse_yes_no(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and read one trimmed line.
    pub fn ask(&mut self, question: &str) -> AppResult<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer, printing `hint` after each
    /// rejected one.
    pub fn ask_until<T>(
        &mut self,
        question: &str,
        hint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> AppResult<T> {
        loop {
            let answer = self.ask(question)?;
            if let Some(v) = parse(&answer) {
                return Ok(v);
            }
            writeln!(self.output, "{hint}")?;
        }
    }

    pub fn ask_yes_no(&mut self, question: &str) -> AppResult<bool> {
        self.ask_until(
            question,
            "Invalid input. Please enter 'yes' or 'no'.",
            parse_yes_no,
        )
    }
}
