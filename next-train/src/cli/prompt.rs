//! Numbered-menu prompts.
//!
//! A prompt reads lines until it gets a number in range. `q` quits, `help`
//! prints usage and asks again, and anything else re-prompts with the valid
//! range. End of input counts as quitting.

use std::io::{self, BufRead, Write};

use super::help::write_usage;

/// What a line of input means to a prompt expecting `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Number(usize),
    OutOfRange,
    Quit,
    Help,
    Invalid,
}

impl Reply {
    pub fn classify(line: &str, min: usize, max: usize) -> Self {
        let line = line.trim();
        match line {
            "q" => return Reply::Quit,
            "help" => return Reply::Help,
            _ => {}
        }
        match line.parse::<usize>() {
            Ok(n) if (min..=max).contains(&n) => Reply::Number(n),
            Ok(_) => Reply::OutOfRange,
            Err(_) => Reply::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptState {
    AwaitingInput,
    HelpShown,
    Validated(usize),
    Quit,
}

/// Console for menu selection, generic over its streams for testing.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Where menus and results are written.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for a number in `min..=max`.
    ///
    /// `message` replaces the default `enter MIN-MAX: ` prompt. Returns
    /// `None` if the user quit.
    pub fn select(
        &mut self,
        min: usize,
        max: usize,
        message: Option<&str>,
    ) -> io::Result<Option<usize>> {
        let mut message = message
            .map(str::to_string)
            .unwrap_or_else(|| format!("enter {min}-{max}: "));
        let mut state = PromptState::AwaitingInput;

        loop {
            state = match state {
                PromptState::AwaitingInput => {
                    write!(self.output, "{message}")?;
                    self.output.flush()?;

                    let mut line = String::new();
                    if self.input.read_line(&mut line)? == 0 {
                        PromptState::Quit
                    } else {
                        match Reply::classify(&line, min, max) {
                            Reply::Number(n) => PromptState::Validated(n),
                            Reply::Quit => PromptState::Quit,
                            Reply::Help => PromptState::HelpShown,
                            Reply::OutOfRange | Reply::Invalid => {
                                message = format!("Enter a number in the range {min} to {max}: ");
                                PromptState::AwaitingInput
                            }
                        }
                    }
                }
                PromptState::HelpShown => {
                    write_usage(&mut self.output)?;
                    PromptState::AwaitingInput
                }
                PromptState::Validated(n) => return Ok(Some(n)),
                PromptState::Quit => return Ok(None),
            };
        }
    }
}
