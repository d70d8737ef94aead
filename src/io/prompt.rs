//! Yes/no confirmation gates in front of each pipeline stage

use std::io::{BufRead, StdinLock, Stdout, Write};

/// Decision function consulted before a stage does destructive work
pub trait Confirm {
    /// Ask the operator; `default_yes` is the answer to an empty reply
    fn confirm(&mut self, prompt: &str, default_yes: bool) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str, bool) -> bool,
{
    fn confirm(&mut self, prompt: &str, default_yes: bool) -> bool {
        self(prompt, default_yes)
    }
}

/// Answers every gate affirmatively
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str, _default_yes: bool) -> bool {
        true
    }
}

/// Interactive prompt reading one line per question
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    /// Create a prompt over arbitrary reader and writer
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompt, returning the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

impl LinePrompt<StdinLock<'static>, Stdout> {
    /// Prompt on the process terminal
    pub fn console() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, prompt: &str, default_yes: bool) -> bool {
        if let Err(error) = write!(self.output, "{prompt} {} ", choice_hint(default_yes))
            .and_then(|()| self.output.flush())
        {
            tracing::warn!(%error, "failed to write confirmation prompt");
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            // End of input never counts as consent
            Ok(0) => false,
            Ok(_) => interpret_response(&line, default_yes),
            Err(error) => {
                tracing::warn!(%error, "failed to read confirmation");
                false
            }
        }
    }
}

/// Bracketed choice shown after a question, capitalised on the default
pub const fn choice_hint(default_yes: bool) -> &'static str {
    if default_yes { "[Y/n]" } else { "[y/N]" }
}

/// Turn a typed reply into a decision
///
/// Empty replies take the default; replies starting with `y` in any case
/// are affirmative; everything else declines.
pub fn interpret_response(input: &str, default_yes: bool) -> bool {
    let reply = input.trim();
    if reply.is_empty() {
        return default_yes;
    }
    reply
        .chars()
        .next()
        .is_some_and(|first| first.eq_ignore_ascii_case(&'y'))
}
