//! Operator confirmation for destructive operations.
//!
//! The store asks a [`Confirm`] before deleting anything. The CLI wires in a
//! terminal-backed [`LineConfirm`]; tests pass closures or scripted input.

use std::io::{self, BufRead, Write};
use tracing::warn;

/// Answer that confirms a prompt, compared case-insensitively.
pub const AFFIRMATIVE: &str = "yes";

/// Capability to ask the operator a yes/no question.
pub trait Confirm {
    /// Ask `question`; `true` only if the operator affirmed.
    fn confirm(&mut self, question: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, question: &str) -> bool {
        self(question)
    }
}

/// Accepts every prompt without asking (`--yes`).
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str) -> bool {
        true
    }
}

/// Line-oriented prompt: writes the question, reads one line of input.
///
/// A read error or closed input counts as a refusal.
pub struct LineConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LineConfirm<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LineConfirm<R, W> {
    fn confirm(&mut self, question: &str) -> bool {
        if let Err(e) = write!(self.output, "{question}").and_then(|()| self.output.flush()) {
            warn!("cannot write prompt: {e}");
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => is_affirmative(&answer),
            Err(e) => {
                warn!("cannot read confirmation: {e}");
                false
            }
        }
    }
}

/// Whether an answer line (terminator included or not) is the affirmative
/// token. Surrounding spaces are not stripped.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim_end_matches(['\n', '\r']);
    answer.eq_ignore_ascii_case(AFFIRMATIVE)
}
