//! Confirmation strategies for the destructive cleanup step

use std::io::{self, BufRead, BufReader, Stderr, Stdin, Stdout, Write};

use crate::common::Result;

/// Decides whether a destructive action may proceed
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Only a lone `y` (any case, surrounding whitespace ignored) counts as yes
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Asks on a writer and reads one line of answer
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirm<BufReader<Stdin>, Stdout> {
    /// Interactive prompt on the terminal
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl PromptConfirm<BufReader<Stdin>, Stderr> {
    /// Interactive prompt that leaves stdout untouched
    pub fn stdin_on_stderr() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stderr())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        write!(self.output, "{} (y/n): ", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        // EOF leaves the answer empty, which declines
        self.input.read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// Confirms without asking (`--yes`)
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Declines without asking (`--keep`)
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(input: &str) -> (bool, String) {
        let mut out = Vec::new();
        let confirmed = PromptConfirm::new(Cursor::new(input.as_bytes()), &mut out)
            .confirm("Delete test project?")
            .unwrap();
        (confirmed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative(" y \n"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn test_prompt_reads_one_line() {
        let (confirmed, prompt) = answer("Y\nn\n");
        assert!(confirmed);
        assert_eq!(prompt, "Delete test project? (y/n): ");
    }

    #[test]
    fn test_prompt_declines_on_eof() {
        assert!(!answer("").0);
        assert!(!answer("nope\n").0);
    }

    #[test]
    fn test_fixed_strategies() {
        assert!(AlwaysConfirm.confirm("x").unwrap());
        assert!(!NeverConfirm.confirm("x").unwrap());
    }
}
