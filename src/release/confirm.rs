//! Operator confirmation for risky release states.

use crate::error::Result;
use std::io::{BufRead, Write};

/// Asks the operator whether to continue despite a warning
pub trait Confirm {
    /// Show `message`; `true` means "publish anyhow".
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Interactive confirmation on stdin/stdout, no timeout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, message: &str) -> Result<bool> {
        let mut stdout = std::io::stdout().lock();
        write!(stdout, "\n{}\nPublish anyhow? (Y/N) ", message)?;
        stdout.flush()?;
        drop(stdout);

        let mut answer = String::new();
        std::io::stdin().lock().read_line(&mut answer)?;
        Ok(is_affirmative(&answer))
    }
}

/// `y` or `j`, any case; everything else (EOF included) is a no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "j")
}
