//! Interactive confirmation capability guarding the upload

use inquire::Text;

use crate::error::Result;

/// Exact answer required to proceed with an upload
pub const AFFIRMATIVE: &str = "yes";

/// Input-provider capability behind the publish confirmation gate
pub trait Confirm {
    /// Ask the operator `prompt`; true only for the exact affirmative answer
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Confirmation read from the interactive terminal.
///
/// Uploads to the package index cannot be retracted, so this is a free-text
/// prompt compared against the exact affirmative token. Defaults and
/// single-letter shortcuts are not accepted.
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = Text::new(prompt).prompt()?;
        Ok(answer == AFFIRMATIVE)
    }
}
