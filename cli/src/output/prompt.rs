//! Interactive confirmation — Presentation-layer implementations of the
//! `Prompter` port.

use dialoguer::Confirm;

use crate::application::ports::Prompter;

/// Terminal yes/no prompt, defaulting to "no". A failed read (closed
/// stdin, no TTY) counts as a decline rather than an error.
pub struct ConfirmPrompt;

impl Prompter for ConfirmPrompt {
    fn confirm_deletion(&self, kind: &str, name: &str) -> bool {
        Confirm::new()
            .with_prompt(format!("Are you sure you want to delete {kind} {name}?"))
            .default(false)
            .interact()
            .unwrap_or(false)
    }
}

/// Prompter for `--no-confirm` runs: every candidate is confirmed.
pub struct AlwaysConfirm;

impl Prompter for AlwaysConfirm {
    fn confirm_deletion(&self, _kind: &str, _name: &str) -> bool {
        true
    }
}
