use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::ledger::ConfirmationGate;

/// Interactive yes/no gate backed by a dialoguer prompt. A failed prompt
/// (e.g. no terminal) counts as a decline so destructive actions stay gated.
pub struct DialogGate {
    theme: ColorfulTheme,
}

impl DialogGate {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialogGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationGate for DialogGate {
    fn confirm(&mut self, prompt: &str) -> bool {
        match Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!("confirmation prompt failed: {err}");
                false
            }
        }
    }
}

/// Gate used in script mode, where prompt lines cannot be answered.
pub struct AssumeYesGate;

impl ConfirmationGate for AssumeYesGate {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
