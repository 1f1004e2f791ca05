/// Interactive prompts behind a trait so menus can be driven by canned input.
use dialoguer::{Confirm, Select};

use crate::display::DisplayError;

/// A blocking request/response terminal driver.
pub trait Prompter {
    /// Ask the user to pick one of `options`. Returns the chosen index.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError::Prompt` if the terminal interaction fails or is aborted.
    fn select(&mut self, label: &str, options: &[String], default: usize)
    -> Result<usize, DisplayError>;

    /// Ask a yes/no question.
    ///
    /// # Errors
    ///
    /// Returns `DisplayError::Prompt` if the terminal interaction fails or is aborted.
    fn confirm(&mut self, label: &str, default: bool) -> Result<bool, DisplayError>;
}

/// `dialoguer`-backed prompter reading from the controlling terminal.
#[derive(Debug, Default)]
pub struct TermPrompter;

impl Prompter for TermPrompter {
    fn select(
        &mut self,
        label: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize, DisplayError> {
        let index = Select::new()
            .with_prompt(label)
            .items(options)
            .default(default)
            .interact()?;
        Ok(index)
    }

    fn confirm(&mut self, label: &str, default: bool) -> Result<bool, DisplayError> {
        let answer = Confirm::new()
            .with_prompt(label)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}

/// Replays canned answers in order. Panics when the script runs out.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    selections: std::collections::VecDeque<usize>,
    confirmations: std::collections::VecDeque<bool>,
    /// Every label asked, in order.
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(selections: &[usize], confirmations: &[bool]) -> Self {
        Self {
            selections: selections.iter().copied().collect(),
            confirmations: confirmations.iter().copied().collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn select(
        &mut self,
        label: &str,
        options: &[String],
        _default: usize,
    ) -> Result<usize, DisplayError> {
        self.asked.push(label.to_owned());
        let index = self.selections.pop_front().expect("select script exhausted");
        assert!(index < options.len(), "scripted index {index} out of range");
        Ok(index)
    }

    fn confirm(&mut self, label: &str, _default: bool) -> Result<bool, DisplayError> {
        self.asked.push(label.to_owned());
        Ok(self
            .confirmations
            .pop_front()
            .expect("confirm script exhausted"))
    }
}
