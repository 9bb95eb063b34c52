//! Scripted terminal for tests and non-interactive runs
//!
//! Replays a fixed list of input lines and records every prompt and
//! message, so a whole menu session can be driven and inspected.

use std::collections::VecDeque;

use crate::domain::result::Result;
use crate::ports::{Message, Terminal};

/// Terminal that replays a fixed list of inputs and records all output
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    inputs: VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<Message>,
}

impl ScriptedTerminal {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Text of every error message shown
    pub fn errors(&self) -> Vec<String> {
        self.output
            .iter()
            .filter_map(|m| match m {
                Message::Error(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    /// Text of every non-menu message shown
    pub fn transcript(&self) -> Vec<String> {
        self.output
            .iter()
            .filter(|m| !matches!(m, Message::Menu { .. }))
            .map(Message::text)
            .collect()
    }
}

impl Terminal for ScriptedTerminal {
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        self.prompts.push(label.to_string());
        Ok(self.inputs.pop_front())
    }

    fn prompt_secret(&mut self, label: &str) -> Result<Option<String>> {
        self.prompt(label)
    }

    fn show(&mut self, message: &Message) -> Result<()> {
        self.output.push(message.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_terminal_replays_inputs() {
        let mut terminal = ScriptedTerminal::new(["1", "Alice"]);
        assert_eq!(terminal.prompt("choice").unwrap().as_deref(), Some("1"));
        assert_eq!(terminal.prompt_secret("name").unwrap().as_deref(), Some("Alice"));
        assert_eq!(terminal.prompt("more").unwrap(), None);
        assert_eq!(terminal.prompts, vec!["choice", "name", "more"]);
    }

    #[test]
    fn test_scripted_terminal_records_output() {
        let mut terminal = ScriptedTerminal::default();
        terminal.show(&Message::info("hello")).unwrap();
        terminal.show(&Message::error("oops")).unwrap();
        terminal
            .show(&Message::Menu {
                title: None,
                options: vec!["1. Exit".to_string()],
            })
            .unwrap();

        assert_eq!(terminal.errors(), vec!["oops"]);
        assert_eq!(terminal.transcript(), vec!["hello", "oops"]);
    }
}
