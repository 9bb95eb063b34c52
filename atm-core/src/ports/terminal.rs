//! Terminal port - user input and output
//!
//! The controller reads every choice and value through this trait and
//! reports every outcome as a [`Message`].

use crate::domain::result::Result;

/// A line of output for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A menu heading followed by its numbered options
    Menu { title: Option<String>, options: Vec<String> },
    Info(String),
    Success(String),
    Error(String),
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self::Info(text.into())
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    pub fn text(&self) -> String {
        match self {
            Message::Menu { title, options } => {
                let mut lines: Vec<String> = title.iter().cloned().collect();
                lines.extend(options.iter().cloned());
                lines.join("\n")
            }
            Message::Info(t) | Message::Success(t) | Message::Error(t) => t.clone(),
        }
    }
}

/// Input/output abstraction for the menu loop
///
/// `Ok(None)` from a prompt means the input stream has ended.
pub trait Terminal {
    /// Ask for a line of visible input
    fn prompt(&mut self, label: &str) -> Result<Option<String>>;

    /// Ask for input that must not be echoed (PINs)
    fn prompt_secret(&mut self, label: &str) -> Result<Option<String>>;

    /// Show a message to the user
    fn show(&mut self, message: &Message) -> Result<()>;
}
