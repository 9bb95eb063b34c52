//! Terminal implementations for the CLI
//!
//! - [`InteractiveTerminal`]: dialoguer prompts with hidden PIN entry
//! - [`LineTerminal`]: plain line reading, used when stdin is piped

use std::io::{self, BufRead, Write};

use dialoguer::{Input, Password};

use atm_core::{Error, Message, Result, Terminal};

use crate::output;

/// Ctrl-D or Ctrl-C at a prompt ends input, like EOF on a pipe.
fn closed_or_error(e: dialoguer::Error) -> Result<Option<String>> {
    match e {
        dialoguer::Error::IO(e)
            if matches!(
                e.kind(),
                io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
            ) =>
        {
            Ok(None)
        }
        dialoguer::Error::IO(e) => Err(Error::Io(e)),
    }
}

/// Terminal backed by dialoguer on a TTY
#[derive(Debug, Default)]
pub struct InteractiveTerminal;

impl Terminal for InteractiveTerminal {
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        match Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
        {
            Ok(value) => Ok(Some(value)),
            Err(e) => closed_or_error(e),
        }
    }

    fn prompt_secret(&mut self, label: &str) -> Result<Option<String>> {
        match Password::new()
            .with_prompt(label)
            .allow_empty_password(true)
            .interact()
        {
            Ok(value) => Ok(Some(value)),
            Err(e) => closed_or_error(e),
        }
    }

    fn show(&mut self, message: &Message) -> Result<()> {
        output::show(message);
        Ok(())
    }
}

/// Terminal reading one value per line from any reader
pub struct LineTerminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineTerminal<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

impl<R: BufRead, W: Write> Terminal for LineTerminal<R, W> {
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.writer, "{}: ", label)?;
        self.writer.flush()?;
        self.read_line()
    }

    // Piped input has nothing to hide from.
    fn prompt_secret(&mut self, label: &str) -> Result<Option<String>> {
        self.prompt(label)
    }

    fn show(&mut self, message: &Message) -> Result<()> {
        writeln!(self.writer, "{}", output::render(message))?;
        Ok(())
    }
}
