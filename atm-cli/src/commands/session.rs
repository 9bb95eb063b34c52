//! Session command - run the interactive ATM menu

use std::io;

use anyhow::{Context, Result};
use atm_core::AtmContext;

use crate::terminal::{InteractiveTerminal, LineTerminal};

/// Run the menu loop on stdin/stdout
///
/// Uses dialoguer prompts on a TTY and plain line reading otherwise, so
/// input can be piped in.
pub fn run(ctx: &mut AtmContext, plain: bool) -> Result<()> {
    let interactive = !plain && atty::is(atty::Stream::Stdin);

    let result = if interactive {
        ctx.run(&mut InteractiveTerminal)
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut terminal = LineTerminal::new(stdin.lock(), stdout.lock());
        ctx.run(&mut terminal)
    };

    result.context("Terminal session failed")
}
