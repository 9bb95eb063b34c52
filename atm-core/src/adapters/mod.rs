//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies. The
//! interactive terminal lives in the CLI crate; the scripted terminal
//! here replays canned input for tests and piped runs.

pub mod scripted;

pub use scripted::ScriptedTerminal;
