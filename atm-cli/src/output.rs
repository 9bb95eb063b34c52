//! Output formatting utilities

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

use atm_core::Message;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Render a core message as styled text
pub fn render(message: &Message) -> String {
    match message {
        Message::Menu { title, options } => {
            let mut lines = Vec::with_capacity(options.len() + 2);
            lines.push(String::new());
            if let Some(title) = title {
                lines.push(title.bold().to_string());
            }
            lines.extend(options.iter().cloned());
            lines.join("\n")
        }
        Message::Info(t) => t.cyan().to_string(),
        Message::Success(t) => t.green().to_string(),
        Message::Error(t) => t.red().to_string(),
    }
}

/// Print a core message to the matching stream
pub fn show(message: &Message) {
    match message {
        Message::Menu { .. } => println!("{}", render(message)),
        Message::Info(t) => info(t),
        Message::Success(t) => success(t),
        Message::Error(t) => error(t),
    }
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}
