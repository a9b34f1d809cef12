//! Styled status output
//!
//! Everything here goes to stderr: stdout is reserved for the report itself.

use owo_colors::OwoColorize;

/// Print a success message with a green checkmark
pub fn success(message: &str) {
    // Pastel mint green: RGB(152, 225, 152)
    eprintln!(
        "{} {}",
        "✓".truecolor(152, 225, 152).bold(),
        message.bright_white()
    );
}

/// Print an error message with a red X
pub fn error(message: &str) {
    // Pastel coral/salmon: RGB(255, 160, 160)
    eprintln!(
        "{} {}",
        "✗".truecolor(255, 160, 160).bold(),
        message.bright_white()
    );
}

/// Print a warning message with a yellow warning symbol
pub fn warning(message: &str) {
    // Pastel cream/yellow: RGB(255, 230, 160)
    eprintln!(
        "{} {}",
        "⚠".truecolor(255, 230, 160).bold(),
        message.bright_white()
    );
}

/// Print an info message with a blue info symbol
pub fn info(message: &str) {
    // Pastel sky blue: RGB(160, 200, 255)
    eprintln!(
        "{} {}",
        "ℹ".truecolor(160, 200, 255).bold(),
        message.bright_white()
    );
}

/// Print a key-value pair with styled key and value
pub fn key_value(key: &str, value: &str) {
    // Brighter grey: RGB(160, 160, 160)
    eprintln!(
        "  {} {}",
        format!("{}:", key).truecolor(160, 160, 160),
        value.bright_white()
    );
}
