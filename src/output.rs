//! Global output configuration.
//!
//! The translated text is the only thing written to stdout so it can be
//! piped. Diagnostics, logs and the progress spinner go to stderr.

use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            // Check NO_COLOR environment variable (https://no-color.org/)
            no_color: std::env::var("NO_COLOR").is_ok(),
        }
    }
}

/// Initialize the global output configuration.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if quiet mode is enabled.
pub fn is_quiet() -> bool {
    config().quiet
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Check if diagnostics on stderr may be colored.
///
/// Colors need a terminal on stderr and no `--no-color` / `NO_COLOR`.
pub fn stderr_colors() -> bool {
    colors_enabled(is_no_color(), io::stderr().is_terminal())
}

const fn colors_enabled(no_color: bool, terminal: bool) -> bool {
    !no_color && terminal
}

/// Writes the translated text to stdout.
///
/// A trailing newline is only added for an interactive terminal, so piped
/// output stays byte-for-byte what the model returned.
pub fn write_translation(text: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    write_translation_to(&mut stdout.lock(), text, interactive)
}

fn write_translation_to<W: Write>(writer: &mut W, text: &str, interactive: bool) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    if interactive && !text.ends_with('\n') {
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
