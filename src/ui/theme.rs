//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Colors are
//! dropped when stderr is not a terminal or colors are disabled.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        if !output::stderr_colors() {
            return text.to_string();
        }
        format!("{}", text.red().bold())
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        if !output::stderr_colors() {
            return text.to_string();
        }
        format!("{}", text.dimmed().italic())
    }
}
