//! # t - Command-Line Translation
//!
//! `t` translates text with the OpenAI chat completions API and prints the
//! result to stdout.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate arguments to the default language (english)
//! t Guten Morgen
//!
//! # Translate piped text
//! cat notes.md | t --language german
//!
//! # Give the model a hint about the domain
//! t -l japanese -c "technical documentation" "Press any key to continue"
//! ```
//!
//! ## Configuration
//!
//! Settings come from the environment, optionally loaded from a `.env`
//! file in the working directory:
//!
//! ```text
//! OPENAI_API_KEY=sk-...
//! TGF_DEFAULT_LANGUAGE=english
//! TGF_REQUEST_TIMEOUT=60
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Settings resolution and environment file loading.
pub mod config;

/// Error taxonomy and exit codes.
pub mod error;

/// Input assembly from arguments and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, stdout writing).
pub mod output;

/// Translation client for the chat completions API.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
