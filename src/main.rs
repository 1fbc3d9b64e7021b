use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use t_cli::cli::Args;
use t_cli::cli::commands::translate::{self, TranslateOptions};
use t_cli::config::{ENV_FILE_NAME, Settings, load_env_file};
use t_cli::error::{AppError, exit, exit_code_for};
use t_cli::output::{self, OutputConfig};
use t_cli::ui::Style;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "T_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let code = run().await;
    ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}

async fn run() -> exitcode::ExitCode {
    let env_file = Path::new(ENV_FILE_NAME);
    let env_loaded = match load_env_file(env_file) {
        Ok(loaded) => loaded,
        Err(err) => {
            report(&err.into());
            return exit::ENV_FILE;
        }
    };

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version are reported as "errors" on stdout
            return if err.use_stderr() {
                exit::CLI_ERROR
            } else {
                exit::OK
            };
        }
    };

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });
    init_tracing(args.verbose);

    tracing::debug!(path = %env_file.display(), loaded = env_loaded, "environment file");

    let settings = Settings::from_env();
    tracing::debug!(
        default_language = %settings.default_language,
        timeout_secs = settings.request_timeout.as_secs(),
        "resolved settings"
    );

    let options = TranslateOptions {
        text: args.text,
        language: args.language,
        context: args.context,
    };

    match translate::run_translate(options, &settings).await {
        Ok(()) => exit::OK,
        Err(err) => {
            report(&err);
            exit_code_for(&err)
        }
    }
}

fn report(err: &anyhow::Error) {
    eprintln!("{} {err:#}", Style::error("Error:"));

    if let Some(AppError::MissingCredential(var)) = err.downcast_ref::<AppError>() {
        eprintln!(
            "{}",
            Style::hint(format!(
                "Set {var} in your environment or in a {ENV_FILE_NAME} file."
            ))
        );
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("t=debug,t_cli=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(output::stderr_colors())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
