use anyhow::{Context, Result};

use crate::config::{ApiKey, ResolveOptions, Settings, resolve_config};
use crate::error::AppError;
use crate::input::InputReader;
use crate::output;
use crate::translation::{OPENAI_ENDPOINT, TranslationClient, TranslationRequest};
use crate::ui::Spinner;

pub struct TranslateOptions {
    pub text: Vec<String>,
    pub language: Option<String>,
    pub context: Option<String>,
}

pub async fn run_translate(options: TranslateOptions, settings: &Settings) -> Result<()> {
    let config = resolve_config(
        &ResolveOptions {
            language: options.language,
            context: options.context,
        },
        settings,
    );

    let text = InputReader::read(&options.text)?;

    let request = TranslationRequest {
        text,
        target_language: config.target_language,
        context: config.context,
    };

    let translated = translate(&request, settings)
        .await
        .context("could not translate text")?;

    output::write_translation(&translated).context("Failed to write translation to stdout")?;

    Ok(())
}

async fn translate(request: &TranslationRequest, settings: &Settings) -> Result<String, AppError> {
    // Checked before any client is built so a missing key never reaches the network.
    let api_key = ApiKey::from_env()?;
    let client = TranslationClient::new(
        OPENAI_ENDPOINT.to_string(),
        api_key,
        settings.request_timeout,
    )?;

    let spinner = Spinner::translating(&request.target_language);
    let result = client.translate(request).await;
    spinner.stop();

    result
}
