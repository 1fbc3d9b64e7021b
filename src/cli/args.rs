use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "t")]
#[command(about = "Translates text using ChatGPT")]
#[command(
    long_about = "A fast and easy-to-use command line tool to translate texts.\n\n\
                  Text is taken from the arguments, followed by anything piped to stdin."
)]
#[command(version)]
pub struct Args {
    /// Text to translate (piped stdin is appended)
    pub text: Vec<String>,

    /// The name of the target language [env: TGF_DEFAULT_LANGUAGE, default: english]
    #[arg(short = 'l', long)]
    pub language: Option<String>,

    /// Additional context information for the chat model
    #[arg(short = 'c', long)]
    pub context: Option<String>,

    /// Suppress the progress spinner
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
