/// Builds the instruction sent as the single user message.
///
/// `context` is appended in parentheses when it contains more than whitespace.
pub fn build_prompt(text: &str, target_language: &str, context: Option<&str>) -> String {
    let suffix = context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| format!(" ({c})"))
        .unwrap_or_default();

    format!(
        "Your only job is to translate the following text to {target_language} language \
         by keeping its format without assumptions{suffix}:\n{text}"
    )
}
