//! Model naming and the startup banner.

/// Display name of a model identifier: provider prefix and `:tag` suffix
/// stripped (`moonshotai/kimi-k2:free` -> `kimi-k2`).
pub fn short_model_name(model: &str) -> &str {
    let name = model.rsplit('/').next().unwrap_or(model);
    name.split(':').next().unwrap_or(name)
}

/// Boxed, upper-cased model name shown before each mode prompt.
pub fn render(model: &str) -> String {
    let title = format!("  {}  ", short_model_name(model).to_uppercase());
    let rule = "=".repeat(title.chars().count());
    format!("{rule}\n{title}\n{rule}")
}
