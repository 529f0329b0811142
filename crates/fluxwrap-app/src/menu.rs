//! Model and persona selection menus.

use fluxwrap_common::FluxError;
use indexmap::IndexMap;

use crate::prompter::Prompter;

/// Ask the user to pick a model from the catalog (1-based).
///
/// A single-entry catalog is returned without asking. `X` or end of input
/// returns `Ok(None)`; anything else that is not a listed index is an
/// [`FluxError::InvalidSelection`].
pub fn select_model(
    prompter: &mut dyn Prompter,
    catalog: &[(String, String)],
) -> Result<Option<String>, FluxError> {
    if let [(only, _)] = catalog {
        return Ok(Some(only.clone()));
    }

    prompter.say("\nThe following models are available:\n");
    for (i, (_, description)) in catalog.iter().enumerate() {
        prompter.say(&format!(" {}: {description}", i + 1));
    }

    let Some(answer) = prompter.ask("\nSelection (X to exit):") else {
        return Ok(None);
    };
    if answer.eq_ignore_ascii_case("x") {
        return Ok(None);
    }

    answer
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| catalog.get(i))
        .map(|(id, _)| Some(id.clone()))
        .ok_or_else(|| FluxError::InvalidSelection(format!("model {answer:?}")))
}

/// Print the persona menu (0-based, as selections are entered).
pub fn show_personas(prompter: &mut dyn Prompter, personas: &IndexMap<String, String>) {
    prompter.say("\nThe following tones are available:\n");
    for (i, name) in personas.keys().enumerate() {
        prompter.say(&format!(" {i}: {}", name.to_uppercase()));
    }
}

/// Resolve a persona selection by index or case-insensitive name.
pub fn resolve_persona<'a>(
    personas: &'a IndexMap<String, String>,
    answer: &str,
) -> Option<(&'a str, &'a str)> {
    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }
    if let Ok(index) = answer.parse::<usize>() {
        return personas
            .get_index(index)
            .map(|(name, prompt)| (name.as_str(), prompt.as_str()));
    }
    personas
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(answer))
        .map(|(name, prompt)| (name.as_str(), prompt.as_str()))
}
