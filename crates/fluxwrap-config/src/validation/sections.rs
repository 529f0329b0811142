//! Per-section validators.

use crate::schema::{FluxConfig, TEMPLATE_ROLES};

use super::helpers::{validate_min, validate_range_f64};

pub(crate) fn validate_meta(errors: &mut Vec<String>, config: &FluxConfig) {
    validate_range_f64(
        errors,
        "meta.temperature",
        config.meta.temperature,
        0.0,
        2.0,
    );
    validate_min(errors, "meta.max_tokens", u64::from(config.meta.max_tokens), 1);
}

pub(crate) fn validate_models(errors: &mut Vec<String>, config: &FluxConfig) {
    if config.models.keys().any(|id| id.trim().is_empty()) {
        errors.push("models contains an empty model identifier".into());
    }
}

pub(crate) fn validate_messages(errors: &mut Vec<String>, config: &FluxConfig) {
    for (i, message) in config.messages.iter().enumerate() {
        if !TEMPLATE_ROLES.contains(&message.role.as_str()) {
            errors.push(format!(
                "messages[{i}].role = {:?} must be one of {TEMPLATE_ROLES:?}",
                message.role
            ));
        }
        if message.content.trim().is_empty() {
            errors.push(format!("messages[{i}].content is empty"));
        }
    }

    if let Some(last) = config.messages.last() {
        if last.role != "user" {
            errors.push(format!(
                "messages must end with a \"user\" turn, found {:?}",
                last.role
            ));
        }
    }
}

pub(crate) fn validate_provider(errors: &mut Vec<String>, config: &FluxConfig) {
    let base_url = &config.provider.base_url;
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(format!("provider.base_url = {base_url:?} is not an http(s) URL"));
    }
    validate_min(errors, "provider.timeout_secs", config.provider.timeout_secs, 1);
}
