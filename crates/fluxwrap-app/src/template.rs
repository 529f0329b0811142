//! Non-interactive template runs (`--template`).

use std::path::{Path, PathBuf};

use chrono::Local;
use fluxwrap_ai::{AiClient, CompletionResult, Message, Role, Session, SessionError};
use fluxwrap_common::FluxError;
use fluxwrap_config::FluxConfig;

use crate::transcript_log::{self, LogTarget};

/// Label used for template runs in the log file.
const TEMPLATE_LABEL: &str = "template";

/// Send the config's fixed `[[messages]]` once with `model`.
///
/// The exchange is appended to the model's single-prompt log. Returns the
/// answer and the log file written.
pub async fn run_template(
    config: &FluxConfig,
    client: &dyn AiClient,
    model: &str,
    log_root: &Path,
) -> Result<(String, PathBuf), FluxError> {
    if config.messages.is_empty() {
        return Err(FluxError::Other(
            "config has no [[messages]] to send".into(),
        ));
    }

    let messages = config
        .messages
        .iter()
        .map(|m| -> Result<Message, SessionError> {
            Ok(Message {
                role: m.role.parse::<Role>()?,
                content: m.content.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| FluxError::Session(e.to_string()))?;

    let mut session = Session::from_messages(TEMPLATE_LABEL, &messages)
        .map_err(|e| FluxError::Session(e.to_string()))?;
    let request = session
        .build_request(
            model,
            config.meta.temperature,
            i64::from(config.meta.max_tokens),
        )
        .map_err(|e| FluxError::Session(e.to_string()))?;

    match session.complete(client, &request).await {
        CompletionResult::Answer(answer) => {
            let path = transcript_log::save(
                log_root,
                LogTarget::SinglePrompt { model },
                Local::now(),
                &session.render_transcript(),
            )?;
            Ok((answer, path))
        }
        CompletionResult::Failure(message) => Err(FluxError::Ai(message)),
    }
}
