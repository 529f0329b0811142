//! Interactive chat loop.
//!
//! The outer loop asks for a mode, runs one session through the state
//! machine in `flow`, offers to save the transcript, and asks whether to
//! go again. Session errors, including failed completions, end only the
//! session; the loop keeps running.

mod flow;
mod state;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use chrono::Local;
use fluxwrap_ai::AiClient;
use fluxwrap_config::FluxConfig;
use tracing::{info, warn};

use crate::banner;
use crate::prompter::Prompter;
use crate::transcript_log::{self, LogTarget};

use state::{EndReason, Mode, SessionOutcome};

/// What happened during one `run`.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub sessions: usize,
    pub saved: Vec<PathBuf>,
}

/// Everything a session needs, built once at startup.
pub struct ChatRunner<'a> {
    config: &'a FluxConfig,
    client: &'a dyn AiClient,
    model: String,
    log_root: PathBuf,
}

impl<'a> ChatRunner<'a> {
    pub fn new(
        config: &'a FluxConfig,
        client: &'a dyn AiClient,
        model: impl Into<String>,
        log_root: PathBuf,
    ) -> Self {
        Self {
            config,
            client,
            model: model.into(),
            log_root,
        }
    }

    /// Run sessions until the user picks no mode or declines another round.
    pub async fn run(&self, prompter: &mut dyn Prompter) -> RunSummary {
        let mut summary = RunSummary::default();

        loop {
            prompter.say(&format!("\n{}\n", banner::render(&self.model)));
            prompter.say(&format!(
                "Ready to call model '{}' (temperature {}, max tokens {})",
                self.model.to_uppercase(),
                self.config.meta.temperature,
                self.config.meta.max_tokens
            ));

            let Some(mode) = prompter
                .ask("Enter Session Mode (0) or send single prompt (1)?")
                .as_deref()
                .and_then(Mode::from_selection)
            else {
                break;
            };

            let outcome = self.run_session(mode, prompter).await;
            summary.sessions += 1;
            info!(?mode, end = ?outcome.end, exchanges = outcome.session.exchange_count(), "session ended");

            self.report_end(&outcome, prompter);
            if let Some(path) = self.offer_save(mode, &outcome, prompter) {
                summary.saved.push(path);
            }

            if !prompter.confirm(&format!(
                "Call {} with another prompt?",
                self.model.to_uppercase()
            )) {
                break;
            }
        }

        summary
    }

    fn report_end(&self, outcome: &SessionOutcome, prompter: &mut dyn Prompter) {
        match &outcome.end {
            EndReason::Completed | EndReason::EmptyInput => {}
            EndReason::Declined => prompter.say("Prompt not sent."),
            EndReason::InvalidSelection(reason) => {
                prompter.say(&format!("Invalid selection: {reason}"));
            }
            EndReason::InvalidTokenBudget(reason) | EndReason::InvalidRequest(reason) => {
                prompter.say(reason);
            }
            EndReason::CompletionFailure(message) => prompter.say(message),
        }

        let tracker = outcome.session.tracker();
        if tracker.call_count() > 0 {
            prompter.say(&format!("Usage: {}", tracker.summary()));
        }
    }

    /// Offer to save an answered session. Returns the file written.
    fn offer_save(
        &self,
        mode: Mode,
        outcome: &SessionOutcome,
        prompter: &mut dyn Prompter,
    ) -> Option<PathBuf> {
        let session = &outcome.session;
        if session.exchange_count() == 0 || !prompter.confirm("Save response to file?") {
            return None;
        }

        let target = match mode {
            Mode::Session => LogTarget::Session {
                persona: session.persona(),
            },
            Mode::SinglePrompt => LogTarget::SinglePrompt { model: &self.model },
        };
        let at = outcome.answered_at.unwrap_or_else(Local::now);

        match transcript_log::save(&self.log_root, target, at, &session.render_transcript()) {
            Ok(path) => {
                prompter.say(&format!("Saved in '{}'", path.display()));
                Some(path)
            }
            Err(e) => {
                warn!("failed to save transcript: {e}");
                prompter.say(&format!("Could not save transcript: {e}"));
                None
            }
        }
    }
}
