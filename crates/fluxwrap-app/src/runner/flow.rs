//! The session state machine.

use chrono::Local;
use fluxwrap_ai::{CompletionResult, Session, SessionError};
use tracing::debug;

use crate::banner::short_model_name;
use crate::menu;
use crate::prompter::Prompter;
use crate::transcript_log::TIMESTAMP_FORMAT;

use super::state::{EndReason, Mode, SessionOutcome, SessionState};
use super::ChatRunner;

impl ChatRunner<'_> {
    /// Drive one session from `Idle` to `Terminated`.
    ///
    /// At most one request is in flight; a failed call ends the session
    /// and leaves the pending user turn in the transcript.
    pub(crate) async fn run_session(
        &self,
        mode: Mode,
        prompter: &mut dyn Prompter,
    ) -> SessionOutcome {
        let mut session = Session::new();
        let mut answered_at = None;
        let mut state = SessionState::Idle;

        loop {
            debug!(?state, "session state");
            state = match state {
                SessionState::Idle => match mode {
                    Mode::Session => SessionState::AwaitingPersona,
                    Mode::SinglePrompt => SessionState::AwaitingPrompt,
                },
                SessionState::AwaitingPersona => self.select_persona(&mut session, prompter),
                SessionState::AwaitingPrompt => self.read_prompt(mode, &mut session, prompter),
                SessionState::AwaitingTokenBudget => self.read_budget(&session, prompter),
                SessionState::AwaitingConfirmation(request) => {
                    prompter.say(&format!(
                        "Here is your payload preview:\n\n{}\n",
                        request.preview()
                    ));
                    if prompter.confirm("Confirm prompt send?") {
                        SessionState::Calling(request)
                    } else {
                        SessionState::Terminated(EndReason::Declined)
                    }
                }
                SessionState::Calling(request) => {
                    prompter.say("\n>>> calling OpenRouter ...\n");
                    match session.complete(self.client, &request).await {
                        CompletionResult::Answer(answer) => {
                            let now = Local::now();
                            answered_at = Some(now);
                            prompter.say(&now.format(TIMESTAMP_FORMAT).to_string());
                            prompter.say(&format!("--- {} says ---\n", self.display_name()));
                            prompter.say(&format!("{answer}\n"));
                            match mode {
                                Mode::Session => SessionState::AwaitingContinue,
                                Mode::SinglePrompt => SessionState::Terminated(EndReason::Completed),
                            }
                        }
                        CompletionResult::Failure(message) => {
                            SessionState::Terminated(EndReason::CompletionFailure(message))
                        }
                    }
                }
                SessionState::AwaitingContinue => {
                    if prompter.confirm("Continue?") {
                        SessionState::AwaitingPrompt
                    } else {
                        SessionState::Terminated(EndReason::Completed)
                    }
                }
                SessionState::Terminated(end) => {
                    return SessionOutcome {
                        session,
                        end,
                        answered_at,
                    };
                }
            };
        }
    }

    fn select_persona(&self, session: &mut Session, prompter: &mut dyn Prompter) -> SessionState {
        let personas = self.config.personas();
        if personas.is_empty() {
            return SessionState::AwaitingPrompt;
        }

        menu::show_personas(prompter, personas);
        let answer = prompter.ask("Selection:").unwrap_or_default();
        let Some((name, prompt)) = menu::resolve_persona(personas, &answer) else {
            return SessionState::Terminated(EndReason::InvalidSelection(format!(
                "no persona matches {answer:?}"
            )));
        };

        match session.set_persona(name, prompt) {
            Ok(()) => SessionState::AwaitingPrompt,
            Err(e) => SessionState::Terminated(EndReason::InvalidSelection(e.to_string())),
        }
    }

    fn read_prompt(
        &self,
        mode: Mode,
        session: &mut Session,
        prompter: &mut dyn Prompter,
    ) -> SessionState {
        let question = format!(
            "{} ({}) prompt:",
            self.display_name(),
            session.persona()
        );
        let Some(text) = prompter.ask(&question) else {
            return SessionState::Terminated(EndReason::EmptyInput);
        };

        match session.add_user_turn(&text) {
            Ok(_) => SessionState::AwaitingTokenBudget,
            Err(SessionError::EmptyInput) if mode == Mode::SinglePrompt => {
                prompter.say("A prompt is required.");
                SessionState::AwaitingPrompt
            }
            Err(_) => SessionState::Terminated(EndReason::EmptyInput),
        }
    }

    fn read_budget(&self, session: &Session, prompter: &mut dyn Prompter) -> SessionState {
        let Some(answer) = prompter.ask("Max Tokens:") else {
            return SessionState::Terminated(EndReason::EmptyInput);
        };
        let budget = if answer.is_empty() {
            i64::from(self.config.meta.max_tokens)
        } else {
            match answer.parse::<i64>() {
                Ok(n) => n,
                Err(_) => {
                    return SessionState::Terminated(EndReason::InvalidTokenBudget(format!(
                        "{answer:?} is not a whole number"
                    )));
                }
            }
        };

        match session.build_request(&self.model, self.config.meta.temperature, budget) {
            Ok(request) => SessionState::AwaitingConfirmation(request),
            Err(e @ SessionError::InvalidTokenBudget(_)) => {
                SessionState::Terminated(EndReason::InvalidTokenBudget(e.to_string()))
            }
            Err(e) => SessionState::Terminated(EndReason::InvalidRequest(e.to_string())),
        }
    }

    fn display_name(&self) -> String {
        short_model_name(&self.model).to_uppercase()
    }
}
