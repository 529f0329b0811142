//! End-to-end scenarios for the interactive flow with a scripted user and
//! a scripted provider.

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use fluxwrap_ai::{AiClient, AiError, AiResponse, Message, RequestSpec, Role, TokenUsage};
use fluxwrap_config::FluxConfig;

use super::*;
use crate::prompter::ScriptedPrompter;

struct MockClient {
    replies: Mutex<Vec<Result<String, AiError>>>,
    requests: Mutex<Vec<RequestSpec>>,
}

impl MockClient {
    fn new(replies: Vec<Result<String, AiError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().rev().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn answering(answer: &str) -> Self {
        Self::new(vec![Ok(answer.to_string())])
    }

    fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AiClient for MockClient {
    async fn send_request(&self, request: &RequestSpec) -> Result<AiResponse, AiError> {
        self.requests.lock().unwrap().push(request.clone());
        let reply = self.replies.lock().unwrap().pop().expect("unexpected call");
        reply.map(|content| AiResponse {
            content,
            usage: TokenUsage {
                input_tokens: 8,
                output_tokens: 2,
            },
        })
    }
}

fn config() -> FluxConfig {
    let mut config = FluxConfig::default();
    config.meta.model = "m/x".into();
    config.meta.temperature = 0.7;
    config.meta.max_tokens = 256;
    config.tones.insert("default".into(), String::new());
    config
        .tones
        .insert("pirate".into(), "Talk like a pirate.".into());
    config
}

fn runner<'a>(config: &'a FluxConfig, client: &'a MockClient, root: &Path) -> ChatRunner<'a> {
    ChatRunner::new(config, client, "m/x", root.to_path_buf())
}

fn user(content: &str) -> Message {
    Message {
        role: Role::User,
        content: content.into(),
    }
}

fn assistant(content: &str) -> Message {
    Message {
        role: Role::Assistant,
        content: content.into(),
    }
}

#[tokio::test]
async fn single_prompt_accepted() {
    let config = config();
    let client = MockClient::answering("Hello!");
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&["Say hi", "", ""]);

    let outcome = runner.run_session(Mode::SinglePrompt, &mut prompter).await;

    assert_eq!(outcome.end, EndReason::Completed);
    assert_eq!(
        outcome.session.transcript().messages(),
        &[user("Say hi"), assistant("Hello!")]
    );
    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].max_tokens(), 256);
    assert!((requests[0].temperature() - 0.7).abs() < f64::EPSILON);
    assert!(prompter.transcript().contains("Hello!"));
    assert!(prompter.transcript().contains("\"model\": \"m/x\""));
}

#[tokio::test]
async fn declined_confirmation_sends_nothing() {
    let config = config();
    let client = MockClient::new(vec![]);
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&["Say hi", "", "n"]);

    let outcome = runner.run_session(Mode::SinglePrompt, &mut prompter).await;

    assert_eq!(outcome.end, EndReason::Declined);
    assert!(client.requests().is_empty());
    assert_eq!(outcome.session.exchange_count(), 0);
    assert_eq!(outcome.session.transcript().messages(), &[user("Say hi")]);
}

#[tokio::test]
async fn invalid_persona_ends_session_without_turns() {
    let config = config();
    let client = MockClient::new(vec![]);
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&["ninja"]);

    let outcome = runner.run_session(Mode::Session, &mut prompter).await;

    assert!(matches!(outcome.end, EndReason::InvalidSelection(_)));
    assert!(outcome.session.transcript().is_empty());
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn blank_persona_selection_is_invalid() {
    let config = config();
    let client = MockClient::new(vec![]);
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&[""]);

    let outcome = runner.run_session(Mode::Session, &mut prompter).await;

    assert!(matches!(outcome.end, EndReason::InvalidSelection(_)));
}

#[tokio::test]
async fn completion_failure_ends_session_with_pending_prompt() {
    let config = config();
    let client = MockClient::new(vec![Err(AiError::ApiError("HTTP 401: no auth".into()))]);
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&["Say hi", "", ""]);

    let outcome = runner.run_session(Mode::SinglePrompt, &mut prompter).await;

    assert_eq!(
        outcome.end,
        EndReason::CompletionFailure("API error: HTTP 401: no auth".into())
    );
    assert_eq!(outcome.session.transcript().messages(), &[user("Say hi")]);
}

#[tokio::test]
async fn session_mode_keeps_history_across_turns() {
    let config = config();
    let client = MockClient::new(vec![Ok("Arr, one.".into()), Ok("Arr, two.".into())]);
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter =
        ScriptedPrompter::new(&["pirate", "first", "", "", "", "second", "64", "y", "n"]);

    let outcome = runner.run_session(Mode::Session, &mut prompter).await;

    assert_eq!(outcome.end, EndReason::Completed);
    assert_eq!(outcome.session.persona(), "pirate");
    assert_eq!(outcome.session.exchange_count(), 2);

    let requests = client.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].max_tokens(), 64);
    let roles: Vec<Role> = requests[1].messages().iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![Role::System, Role::User, Role::Assistant, Role::User]
    );
    assert!(prompter
        .questions
        .iter()
        .any(|q| q == "X (pirate) prompt:"));
}

#[tokio::test]
async fn default_persona_sends_no_system_turn() {
    let config = config();
    let client = MockClient::answering("hi");
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&["0", "hello", "", "", "n"]);

    let outcome = runner.run_session(Mode::Session, &mut prompter).await;

    assert_eq!(outcome.end, EndReason::Completed);
    assert_eq!(client.requests()[0].messages(), &[user("hello")]);
}

#[tokio::test]
async fn empty_prompt_ends_session_mode() {
    let config = config();
    let client = MockClient::new(vec![]);
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&["default", ""]);

    let outcome = runner.run_session(Mode::Session, &mut prompter).await;

    assert_eq!(outcome.end, EndReason::EmptyInput);
    assert!(outcome.session.transcript().is_empty());
}

#[tokio::test]
async fn single_prompt_mode_requires_a_prompt() {
    let config = config();
    let client = MockClient::answering("ok");
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&["   ", "Say hi", "", ""]);

    let outcome = runner.run_session(Mode::SinglePrompt, &mut prompter).await;

    assert_eq!(outcome.end, EndReason::Completed);
    assert!(prompter.transcript().contains("A prompt is required."));
}

#[tokio::test]
async fn bad_token_budgets_end_session() {
    for budget in ["0", "-3", "lots"] {
        let config = config();
        let client = MockClient::new(vec![]);
        let dir = tempfile::tempdir().unwrap();
        let runner = runner(&config, &client, dir.path());
        let mut prompter = ScriptedPrompter::new(&["Say hi", budget]);

        let outcome = runner.run_session(Mode::SinglePrompt, &mut prompter).await;

        assert!(
            matches!(outcome.end, EndReason::InvalidTokenBudget(_)),
            "budget {budget:?} gave {:?}",
            outcome.end
        );
        assert!(client.requests().is_empty());
    }
}

#[tokio::test]
async fn token_budget_of_one_is_sent() {
    let config = config();
    let client = MockClient::answering("k");
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&["Say hi", "1", ""]);

    runner.run_session(Mode::SinglePrompt, &mut prompter).await;

    assert_eq!(client.requests()[0].max_tokens(), 1);
}

#[tokio::test]
async fn end_of_input_ends_session() {
    let config = config();
    let client = MockClient::new(vec![]);
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&[]);

    let outcome = runner.run_session(Mode::SinglePrompt, &mut prompter).await;

    assert_eq!(outcome.end, EndReason::EmptyInput);
}

#[tokio::test]
async fn run_saves_single_prompt_log_newest_first() {
    let config = config();
    let client = MockClient::new(vec![Ok("hello".into()), Ok("again".into())]);
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&[
        "1", "hi", "", "", "", "", // first prompt, saved, go again
        "1", "second", "", "", "", "n", // second prompt, saved, stop
    ]);

    let summary = runner.run(&mut prompter).await;

    assert_eq!(summary.sessions, 2);
    assert_eq!(summary.saved.len(), 2);
    assert_eq!(summary.saved[0], dir.path().join("x_log.md"));
    assert_eq!(prompter.remaining(), 0);

    let content = std::fs::read_to_string(&summary.saved[0]).unwrap();
    let first_prompt = content.find("*Prompt (default):*\nhi").unwrap();
    let first_answer = content.find("*Response:*\nhello").unwrap();
    let second_prompt = content.find("*Prompt (default):*\nsecond").unwrap();
    assert!(first_prompt < first_answer);
    assert!(second_prompt < first_prompt, "newest section comes first");
    assert!(content.starts_with("\n## "));
}

#[tokio::test]
async fn run_saves_session_log_per_persona() {
    let config = config();
    let client = MockClient::answering("Arr.");
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&["0", "pirate", "ahoy", "", "", "n", "", "n"]);

    let summary = runner.run(&mut prompter).await;

    assert_eq!(summary.saved.len(), 1);
    let path = &summary.saved[0];
    assert!(path.starts_with(dir.path().join("sessions").join("PIRATE")));
    assert!(path.to_string_lossy().ends_with("_pirate.md"));
    let content = std::fs::read_to_string(path).unwrap();
    assert!(content.contains("*Prompt (pirate):*\nahoy"));
    assert!(!content.contains("Talk like a pirate."));
}

#[tokio::test]
async fn failure_does_not_stop_the_outer_loop() {
    let config = config();
    let client = MockClient::new(vec![
        Err(AiError::NetworkError("connection reset".into())),
        Ok("recovered".into()),
    ]);
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&[
        "1", "hi", "", "", "", // fails, no save offered, go again
        "1", "hi", "", "", "n", "n", // answered, not saved, stop
    ]);

    let summary = runner.run(&mut prompter).await;

    assert_eq!(summary.sessions, 2);
    assert!(summary.saved.is_empty());
    assert!(prompter
        .transcript()
        .contains("Network error: connection reset"));
    assert!(prompter.transcript().contains("recovered"));
}

#[tokio::test]
async fn unknown_mode_exits() {
    let config = config();
    let client = MockClient::new(vec![]);
    let dir = tempfile::tempdir().unwrap();
    let runner = runner(&config, &client, dir.path());
    let mut prompter = ScriptedPrompter::new(&["2"]);

    let summary = runner.run(&mut prompter).await;

    assert_eq!(summary.sessions, 0);
}
