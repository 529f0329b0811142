//! Line-oriented user interaction.
//!
//! The runner only talks to the user through [`Prompter`], so the whole
//! interactive flow can be driven by a script in tests.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;

pub trait Prompter {
    /// Show `prompt` and read one line. `None` means end of input
    /// (Ctrl-D, Ctrl-C or a closed stdin).
    fn ask(&mut self, prompt: &str) -> Option<String>;

    /// Print a line of output.
    fn say(&mut self, text: &str);

    /// Ask a `Y/n` question. Blank input accepts; end of input declines.
    fn confirm(&mut self, question: &str) -> bool {
        self.ask(&format!("{question} Y/n"))
            .map(|answer| is_affirmative(&answer))
            .unwrap_or(false)
    }
}

/// `Y`, `yes` (any case) or blank.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

/// Terminal prompter backed by rustyline, with in-memory history.
pub struct ReadlinePrompter {
    editor: DefaultEditor,
}

impl ReadlinePrompter {
    pub fn new() -> rustyline::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for ReadlinePrompter {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(&format!("{prompt}\n~ ")) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Some(line.trim().to_string())
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(e) => {
                warn!("readline error: {e}");
                None
            }
        }
    }

    fn say(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Prompter that replays canned answers and records everything shown.
#[cfg(test)]
pub(crate) struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub(crate) questions: Vec<String>,
    pub(crate) output: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub(crate) fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            questions: Vec::new(),
            output: Vec::new(),
        }
    }

    pub(crate) fn transcript(&self) -> String {
        self.output.join("\n")
    }

    pub(crate) fn remaining(&self) -> usize {
        self.answers.len()
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        self.questions.push(prompt.to_string());
        self.answers.pop_front()
    }

    fn say(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
