//! Markdown rendering of a transcript for the session log.

use crate::Role;

use super::manager::Session;

impl Session {
    /// Flatten the transcript into the markdown body of a log entry.
    ///
    /// Each prompt is headed `*Prompt (<persona>):*` and each answer
    /// `*Response:*` followed by a rule. `system` turns are never emitted.
    pub fn render_transcript(&self) -> String {
        let mut out = String::new();
        for msg in self.transcript.messages() {
            match msg.role {
                Role::System => {}
                Role::User => {
                    out.push_str(&format!(
                        "\n*Prompt ({}):*\n{}\n\n",
                        self.persona, msg.content
                    ));
                }
                Role::Assistant => {
                    out.push_str(&format!("\n*Response:*\n{}\n\n---\n", msg.content));
                }
            }
        }
        out
    }
}
