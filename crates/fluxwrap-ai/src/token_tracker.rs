//! Token usage tracking across the calls of a session.

use crate::TokenUsage;

/// Tracks cumulative token usage and the number of calls made.
#[derive(Debug, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from an API call.
    pub fn record(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.call_count += 1;
    }

    /// Get total tokens (input + output).
    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    /// Get number of API calls.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    /// One-line usage summary shown when a session ends.
    pub fn summary(&self) -> String {
        format!(
            "{} call(s), {} prompt + {} completion = {} tokens",
            self.call_count,
            self.total.input_tokens,
            self.total.output_tokens,
            self.total_tokens()
        )
    }
}
