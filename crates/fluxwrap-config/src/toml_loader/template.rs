//! Default TOML template content.

/// The template written by `fluxwrap --init`.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# fluxwrap template
# Only [meta].model is required -- everything else has defaults.

[meta]
model = "moonshotai/kimi-k2:free"
temperature = 0.7       # 0.0-2.0, fixed for the whole session
max_tokens = 1024       # default response budget, > 0

# Models offered in the startup menu (id = description).
# Leave empty to always use [meta].model.
[models]
"moonshotai/kimi-k2:free" = "Kimi K2 -- Moonshot's open MoE model (free tier)"
"deepseek/deepseek-chat-v3-0324:free" = "DeepSeek V3 -- general chat (free tier)"
"mistralai/mistral-small-3.2-24b-instruct:free" = "Mistral Small 3.2 -- fast instruct model (free tier)"

# Personas for session mode (name = system prompt).
# "default" sends no system prompt.
[tones]
default = ""
concise = "Answer in as few words as possible. No preamble, no summary."
tutor = """
You are a patient tutor. Explain step by step and check understanding
with one short question at the end.
"""

# Fixed conversation sent by `fluxwrap --template`.
# [[messages]]
# role = "user"
# content = "Say hi"

[provider]
# base_url = "https://openrouter.ai/api/v1"
# timeout_secs = 120

[logging]
# level = "warn"        # trace, debug, info, warn, error
# dir = "logs"          # markdown transcripts; defaults to the platform data dir
"##
}
