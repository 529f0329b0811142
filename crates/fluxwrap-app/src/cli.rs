use std::path::PathBuf;

use clap::Parser;

/// fluxwrap -- chat with OpenRouter models from the terminal.
#[derive(Parser, Debug)]
#[command(name = "fluxwrap", version, about)]
pub struct Args {
    /// Template file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Model identifier to use instead of the startup menu.
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Directory for markdown transcripts.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error or a full directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write a commented default template to the config path and exit.
    #[arg(long)]
    pub init: bool,

    /// Send the template's [[messages]] once, print the answer and exit.
    #[arg(long)]
    pub template: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_means_interactive() {
        let args = Args::parse_from(["fluxwrap"]);
        assert!(!args.init);
        assert!(!args.template);
        assert!(args.config.is_none());
    }

    #[test]
    fn flags_parse() {
        let args = Args::parse_from([
            "fluxwrap",
            "--config",
            "templates/kimi.toml",
            "-m",
            "moonshotai/kimi-k2:free",
            "--template",
            "--log-level",
            "debug",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("templates/kimi.toml")));
        assert_eq!(args.model.as_deref(), Some("moonshotai/kimi-k2:free"));
        assert!(args.template);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
