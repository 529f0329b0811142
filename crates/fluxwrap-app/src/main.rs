mod banner;
mod cli;
mod credentials;
mod menu;
mod prompter;
mod runner;
mod template;
mod transcript_log;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use fluxwrap_ai::OpenRouterClient;
use fluxwrap_common::FluxError;
use fluxwrap_config::FluxConfig;
use tracing_subscriber::EnvFilter;

use crate::prompter::{Prompter, ReadlinePrompter};
use crate::runner::ChatRunner;

const DEFAULT_LOG_DIRECTIVE: &str = "fluxwrap=warn";

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse().or_else(|_| DEFAULT_LOG_DIRECTIVE.parse()) {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

/// `--log-level debug` is shorthand for `fluxwrap=debug`; anything with a
/// `=` is used as a full directive.
fn log_directive(flag: Option<&str>, config: Option<&FluxConfig>) -> String {
    match flag {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("fluxwrap={level}"),
        None => config
            .map(|c| c.logging.level.directive())
            .unwrap_or(DEFAULT_LOG_DIRECTIVE)
            .to_string(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    credentials::load_dotenv(None);

    let args = cli::parse();

    let config_path = match args.config.clone() {
        Some(path) => Ok(path),
        None => fluxwrap_config::default_config_path(),
    };

    if args.init {
        init_logging(&log_directive(args.log_level.as_deref(), None));
        return match config_path.and_then(|path| {
            fluxwrap_config::create_default_config(&path).map(|()| path)
        }) {
            Ok(path) => {
                println!("Wrote default template to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("fluxwrap: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let loaded = config_path.and_then(|path| {
        fluxwrap_config::load_from_path(&path).map(|config| (path, config))
    });
    init_logging(&log_directive(
        args.log_level.as_deref(),
        loaded.as_ref().ok().map(|(_, config)| config),
    ));

    tracing::info!("fluxwrap v{} starting...", env!("CARGO_PKG_VERSION"));

    let result = match loaded {
        Ok((path, config)) => run(args, path, config).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("fluxwrap: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Args, config_path: PathBuf, config: FluxConfig) -> Result<(), FluxError> {
    credentials::load_dotenv(config_path.parent());
    let client_config = credentials::openrouter_config()?
        .with_base_url(config.provider.base_url.clone())
        .with_timeout(Duration::from_secs(config.provider.timeout_secs));
    let client = OpenRouterClient::new(client_config).map_err(|e| FluxError::Ai(e.to_string()))?;

    let log_root = args.log_dir.clone().unwrap_or_else(|| config.log_dir());

    if args.template {
        let model = args.model.clone().unwrap_or_else(|| config.meta.model.clone());
        let (answer, path) = template::run_template(&config, &client, &model, &log_root).await?;
        println!("{answer}");
        tracing::info!("template answer saved to {}", path.display());
        return Ok(());
    }

    let mut prompter = ReadlinePrompter::new().map_err(|e| FluxError::Other(e.to_string()))?;

    let model = match args.model.clone() {
        Some(model) => model,
        None => match menu::select_model(&mut prompter, &config.model_catalog())? {
            Some(model) => model,
            None => return Ok(()),
        },
    };
    prompter.say(&format!(
        "Model/Temperature/Tone presets loaded from '{}'",
        config_path.display()
    ));

    let runner = ChatRunner::new(&config, &client, model, log_root);
    let summary = runner.run(&mut prompter).await;
    tracing::info!(
        sessions = summary.sessions,
        saved = summary.saved.len(),
        "shutdown complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_flag_is_scoped_to_fluxwrap() {
        assert_eq!(log_directive(Some("debug"), None), "fluxwrap=debug");
        assert_eq!(
            log_directive(Some("fluxwrap_ai=trace"), None),
            "fluxwrap_ai=trace"
        );
    }

    #[test]
    fn config_level_is_the_fallback() {
        let mut config = FluxConfig::default();
        config.logging.level = fluxwrap_config::LogLevel::Info;
        assert_eq!(log_directive(None, Some(&config)), "fluxwrap=info");
        assert_eq!(log_directive(None, None), DEFAULT_LOG_DIRECTIVE);
    }
}
