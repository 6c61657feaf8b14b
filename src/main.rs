use clap::Parser;
use colored::*;
use std::io;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use nlcmd::ai::openai::OpenAiProvider;
use nlcmd::cli::Cli;
use nlcmd::config::Config;
use nlcmd::error::Result;
use nlcmd::executor::ShellRunner;
use nlcmd::translator::{TranslationRequest, Translator};
use nlcmd::ui::ConsolePrompt;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // 이미 설정된 환경 변수는 덮어쓰지 않음
    let dotenv_path = dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_logging(cli.debug);
    tracing::debug!(path = ?dotenv_path, "dotenv lookup finished");

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "nlcmd=debug" } else { "nlcmd=warn" };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    if cli.debug {
        eprintln!("{} {:?}", "DEBUG:".yellow(), cli);
    }

    if cli.init_config {
        let path = Config::init()?;
        println!("{} {}", "Wrote default config to".green(), path.display());
        return Ok(());
    }

    let config = Config::load()?;
    tracing::debug!(?config, "configuration loaded");

    let provider = OpenAiProvider::from_env(&config.api_base_url)?;

    let request = TranslationRequest::new(
        cli.query_text(),
        cli.model.clone().unwrap_or_else(|| config.default_model.clone()),
        cli.timeout.unwrap_or(config.default_timeout_secs),
    )?
    .with_explain(cli.explain)
    .with_trust(cli.trust)
    .with_sudo(cli.sudo);

    let executor = ShellRunner::new(config.shell.clone()).with_fail_on_nonzero(config.fail_on_nonzero);

    let mut translator = Translator::new(
        Arc::new(provider),
        Box::new(executor),
        Box::new(ConsolePrompt::new()),
        io::stdout(),
    )
    .with_progress(true);

    translator.translate(&request).await?;

    Ok(())
}
