use anyhow::Context;
use clap::Parser;
use contact_book::utils::{logger, validation::parse_birthday, validation::Validate};
use contact_book::core::repl;
use contact_book::utils::error::ErrorSeverity;
use contact_book::{AddressBook, AssistantConfig, CliConfig, ContactError, Dispatcher};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Invalid arguments: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            AssistantConfig::from_file(path)
                .with_context(|| format!("failed to load config file '{}'", path))?
        }
        None => AssistantConfig::default(),
    };

    if let Some(prompt) = &cli.prompt {
        config.assistant.prompt = Some(prompt.clone());
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    let mut book = AddressBook::new();
    let mut dispatcher = Dispatcher::new(&mut book).with_window_days(config.window_days());
    if let Some(today) = &cli.today {
        dispatcher = dispatcher.with_today(parse_birthday(today)?);
    }

    repl::run(&mut dispatcher, &config, io::stdin().lock(), io::stdout().lock())
        .context("console I/O failed")?;

    tracing::debug!("Session finished");
    Ok(())
}

// 依錯誤嚴重程度決定退出碼
fn exit_code(error: &ContactError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}
