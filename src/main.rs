use anyhow::Context;
use clap::Parser;
use numeric_demo::adapters::prompt::{FACTORIAL_PROMPT, FIBONACCI_PROMPT};
use numeric_demo::core::ConfigProvider;
use numeric_demo::utils::error::{DemoError, ErrorSeverity};
use numeric_demo::utils::{logger, validation::Validate};
use numeric_demo::{reporter_for, CliConfig, DemoEngine, DemoRequest, Prompter};
use std::io;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting numeric-demo");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(&e);
    }

    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };
    tracing::debug!("Resolved settings: {:?}", settings);

    let request = match read_request(&config) {
        Ok(request) => request,
        Err(e) => fail(&e),
    };

    let reporter = reporter_for(settings.output_format(), io::stdout().lock());
    let mut engine = DemoEngine::new(settings, reporter);

    let outcome = engine
        .run(request)
        .context("failed to write the demo report")?;

    // 領域錯誤已經輸出給使用者，照原本行為以 0 結束
    if let Some(e) = outcome.first_error() {
        tracing::info!(
            "Finished with a domain error: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
    } else {
        tracing::info!("✅ Numeric demo completed successfully");
    }

    Ok(())
}

/// Flags win; anything missing is asked for on the terminal.
/// Prompts go to stderr so stdout only ever carries the report.
fn read_request(config: &CliConfig) -> numeric_demo::Result<DemoRequest> {
    let mut prompter = Prompter::new(io::stdin().lock(), io::stderr());
    let n = prompter.integer_or_prompt(config.number, FACTORIAL_PROMPT)?;
    let count = prompter.integer_or_prompt(config.count, FIBONACCI_PROMPT)?;
    Ok(DemoRequest { n, count })
}

fn fail(e: &DemoError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
