use clap::Parser;
use small_greet::utils::logger;
use small_greet::{CliConfig, ConsoleOutput, GreetEngine};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-greet CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 建立輸出與引擎
    let output = ConsoleOutput::new();
    let mut engine = GreetEngine::new(output, config);

    match engine.run() {
        Ok(report) => {
            if let Some(result) = &report.factorial {
                tracing::info!("✅ Factorial of {} is {}", result.input, result.value);
            }
            tracing::info!("✅ Done");
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                small_greet::utils::error::ErrorSeverity::Low => 0,
                small_greet::utils::error::ErrorSeverity::Medium => 2,
                small_greet::utils::error::ErrorSeverity::High => 1,
                small_greet::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
