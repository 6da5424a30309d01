use clap::Parser;
use sheetconverter::utils::{logger, validation::Validate};
use sheetconverter::{ClassingPipeline, CliConfig, EtlEngine, EtlError, LocalStorage};

fn report_failure(stage: &str, e: &EtlError) -> ! {
    tracing::error!(
        "❌ {}: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sheetconverter");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        report_failure("Configuration validation failed", &e);
    }

    // 創建輸出目錄、存儲和管道
    let storage = LocalStorage::new(config.output_dir.clone());
    if let Err(e) = storage.ensure_base_dir() {
        report_failure("Cannot create output directory", &e);
    }
    let pipeline = ClassingPipeline::new(storage, config);

    let engine = EtlEngine::new(pipeline);
    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Conversion completed successfully!");
            println!("✅ JSON files written to: {}", output_path);
        }
        Err(e) => report_failure("Conversion failed", &e),
    }

    Ok(())
}
