use clap::Parser;
use store_etl::utils::{logger, validation::Validate};
use store_etl::{CliConfig, EtlEngine, LocalStorage, StorePipeline};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_format);

    tracing::info!("Starting store-etl CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let pipeline = StorePipeline::new(LocalStorage::current_dir(), config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(report) => {
            if report.coerced_from_object {
                println!("⚠️  Input root was a single object; processed it as a one-element list");
            }
            println!(
                "✅ Processed {} records from '{}'",
                report.record_count, report.input_path
            );
            println!("📁 Output saved to: {}", report.output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
