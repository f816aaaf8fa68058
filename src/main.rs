use clap::Parser;
use leap_check::utils::{logger, validation::Validate};
use leap_check::{CheckEngine, CliConfig, FileSink, LeapError, Settings, StdoutSink};

fn main() {
    let config = CliConfig::parse();

    // 先合併設定，日誌層級可能來自設定檔
    let settings = match Settings::from_cli(&config).and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    if settings.json_logs {
        logger::init_json_logger(config.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, settings.log_level.as_deref());
    }

    tracing::info!("Starting leap-check");
    if let Some(path) = &config.config {
        tracing::info!("📁 Configuration loaded from: {}", path);
    }
    tracing::debug!("Effective settings: {:?}", settings);

    let result = match settings.output_path.clone() {
        Some(path) => CheckEngine::new(settings, FileSink::new(path)).run(),
        None => CheckEngine::new(settings, StdoutSink).run(),
    };

    match result {
        Ok(outcome) => {
            tracing::info!(
                "✅ Checked {} year(s), {} leap",
                outcome.summary.total,
                outcome.summary.leap
            );
            if outcome.destination != "stdout" {
                eprintln!("📁 Report saved to: {}", outcome.destination);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Check failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            fail(&e);
        }
    }
}

fn fail(e: &LeapError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
