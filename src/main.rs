use clap::Parser;
use inr_dose::config::LogFormat;
use inr_dose::utils::error::ErrorSeverity;
use inr_dose::utils::logger;
use inr_dose::{CliConfig, DosageReport, DoseError, DoseForm};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入並合併設定
    let settings = match config.resolve_settings() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(config.verbose);
            exit_with(&e);
        }
    };

    // 初始化日誌
    match settings.log_format {
        LogFormat::Compact => logger::init_cli_logger(settings.verbose),
        LogFormat::Json => logger::init_json_logger(settings.verbose),
    }

    tracing::info!("Starting inr-dose");
    tracing::debug!("CLI config: {:?}", config);
    tracing::debug!("Effective settings: {:?}", settings);

    let mut form = DoseForm::new();
    let outcome = form
        .set_inr(&config.inr)
        .and_then(|_| form.set_current_weekly_dose(&config.dose))
        .and_then(|_| form.calculate());

    let adjustment = match outcome {
        Ok(adjustment) => adjustment,
        Err(e) => exit_with(&e),
    };

    let report = DosageReport::from_adjustment(&adjustment, &settings);
    println!("{}", report.render(settings.format)?);

    Ok(())
}

fn exit_with(e: &DoseError) -> ! {
    tracing::error!(
        "❌ inr-dose failed: {} (Category: {:?}, Severity: {:?})",
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
