use clap::Parser;
use contrib_scrape::output;
use contrib_scrape::utils::{logger, validation::Validate};
use contrib_scrape::{
    CliConfig, ContributionResponse, ContributionService, ErrorResult, OutputFormat, ScrapeError,
};

fn exit_code(err: &ScrapeError) -> i32 {
    match err {
        ScrapeError::Transport { .. } => 2, // 可重試
        ScrapeError::HttpStatus { .. } | ScrapeError::NoData => 1,
        _ => 3,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting contrib-scrape CLI");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let service = ContributionService::http(config)?;

    // 保留型別化錯誤以決定退出碼；輸出仍是統一的 ErrorResult 形狀
    let (response, failure): (ContributionResponse, Option<ScrapeError>) = match service.scrape(&cli.user).await {
        Ok(report) => (report.into(), None),
        Err(e) => {
            tracing::error!(
                "❌ Scrape failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            (ErrorResult::from(&e).into(), Some(e))
        }
    };

    match (&response, cli.format) {
        (ContributionResponse::Report(report), OutputFormat::Csv) => {
            print!("{}", output::to_csv(report)?);
        }
        _ => println!("{}", output::to_json(&response, cli.pretty)?),
    }

    if let Some(e) = failure {
        std::process::exit(exit_code(&e));
    }

    Ok(())
}
