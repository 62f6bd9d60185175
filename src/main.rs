use clap::Parser;
use swapi_aggregator::app::pipelines::build_aggregators;
use swapi_aggregator::utils::error::ErrorCategory;
use swapi_aggregator::utils::logger;
use swapi_aggregator::{AggregationEngine, CliConfig, HttpJsonSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting swapi-aggregator");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let source = HttpJsonSource::new();
    let engine = AggregationEngine::new(build_aggregators(
        settings.variant,
        source,
        &settings.root_url,
    ));

    match engine.run().await {
        Ok(info) => {
            let output = if settings.pretty {
                serde_json::to_string_pretty(&info)?
            } else {
                serde_json::to_string(&info)?
            };
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Aggregation failed: {} (Category: {:?}, Stage: {:?})",
                e,
                e.category(),
                e.stage()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.category() {
                ErrorCategory::Network => 2,
                ErrorCategory::Decode => 3,
                ErrorCategory::Configuration => 1,
                ErrorCategory::Internal => 4,
            };
            std::process::exit(exit_code);
        }
    }
}
