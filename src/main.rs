use anyhow::Context;
use clap::Parser;
use table_drills::core::ConfigProvider;
use table_drills::utils::{logger, validation::Validate};
use table_drills::{CliConfig, DrillEngine, DrillError, FilePipeline, LocalStorage};

fn run(cli: &CliConfig) -> anyhow::Result<Vec<String>> {
    let config = cli.to_drill_config().context("failed to build drill configuration")?;
    config.validate().context("invalid drill configuration")?;
    tracing::debug!("Drill config: {:?}", config);

    // 輸入路徑相對於目前工作目錄，輸出寫入 output.path
    let source = LocalStorage::new(".".to_string());
    let sink = LocalStorage::new(config.output_path().to_string());
    let engine = DrillEngine::new(FilePipeline::new(source, sink, config));

    Ok(engine.run()?)
}

fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting table-drills CLI");

    match run(&cli) {
        Ok(written) => {
            tracing::info!("✅ Drill completed successfully!");
            for path in written {
                println!("📁 {}", path);
            }
        }
        Err(e) => {
            tracing::error!("❌ Drill failed: {:#}", e);

            match e.downcast_ref::<DrillError>() {
                Some(drill_error) => {
                    tracing::error!("💡 Recovery suggestion: {}", drill_error.recovery_suggestion());
                    eprintln!("❌ {}", drill_error.user_friendly_message());
                    eprintln!("💡 建議: {}", drill_error.recovery_suggestion());
                    std::process::exit(drill_error.exit_code());
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
