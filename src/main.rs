use anyhow::Context;
use clap::Parser;
use shift_cipher::core::ConfigProvider;
use shift_cipher::utils::{logger, validation::Validate};
use shift_cipher::{CliConfig, FileTransformer, Menu, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入設定檔 (可選)
    let settings = match config.config.as_deref() {
        Some(path) => match TomlConfig::from_file(path).and_then(|s| s.validate().map(|_| s)) {
            Ok(settings) => Some(settings),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    logger::init_cli_logger(config.verbose, settings.as_ref().and_then(|s| s.log_filter()));

    tracing::info!("Starting shift-cipher");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let transformer = FileTransformer::with_line_ending(config.line_ending_over(settings.as_ref()));

    match &config.command {
        Some(command) => {
            let args = command.args();
            if !transformer.transform(&args.input, &args.output, command.directed_shift()) {
                std::process::exit(1);
            }
            println!("Finished writing to file.");
        }
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Menu::new(stdin.lock(), stdout.lock(), transformer)
                .run()
                .context("interactive session failed")?;
        }
    }

    Ok(())
}
