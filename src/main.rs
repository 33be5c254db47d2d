use clap::Parser;
use greater_number::utils::logger;
use greater_number::{CliConfig, CompareError, NumberComparator};

fn fail(e: CompareError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!();
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => fail(e),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut output = stdout.lock();

    let comparator = NumberComparator::new(settings);
    if let Err(e) = comparator.run(stdin.lock(), &mut output) {
        drop(output);
        fail(e);
    }
}
