use clap::Parser;
use small_calc::utils::logger;
use small_calc::{CalcEngine, CliConfig};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-calc");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdout = std::io::stdout();
    let mut engine = CalcEngine::new(stdout.lock());

    if let Err(e) = engine.run() {
        tracing::error!("Run failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
