use automation_pricing::core::market;
use automation_pricing::report::render_summary;
use automation_pricing::utils::{logger, validation::Validate};
use automation_pricing::{CliConfig, LocalReportSink, PricingEngine, PricingError, ReportWriter};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting automation-pricing CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.market_insights {
        print_market_insights();
        return Ok(());
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let output = config.output_path.clone().map(|path| {
        let writer = ReportWriter::new(LocalReportSink::new(path), config.formats.clone());
        match &config.file_stem {
            Some(stem) => writer.with_file_stem(stem.clone()),
            None => writer,
        }
    });

    let engine = PricingEngine::new(config);

    let result = match &output {
        Some(writer) => engine.run(writer),
        None => engine.quote().map(|quote| (quote, Vec::new())),
    };

    match result {
        Ok((quote, written)) => {
            println!("{}", render_summary(&quote));
            for path in written {
                println!("📁 Report saved to: {}", path);
            }
        }
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &PricingError) -> ! {
    tracing::error!(
        "❌ Pricing failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    std::process::exit(e.exit_code().max(1));
}

fn print_market_insights() {
    println!("Market Rates by Service Type (hourly rates in USD)");
    println!();
    println!("{}", market::render_rates_table());
    println!();
    println!("Current Market Trends");
    for trend in market::MARKET_TRENDS {
        println!("  • {}: {}", trend.topic, trend.insight);
    }
    println!();
    println!("How to Stand Out");
    for tip in market::STAND_OUT_TIPS {
        println!("  • {}", tip);
    }
}
