use automation_pricing::config::toml_config::ReportConfig;
use automation_pricing::core::QuoteSource;
use automation_pricing::report::render_summary;
use automation_pricing::utils::logger;
use automation_pricing::utils::validation::{InputPolicy, Validate};
use automation_pricing::{
    LocalReportSink, PricingEngine, PricingError, ReportFormat, ReportWriter, TomlConfig,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-pricing")]
#[command(about = "Price a scenario described in a TOML file")]
struct Args {
    /// Path to the TOML scenario file
    #[arg(short, long, default_value = "pricing.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Override the report output directory from the scenario
    #[arg(long)]
    output_path: Option<String>,

    /// Reject out-of-range values regardless of the scenario's input_policy
    #[arg(long)]
    strict: bool,

    /// Show the loaded scenario without pricing or writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_logger(args.verbose, args.log_json);

    tracing::info!("🚀 Starting TOML-based pricing");
    tracing::info!("📁 Loading scenario from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load scenario file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Some(output_path) = &args.output_path {
        let report = config.report.get_or_insert_with(|| ReportConfig {
            output_path: String::new(),
            formats: vec![ReportFormat::Html],
            file_stem: None,
        });
        report.output_path = output_path.clone();
        tracing::info!("🔧 Output path overridden to: {}", output_path);
    }
    if args.strict {
        config.scenario.input_policy = InputPolicy::Strict;
        tracing::info!("🔧 Input policy overridden to: strict");
    }

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    tracing::info!("✅ Scenario loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No pricing or export will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    let writer = config.report.as_ref().map(|report| {
        ReportWriter::new(LocalReportSink::new(&report.output_path), report.formats.clone())
            .with_file_stem(report.file_stem())
    });

    let engine = PricingEngine::new(config);
    let result = match &writer {
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

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Scenario Summary:");
    println!("  Name: {}", config.name().unwrap_or("(unnamed)"));
    if let Some(description) = &config.scenario.description {
        println!("  Description: {}", description);
    }
    println!("  Input policy: {:?}", config.input_policy());
    match &config.report {
        Some(report) => {
            let formats: Vec<String> = report.formats.iter().map(|f| f.to_string()).collect();
            println!("  Output: {}", report.output_path);
            println!("  Formats: {}", formats.join(", "));
        }
        None => println!("  Output: console only"),
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &TomlConfig) {
    println!("🔍 Dry Run Analysis:");
    println!();

    match config.basic_inputs() {
        Ok(basic) => {
            println!("⚙️ Basic Inputs:");
            println!("  Experience: {}", basic.experience_level);
            println!("  Market: {}", basic.location);
            println!("  Complexity: {}", basic.complexity);
            println!("  Hours: {}", basic.hours_required);
            println!("  Tools: {}", basic.tools_used.join(", "));
            println!("  Services: {}", basic.service_types.join(", "));
            if basic.has_maintenance {
                println!("  Maintenance: {} h/month", basic.maintenance_hours);
            } else {
                println!("  Maintenance: none");
            }
        }
        Err(e) => println!("  ❌ Basic inputs invalid: {}", e),
    }

    println!();
    match config.advanced_inputs() {
        Ok(advanced) => {
            println!("📊 Advanced Inputs:");
            println!("  Revenue impact: {}", advanced.revenue_impact);
            println!("  Monthly time savings: {} h", advanced.monthly_time_savings_hours);
            println!("  Client hourly value: {}", advanced.client_hourly_value);
            println!("  Integrations: {}", advanced.integration_count);
            println!("  Custom coding: {}", advanced.custom_coding);
            println!("  Training: {}", advanced.training_required);
            println!("  Monthly active users: {}", advanced.monthly_active_users);
        }
        Err(e) => println!("  ❌ Advanced inputs invalid: {}", e),
    }

    println!();
    println!("✅ Dry run analysis complete. Remove --dry-run to price the scenario.");
}
