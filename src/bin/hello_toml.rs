use clap::Parser;
use hello_bazel::core::report::write_config;
use hello_bazel::utils::{logger, validation::Validate};
use hello_bazel::{write_report, HelloError, TomlConfig};

#[derive(Parser)]
#[command(name = "hello-toml")]
#[command(about = "Print the greeting and sum for values read from a TOML file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "hello.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the greeted name from config
    #[arg(long)]
    name: Option<String>,

    /// Show the resolved configuration without printing the report
    #[arg(long)]
    dry_run: bool,
}

fn exit_with(e: HelloError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

fn main() {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load config file '{}': {}", args.config, e);
            exit_with(e);
        }
    };

    if let Some(name) = args.name {
        tracing::info!("🔧 Name overridden to: {:?}", name);
        config.greeting.name = name;
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(e);
    }

    let config = config.into_hello_config();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let written = if args.dry_run {
        tracing::info!("🧪 Dry run, report not written");
        write_config(&mut out, &config)
    } else {
        write_report(&mut out, &config)
    };

    if let Err(e) = written {
        tracing::error!("❌ Failed to write output: {}", e);
        exit_with(e);
    }
}
