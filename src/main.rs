use hello_bazel::utils::logger;
use hello_bazel::{write_report, HelloConfig};

// Arguments are never read: the report always uses the built-in literals.
fn main() {
    logger::init_cli_logger(false);

    tracing::debug!("Starting hello-bazel");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = write_report(&mut out, &HelloConfig::default()) {
        tracing::error!(
            "❌ Failed to write report: {} (Severity: {:?})",
            e,
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }
}
