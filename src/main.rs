use std::process::ExitCode;

use groq_prompt::core::load_env_file;
use groq_prompt::runner;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // stdout carries only the completion
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    load_env_file();

    let mut stdout = std::io::stdout().lock();
    match runner::run_default(&mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = %e.kind(), error = ?e, "Prompt run failed");
            eprintln!("Error ({}): {e}", e.kind());
            ExitCode::FAILURE
        }
    }
}
