use tracing_subscriber::EnvFilter;

mod cli;

fn main() {
    init_tracing();

    match cli::app() {
        Ok(app) => std::process::exit(app.run() as i32),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Diagnostics go to stderr, filtered by `CONSOLAR_LOG` (e.g. `CONSOLAR_LOG=debug`).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_env("CONSOLAR_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}
