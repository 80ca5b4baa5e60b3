use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use translation_core::{config, protocol};

fn init_logging(cfg: &config::CoreConfig) {
    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout is reserved for protocol responses
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(cfg.ansi)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cfg = config::CoreConfig::from_env();
    init_logging(&cfg);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    tracing::info!("translation-core started");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!("failed to read request line: {e}");
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = std::panic::catch_unwind(|| protocol::handle(&line));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => {
                tracing::error!("request handler panicked");
                serde_json::json!({
                    "status": "error",
                    "message": "internal core error"
                })
                .to_string()
            }
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }

    tracing::info!("stdin closed, shutting down");
}
