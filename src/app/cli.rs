use std::future::Future;

use tracing::warn;

use super::error::AppError;

/// CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Exit codes (0 = success, 1 = error, 128 + signo on signal)
pub struct CliApp {
    name: &'static str,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Run the application future, racing it against signal reception
    ///
    /// This function never returns - it calls std::process::exit with the
    /// appropriate code.
    pub async fn run<Fut>(self, main_fut: Fut) -> !
    where
        Fut: Future<Output = Result<(), AppError>>,
    {
        tokio::select! {
            result = main_fut => {
                match result {
                    Ok(()) => std::process::exit(0),
                    Err(e) => {
                        eprintln!("{}: {}", self.name, e);
                        std::process::exit(1);
                    }
                }
            }
            signal_code = wait_for_signal() => {
                std::process::exit(signal_code);
            }
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate()).expect("Failed to setup SIGTERM handler");
        let mut sigint = signal(SignalKind::interrupt()).expect("Failed to setup SIGINT handler");
        let mut sighup = signal(SignalKind::hangup()).expect("Failed to setup SIGHUP handler");

        tokio::select! {
            _ = sigterm.recv() => {
                warn!("received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                warn!("received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                warn!("received SIGHUP");
                129 // 128 + 1
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to setup Ctrl+C handler");
        warn!("received Ctrl+C");
        130
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_app_new() {
        let app = CliApp::new("fixturegen");
        assert_eq!(app.name, "fixturegen");
    }
}
