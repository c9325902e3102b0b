use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use eventora_infrastructure::AppConfig;
use eventora_interfaces_cli::render;
use eventora_interfaces_cli::{dispatch, CliContext, CliError, Command, StdinConfirm};

use crate::context::AppContext;

#[derive(Parser, Debug)]
#[command(name = "eventora")]
#[command(about = "Eventora admin dashboard client", long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Swaps in the configured level once the config is read.
/// Empty when `RUST_LOG` pins the filter or a subscriber was already installed.
pub struct LogLevel(Option<reload::Handle<EnvFilter, Registry>>);

impl LogLevel {
    pub fn apply(&self, level: &str) {
        let Some(handle) = &self.0 else {
            return;
        };
        let result = EnvFilter::try_new(level)
            .map_err(|err| err.to_string())
            .and_then(|filter| handle.reload(filter).map_err(|err| err.to_string()));
        if let Err(err) = result {
            warn!("failed to apply log level {}: {}", level, err);
        }
    }
}

/// Logs go to stderr, at `info` until [`LogLevel::apply`]. `RUST_LOG` wins.
pub fn init_tracing() -> LogLevel {
    let from_env = EnvFilter::try_from_default_env().ok();
    let pinned = from_env.is_some();
    let (filter, handle) = reload::Layer::new(from_env.unwrap_or_else(|| EnvFilter::new("info")));
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok();
    LogLevel((installed && !pinned).then_some(handle))
}

/// Runs one command and returns the process exit code.
pub async fn run(args: Args) -> i32 {
    let log_level = init_tracing();
    let config = match AppConfig::load(args.config).await {
        Ok(config) => config,
        Err(err) => {
            eprintln!("[error] invalid configuration: {:#}", err);
            return 2;
        }
    };
    log_level.apply(&config.log_level);

    let context = match AppContext::new(&config).await {
        Ok(context) => context,
        Err(err) => {
            let error = CliError::Internal(format!("{:#}", err));
            eprintln!("[error] {}", error);
            return error.exit_code();
        }
    };

    let ctx = CliContext {
        state: &context.state,
        json: args.json,
        confirm: &StdinConfirm,
    };
    match dispatch(&ctx, args.command).await {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            let _ = stdout.write_all(output.stdout.as_bytes());
            let _ = stdout.flush();
            if let Some(notice) = output.notice {
                eprintln!("{}", render::notice(&notice));
            }
            0
        }
        Err(failure) => {
            debug!("command failed: {}", failure.error);
            eprintln!("{}", render::notice(&failure.notice));
            failure.error.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventora_interfaces_cli::AuthCommand;

    fn whoami(config: PathBuf) -> Args {
        Args {
            config: Some(config),
            json: true,
            command: Command::Auth(AuthCommand::Whoami),
        }
    }

    #[tokio::test]
    async fn config_file_drives_the_session_location() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("eventora.toml");
        std::fs::write(&path, "session_path = \"state/session.json\"\nlog_level = \"warn\"\n")
            .expect("write config");

        assert_eq!(run(whoami(path)).await, 0);
        assert!(!dir.path().join("state/session.json").exists());
    }

    #[tokio::test]
    async fn invalid_config_exits_with_usage_code() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("eventora.toml");
        std::fs::write(&path, "upcoming_window_days = 200000000\n").expect("write config");

        assert_eq!(run(whoami(path)).await, 2);
    }
}
