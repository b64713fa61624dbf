/*!
 * Greeter client CLI
 *
 * With no arguments: connects to http://localhost:50051, sends
 * SayHello(name = "Eugenio") and prints `From server: <message>`.
 */

use clap::Parser;
use greeter_client::{
    config::{ClientConfig, LogLevel},
    error::{ClientError, EXIT_FATAL, EXIT_SUCCESS},
    logging,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "greeter-client")]
#[command(version, about = "Call helloworld.Greeter/SayHello and print the reply", long_about = None)]
struct Cli {
    /// Peer endpoint (plaintext http:// only)
    #[arg(short, long, env = "GREETER_ENDPOINT")]
    endpoint: Option<String>,

    /// Name sent in the request
    #[arg(short, long, env = "GREETER_NAME")]
    name: Option<String>,

    /// TOML config file (flags and environment take precedence)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Connect timeout in seconds
    #[arg(long, value_name = "SECS")]
    connect_timeout: Option<u64>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log level for diagnostics on stderr
    #[arg(long, value_enum)]
    log_level: Option<LogLevelArg>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Verbose logging (same as --log-level debug)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

impl Cli {
    /// Layer flags and environment over the config file (or defaults)
    fn resolve(self) -> anyhow::Result<ClientConfig> {
        let mut config = match self.config {
            Some(ref path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(endpoint) = self.endpoint {
            config.endpoint = endpoint;
        }
        if let Some(name) = self.name {
            config.name = name;
        }
        if self.connect_timeout.is_some() {
            config.connect_timeout_secs = self.connect_timeout;
        }
        if self.timeout.is_some() {
            config.request_timeout_secs = self.timeout;
        }
        if let Some(level) = self.log_level {
            config.log_level = level.into();
        }
        if self.log_file.is_some() {
            config.log_file = self.log_file;
        }
        config.verbose |= self.verbose;

        Ok(config)
    }
}

#[tokio::main]
async fn main() {
    let code = match run().await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_failure(&e);
            e.downcast_ref::<ClientError>()
                .map(ClientError::exit_code)
                .unwrap_or(EXIT_FATAL)
        }
    };
    std::process::exit(code);
}

/// Report a failure exactly once: through the logging stack when it is up,
/// straight to stderr when the failure happened before logging started
fn report_failure(err: &anyhow::Error) {
    if tracing::dispatcher::has_been_set() {
        tracing::error!("{}", err);
    } else {
        eprintln!("Error: {}", err);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Cli::parse().resolve()?;

    logging::init_logging(&config)?;

    let mut stdout = std::io::stdout();
    greeter_client::run(&config, &mut stdout).await?;

    Ok(())
}
