/*!
 * Greeter client
 *
 * Opens a plaintext gRPC channel to a `helloworld.Greeter` peer, invokes
 * `SayHello` once and prints `From server: <message>`.
 *
 * ```rust,no_run
 * use greeter_client::{run, ClientConfig};
 *
 * # async fn example() -> greeter_client::Result<()> {
 * let config = ClientConfig::default();
 * run(&config, &mut std::io::stdout()).await?;
 * # Ok(())
 * # }
 * ```
 */

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

// Re-export commonly used types
pub use client::{build_request, run, GreeterConnection};
pub use config::{ClientConfig, LogLevel, DEFAULT_ENDPOINT, DEFAULT_NAME};
pub use error::{ClientError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
