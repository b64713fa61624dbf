//! Greeter client: channel setup and the `SayHello` call

use greeter_proto::greeter_client::GreeterClient;
use greeter_proto::HelloRequest;
use std::io::Write;
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::output::render_greeting;

/// Build the request for a greeting
///
/// The same name always yields the same message, and therefore the same
/// bytes on the wire.
pub fn build_request(name: &str) -> HelloRequest {
    HelloRequest {
        name: name.to_string(),
    }
}

/// Parse and validate the configured endpoint
///
/// Only plaintext `http://` is accepted; no TLS stack is compiled in, so an
/// `https://` URI is refused instead of being silently downgraded.
pub fn parse_endpoint(config: &ClientConfig) -> Result<Endpoint> {
    let mut endpoint = Endpoint::from_shared(config.endpoint.clone()).map_err(|e| {
        ClientError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            reason: e.to_string(),
        }
    })?;

    match endpoint.uri().scheme_str() {
        Some("http") => {}
        Some(other) => return Err(ClientError::UnsupportedScheme(other.to_string())),
        None => return Err(ClientError::UnsupportedScheme(String::new())),
    }

    if let Some(timeout) = config.connect_timeout() {
        endpoint = endpoint.connect_timeout(timeout);
    }
    if let Some(timeout) = config.request_timeout() {
        endpoint = endpoint.timeout(timeout);
    }

    Ok(endpoint)
}

/// An open channel to a Greeter peer
pub struct GreeterConnection {
    client: GreeterClient<Channel>,
    endpoint: String,
}

impl GreeterConnection {
    /// Connect eagerly, so an unreachable peer fails here rather than on the
    /// first call
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        let endpoint = parse_endpoint(config)?;

        debug!("Connecting to {}", config.endpoint);
        let channel = endpoint.connect().await?;
        debug!("Channel to {} established", config.endpoint);

        Ok(Self::from_channel(channel, config.endpoint.clone()))
    }

    /// Wrap an already-established channel
    pub fn from_channel(channel: Channel, endpoint: String) -> Self {
        Self {
            client: GreeterClient::new(channel),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Invoke `SayHello` once and return the reply message
    pub async fn say_hello(&mut self, name: &str) -> Result<String> {
        debug!("Calling SayHello on {} (name: {:?})", self.endpoint, name);

        let response = self.client.say_hello(build_request(name)).await?;
        let message = response.into_inner().message;

        debug!("SayHello returned {} bytes", message.len());
        Ok(message)
    }
}

/// Connect, call `SayHello` with the configured name, then print the reply
///
/// Nothing is written to `out` unless the call succeeds. Returns the reply
/// message.
pub async fn run<W: Write>(config: &ClientConfig, out: &mut W) -> Result<String> {
    let message = greet(config).await?;

    render_greeting(out, &message)?;
    Ok(message)
}

async fn greet(config: &ClientConfig) -> Result<String> {
    let mut connection = GreeterConnection::connect(config).await?;
    connection.say_hello(&config.name).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;
    use prost::Message;
    use std::time::Duration;

    fn config_for(endpoint: &str) -> ClientConfig {
        ClientConfig {
            endpoint: endpoint.to_string(),
            ..Default::default()
        }
    }

    /// Address of a port that was free a moment ago and has nothing listening
    fn closed_port_endpoint() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[test]
    fn test_default_request_is_deterministic() {
        let config = ClientConfig::default();
        let first = build_request(&config.name);
        let second = build_request(&config.name);

        assert_eq!(first.name, "Eugenio");
        assert_eq!(first, second);
        assert_eq!(first.encode_to_vec(), second.encode_to_vec());
    }

    #[test]
    fn test_parse_default_endpoint() {
        let endpoint = parse_endpoint(&ClientConfig::default()).unwrap();
        assert_eq!(endpoint.uri().scheme_str(), Some("http"));
        assert_eq!(endpoint.uri().port_u16(), Some(50051));
    }

    #[test]
    fn test_https_is_rejected() {
        let result = parse_endpoint(&config_for("https://localhost:50051"));
        assert!(matches!(result, Err(ClientError::UnsupportedScheme(s)) if s == "https"));
    }

    #[test]
    fn test_malformed_endpoint() {
        let result = parse_endpoint(&config_for("http://local host:50051"));
        assert!(matches!(result, Err(ClientError::InvalidEndpoint { .. })));
    }

    #[tokio::test]
    async fn test_connect_to_closed_port_fails() {
        init_test_logging();

        let config = ClientConfig {
            endpoint: closed_port_endpoint(),
            connect_timeout_secs: Some(5),
            ..Default::default()
        };

        let result = GreeterConnection::connect(&config).await;
        assert!(matches!(result, Err(ClientError::Transport(_))));
    }

    #[tokio::test]
    async fn test_run_against_unreachable_peer_prints_nothing() {
        init_test_logging();

        let config = config_for(&closed_port_endpoint());
        let mut out = Vec::new();

        let err = run(&config, &mut out).await.unwrap_err();
        assert!(err.is_remote());
        assert!(out.is_empty());
    }

    #[test]
    fn test_timeouts_are_applied() {
        let config = ClientConfig {
            connect_timeout_secs: Some(2),
            request_timeout_secs: Some(7),
            ..Default::default()
        };

        // Endpoint does not expose its timeouts; building must still succeed
        assert!(parse_endpoint(&config).is_ok());
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(7)));
    }
}
