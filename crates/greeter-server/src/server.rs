//! gRPC server implementation for the Greeter service.

use greeter_proto::greeter_server::{Greeter, GreeterServer};
use greeter_proto::{HelloReply, HelloRequest};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic::{Request, Response, Status};
use tracing::{debug, info};

/// Implementation of the `helloworld.Greeter` gRPC interface.
#[derive(Debug, Default, Clone)]
pub struct GreeterService;

impl GreeterService {
    /// Builds the reply text for a given name.
    pub fn greeting_for(name: &str) -> String {
        format!("Hello {}", name)
    }
}

#[tonic::async_trait]
impl Greeter for GreeterService {
    async fn say_hello(
        &self,
        request: Request<HelloRequest>,
    ) -> Result<Response<HelloReply>, Status> {
        let peer = request.remote_addr();
        let req = request.into_inner();

        debug!("SayHello from {:?} (name: {:?})", peer, req.name);

        Ok(Response::new(HelloReply {
            message: Self::greeting_for(&req.name),
        }))
    }
}

/// Serves the Greeter service on an already-bound listener until the
/// transport fails.
///
/// Binding is left to the caller so tests can use an ephemeral port and read
/// it back before the server starts.
pub async fn serve(listener: TcpListener) -> Result<(), tonic::transport::Error> {
    serve_with_shutdown(listener, std::future::pending()).await
}

/// Same as [`serve`], but stops accepting calls once `shutdown` resolves.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    shutdown: F,
) -> Result<(), tonic::transport::Error>
where
    F: std::future::Future<Output = ()>,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Greeter listening on {}", addr);
    }

    Server::builder()
        .add_service(GreeterServer::new(GreeterService))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), shutdown)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_format() {
        assert_eq!(GreeterService::greeting_for("Eugenio"), "Hello Eugenio");
        assert_eq!(GreeterService::greeting_for(""), "Hello ");
    }

    #[tokio::test]
    async fn test_say_hello_handler() {
        let service = GreeterService;

        let response = service
            .say_hello(Request::new(HelloRequest {
                name: "Eugenio".to_string(),
            }))
            .await
            .unwrap();

        assert_eq!(response.into_inner().message, "Hello Eugenio");
    }
}
