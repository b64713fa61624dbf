/// Generated gRPC contract for the `helloworld.Greeter` service.
///
/// This crate provides the protocol buffer definitions and generated code
/// shared by the greeter client and the reference server.
pub mod helloworld {
    tonic::include_proto!("helloworld");
}

// Re-export commonly used types for convenience
pub use helloworld::*;
