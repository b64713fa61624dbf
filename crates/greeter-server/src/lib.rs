//! Reference Greeter server.
//!
//! Implements the `helloworld.Greeter` contract so the client has a real peer
//! to talk to during local runs and end-to-end tests.

pub mod server;

pub use server::{serve, GreeterService};
