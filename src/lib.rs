// ABOUTME: Library root for dockhand - a narrow wrapper over the Docker engine API.
// ABOUTME: Exposes the Client trait, the live DockerClient, and test doubles.

pub mod client;
pub mod engine;
pub mod error;
pub mod types;

pub use client::{Client, Container, DockerClient, Filter};
pub use error::EngineError;

#[cfg(any(test, feature = "mock"))]
pub use client::MockClient;
