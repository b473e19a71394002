// ABOUTME: Caller-facing Client trait over container lifecycle operations.
// ABOUTME: Two implementations: the live DockerClient and the mockall MockClient.

mod container;
mod docker;
mod filter;

pub use container::Container;
pub use docker::DockerClient;
pub use filter::Filter;

use crate::error::EngineError;
use async_trait::async_trait;
use std::time::Duration;

/// Container lifecycle operations, as consumed by policy code.
///
/// Any type exposing these six operations can stand in for the engine-backed
/// wrapper. Enable the `mock` feature for a ready-made `MockClient` usable in
/// downstream tests.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Client: Send + Sync {
    /// List containers matching `filter`, with full container and image
    /// detail for each.
    ///
    /// Fails fast: the first inspect failure aborts the whole call; no
    /// partial list is returned.
    async fn list_containers(&self, filter: &Filter) -> Result<Vec<Container>, EngineError>;

    /// Create a fresh instance from `container`'s configuration, then start it.
    async fn start_container(&self, container: &Container) -> Result<(), EngineError>;

    /// Stop `container`, allowing it `timeout` before the engine force-kills.
    async fn stop_container(
        &self,
        container: &Container,
        timeout: Duration,
    ) -> Result<(), EngineError>;

    /// Rename `container` in place. Engine-side validation errors surface.
    async fn rename_container(
        &self,
        container: &Container,
        name: &str,
    ) -> Result<(), EngineError>;

    /// Send the named OS signal to `container`'s process.
    async fn kill_container(
        &self,
        container: &Container,
        signal: &str,
    ) -> Result<(), EngineError>;

    /// Delete `container`. With `force`, a running container is removed anyway.
    async fn remove_container(
        &self,
        container: &Container,
        force: bool,
    ) -> Result<(), EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bollard::models::{ContainerInspectResponse, ImageInspect};

    fn require_client<C: Client>(_client: &C) {}

    /// Guards against the mock and the live wrapper drifting apart: the mock
    /// must satisfy the same trait bound callers program against.
    #[test]
    fn mock_client_satisfies_the_client_trait() {
        require_client(&MockClient::new());
    }

    #[tokio::test]
    async fn mock_client_replays_programmed_expectations() {
        let container = Container::new(
            ContainerInspectResponse {
                id: Some("foo".to_string()),
                name: Some("/bar".to_string()),
                ..Default::default()
            },
            ImageInspect::default(),
        );

        let mut mock = MockClient::new();
        mock.expect_list_containers()
            .once()
            .returning(move |_| Ok(vec![]));
        mock.expect_stop_container()
            .withf(|c, timeout| c.id().as_str() == "foo" && *timeout == Duration::from_secs(10))
            .once()
            .returning(|_, _| Ok(()));
        mock.expect_remove_container()
            .withf(|c, force| c.id().as_str() == "foo" && *force)
            .once()
            .returning(|_, _| Err(EngineError::new("removal refused")));

        let client: &dyn Client = &mock;
        let listed = client
            .list_containers(&Filter::default())
            .await
            .expect("list should succeed");
        assert!(listed.is_empty());

        client
            .stop_container(&container, Duration::from_secs(10))
            .await
            .expect("stop should succeed");

        let err = client
            .remove_container(&container, true)
            .await
            .expect_err("remove should fail");
        assert_eq!(err.to_string(), "removal refused");
        // Dropping the mock verifies every expectation was consumed.
    }
}
