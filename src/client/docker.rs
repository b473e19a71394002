// ABOUTME: Live Client implementation composing raw engine calls.
// ABOUTME: Pure call-shape translation; every engine error propagates verbatim.

use super::Client;
use super::container::Container;
use super::filter::Filter;
use crate::engine::EngineApi;
use crate::error::EngineError;
use async_trait::async_trait;
use bollard::Docker;
use bollard::query_parameters::{
    KillContainerOptions, RemoveContainerOptions, RenameContainerOptions, StopContainerOptions,
};
use std::time::Duration;
use tracing::debug;

/// Engine-backed implementation of [`Client`].
///
/// Holds only the engine handle; no retries, no interpretation of engine
/// error codes. Resilience belongs to the caller.
pub struct DockerClient<E: EngineApi> {
    engine: E,
}

impl<E: EngineApi> DockerClient<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }
}

impl DockerClient<Docker> {
    /// Connect to the engine over its unix socket.
    pub fn connect(socket_path: &str) -> Result<Self, EngineError> {
        let docker = Docker::connect_with_unix(socket_path, 120, bollard::API_DEFAULT_VERSION)?;
        Ok(Self::new(docker))
    }
}

#[async_trait]
impl<E: EngineApi> Client for DockerClient<E> {
    async fn list_containers(&self, filter: &Filter) -> Result<Vec<Container>, EngineError> {
        let summaries = self.engine.list_containers(filter.to_list_options()).await?;

        // Detail is fetched per entry; the first inspect failure aborts the
        // whole call rather than returning a partial list.
        let mut containers = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let id = summary.id.unwrap_or_default();
            let details = self.engine.inspect_container(&id).await?;
            let image_ref = details.image.clone().unwrap_or_default();
            let image = self.engine.inspect_image(&image_ref).await?;
            containers.push(Container::new(details, image));
        }

        debug!(count = containers.len(), "listed containers");
        Ok(containers)
    }

    async fn start_container(&self, container: &Container) -> Result<(), EngineError> {
        // The engine requires explicit creation separate from start: build a
        // fresh instance from the existing configuration, then start the ID
        // the engine assigned to it.
        let name = container.name().to_string();
        debug!(name = %name, "creating container");
        let created = self
            .engine
            .create_container(Some(name), container.create_body())
            .await?;

        debug!(id = %created.id, "starting container");
        self.engine.start_container(&created.id).await
    }

    async fn stop_container(
        &self,
        container: &Container,
        timeout: Duration,
    ) -> Result<(), EngineError> {
        let id = container.id();
        let options = StopContainerOptions {
            t: Some(timeout.as_secs() as i32),
            signal: None,
        };
        self.engine.stop_container(id.as_str(), options).await
    }

    async fn rename_container(
        &self,
        container: &Container,
        name: &str,
    ) -> Result<(), EngineError> {
        let id = container.id();
        let options = RenameContainerOptions {
            name: name.to_string(),
        };
        self.engine.rename_container(id.as_str(), options).await
    }

    async fn kill_container(
        &self,
        container: &Container,
        signal: &str,
    ) -> Result<(), EngineError> {
        let id = container.id();
        let options = KillContainerOptions {
            signal: signal.to_string(),
        };
        self.engine.kill_container(id.as_str(), options).await
    }

    async fn remove_container(
        &self,
        container: &Container,
        force: bool,
    ) -> Result<(), EngineError> {
        let id = container.id();
        // Volumes always go with the container.
        let options = RemoveContainerOptions {
            v: true,
            force,
            ..Default::default()
        };
        self.engine.remove_container(id.as_str(), options).await
    }
}
