// ABOUTME: Upstream boundary to the Docker engine API.
// ABOUTME: EngineApi trait mirrors the raw bollard calls the wrapper composes.

use crate::error::EngineError;
use async_trait::async_trait;
use bollard::Docker;
use bollard::models::{
    ContainerCreateBody, ContainerCreateResponse, ContainerInspectResponse, ContainerSummary,
    ImageInspect,
};
use bollard::query_parameters::{
    CreateContainerOptions, InspectContainerOptions, KillContainerOptions, ListContainersOptions,
    RemoveContainerOptions, RenameContainerOptions, StartContainerOptions, StopContainerOptions,
};

/// The raw engine calls the wrapper composes.
///
/// One method per engine endpoint, each a single request/response cycle.
/// Failures carry the engine's error text unchanged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EngineApi: Send + Sync {
    async fn list_containers(
        &self,
        options: ListContainersOptions,
    ) -> Result<Vec<ContainerSummary>, EngineError>;

    async fn inspect_container(&self, id: &str) -> Result<ContainerInspectResponse, EngineError>;

    async fn inspect_image(&self, reference: &str) -> Result<ImageInspect, EngineError>;

    async fn create_container(
        &self,
        name: Option<String>,
        body: ContainerCreateBody,
    ) -> Result<ContainerCreateResponse, EngineError>;

    async fn start_container(&self, id: &str) -> Result<(), EngineError>;

    async fn stop_container(
        &self,
        id: &str,
        options: StopContainerOptions,
    ) -> Result<(), EngineError>;

    async fn rename_container(
        &self,
        id: &str,
        options: RenameContainerOptions,
    ) -> Result<(), EngineError>;

    async fn kill_container(
        &self,
        id: &str,
        options: KillContainerOptions,
    ) -> Result<(), EngineError>;

    async fn remove_container(
        &self,
        id: &str,
        options: RemoveContainerOptions,
    ) -> Result<(), EngineError>;
}

#[async_trait]
impl EngineApi for Docker {
    async fn list_containers(
        &self,
        options: ListContainersOptions,
    ) -> Result<Vec<ContainerSummary>, EngineError> {
        Ok(Docker::list_containers(self, Some(options)).await?)
    }

    async fn inspect_container(&self, id: &str) -> Result<ContainerInspectResponse, EngineError> {
        Ok(Docker::inspect_container(self, id, None::<InspectContainerOptions>).await?)
    }

    async fn inspect_image(&self, reference: &str) -> Result<ImageInspect, EngineError> {
        Ok(Docker::inspect_image(self, reference).await?)
    }

    async fn create_container(
        &self,
        name: Option<String>,
        body: ContainerCreateBody,
    ) -> Result<ContainerCreateResponse, EngineError> {
        let options = CreateContainerOptions {
            name,
            ..Default::default()
        };
        Ok(Docker::create_container(self, Some(options), body).await?)
    }

    async fn start_container(&self, id: &str) -> Result<(), EngineError> {
        Ok(Docker::start_container(self, id, None::<StartContainerOptions>).await?)
    }

    async fn stop_container(
        &self,
        id: &str,
        options: StopContainerOptions,
    ) -> Result<(), EngineError> {
        Ok(Docker::stop_container(self, id, Some(options)).await?)
    }

    async fn rename_container(
        &self,
        id: &str,
        options: RenameContainerOptions,
    ) -> Result<(), EngineError> {
        Ok(Docker::rename_container(self, id, options).await?)
    }

    async fn kill_container(
        &self,
        id: &str,
        options: KillContainerOptions,
    ) -> Result<(), EngineError> {
        Ok(Docker::kill_container(self, id, Some(options)).await?)
    }

    async fn remove_container(
        &self,
        id: &str,
        options: RemoveContainerOptions,
    ) -> Result<(), EngineError> {
        Ok(Docker::remove_container(self, id, Some(options)).await?)
    }
}
