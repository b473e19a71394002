// ABOUTME: Container value bundling engine container detail with image detail.
// ABOUTME: Both halves come from the same list/inspect cycle, never mutated in place.

use crate::types::{ContainerId, ImageId};
use bollard::models::{ContainerCreateBody, ContainerInspectResponse, ImageInspect};
use std::collections::HashMap;

/// A container as seen by one list or inspect cycle.
///
/// Bundles the engine's container detail with the detail of the image it runs.
/// Operations that change engine state return fresh engine query results; a
/// `Container` is never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    details: ContainerInspectResponse,
    image: ImageInspect,
}

impl Container {
    pub fn new(details: ContainerInspectResponse, image: ImageInspect) -> Self {
        Self { details, image }
    }

    /// Engine-assigned container ID.
    pub fn id(&self) -> ContainerId {
        ContainerId::new(self.details.id.clone().unwrap_or_default())
    }

    /// Container name without the leading slash the engine reports.
    pub fn name(&self) -> &str {
        self.details
            .name
            .as_deref()
            .unwrap_or_default()
            .trim_start_matches('/')
    }

    /// ID of the image this container runs.
    pub fn image_id(&self) -> ImageId {
        ImageId::new(self.details.image.clone().unwrap_or_default())
    }

    pub fn labels(&self) -> HashMap<String, String> {
        self.details
            .config
            .as_ref()
            .and_then(|c| c.labels.clone())
            .unwrap_or_default()
    }

    /// Raw container detail from the engine.
    pub fn details(&self) -> &ContainerInspectResponse {
        &self.details
    }

    /// Raw image detail from the engine.
    pub fn image(&self) -> &ImageInspect {
        &self.image
    }

    /// Build a create request reproducing this container's configuration.
    ///
    /// Used by the start protocol: the engine requires explicit creation
    /// separate from start, so a replacement is created from the existing
    /// container's config and host config.
    pub(crate) fn create_body(&self) -> ContainerCreateBody {
        let config = self.details.config.clone().unwrap_or_default();

        ContainerCreateBody {
            image: config.image,
            cmd: config.cmd,
            entrypoint: config.entrypoint,
            env: config.env,
            labels: config.labels,
            user: config.user,
            working_dir: config.working_dir,
            exposed_ports: config.exposed_ports,
            stop_signal: config.stop_signal,
            stop_timeout: config.stop_timeout,
            host_config: self.details.host_config.clone(),
            ..Default::default()
        }
    }
}
