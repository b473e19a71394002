// ABOUTME: List-query filter and its translation to the engine's native shape.
// ABOUTME: Label pairs become key=value filter terms at call time.

use bollard::query_parameters::ListContainersOptions;
use std::collections::HashMap;

/// Criteria narrowing a container list query.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    /// Label equality filters (key=value). An empty value matches the bare key.
    pub labels: HashMap<String, String>,
    /// Filter by name (supports partial match).
    pub name: Option<String>,
    /// Include stopped containers.
    pub all: bool,
}

impl Filter {
    /// Filter on a single label pair.
    pub fn label(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            labels: HashMap::from([(key.into(), value.into())]),
            ..Default::default()
        }
    }

    /// Translate into the engine's list-options shape.
    pub(crate) fn to_list_options(&self) -> ListContainersOptions {
        let mut filter_map: HashMap<String, Vec<String>> = HashMap::new();

        if let Some(ref name) = self.name {
            filter_map.insert("name".to_string(), vec![name.clone()]);
        }

        for (key, value) in &self.labels {
            filter_map
                .entry("label".to_string())
                .or_default()
                .push(format!("{}={}", key, value));
        }

        ListContainersOptions {
            all: self.all,
            filters: Some(filter_map),
            ..Default::default()
        }
    }
}
