//! Edge node domain model
//!
//! Represents a remote node registered with the backend that can host
//! pipeline elements, as opposed to the platform's default execution context.

use serde::{Deserialize, Serialize};

/// Sentinel deployment target id for the default execution context
pub const DEFAULT_TARGET_ID: &str = "default";

/// An edge node capable of hosting pipeline elements
///
/// Nodes are fetched read-only from the backend when a save dialog opens and
/// stay fixed for the lifetime of that dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeNode {
    /// Unique identifier of the node controller
    pub node_controller_id: String,

    /// Port the node controller listens on
    #[serde(default)]
    pub node_controller_port: u16,

    /// Descriptive metadata of the node
    pub node_metadata: NodeMetadata,

    /// App ids of the pipeline element types this node can host
    #[serde(default)]
    pub supported_pipeline_element_app_ids: Vec<String>,
}

/// Descriptive metadata of an edge node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeMetadata {
    /// Hostname or IP address the node is reachable at
    pub node_address: String,

    /// Human-readable model label, e.g. "Raspberry Pi 4"
    pub node_model: String,
}

impl EdgeNode {
    /// The synthetic option representing the default execution context.
    ///
    /// It is listed first among every element's deployment options and is
    /// never a lookup target: target resolution short-circuits on
    /// [`DEFAULT_TARGET_ID`] before consulting the node list, so the port
    /// placeholder is never read.
    pub fn default_target() -> Self {
        Self {
            node_controller_id: DEFAULT_TARGET_ID.to_string(),
            node_controller_port: 0,
            node_metadata: NodeMetadata {
                node_address: DEFAULT_TARGET_ID.to_string(),
                node_model: "Default Node".to_string(),
            },
            supported_pipeline_element_app_ids: Vec::new(),
        }
    }

    /// Whether this node can host elements of the given app id.
    ///
    /// Exact string membership; there is no wildcard or hierarchical
    /// matching.
    pub fn supports(&self, app_id: &str) -> bool {
        self.supported_pipeline_element_app_ids
            .iter()
            .any(|supported| supported == app_id)
    }

    /// Whether this is the synthetic default option.
    pub fn is_default_target(&self) -> bool {
        self.node_controller_id == DEFAULT_TARGET_ID
    }
}
