//! Pipeline domain model
//!
//! Represents the pipeline a user assembles in the editor, together with the
//! processing elements and actions it is composed of.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::node::DEFAULT_TARGET_ID;

fn default_target_id() -> String {
    DEFAULT_TARGET_ID.to_string()
}

/// A single processing element or action inside a pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineElement {
    /// Display name of this element instance
    #[serde(default)]
    pub name: String,

    /// Element type identifier, matched against node capabilities
    pub app_id: String,

    /// Selected deployment target: a node controller id, or "default"
    #[serde(default = "default_target_id")]
    pub deployment_target_node_id: String,

    /// Resolved target hostname; None when targeting the default context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_target_node_hostname: Option<String>,

    /// Resolved target port; None when targeting the default context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_target_node_port: Option<u16>,
}

impl PipelineElement {
    /// Creates an element of the given type targeting the default context.
    pub fn new(name: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            app_id: app_id.into(),
            deployment_target_node_id: default_target_id(),
            deployment_target_node_hostname: None,
            deployment_target_node_port: None,
        }
    }

    /// Whether this element targets the default execution context.
    pub fn targets_default(&self) -> bool {
        self.deployment_target_node_id == DEFAULT_TARGET_ID
    }
}

/// A pipeline assembled in the editor
///
/// While a save is running the pipeline is owned exclusively by that save
/// workflow; nothing else mutates it until a terminal state is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pipeline {
    /// Backend-assigned identifier; None until the pipeline is first stored
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Name shown in the pipeline overview
    pub name: String,

    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Names of the categories this pipeline is filed under
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pipeline_categories: Vec<String>,

    /// Creation time assigned by the backend
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_at: Option<DateTime<Utc>>,

    /// Processing elements, in graph order
    #[serde(default)]
    pub sepas: Vec<PipelineElement>,

    /// Actions (sinks), in graph order
    #[serde(default)]
    pub actions: Vec<PipelineElement>,
}

impl Pipeline {
    /// Creates an empty pipeline with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            pipeline_categories: Vec::new(),
            created_at: None,
            sepas: Vec::new(),
            actions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_element_targets_default() {
        let element: PipelineElement =
            serde_json::from_str(r#"{"appId": "org.example.processor.filter"}"#).unwrap();

        assert_eq!(element.app_id, "org.example.processor.filter");
        assert_eq!(element.deployment_target_node_id, DEFAULT_TARGET_ID);
        assert!(element.targets_default());
        assert!(element.deployment_target_node_hostname.is_none());
        assert!(element.deployment_target_node_port.is_none());
    }

    #[test]
    fn test_unresolved_element_serializes_without_coordinates() {
        let element = PipelineElement::new("Filter", "org.example.processor.filter");
        let json = serde_json::to_string(&element).unwrap();

        assert!(json.contains("\"appId\":\"org.example.processor.filter\""));
        assert!(json.contains("\"deploymentTargetNodeId\":\"default\""));
        assert!(!json.contains("deploymentTargetNodeHostname"));
        assert!(!json.contains("deploymentTargetNodePort"));
    }

    #[test]
    fn test_parse_pipeline_wire_format() {
        let json = r#"{
            "_id": "pipeline-42",
            "name": "Flow monitoring",
            "description": "Watches the flow rate sensor",
            "pipelineCategories": ["monitoring"],
            "createdAt": 1700000000000,
            "sepas": [{"appId": "org.example.processor.filter"}],
            "actions": [{"appId": "org.example.sink.dashboard"}]
        }"#;

        let pipeline: Pipeline = serde_json::from_str(json).unwrap();
        assert_eq!(pipeline.id.as_deref(), Some("pipeline-42"));
        assert_eq!(pipeline.name, "Flow monitoring");
        assert_eq!(pipeline.pipeline_categories, vec!["monitoring"]);
        assert!(pipeline.created_at.is_some());
        assert_eq!(pipeline.sepas.len(), 1);
        assert_eq!(pipeline.actions.len(), 1);
    }

    #[test]
    fn test_new_pipeline_has_no_id() {
        let pipeline = Pipeline::new("Flow monitoring");
        assert!(pipeline.id.is_none());
        assert!(pipeline.sepas.is_empty());
        assert!(pipeline.actions.is_empty());
    }
}
