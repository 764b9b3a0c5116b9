//! Pipeline operation status DTOs
//!
//! The structured outcome the backend returns for pipeline create and update
//! submissions. A rejection travels in the same shape as a success, with
//! `success` set to false and the notifications explaining why.

use serde::{Deserialize, Serialize};

/// A user-facing message attached to an operation outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Headline of the message
    pub title: String,

    /// Optional detail text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Notification {
    /// Creates a notification with the given headline.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Attaches a detail text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Outcome of a pipeline create or update submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineOperationStatus {
    /// Whether the backend accepted the pipeline
    pub success: bool,

    /// Messages to surface to the user, most important first
    #[serde(default)]
    pub notifications: Vec<Notification>,

    /// Id of the pipeline the backend started right after storing it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_pipeline_id: Option<String>,
}

impl PipelineOperationStatus {
    /// A successful outcome carrying the given notifications.
    pub fn succeeded(notifications: Vec<Notification>) -> Self {
        Self {
            success: true,
            notifications,
            started_pipeline_id: None,
        }
    }

    /// A rejected outcome carrying the given notifications.
    pub fn failed(notifications: Vec<Notification>) -> Self {
        Self {
            success: false,
            notifications,
            started_pipeline_id: None,
        }
    }

    /// Attaches the id of the pipeline the backend auto-started.
    pub fn with_started_pipeline(mut self, id: impl Into<String>) -> Self {
        self.started_pipeline_id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_status() {
        let status: PipelineOperationStatus =
            serde_json::from_str(r#"{"success": true}"#).unwrap();

        assert!(status.success);
        assert!(status.notifications.is_empty());
        assert!(status.started_pipeline_id.is_none());
    }

    #[test]
    fn test_parse_status_with_started_pipeline() {
        let json = r#"{
            "success": true,
            "notifications": [
                {"title": "Pipeline stored", "description": "Flow monitoring"}
            ],
            "startedPipelineId": "pipeline-42"
        }"#;

        let status: PipelineOperationStatus = serde_json::from_str(json).unwrap();
        assert!(status.success);
        assert_eq!(status.notifications.len(), 1);
        assert_eq!(status.notifications[0].title, "Pipeline stored");
        assert_eq!(status.started_pipeline_id.as_deref(), Some("pipeline-42"));
    }

    #[test]
    fn test_notification_description_is_optional() {
        let notification: Notification =
            serde_json::from_str(r#"{"title": "Pipeline stored"}"#).unwrap();

        assert_eq!(notification.title, "Pipeline stored");
        assert!(notification.description.is_none());
    }

    #[test]
    fn test_status_constructors() {
        let ok = PipelineOperationStatus::succeeded(vec![Notification::new("Pipeline stored")])
            .with_started_pipeline("pipeline-42");
        assert!(ok.success);
        assert_eq!(ok.started_pipeline_id.as_deref(), Some("pipeline-42"));

        let rejected = PipelineOperationStatus::failed(vec![
            Notification::new("Invalid pipeline").with_description("Missing stream source"),
        ]);
        assert!(!rejected.success);
        assert_eq!(
            rejected.notifications[0].description.as_deref(),
            Some("Missing stream source")
        );
    }
}
