//! Pipeline store
//!
//! The save dialog's view of the remote backend:
//! - Fetching the reference data the dialog needs (edge nodes, categories)
//! - Storing and updating pipelines
//! - Invalidating the backend's cached assembly pipeline

use anyhow::Result;
use async_trait::async_trait;
use weir_client::BackendClient;
use weir_core::domain::category::PipelineCategory;
use weir_core::domain::node::EdgeNode;
use weir_core::domain::pipeline::Pipeline;
use weir_core::dto::status::PipelineOperationStatus;

/// Store trait for the backend operations the save dialog performs
///
/// A structured rejection (a status with `success: false`) is an Ok result
/// carrying that status. Err means the call itself failed and no structured
/// response was reachable.
#[async_trait]
pub trait PipelineStore: Send + Sync {
    /// Fetches every edge node registered with the backend.
    async fn fetch_edge_nodes(&self) -> Result<Vec<EdgeNode>>;

    /// Fetches the categories pipelines can be filed under.
    async fn fetch_pipeline_categories(&self) -> Result<Vec<PipelineCategory>>;

    /// Stores a new pipeline.
    ///
    /// # Arguments
    /// * `pipeline` - The pipeline to store, with targets already resolved
    async fn create_pipeline(&self, pipeline: &Pipeline) -> Result<PipelineOperationStatus>;

    /// Updates an already stored pipeline.
    ///
    /// # Arguments
    /// * `pipeline` - The pipeline to update; must carry a backend id
    async fn update_pipeline(&self, pipeline: &Pipeline) -> Result<PipelineOperationStatus>;

    /// Drops the backend's cached assembly pipeline.
    async fn invalidate_pipeline_cache(&self) -> Result<()>;
}

/// HTTP implementation of PipelineStore
pub struct HttpPipelineStore {
    client: BackendClient,
}

impl HttpPipelineStore {
    /// Creates a store talking to the backend at the given base URL
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the backend (e.g., "http://localhost:8030")
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: BackendClient::new(base_url),
        }
    }

    /// Wraps an already configured client
    pub fn from_client(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PipelineStore for HttpPipelineStore {
    async fn fetch_edge_nodes(&self) -> Result<Vec<EdgeNode>> {
        Ok(self.client.list_edge_nodes().await?)
    }

    async fn fetch_pipeline_categories(&self) -> Result<Vec<PipelineCategory>> {
        Ok(self.client.list_pipeline_categories().await?)
    }

    async fn create_pipeline(&self, pipeline: &Pipeline) -> Result<PipelineOperationStatus> {
        Ok(self.client.create_pipeline(pipeline).await?)
    }

    async fn update_pipeline(&self, pipeline: &Pipeline) -> Result<PipelineOperationStatus> {
        Ok(self.client.update_pipeline(pipeline).await?)
    }

    async fn invalidate_pipeline_cache(&self) -> Result<()> {
        Ok(self.client.invalidate_pipeline_cache().await?)
    }
}
