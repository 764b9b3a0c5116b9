//! Pipeline storage API endpoints

use crate::BackendClient;
use crate::error::{ClientError, Result};
use weir_core::domain::pipeline::Pipeline;
use weir_core::dto::status::PipelineOperationStatus;

impl BackendClient {
    // =============================================================================
    // Pipeline Storage
    // =============================================================================

    /// Store a new pipeline
    ///
    /// The backend answers create submissions with a structured status even
    /// when it rejects the pipeline, so a `success: false` outcome is an Ok
    /// result here, not an error.
    ///
    /// # Arguments
    /// * `pipeline` - The pipeline to store
    ///
    /// # Returns
    /// The operation status reported by the backend
    ///
    /// # Example
    /// ```no_run
    /// # use weir_client::BackendClient;
    /// # use weir_core::domain::pipeline::Pipeline;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = BackendClient::new("http://localhost:8030");
    /// let status = client.create_pipeline(&Pipeline::new("Flow monitoring")).await?;
    /// assert!(status.success);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_pipeline(&self, pipeline: &Pipeline) -> Result<PipelineOperationStatus> {
        let url = format!("{}/api/v2/pipelines", self.base_url);
        let response = self.client.post(&url).json(pipeline).send().await?;

        self.handle_response(response).await
    }

    /// Update an already stored pipeline
    ///
    /// # Arguments
    /// * `pipeline` - The pipeline to update; must carry a backend-assigned id
    ///
    /// # Returns
    /// The operation status reported by the backend, or
    /// [`ClientError::InvalidRequest`] when the pipeline has no id
    pub async fn update_pipeline(&self, pipeline: &Pipeline) -> Result<PipelineOperationStatus> {
        let id = pipeline.id.as_deref().ok_or_else(|| {
            ClientError::InvalidRequest("cannot update a pipeline without an id".to_string())
        })?;

        let url = format!("{}/api/v2/pipelines/{}", self.base_url, id);
        let response = self.client.put(&url).json(pipeline).send().await?;

        self.handle_response(response).await
    }

    /// Drop the backend's cached assembly pipeline
    ///
    /// Called after a successful save so a reopened editor starts from a
    /// clean canvas.
    pub async fn invalidate_pipeline_cache(&self) -> Result<()> {
        let url = format!("{}/api/v2/pipelines/cache", self.base_url);
        let response = self.client.delete(&url).send().await?;

        self.handle_empty_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_without_id_is_rejected_before_sending() {
        let client = BackendClient::new("http://localhost:8030");
        let pipeline = Pipeline::new("Flow monitoring");

        let error = client.update_pipeline(&pipeline).await.unwrap_err();
        assert!(matches!(error, ClientError::InvalidRequest(_)));
    }
}
