//! Pipeline category API endpoints

use crate::BackendClient;
use crate::error::Result;
use weir_core::domain::category::PipelineCategory;

impl BackendClient {
    // =============================================================================
    // Pipeline Categories
    // =============================================================================

    /// List the categories pipelines can be filed under
    ///
    /// # Returns
    /// All categories defined on the backend
    pub async fn list_pipeline_categories(&self) -> Result<Vec<PipelineCategory>> {
        let url = format!("{}/api/v2/pipelines/categories", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
