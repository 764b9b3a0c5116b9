//! Edge node API endpoints

use crate::BackendClient;
use crate::error::Result;
use weir_core::domain::node::EdgeNode;

impl BackendClient {
    // =============================================================================
    // Edge Node Inventory
    // =============================================================================

    /// List the edge nodes registered with the backend
    ///
    /// # Returns
    /// Every node currently registered, with its capability set
    pub async fn list_edge_nodes(&self) -> Result<Vec<EdgeNode>> {
        let url = format!("{}/api/v2/nodes", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}
