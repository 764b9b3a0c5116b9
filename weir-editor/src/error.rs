//! Error types for the editor workflow

use thiserror::Error;

/// Validation failures raised before any network call
///
/// Every variant is surfaced to the user as an error notification at the
/// workflow boundary; none of them aborts the hosting application. The
/// `Display` text doubles as the notification headline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The pipeline has no name
    #[error("Please enter a name for your pipeline")]
    EmptyName,

    /// Update mode requires a pipeline that has already been stored
    #[error("Cannot update a pipeline that has not been stored yet")]
    MissingPipelineId,

    /// An element's selected target matches no loaded edge node
    #[error("Unknown deployment target '{target}' for pipeline element '{element}'")]
    UnknownDeploymentTarget {
        /// Display label of the element carrying the selection
        element: String,
        /// The target id that could not be resolved
        target: String,
    },
}
