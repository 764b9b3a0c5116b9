//! Weir Editor
//!
//! The save-pipeline workflow of the Weir editor toolkit.
//!
//! This crate contains:
//! - Deployment option resolution: which edge nodes can host which element
//! - Target resolution: turning a selected target into network coordinates
//! - The save dialog state machine, driving validation, resolution and
//!   submission against a [`PipelineStore`]
//! - The surfaces (notifications, navigation, assembly, guided tour) a host
//!   application plugs its own integrations into
//!
//! All collaborators are injected through traits, so hosts can wire up real
//! integrations and tests can substitute doubles.

pub mod deployment;
pub mod error;
pub mod store;
pub mod surface;
pub mod target;
pub mod workflow;

// Re-export commonly used types
pub use deployment::DeploymentOptions;
pub use error::ValidationError;
pub use store::{HttpPipelineStore, PipelineStore};
pub use surface::{
    AssemblySurface, GuidedTour, NavigationSurface, NavigationTarget, NoopAssembly,
    NoopGuidedTour, NotificationSurface, Severity,
};
pub use target::TargetAssignment;
pub use workflow::{SaveDialog, SaveInFlight, SaveMode, SaveOutcome, SavePhase, SaveRequest};
