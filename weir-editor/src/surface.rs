//! Host application surfaces
//!
//! The save dialog talks to its host exclusively through these traits. They
//! are injected at construction time, so a web shell, a terminal host and
//! the test suite can each plug in their own implementations.

/// Tour step highlighted when the dialog opens
pub const TOUR_ENTER_PIPELINE_NAME: &str = "enter-pipeline-name";

/// Tour step highlighted once the dialog content is ready
pub const TOUR_SAVE_PIPELINE_DIALOG: &str = "save-pipeline-dialog";

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation went through
    Success,

    /// The operation was rejected or failed
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Displays transient messages to the user
///
/// Notifications are fire-and-forget; the workflow never waits for or reads
/// back anything from this surface.
pub trait NotificationSurface: Send + Sync {
    /// Shows one message with the given severity.
    fn notify(&self, severity: Severity, title: &str, description: Option<&str>);
}

/// Route the host can navigate to after a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// The pipeline overview, optionally highlighting a just-started pipeline
    PipelineList {
        /// Id of the pipeline to highlight as running
        pipeline: Option<String>,
    },
}

/// Moves the host application to another route
///
/// Consulted only after a successful save; failures keep the user where
/// they are.
pub trait NavigationSurface: Send + Sync {
    /// Navigates to the given target.
    fn go(&self, target: NavigationTarget);
}

/// Clears the host's pipeline assembly canvas after a successful save
pub trait AssemblySurface: Send + Sync {
    /// Empties the canvas the saved pipeline was assembled on.
    fn clear(&self);
}

/// Guided tour integration
///
/// The tour observes the workflow but never influences its outcome; every
/// call is skipped when no tour is active.
pub trait GuidedTour: Send + Sync {
    /// Whether a tour is currently running.
    fn is_active(&self) -> bool;

    /// Advances the tour to the given step.
    fn trigger(&self, step: &str);

    /// Hides whatever step is currently shown.
    fn hide_current_step(&self);
}

/// Tour surface for hosts without a guided tour
pub struct NoopGuidedTour;

impl GuidedTour for NoopGuidedTour {
    fn is_active(&self) -> bool {
        false
    }

    fn trigger(&self, _step: &str) {}

    fn hide_current_step(&self) {}
}

/// Assembly surface for hosts without an assembly canvas
pub struct NoopAssembly;

impl AssemblySurface for NoopAssembly {
    fn clear(&self) {}
}
