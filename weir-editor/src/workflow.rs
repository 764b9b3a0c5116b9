//! Save pipeline workflow
//!
//! Drives one save dialog session: validate the pipeline, resolve each
//! element's deployment target into concrete coordinates, submit the
//! pipeline to the store and apply the outcome's user-visible effects
//! (notifications, dialog dismissal, navigation).
//!
//! The dialog enforces its own single-flight guard, so a second save trigger
//! while one is submitting is refused instead of causing a duplicate
//! submission. All response effects are bound to the dialog's liveness: a
//! response arriving after the dialog was dismissed is dropped silently.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};
use uuid::Uuid;

use weir_core::domain::category::PipelineCategory;
use weir_core::domain::node::EdgeNode;
use weir_core::domain::pipeline::Pipeline;
use weir_core::dto::status::{Notification, PipelineOperationStatus};

use crate::deployment::DeploymentOptions;
use crate::error::ValidationError;
use crate::store::PipelineStore;
use crate::surface::{
    AssemblySurface, GuidedTour, NavigationSurface, NavigationTarget, NotificationSurface,
    Severity, TOUR_ENTER_PIPELINE_NAME, TOUR_SAVE_PIPELINE_DIALOG,
};
use crate::target;

/// Whether a save stores a new pipeline or updates an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Store the pipeline for the first time
    Create,

    /// Overwrite an already stored pipeline
    Update,
}

/// Observable state of the save workflow
///
/// `Succeeded`, `Failed` and `TransportError` are terminal for one attempt.
/// There is no automatic retry; a failed attempt leaves the dialog open and
/// waits for a new explicit save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePhase {
    /// Nothing submitted yet
    Idle,

    /// Checking the pipeline before any network traffic
    Validating,

    /// Translating target selections into network coordinates
    Resolving,

    /// Waiting for the store's response
    Submitting,

    /// The store accepted the pipeline
    Succeeded,

    /// Validation failed or the store rejected the pipeline
    Failed,

    /// The store was unreachable
    TransportError,
}

/// Per-attempt save parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveRequest {
    /// Navigate to the pipeline overview after a successful save
    pub switch_tab: bool,

    /// Ask the backend to start the pipeline right after storing it
    pub start_after_save: bool,
}

/// Terminal result of one save attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// The store accepted the pipeline; the dialog has been dismissed
    Succeeded {
        /// Id of the pipeline the backend auto-started, when requested
        started_pipeline_id: Option<String>,
    },

    /// Validation failed or the store rejected the pipeline; the dialog
    /// stays open for correction
    Failed {
        /// The messages explaining the rejection
        notifications: Vec<Notification>,
    },

    /// No structured response was reachable; the dialog stays open
    TransportError,
}

/// A save was requested while another one is still running
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("a save request is already in flight")]
pub struct SaveInFlight;

/// One save-pipeline dialog session
///
/// Constructed with the pipeline to save and the host's surfaces, then
/// `open()`ed to load reference data. Every save attempt runs through
/// [`SaveDialog::save`]; the dialog itself guarantees at most one attempt is
/// in flight at a time.
pub struct SaveDialog {
    /// Correlates log lines of one dialog session
    session: Uuid,
    mode: SaveMode,
    store: Arc<dyn PipelineStore>,
    notifications: Arc<dyn NotificationSurface>,
    navigation: Arc<dyn NavigationSurface>,
    assembly: Arc<dyn AssemblySurface>,
    tour: Arc<dyn GuidedTour>,
    state: Mutex<DialogState>,
    open: AtomicBool,
    // One permit; held for the duration of a save attempt.
    submit_gate: Semaphore,
}

struct DialogState {
    pipeline: Pipeline,
    edge_nodes: Vec<EdgeNode>,
    categories: Vec<PipelineCategory>,
    deployment_options: DeploymentOptions,
    phase: SavePhase,
}

impl SaveDialog {
    /// Creates a new dialog session
    ///
    /// # Arguments
    /// * `pipeline` - The pipeline assembled in the editor
    /// * `mode` - Whether saving creates or updates the pipeline
    /// * `store` - Backend access for reference data and submission
    /// * `notifications` - Where user-facing messages go
    /// * `navigation` - Route changes after a successful save
    /// * `assembly` - The host's assembly canvas
    /// * `tour` - Guided tour integration
    pub fn new(
        pipeline: Pipeline,
        mode: SaveMode,
        store: Arc<dyn PipelineStore>,
        notifications: Arc<dyn NotificationSurface>,
        navigation: Arc<dyn NavigationSurface>,
        assembly: Arc<dyn AssemblySurface>,
        tour: Arc<dyn GuidedTour>,
    ) -> Self {
        let session = Uuid::new_v4();
        debug!("[{}] save dialog created for pipeline '{}'", session, pipeline.name);

        Self {
            session,
            mode,
            store,
            notifications,
            navigation,
            assembly,
            tour,
            state: Mutex::new(DialogState {
                pipeline,
                edge_nodes: Vec::new(),
                categories: Vec::new(),
                deployment_options: DeploymentOptions::new(),
                phase: SavePhase::Idle,
            }),
            open: AtomicBool::new(true),
            submit_gate: Semaphore::new(1),
        }
    }

    /// Loads reference data and prepares the deployment options
    ///
    /// Edge nodes and pipeline categories are fetched concurrently; their
    /// completion order does not matter since they populate disjoint state.
    /// When the node fetch fails the options fall back to the default
    /// context only, so saving against the default context still works.
    pub async fn open(&self) {
        if self.tour.is_active() {
            self.tour.trigger(TOUR_ENTER_PIPELINE_NAME);
        }

        let (categories, nodes) = tokio::join!(
            self.store.fetch_pipeline_categories(),
            self.store.fetch_edge_nodes(),
        );

        match categories {
            Ok(categories) => self.state.lock().unwrap().categories = categories,
            Err(error) => warn!(
                "[{}] failed to fetch pipeline categories: {:#}",
                self.session, error
            ),
        }

        let nodes = match nodes {
            Ok(nodes) => nodes,
            Err(error) => {
                warn!("[{}] failed to fetch edge nodes: {:#}", self.session, error);
                self.notifications.notify(
                    Severity::Error,
                    "Connection Error",
                    Some("Could not load edge nodes"),
                );
                Vec::new()
            }
        };

        let mut state = self.state.lock().unwrap();
        state.edge_nodes = nodes;
        Self::rebuild_options(&mut state);
        debug!(
            "[{}] prepared deployment options for {} element type(s)",
            self.session,
            state.deployment_options.len()
        );
    }

    /// Signals that the dialog content has been rendered
    ///
    /// Advances an active guided tour to the dialog step.
    pub fn content_ready(&self) {
        if self.tour.is_active() {
            self.tour.trigger(TOUR_SAVE_PIPELINE_DIALOG);
        }
    }

    /// Runs one save attempt end to end
    ///
    /// Validates the pipeline, resolves every target selection and submits
    /// the result to the store (update in update mode, create otherwise). At
    /// most one remote submission is issued per attempt, and only after
    /// validation and resolution both passed.
    ///
    /// Failures of any kind are reported through the notification surface;
    /// the returned outcome says which terminal state was reached. While an
    /// attempt is running, any further save request is refused with
    /// [`SaveInFlight`].
    ///
    /// # Arguments
    /// * `request` - Per-attempt flags chosen by the user
    pub async fn save(&self, request: SaveRequest) -> Result<SaveOutcome, SaveInFlight> {
        let _permit = self.submit_gate.try_acquire().map_err(|_| SaveInFlight)?;

        self.set_phase(SavePhase::Validating);
        if let Err(error) = self.validate() {
            return Ok(self.fail_locally(error));
        }

        self.set_phase(SavePhase::Resolving);
        let pipeline = match self.resolve_targets() {
            Ok(pipeline) => pipeline,
            Err(error) => return Ok(self.fail_locally(error)),
        };

        self.set_phase(SavePhase::Submitting);
        info!(
            "[{}] submitting pipeline '{}' ({:?})",
            self.session, pipeline.name, self.mode
        );

        let result = match self.mode {
            SaveMode::Create => self.store.create_pipeline(&pipeline).await,
            SaveMode::Update => self.store.update_pipeline(&pipeline).await,
        };

        match result {
            Ok(status) if status.success => {
                self.set_phase(SavePhase::Succeeded);
                let started_pipeline_id = status.started_pipeline_id.clone();

                if self.is_open() {
                    self.apply_success_effects(&status, request).await;
                } else {
                    debug!("[{}] dialog dismissed, dropping success effects", self.session);
                }

                Ok(SaveOutcome::Succeeded {
                    started_pipeline_id,
                })
            }
            Ok(status) => {
                self.set_phase(SavePhase::Failed);

                if self.is_open() {
                    for notification in &status.notifications {
                        self.notifications.notify(
                            Severity::Error,
                            &notification.title,
                            notification.description.as_deref(),
                        );
                    }
                } else {
                    debug!(
                        "[{}] dialog dismissed, dropping {} error notification(s)",
                        self.session,
                        status.notifications.len()
                    );
                }

                Ok(SaveOutcome::Failed {
                    notifications: status.notifications,
                })
            }
            Err(error) => {
                self.set_phase(SavePhase::TransportError);
                warn!("[{}] pipeline submission failed: {:#}", self.session, error);

                if self.is_open() {
                    self.notifications.notify(
                        Severity::Error,
                        "Connection Error",
                        Some("Could not fulfill request"),
                    );
                }

                Ok(SaveOutcome::TransportError)
            }
        }
    }

    /// Closes the dialog
    ///
    /// Idempotent. An attempt already submitting keeps running, but its
    /// response effects are dropped when the response arrives.
    pub fn dismiss(&self) {
        if self.open.swap(false, Ordering::SeqCst) {
            debug!("[{}] dialog dismissed", self.session);
        }
    }

    /// Whether the dialog is still showing.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// The current workflow phase.
    pub fn phase(&self) -> SavePhase {
        self.state.lock().unwrap().phase
    }

    /// Whether saving creates or updates.
    pub fn mode(&self) -> SaveMode {
        self.mode
    }

    /// Snapshot of the pipeline being saved.
    pub fn pipeline(&self) -> Pipeline {
        self.state.lock().unwrap().pipeline.clone()
    }

    /// Snapshot of the loaded edge nodes.
    pub fn edge_nodes(&self) -> Vec<EdgeNode> {
        self.state.lock().unwrap().edge_nodes.clone()
    }

    /// Snapshot of the loaded pipeline categories.
    pub fn categories(&self) -> Vec<PipelineCategory> {
        self.state.lock().unwrap().categories.clone()
    }

    /// Snapshot of the current deployment options.
    pub fn deployment_options(&self) -> DeploymentOptions {
        self.state.lock().unwrap().deployment_options.clone()
    }

    /// Mutates the pipeline between attempts
    ///
    /// Used by hosts to apply form changes (name, categories, target
    /// selections). The deployment options are recomputed afterwards so
    /// added elements immediately have an entry.
    pub fn with_pipeline_mut<R>(&self, f: impl FnOnce(&mut Pipeline) -> R) -> R {
        let mut state = self.state.lock().unwrap();
        let result = f(&mut state.pipeline);
        Self::rebuild_options(&mut state);
        result
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let state = self.state.lock().unwrap();

        if state.pipeline.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if self.mode == SaveMode::Update && state.pipeline.id.is_none() {
            return Err(ValidationError::MissingPipelineId);
        }

        Ok(())
    }

    /// Plans both element collections against the loaded nodes, then applies
    /// both, so a rejected selection leaves the pipeline unmutated.
    fn resolve_targets(&self) -> Result<Pipeline, ValidationError> {
        let mut state = self.state.lock().unwrap();
        let DialogState {
            pipeline,
            edge_nodes,
            ..
        } = &mut *state;

        let sepa_plan = target::plan(&pipeline.sepas, edge_nodes.as_slice())?;
        let action_plan = target::plan(&pipeline.actions, edge_nodes.as_slice())?;
        target::apply(&mut pipeline.sepas, &sepa_plan);
        target::apply(&mut pipeline.actions, &action_plan);

        Ok(pipeline.clone())
    }

    fn fail_locally(&self, error: ValidationError) -> SaveOutcome {
        self.set_phase(SavePhase::Failed);
        debug!("[{}] save rejected locally: {}", self.session, error);

        let notification = Notification::new(error.to_string());
        if self.is_open() {
            self.notifications
                .notify(Severity::Error, &notification.title, None);
        }

        SaveOutcome::Failed {
            notifications: vec![notification],
        }
    }

    async fn apply_success_effects(&self, status: &PipelineOperationStatus, request: SaveRequest) {
        if let Some(notification) = status.notifications.first() {
            self.notifications.notify(
                Severity::Success,
                &notification.title,
                notification.description.as_deref(),
            );
        }

        self.dismiss();
        self.assembly.clear();

        if let Err(error) = self.store.invalidate_pipeline_cache().await {
            warn!(
                "[{}] failed to invalidate the pipeline cache: {:#}",
                self.session, error
            );
        }

        if self.tour.is_active() {
            self.tour.hide_current_step();
        }

        if request.start_after_save {
            if status.started_pipeline_id.is_none() {
                warn!("[{}] backend reported no started pipeline id", self.session);
            }
            self.navigation.go(NavigationTarget::PipelineList {
                pipeline: status.started_pipeline_id.clone(),
            });
        } else if request.switch_tab {
            self.navigation.go(NavigationTarget::PipelineList { pipeline: None });
        }
    }

    fn rebuild_options(state: &mut DialogState) {
        let DialogState {
            pipeline,
            edge_nodes,
            deployment_options,
            ..
        } = state;

        deployment_options.clear();
        deployment_options.add_elements(&pipeline.sepas, edge_nodes.as_slice());
        deployment_options.add_elements(&pipeline.actions, edge_nodes.as_slice());
    }

    fn set_phase(&self, phase: SavePhase) {
        let mut state = self.state.lock().unwrap();
        debug!("[{}] {:?} -> {:?}", self.session, state.phase, phase);
        state.phase = phase;
    }
}
