//! Deployment target resolution
//!
//! Translates each element's selected target id into concrete network
//! coordinates immediately before submission. Resolution runs on every save
//! attempt, since selections may change between attempts.

use weir_core::domain::node::EdgeNode;
use weir_core::domain::pipeline::PipelineElement;

use crate::error::ValidationError;

/// Network coordinates an element is submitted with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetAssignment {
    /// Resolved hostname; None targets the default execution context
    pub hostname: Option<String>,
    /// Resolved port; None targets the default execution context
    pub port: Option<u16>,
}

/// Computes assignments for one element collection without mutating it.
///
/// The sentinel target resolves to empty coordinates. Any other id must
/// match a node controller id exactly, otherwise the whole collection is
/// rejected and nothing should be applied.
pub fn plan(
    elements: &[PipelineElement],
    nodes: &[EdgeNode],
) -> Result<Vec<TargetAssignment>, ValidationError> {
    elements
        .iter()
        .map(|element| {
            if element.targets_default() {
                return Ok(TargetAssignment {
                    hostname: None,
                    port: None,
                });
            }

            let selected = &element.deployment_target_node_id;
            let node = nodes
                .iter()
                .find(|node| &node.node_controller_id == selected)
                .ok_or_else(|| ValidationError::UnknownDeploymentTarget {
                    element: element_label(element).to_string(),
                    target: selected.clone(),
                })?;

            Ok(TargetAssignment {
                hostname: Some(node.node_metadata.node_address.clone()),
                port: Some(node.node_controller_port),
            })
        })
        .collect()
}

/// Writes planned coordinates onto the elements.
///
/// The plan must come from [`plan`] over the same collection.
pub fn apply(elements: &mut [PipelineElement], assignments: &[TargetAssignment]) {
    debug_assert_eq!(elements.len(), assignments.len());

    for (element, assignment) in elements.iter_mut().zip(assignments) {
        element.deployment_target_node_hostname = assignment.hostname.clone();
        element.deployment_target_node_port = assignment.port;
    }
}

/// Plans and applies one collection in a single step.
///
/// On error the collection is left untouched.
pub fn resolve(
    elements: &mut [PipelineElement],
    nodes: &[EdgeNode],
) -> Result<(), ValidationError> {
    let assignments = plan(elements, nodes)?;
    apply(elements, &assignments);
    Ok(())
}

fn element_label(element: &PipelineElement) -> &str {
    if element.name.is_empty() {
        &element.app_id
    } else {
        &element.name
    }
}
