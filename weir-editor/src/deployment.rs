//! Deployment option resolution
//!
//! Computes, per pipeline element type, the ordered list of deployment
//! targets able to host it: the synthetic default option first, then every
//! edge node whose capability set contains the element's app id.

use weir_core::domain::node::EdgeNode;
use weir_core::domain::pipeline::PipelineElement;

/// Ordered, key-unique mapping from element app id to candidate targets
///
/// This is derived data: it is recomputed whenever the edge node list
/// changes and never persisted. Every element run through
/// [`DeploymentOptions::add_elements`] gets an entry, and every entry starts
/// with the default option, so an element is never left without a valid
/// choice.
#[derive(Debug, Clone, Default)]
pub struct DeploymentOptions {
    entries: Vec<(String, Vec<EdgeNode>)>,
}

impl DeploymentOptions {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Resolves options for one element collection.
    ///
    /// Processing elements and actions are resolved by separate calls rather
    /// than one merged pass. Resolving an app id that already has an entry
    /// replaces that entry in place.
    pub fn add_elements(&mut self, elements: &[PipelineElement], nodes: &[EdgeNode]) {
        for element in elements {
            let mut options = vec![EdgeNode::default_target()];
            options.extend(
                nodes
                    .iter()
                    .filter(|node| node.supports(&element.app_id))
                    .cloned(),
            );
            self.insert(element.app_id.clone(), options);
        }
    }

    /// Candidate targets for the given app id, default option first.
    pub fn options_for(&self, app_id: &str) -> Option<&[EdgeNode]> {
        self.entries
            .iter()
            .find(|(id, _)| id == app_id)
            .map(|(_, options)| options.as_slice())
    }

    /// Whether every element of the collection has an entry.
    pub fn covers<'a>(&self, elements: impl IntoIterator<Item = &'a PipelineElement>) -> bool {
        elements
            .into_iter()
            .all(|element| self.options_for(&element.app_id).is_some())
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[EdgeNode])> {
        self.entries
            .iter()
            .map(|(id, options)| (id.as_str(), options.as_slice()))
    }

    /// Number of element types with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no element has been resolved yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops all entries before a recompute.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn insert(&mut self, app_id: String, options: Vec<EdgeNode>) {
        match self.entries.iter_mut().find(|(id, _)| *id == app_id) {
            Some(entry) => entry.1 = options,
            None => self.entries.push((app_id, options)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weir_core::domain::node::{DEFAULT_TARGET_ID, NodeMetadata};

    fn node(id: &str, address: &str, app_ids: &[&str]) -> EdgeNode {
        EdgeNode {
            node_controller_id: id.to_string(),
            node_controller_port: 7077,
            node_metadata: NodeMetadata {
                node_address: address.to_string(),
                node_model: "Test Node".to_string(),
            },
            supported_pipeline_element_app_ids: app_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn element(app_id: &str) -> PipelineElement {
        PipelineElement::new("element", app_id)
    }

    #[test]
    fn test_every_entry_starts_with_the_default_option() {
        let nodes = vec![node("node-01", "192.168.1.20", &["org.example.filter"])];
        let elements = vec![element("org.example.filter"), element("org.example.rate")];

        let mut options = DeploymentOptions::new();
        options.add_elements(&elements, &nodes);

        for (_, candidates) in options.iter() {
            assert_eq!(candidates[0].node_controller_id, DEFAULT_TARGET_ID);
        }
    }

    #[test]
    fn test_capable_nodes_follow_in_input_order() {
        let nodes = vec![
            node("node-01", "192.168.1.20", &["org.example.filter"]),
            node("node-02", "192.168.1.21", &["org.example.rate"]),
            node("node-03", "192.168.1.22", &["org.example.filter"]),
        ];
        let elements = vec![element("org.example.filter")];

        let mut options = DeploymentOptions::new();
        options.add_elements(&elements, &nodes);

        let candidates = options.options_for("org.example.filter").unwrap();
        assert_eq!(candidates.len(), 3);
        assert_eq!(candidates[1].node_controller_id, "node-01");
        assert_eq!(candidates[2].node_controller_id, "node-03");
    }

    #[test]
    fn test_incapable_nodes_are_filtered_out() {
        let nodes = vec![node("node-01", "192.168.1.20", &["org.example.other"])];
        let elements = vec![element("org.example.filter")];

        let mut options = DeploymentOptions::new();
        options.add_elements(&elements, &nodes);

        let candidates = options.options_for("org.example.filter").unwrap();
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].is_default_target());
    }

    #[test]
    fn test_entries_keep_first_insertion_order() {
        let mut options = DeploymentOptions::new();
        options.add_elements(&[element("b"), element("a")], &[]);
        options.add_elements(&[element("c")], &[]);

        let order: Vec<&str> = options.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reresolving_an_app_id_replaces_its_entry() {
        let elements = vec![element("org.example.filter")];

        let mut options = DeploymentOptions::new();
        options.add_elements(&elements, &[]);
        assert_eq!(options.options_for("org.example.filter").unwrap().len(), 1);

        let nodes = vec![node("node-01", "192.168.1.20", &["org.example.filter"])];
        options.add_elements(&elements, &nodes);

        assert_eq!(options.len(), 1);
        assert_eq!(options.options_for("org.example.filter").unwrap().len(), 2);
    }

    #[test]
    fn test_duplicate_app_ids_share_one_entry() {
        let elements = vec![element("org.example.filter"), element("org.example.filter")];

        let mut options = DeploymentOptions::new();
        options.add_elements(&elements, &[]);

        assert_eq!(options.len(), 1);
        assert!(options.covers(&elements));
    }

    #[test]
    fn test_covers_reports_missing_elements() {
        let mut options = DeploymentOptions::new();
        options.add_elements(&[element("org.example.filter")], &[]);

        assert!(options.covers(&[element("org.example.filter")]));
        assert!(!options.covers(&[element("org.example.rate")]));
    }

    #[test]
    fn test_clear_empties_the_option_set() {
        let mut options = DeploymentOptions::new();
        options.add_elements(&[element("org.example.filter")], &[]);
        assert!(!options.is_empty());

        options.clear();
        assert!(options.is_empty());
        assert!(options.options_for("org.example.filter").is_none());
    }
}
